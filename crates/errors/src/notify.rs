//! Notification transport error types
//!
//! These errors are logged for operator visibility but never abort a run.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum NotifyError {
    #[error("request to {endpoint} failed: {message}")]
    RequestFailed { endpoint: String, message: String },

    #[error("client build failed: {0}")]
    ClientBuild(String),
}

//! Configuration error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: String },

    #[error("parse error: {message}")]
    ParseError { message: String },

    #[error("'{field}' attribute missing from configuration")]
    MissingField { field: String },

    #[error("'{field}' attribute cannot be empty")]
    EmptyField { field: String },

    #[error("'{path}' is not a valid directory for 'upload_path'")]
    NotADirectory { path: String },

    #[error("Slack configuration not set correctly: token and channel must be set together")]
    PartialSlackCredentials,

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => {
                Some("Provide a configuration file with --config or create config.json.")
            }
            Self::MissingField { .. } | Self::EmptyField { .. } => {
                Some("Add the missing configuration field noted in the error message.")
            }
            Self::NotADirectory { .. } => {
                Some("Point 'upload_path' at an existing directory.")
            }
            Self::PartialSlackCredentials => {
                Some("Set both 'slack_auth_token' and 'slack_channel_id', or neither.")
            }
            Self::InvalidValue { .. } | Self::ParseError { .. } => {
                Some("Fix the configuration value and retry.")
            }
        }
    }
}

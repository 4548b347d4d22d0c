#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Operator notifications for upkeep
//!
//! Reports are shipped to a Slack channel when credentials are configured,
//! and written to standard output otherwise. Both operations are
//! fire-and-forget: a transport failure is logged for operator visibility
//! and never aborts the run.

mod slack;

pub use slack::{Notifier, NotifyConfig};

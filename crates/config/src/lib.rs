#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for upkeep
//!
//! The run configuration is a single JSON file with a `folders` array and
//! optional Slack credentials. This crate parses the raw file and validates
//! it into a [`RunConfig`]; any validation failure is returned as a typed
//! [`ConfigError`] so that only the entry point decides to terminate.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use upkeep_errors::{ConfigError, Error};
use upkeep_types::{FolderPolicy, SlackAuth, BYTES_PER_MEGABYTE};

/// Raw mirror of one `folders` entry in the configuration file.
///
/// Thresholds are integers in megabytes; strings are validated for
/// non-emptiness during [`RunConfig::validate`].
#[derive(Debug, Clone, Deserialize)]
struct RawFolder {
    name: Option<String>,
    upload_path: Option<String>,
    max_age: Option<u32>,
    max_storage: Option<u64>,
    warn_storage: Option<u64>,
}

/// Raw mirror of the configuration file
#[derive(Debug, Clone, Deserialize)]
struct RawConfig {
    folders: Option<Vec<RawFolder>>,
    slack_auth_token: Option<String>,
    slack_channel_id: Option<String>,
}

/// Validated run configuration, immutable for the duration of the run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Folders to process, in configuration order
    pub folders: Vec<FolderPolicy>,
    /// Slack credentials; `None` selects the console fallback
    pub slack: Option<SlackAuth>,
}

impl RunConfig {
    /// Load and validate the configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file is missing, is not valid JSON,
    /// omits `folders` or a required folder field, contains an empty
    /// required string, names an `upload_path` that is not an existing
    /// directory, or sets exactly one of the two Slack credentials.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;

        let raw: RawConfig =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;

        let config = Self::validate(raw)?;
        debug!(
            folders = config.folders.len(),
            slack = config.slack.is_some(),
            "configuration loaded"
        );
        Ok(config)
    }

    fn validate(raw: RawConfig) -> Result<Self, ConfigError> {
        let raw_folders = raw.folders.ok_or_else(|| ConfigError::MissingField {
            field: "folders".to_string(),
        })?;

        let mut folders = Vec::with_capacity(raw_folders.len());
        for folder in raw_folders {
            folders.push(validate_folder(folder)?);
        }

        let slack = validate_slack(raw.slack_auth_token, raw.slack_channel_id)?;

        Ok(Self { folders, slack })
    }
}

fn validate_folder(raw: RawFolder) -> Result<FolderPolicy, ConfigError> {
    let name = required_string(raw.name, "name")?;
    let upload_path = required_string(raw.upload_path, "upload_path")?;
    let max_age_days = raw.max_age.ok_or_else(|| ConfigError::MissingField {
        field: "max_age".to_string(),
    })?;
    let max_storage = raw.max_storage.ok_or_else(|| ConfigError::MissingField {
        field: "max_storage".to_string(),
    })?;

    let path = PathBuf::from(&upload_path);
    if !path.is_dir() {
        return Err(ConfigError::NotADirectory { path: upload_path });
    }

    Ok(FolderPolicy {
        name,
        upload_path: path,
        max_age_days,
        max_storage_bytes: megabytes_to_bytes(max_storage, "max_storage")?,
        warn_storage_bytes: raw
            .warn_storage
            .map(|mb| megabytes_to_bytes(mb, "warn_storage"))
            .transpose()?,
    })
}

fn megabytes_to_bytes(megabytes: u64, field: &str) -> Result<u64, ConfigError> {
    megabytes
        .checked_mul(BYTES_PER_MEGABYTE)
        .ok_or_else(|| ConfigError::InvalidValue {
            field: field.to_string(),
            value: megabytes.to_string(),
        })
}

fn required_string(value: Option<String>, field: &str) -> Result<String, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingField {
        field: field.to_string(),
    })?;
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField {
            field: field.to_string(),
        });
    }
    Ok(value)
}

/// Both-or-neither Slack credentials; empty strings count as absent.
fn validate_slack(
    token: Option<String>,
    channel: Option<String>,
) -> Result<Option<SlackAuth>, ConfigError> {
    let token = token.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let channel = channel
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match (token, channel) {
        (Some(token), Some(channel)) => Ok(Some(SlackAuth { token, channel })),
        (None, None) => Ok(None),
        _ => Err(ConfigError::PartialSlackCredentials),
    }
}

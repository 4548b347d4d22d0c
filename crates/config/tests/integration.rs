//! Integration tests for config

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tempfile::tempdir;
    use upkeep_config::RunConfig;
    use upkeep_errors::{ConfigError, Error};
    use upkeep_types::BYTES_PER_MEGABYTE;

    async fn load(dir: &Path, contents: &str) -> Result<RunConfig, Error> {
        let config_path = dir.join("config.json");
        std::fs::write(&config_path, contents).unwrap();
        RunConfig::load_from_file(&config_path).await
    }

    fn folder_json(upload_path: &Path) -> String {
        format!(
            r#"{{
                "folders": [
                    {{
                        "name": "uploads",
                        "upload_path": "{}",
                        "max_age": 30,
                        "max_storage": 100,
                        "warn_storage": 80
                    }}
                ]
            }}"#,
            upload_path.display()
        )
    }

    #[tokio::test]
    async fn test_load_valid_config() {
        let temp = tempdir().unwrap();
        let uploads = temp.path().join("uploads");
        std::fs::create_dir(&uploads).unwrap();

        let config = load(temp.path(), &folder_json(&uploads)).await.unwrap();
        assert_eq!(config.folders.len(), 1);
        let folder = &config.folders[0];
        assert_eq!(folder.name, "uploads");
        assert_eq!(folder.max_age_days, 30);
        assert_eq!(folder.max_storage_bytes, 100 * BYTES_PER_MEGABYTE);
        assert_eq!(folder.warn_storage_bytes, Some(80 * BYTES_PER_MEGABYTE));
        assert!(config.slack.is_none());
    }

    #[tokio::test]
    async fn test_warn_storage_is_optional() {
        let temp = tempdir().unwrap();
        let uploads = temp.path().join("uploads");
        std::fs::create_dir(&uploads).unwrap();

        let contents = format!(
            r#"{{"folders": [{{"name": "u", "upload_path": "{}", "max_age": 7, "max_storage": 10}}]}}"#,
            uploads.display()
        );
        let config = load(temp.path(), &contents).await.unwrap();
        assert_eq!(config.folders[0].warn_storage_bytes, None);
        assert_eq!(
            config.folders[0].eviction_target(),
            10 * BYTES_PER_MEGABYTE
        );
    }

    #[tokio::test]
    async fn test_missing_file() {
        let temp = tempdir().unwrap();
        let result = RunConfig::load_from_file(&temp.path().join("nope.json")).await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_missing_folders_key() {
        let temp = tempdir().unwrap();
        let result = load(temp.path(), r#"{"slack_auth_token": ""}"#).await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { ref field })) if field == "folders"
        ));
    }

    #[tokio::test]
    async fn test_missing_required_field() {
        let temp = tempdir().unwrap();
        let uploads = temp.path().join("uploads");
        std::fs::create_dir(&uploads).unwrap();

        let contents = format!(
            r#"{{"folders": [{{"name": "u", "upload_path": "{}", "max_storage": 10}}]}}"#,
            uploads.display()
        );
        let result = load(temp.path(), &contents).await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { ref field })) if field == "max_age"
        ));
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let temp = tempdir().unwrap();
        let uploads = temp.path().join("uploads");
        std::fs::create_dir(&uploads).unwrap();

        let contents = format!(
            r#"{{"folders": [{{"name": "  ", "upload_path": "{}", "max_age": 7, "max_storage": 10}}]}}"#,
            uploads.display()
        );
        let result = load(temp.path(), &contents).await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::EmptyField { ref field })) if field == "name"
        ));
    }

    #[tokio::test]
    async fn test_nonexistent_upload_path_rejected() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("missing");

        let contents = format!(
            r#"{{"folders": [{{"name": "u", "upload_path": "{}", "max_age": 7, "max_storage": 10}}]}}"#,
            missing.display()
        );
        let result = load(temp.path(), &contents).await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::NotADirectory { .. }))
        ));
    }

    #[tokio::test]
    async fn test_partial_slack_credentials_rejected() {
        let temp = tempdir().unwrap();
        let uploads = temp.path().join("uploads");
        std::fs::create_dir(&uploads).unwrap();

        let contents = format!(
            r#"{{
                "folders": [{{"name": "u", "upload_path": "{}", "max_age": 7, "max_storage": 10}}],
                "slack_auth_token": "xoxb-token"
            }}"#,
            uploads.display()
        );
        let result = load(temp.path(), &contents).await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::PartialSlackCredentials))
        ));
    }

    #[tokio::test]
    async fn test_empty_slack_values_count_as_absent() {
        let temp = tempdir().unwrap();
        let uploads = temp.path().join("uploads");
        std::fs::create_dir(&uploads).unwrap();

        let contents = format!(
            r#"{{
                "folders": [{{"name": "u", "upload_path": "{}", "max_age": 7, "max_storage": 10}}],
                "slack_auth_token": "  ",
                "slack_channel_id": ""
            }}"#,
            uploads.display()
        );
        let config = load(temp.path(), &contents).await.unwrap();
        assert!(config.slack.is_none());
    }

    #[tokio::test]
    async fn test_both_slack_credentials_accepted() {
        let temp = tempdir().unwrap();
        let uploads = temp.path().join("uploads");
        std::fs::create_dir(&uploads).unwrap();

        let contents = format!(
            r#"{{
                "folders": [{{"name": "u", "upload_path": "{}", "max_age": 7, "max_storage": 10}}],
                "slack_auth_token": "xoxb-token",
                "slack_channel_id": "C012345"
            }}"#,
            uploads.display()
        );
        let config = load(temp.path(), &contents).await.unwrap();
        let slack = config.slack.unwrap();
        assert_eq!(slack.token, "xoxb-token");
        assert_eq!(slack.channel, "C012345");
    }

    #[tokio::test]
    async fn test_absurd_threshold_rejected_instead_of_overflowing() {
        let temp = tempdir().unwrap();
        let uploads = temp.path().join("uploads");
        std::fs::create_dir(&uploads).unwrap();

        // u64::MAX megabytes cannot be represented in bytes
        let contents = format!(
            r#"{{"folders": [{{"name": "u", "upload_path": "{}", "max_age": 7, "max_storage": 18446744073709551615}}]}}"#,
            uploads.display()
        );
        let result = load(temp.path(), &contents).await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { ref field, .. })) if field == "max_storage"
        ));

        let contents = format!(
            r#"{{"folders": [{{"name": "u", "upload_path": "{}", "max_age": 7, "max_storage": 10, "warn_storage": 18446744073709551615}}]}}"#,
            uploads.display()
        );
        let result = load(temp.path(), &contents).await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue { ref field, .. })) if field == "warn_storage"
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let temp = tempdir().unwrap();
        let result = load(temp.path(), "{not json").await;
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ParseError { .. }))
        ));
    }
}

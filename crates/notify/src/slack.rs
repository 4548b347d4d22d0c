//! Slack transport with console fallback

use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::warn;
use upkeep_errors::{Error, NotifyError};
use upkeep_types::SlackAuth;

const DEFAULT_API_BASE: &str = "https://slack.com/api";

/// Notifier transport configuration
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
    /// Slack API base URL; overridable for tests
    pub api_base: String,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("upkeep/{}", env!("CARGO_PKG_VERSION")),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

struct SlackTransport {
    client: Client,
    auth: SlackAuth,
    api_base: String,
}

/// Ships report text to the operator channel, or to standard output when no
/// channel is configured.
pub struct Notifier {
    transport: Option<SlackTransport>,
}

impl Notifier {
    /// Create a notifier for the run.
    ///
    /// # Errors
    ///
    /// Returns an error if Slack credentials are present but the HTTP
    /// client cannot be constructed.
    pub fn new(auth: Option<SlackAuth>, config: NotifyConfig) -> Result<Self, Error> {
        let transport = match auth {
            Some(auth) => {
                let client = Client::builder()
                    .timeout(config.timeout)
                    .connect_timeout(config.connect_timeout)
                    .user_agent(&config.user_agent)
                    .build()
                    .map_err(|e| NotifyError::ClientBuild(e.to_string()))?;
                Some(SlackTransport {
                    client,
                    auth,
                    api_base: config.api_base,
                })
            }
            None => None,
        };
        Ok(Self { transport })
    }

    /// Create a console-only notifier with default settings
    #[must_use]
    pub fn console() -> Self {
        Self { transport: None }
    }

    /// True when reports go to Slack rather than standard output
    #[must_use]
    pub fn has_channel(&self) -> bool {
        self.transport.is_some()
    }

    /// Post a short status line.
    ///
    /// `rich` carries an optional mrkdwn rendering of `plain`; without a
    /// configured channel, `plain` is written to standard output instead.
    pub async fn post_message(&self, rich: Option<&str>, plain: &str) {
        let Some(transport) = &self.transport else {
            println!("{plain}");
            return;
        };

        let mut body = json!({
            "channel": transport.auth.channel,
            "text": plain,
        });
        if let Some(rich) = rich {
            body["blocks"] = json!([
                {
                    "type": "section",
                    "text": { "type": "mrkdwn", "text": rich }
                }
            ]);
        }

        let request = transport
            .client
            .post(format!("{}/chat.postMessage", transport.api_base))
            .bearer_auth(&transport.auth.token)
            .json(&body);
        Self::dispatch(request, "chat.postMessage").await;
    }

    /// Ship a longer text blob as a titled attachment.
    ///
    /// Without a configured channel, `content` is written to standard
    /// output instead.
    pub async fn upload_report(&self, content: &str, title: &str) {
        let Some(transport) = &self.transport else {
            println!("{content}");
            return;
        };

        let form = [
            ("content", content),
            ("channels", transport.auth.channel.as_str()),
            ("title", title),
            ("filetype", "text"),
        ];

        let request = transport
            .client
            .post(format!("{}/files.upload", transport.api_base))
            .bearer_auth(&transport.auth.token)
            .form(&form);
        Self::dispatch(request, "files.upload").await;
    }

    /// Send one request; print the response for operator visibility, log
    /// transport failures, never fail.
    async fn dispatch(request: reqwest::RequestBuilder, endpoint: &str) {
        match request.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                println!("{status} {body}");
            }
            Err(e) => {
                let err = NotifyError::RequestFailed {
                    endpoint: endpoint.to_string(),
                    message: e.to_string(),
                };
                warn!("notification not delivered: {err}");
            }
        }
    }
}

//! Sender for the DingTalk custom-robot webhook.

use std::time::Duration;

use chrono::NaiveDateTime;
use hotwatch_core::{AppConfig, AtTargets};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::DingTalkError;
use crate::message::{build_content, build_payload, DEFAULT_SUBTITLE, DEFAULT_TITLE};

#[derive(Clone)]
pub struct DingTalkConfig {
    pub base_url: String,
    pub access_token: String,
    pub at: AtTargets,
    pub title: String,
    pub subtitle: String,
    pub timeout_secs: u64,
}

impl DingTalkConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.dingtalk_base_url.clone(),
            access_token: config.dingtalk_access_token.clone(),
            at: config.dingtalk_at.clone(),
            title: DEFAULT_TITLE.to_owned(),
            subtitle: DEFAULT_SUBTITLE.to_owned(),
            timeout_secs: config.request_timeout_secs,
        }
    }
}

impl std::fmt::Debug for DingTalkConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DingTalkConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"[redacted]")
            .field("at", &self.at)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Robot reply body. A 200 can still carry a non-zero `errcode`.
#[derive(Debug, Deserialize)]
struct RobotResponse {
    #[serde(default)]
    errcode: i64,
    #[serde(default)]
    errmsg: String,
}

/// Posts text messages to one robot webhook. Sends once, never retries.
pub struct DingTalkClient {
    client: Client,
    webhook_url: Url,
    at: AtTargets,
    title: String,
    subtitle: String,
}

impl DingTalkClient {
    /// # Errors
    ///
    /// Returns [`DingTalkError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`DingTalkError::InvalidWebhookUrl`] if `base_url` does not
    /// parse.
    pub fn new(config: &DingTalkConfig) -> Result<Self, DingTalkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let mut webhook_url =
            Url::parse(&config.base_url).map_err(|e| DingTalkError::InvalidWebhookUrl {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;
        webhook_url
            .query_pairs_mut()
            .append_pair("access_token", &config.access_token);

        Ok(Self {
            client,
            webhook_url,
            at: config.at.clone(),
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
        })
    }

    /// Sends `items` as one text message stamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns [`DingTalkError::Http`] on network failure or a non-2xx status.
    /// A robot-level `errcode` in a 2xx reply is only logged.
    pub async fn send(&self, items: &[String], now: NaiveDateTime) -> Result<(), DingTalkError> {
        let content = build_content(now, &self.title, &self.subtitle, items);
        let payload = build_payload(content, &self.at);

        let response = self
            .client
            .post(self.webhook_url.clone())
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        match serde_json::from_str::<RobotResponse>(&body) {
            Ok(reply) if reply.errcode != 0 => {
                tracing::warn!(
                    errcode = reply.errcode,
                    errmsg = %reply.errmsg,
                    "DingTalk robot rejected message"
                );
            }
            Ok(_) => tracing::debug!(items = items.len(), "DingTalk message delivered"),
            Err(e) => tracing::debug!(error = %e, "DingTalk reply was not JSON"),
        }
        Ok(())
    }
}

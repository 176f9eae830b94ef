//! HTTP client for the Weibo mobile `container/getIndex` endpoint.
//!
//! Fetches the realtime-rising hot list, checks the `ok` flag in the JSON
//! envelope, and returns the first card group as typed [`HotItem`]s.

use std::time::Duration;

use hotwatch_core::{AppConfig, HotItem};
use reqwest::{Client, Url};

use crate::error::WeiboError;
use crate::retry::retry_with_backoff;
use crate::types::IndexResponse;

/// Request settings for [`WeiboClient`].
#[derive(Debug, Clone)]
pub struct WeiboConfig {
    pub base_url: String,
    pub container_id: String,
    pub luicode: String,
    pub lfid: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub backoff_base_ms: u64,
}

impl WeiboConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.weibo_base_url.clone(),
            container_id: config.weibo_container_id.clone(),
            luicode: config.weibo_luicode.clone(),
            lfid: config.weibo_lfid.clone(),
            user_agent: config.user_agent.clone(),
            timeout_secs: config.request_timeout_secs,
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
        }
    }
}

/// Client for the Weibo hot-search container.
pub struct WeiboClient {
    client: Client,
    url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl WeiboClient {
    /// Builds the client and the fully-parameterised request URL.
    ///
    /// # Errors
    ///
    /// Returns [`WeiboError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`WeiboError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(config: &WeiboConfig) -> Result<Self, WeiboError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        let mut url = Url::parse(&config.base_url).map_err(|e| WeiboError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("containerid", &config.container_id)
            .append_pair("luicode", &config.luicode)
            .append_pair("lfid", &config.lfid);

        Ok(Self {
            client,
            url,
            max_retries: config.max_retries,
            backoff_base_ms: config.backoff_base_ms,
        })
    }

    /// Fetches the current hot list.
    ///
    /// An envelope with no cards, or a first card without a `card_group`,
    /// yields an empty list. Entries that lack a `desc` are skipped.
    ///
    /// # Errors
    ///
    /// - [`WeiboError::UnexpectedStatus`] if every attempt got a non-2xx status.
    /// - [`WeiboError::Http`] on network failure after all retries.
    /// - [`WeiboError::ApiNotOk`] if the envelope's `ok` is not 1.
    /// - [`WeiboError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_hot_items(&self) -> Result<Vec<HotItem>, WeiboError> {
        let body = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.request_json()
        })
        .await?;

        Self::check_ok(&body)?;

        let envelope: IndexResponse =
            serde_json::from_value(body).map_err(|e| WeiboError::Deserialize {
                context: "getIndex envelope".to_owned(),
                source: e,
            })?;

        let Some(card) = envelope.data.cards.into_iter().next() else {
            tracing::debug!("hot list response contained no cards");
            return Ok(Vec::new());
        };

        let items = card
            .card_group
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<HotItem>(raw) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping card_group entry without a usable desc");
                    None
                }
            })
            .collect();

        Ok(items)
    }

    /// Sends one GET, maps non-2xx to [`WeiboError::UnexpectedStatus`], and
    /// parses the body as JSON.
    async fn request_json(&self) -> Result<serde_json::Value, WeiboError> {
        let response = self
            .client
            .get(self.url.clone())
            .header(reqwest::header::ACCEPT, "application/json, text/plain, */*")
            .header(reqwest::header::REFERER, "https://m.weibo.cn/")
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeiboError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| WeiboError::Deserialize {
            context: self.url.to_string(),
            source: e,
        })
    }

    fn check_ok(body: &serde_json::Value) -> Result<(), WeiboError> {
        let code = body.get("ok").and_then(serde_json::Value::as_i64);
        if code == Some(1) {
            return Ok(());
        }
        let msg = body
            .get("msg")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("no msg")
            .to_owned();
        Err(WeiboError::ApiNotOk { code, msg })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

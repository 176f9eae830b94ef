use thiserror::Error;

/// Errors returned by the DingTalk robot client.
#[derive(Debug, Error)]
pub enum DingTalkError {
    /// Network or TLS failure, or a non-2xx status from the webhook.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid webhook URL \"{url}\": {reason}")]
    InvalidWebhookUrl { url: String, reason: String },
}

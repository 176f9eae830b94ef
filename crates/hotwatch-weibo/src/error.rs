use thiserror::Error;

/// Errors returned by the Weibo hot-search client.
#[derive(Debug, Error)]
pub enum WeiboError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint kept answering with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The JSON envelope carried `ok` other than 1 (or no `ok` at all).
    #[error("Weibo API returned ok={code:?}: {msg}")]
    ApiNotOk { code: Option<i64>, msg: String },

    /// The body was not JSON or did not have the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

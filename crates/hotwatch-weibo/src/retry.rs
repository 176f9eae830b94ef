//! Bounded retry with exponential back-off for the Weibo client.
//!
//! Any 4xx/5xx status, connect/timeout failures and interrupted body reads
//! are retried. Malformed
//! bodies and `ok != 1` envelopes are returned immediately since a second
//! request would not change them.

use std::future::Future;
use std::time::Duration;

use crate::error::WeiboError;

/// Returns `true` for errors worth retrying after a back-off delay.
pub(crate) fn is_retriable(err: &WeiboError) -> bool {
    match err {
        WeiboError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.is_body() || e.is_decode()
        }
        WeiboError::UnexpectedStatus { status, .. } => (400..600).contains(status),
        WeiboError::ApiNotOk { .. }
        | WeiboError::Deserialize { .. }
        | WeiboError::InvalidBaseUrl { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// The sleep before the n-th retry is `backoff_base_ms * 2^(n-1)`, so with the
/// default 1 000 ms base the schedule is 1 s, 2 s, 4 s. Delay is capped at 60 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, WeiboError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, WeiboError>>,
{
    const MAX_DELAY_MS: u64 = 60_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let delay_ms = backoff_base_ms
                    .saturating_mul(1u64 << (attempt - 1).min(10))
                    .min(MAX_DELAY_MS);
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "Weibo request failed, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    fn status_err(status: u16) -> WeiboError {
        WeiboError::UnexpectedStatus {
            status,
            url: "http://localhost/api".to_owned(),
        }
    }

    #[test]
    fn client_and_server_statuses_are_retriable() {
        assert!(is_retriable(&status_err(403)));
        assert!(is_retriable(&status_err(418)));
        assert!(is_retriable(&status_err(500)));
        assert!(is_retriable(&status_err(599)));
    }

    #[test]
    fn redirect_status_is_not_retriable() {
        assert!(!is_retriable(&status_err(302)));
    }

    #[test]
    fn api_not_ok_is_not_retriable() {
        assert!(!is_retriable(&WeiboError::ApiNotOk {
            code: Some(0),
            msg: "no data".to_owned(),
        }));
    }

    #[test]
    fn deserialize_error_is_not_retriable() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert!(!is_retriable(&WeiboError::Deserialize {
            context: "test".to_owned(),
            source,
        }));
    }

    #[tokio::test]
    async fn succeeds_immediately_on_first_try() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, WeiboError>(42)
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_status_errors_then_succeeds() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                if c.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(status_err(503))
                } else {
                    Ok::<u32, WeiboError>(7)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(status_err(500))
            }
        })
        .await;
        // max_retries=3 → 4 total attempts
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert!(matches!(
            result,
            Err(WeiboError::UnexpectedStatus { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn does_not_retry_api_not_ok() {
        let calls = Arc::new(AtomicU32::new(0));
        let c = Arc::clone(&calls);
        let result = retry_with_backoff(3, 0, || {
            let c = Arc::clone(&c);
            async move {
                c.fetch_add(1, Ordering::SeqCst);
                Err::<u32, _>(WeiboError::ApiNotOk {
                    code: Some(0),
                    msg: String::new(),
                })
            }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(matches!(result, Err(WeiboError::ApiNotOk { .. })));
    }
}

//! Retry with exponential back-off and jitter for provider calls.
//!
//! Only transient failures are retried. With the default `max_retries = 0`
//! every operation runs exactly once.

use std::future::Future;
use std::time::Duration;

use crate::error::PlacesError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:** timeouts, connection failures, HTTP 429, HTTP 5xx.
///
/// **Not retriable:** other 4xx (bad key, bad field mask, unknown place),
/// deserialization failures, and configuration errors.
pub(crate) fn is_retriable(err: &PlacesError) -> bool {
    match err {
        PlacesError::Http(e) => e.is_timeout() || e.is_connect(),
        PlacesError::Api { status, .. } => *status == 429 || *status >= 500,
        PlacesError::Deserialize { .. } | PlacesError::InvalidBaseUrl { .. } => false,
    }
}

const MAX_DELAY: Duration = Duration::from_secs(30);

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// Each pause comes from [`retry_delay`].
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, PlacesError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, PlacesError>>,
{
    let mut retries_used = 0u32;
    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        if retries_used >= max_retries || !is_retriable(&err) {
            return Err(err);
        }
        retries_used += 1;
        let delay = retry_delay(&err, retries_used, backoff_base_ms);
        tracing::warn!(
            retry = retries_used,
            max_retries,
            ?delay,
            error = %err,
            "places provider call failed transiently; retrying"
        );
        tokio::time::sleep(delay).await;
    }
}

/// Pause before retry number `retry` (1-based).
///
/// A provider `Retry-After` hint wins when present. Otherwise the pause is
/// `backoff_base_ms × 2^(retry-1)` with ±25% jitter. Both are capped at 30 s.
fn retry_delay(err: &PlacesError, retry: u32, backoff_base_ms: u64) -> Duration {
    if let PlacesError::Api {
        retry_after_secs: Some(secs),
        ..
    } = err
    {
        return Duration::from_secs(*secs).min(MAX_DELAY);
    }
    let exponent = retry.saturating_sub(1).min(10);
    let base = Duration::from_millis(backoff_base_ms.saturating_mul(1u64 << exponent));
    base.min(MAX_DELAY)
        .mul_f64(rand::random_range(0.75..=1.25))
        .min(MAX_DELAY)
}

//! Request correlation and inbound throttling for the lead routes.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id for one inbound call; echoed in `meta.request_id`.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Shared counter for the lead endpoints: at most `max_requests` calls per
/// `window`, counted across all clients.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    counter: Arc<Mutex<WindowCounter>>,
}

#[derive(Debug)]
struct WindowCounter {
    opened_at: Instant,
    admitted: usize,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            counter: Arc::new(Mutex::new(WindowCounter {
                opened_at: Instant::now(),
                admitted: 0,
            })),
        }
    }

    /// Counts one call against the current window; `false` once it is full.
    async fn try_admit(&self) -> bool {
        let mut counter = self.counter.lock().await;
        if counter.opened_at.elapsed() >= self.window {
            counter.opened_at = Instant::now();
            counter.admitted = 0;
        }
        if counter.admitted >= self.max_requests {
            return false;
        }
        counter.admitted += 1;
        true
    }
}

/// Tags the request with a [`RequestId`] taken from `x-request-id` (or a
/// fresh UUIDv4) and writes the same id back on the response.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), ToOwned::to_owned);

    req.extensions_mut().insert(RequestId(id.clone()));
    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Rejects lead calls beyond the configured budget with a `rate_limited`
/// [`ApiError`] (HTTP 429).
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    if rate_limit.try_admit().await {
        return next.run(req).await;
    }

    let req_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    tracing::warn!(
        request_id = %req_id,
        path = %req.uri().path(),
        max_requests = rate_limit.max_requests,
        "lead request rejected by rate limit"
    );
    ApiError::new(req_id, "rate_limited", "too many lead requests; retry later").into_response()
}

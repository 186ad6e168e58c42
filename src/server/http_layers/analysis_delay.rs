//! Simulated "analysis" time in front of recommendation routes.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::IntoResponse;
use std::time::Duration;

/// Sleeps for a fixed `delay_ms` before handling the request.
pub async fn analysis_delay(
    State(delay_ms): State<u64>,
    request: Request<Body>,
    next: Next,
) -> impl IntoResponse {
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
    next.run(request).await
}

/// Dev-only delay drawn from a gaussian with a mean of 1.5s and a standard
/// deviation of 0.5s, clamped at zero.
#[cfg(feature = "slowdown")]
pub async fn slowdown_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    use rand_distr::{Distribution, Normal};

    let delay_ms = match Normal::new(1500.0, 500.0) {
        Ok(normal) => 0.0f64.max(normal.sample(&mut rand::rng())),
        Err(_) => 0.0,
    };
    tokio::time::sleep(Duration::from_millis(delay_ms as u64)).await;
    next.run(request).await
}

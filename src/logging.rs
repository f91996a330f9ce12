use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

pub const HEALTH_PATH: &str = "/health";

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Logs one summary per request, tagged with the matched route template.
///
/// Liveness probes are logged at debug level only.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let route = route_label(request.extensions().get::<MatchedPath>());
    let started_at = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let duration_ms = started_at.elapsed().as_millis();

    if route == HEALTH_PATH {
        debug!(method = %method, status, duration_ms, "health probe");
    } else {
        info!(
            method = %method,
            path = %path,
            route = %route,
            status,
            duration_ms,
            "request summary"
        );
    }

    response
}

fn route_label(matched: Option<&MatchedPath>) -> String {
    matched
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string())
}

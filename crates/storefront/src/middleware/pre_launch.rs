//! Pre-launch gate.
//!
//! While `STOREFRONT_PRE_LAUNCH` is on, every page renders the "Sipping Soon"
//! page instead of its own content. Health checks, static assets and the
//! newsletter sign-up on that page keep working.

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::routes::pages::PreLaunchTemplate;
use crate::state::AppState;

/// Serve the coming-soon page for gated requests when pre-launch mode is on.
pub async fn pre_launch_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config().pre_launch || passes_gate(request.method(), request.uri().path()) {
        return next.run(request).await;
    }

    tracing::debug!(path = %request.uri().path(), "pre-launch gate");
    PreLaunchTemplate::default().into_response()
}

fn passes_gate(method: &Method, path: &str) -> bool {
    path == "/health"
        || path.starts_with("/static/")
        || (method == Method::POST && path == "/newsletter/subscribe")
}

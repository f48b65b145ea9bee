//! HTMX request helpers.
//!
//! Cart and form endpoints answer HTMX requests with a fragment plus an
//! `HX-Trigger` header, and plain form posts with a redirect back to the
//! page they came from.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

/// Header HTMX sets on every request it makes.
pub const HX_REQUEST_HEADER: &str = "hx-request";

/// Response header and event name that tell the badge and drawer to refresh.
pub const CART_UPDATED: (&str, &str) = ("HX-Trigger", "cart-updated");

/// Whether the request came from HTMX.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HxRequest(pub bool);

impl<S> FromRequestParts<S> for HxRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get(HX_REQUEST_HEADER)
            .is_some_and(|v| v.as_bytes() == b"true");
        Ok(Self(is_htmx))
    }
}

/// Redirect to `return_to` if it is a local path, otherwise to `fallback`.
///
/// Only same-site absolute paths are honored, so a crafted form cannot turn
/// the storefront into an open redirect.
pub fn redirect_back(return_to: Option<&str>, fallback: &'static str) -> Response {
    Redirect::to(local_path(return_to).unwrap_or(fallback)).into_response()
}

fn local_path(candidate: Option<&str>) -> Option<&str> {
    candidate.filter(|path| {
        path.starts_with('/')
            && !path.starts_with("//")
            && !path.contains('\\')
            && !path.chars().any(char::is_control)
    })
}

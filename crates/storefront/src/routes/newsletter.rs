//! Newsletter ("The Lulu List") subscription handler.
//!
//! Sign-ups are acknowledged but not stored anywhere.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lulu_vine_core::Email;
use serde::Deserialize;
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::state::AppState;

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
}

/// Success fragment template (replaces the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "newsletter/subscribe_success.html")]
pub struct SubscribeSuccessTemplate {
    pub email: String,
}

/// Error fragment template (replaces the form via HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "newsletter/subscribe_error.html")]
pub struct SubscribeErrorTemplate {
    pub message: String,
    pub email: String,
}

/// Subscribe to the newsletter (HTMX).
#[instrument(skip(state, form))]
pub async fn subscribe(State(state): State<AppState>, Form(form): Form<SubscribeForm>) -> Response {
    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(e) => {
            tracing::debug!(error = %e, "newsletter sign-up rejected");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                SubscribeErrorTemplate {
                    message: "Please enter a valid email address.".to_string(),
                    email: form.email.trim().to_string(),
                },
            )
                .into_response();
        }
    };

    tokio::time::sleep(state.config().simulated_latency).await;
    add_breadcrumb("newsletter", "Newsletter sign-up", None);
    tracing::info!("newsletter subscription");

    SubscribeSuccessTemplate {
        email: email.as_str().to_string(),
    }
    .into_response()
}

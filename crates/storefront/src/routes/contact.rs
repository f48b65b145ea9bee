//! Contact page route handlers.
//!
//! There is no mail backend; a valid submission waits out the configured
//! latency and then thanks the visitor.

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
use crate::filters;
use crate::routes::htmx::HxRequest;
use crate::state::AppState;

/// Subjects offered by the contact form, as `(value, label)`.
pub const SUBJECTS: [(&str, &str); 7] = [
    ("general", "General Inquiry"),
    ("product", "Product Question"),
    ("order", "Order Support"),
    ("wholesale", "Wholesale Inquiry"),
    ("press", "Press & Media"),
    ("partnership", "Partnership Opportunity"),
    ("other", "Other"),
];

/// Contact form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub newsletter: Option<String>,
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.subject.is_none() && self.message.is_none()
    }
}

/// A `<option>` in the subject select.
pub struct SubjectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Form state shared by the page and the HTMX fragment.
pub struct ContactFormView {
    pub subjects: Vec<SubjectOption>,
    pub form: ContactForm,
    pub errors: ContactErrors,
    pub sent: bool,
}

impl ContactFormView {
    fn new(form: ContactForm, errors: ContactErrors, sent: bool) -> Self {
        let subjects = SUBJECTS
            .into_iter()
            .map(|(value, label)| SubjectOption {
                value,
                label,
                selected: form.subject == value,
            })
            .collect();
        Self {
            subjects,
            form,
            errors,
            sent,
        }
    }
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact/index.html")]
pub struct ContactPageTemplate {
    pub view: ContactFormView,
}

/// Contact form fragment (HTMX swap target).
#[derive(Template, WebTemplate)]
#[template(path = "partials/contact_form.html")]
pub struct ContactFormTemplate {
    pub view: ContactFormView,
}

fn validate(form: &ContactForm) -> ContactErrors {
    let required = |value: &str, message: &str| {
        value.trim().is_empty().then(|| message.to_string())
    };
    ContactErrors {
        name: required(&form.name, "Please enter your name."),
        email: Email::parse(&form.email)
            .err()
            .map(|_| "Please enter a valid email address.".to_string()),
        subject: (!SUBJECTS.iter().any(|(value, _)| *value == form.subject))
            .then(|| "Please choose a subject.".to_string()),
        message: required(&form.message, "Please enter a message."),
    }
}

/// Display the contact page.
#[instrument]
pub async fn show() -> impl IntoResponse {
    ContactPageTemplate {
        view: ContactFormView::new(ContactForm::default(), ContactErrors::default(), false),
    }
}

/// Submit the contact form.
///
/// Invalid submissions re-render the form with field errors and 422.
#[instrument(skip(state, form), fields(subject = %form.subject))]
pub async fn submit(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<ContactForm>,
) -> Response {
    let errors = validate(&form);
    if !errors.is_empty() {
        tracing::debug!(?errors, "contact form rejected");
        return render(is_htmx, StatusCode::UNPROCESSABLE_ENTITY, form, errors, false);
    }

    tokio::time::sleep(state.config().simulated_latency).await;
    add_breadcrumb("contact", "Contact form sent", Some(&[("subject", form.subject.as_str())]));
    tracing::info!(
        subject = %form.subject,
        newsletter = form.newsletter.is_some(),
        "contact message received"
    );

    render(is_htmx, StatusCode::OK, ContactForm::default(), ContactErrors::default(), true)
}

fn render(
    is_htmx: bool,
    status: StatusCode,
    form: ContactForm,
    errors: ContactErrors,
    sent: bool,
) -> Response {
    let view = ContactFormView::new(form, errors, sent);
    if is_htmx {
        (status, ContactFormTemplate { view }).into_response()
    } else {
        (status, ContactPageTemplate { view }).into_response()
    }
}

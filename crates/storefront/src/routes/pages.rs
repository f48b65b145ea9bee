//! Static page route handlers: about, not-found and the pre-launch page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;

/// A titled paragraph on the about page.
#[derive(Clone)]
pub struct Value {
    pub title: &'static str,
    pub description: &'static str,
}

/// A year on the about page timeline.
#[derive(Clone)]
pub struct Milestone {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const VALUES: [Value; 4] = [
    Value {
        title: "Passion for Wine Culture",
        description: "We believe wine brings people together and creates memorable moments \
                      worth celebrating.",
    },
    Value {
        title: "Thoughtful Design",
        description: "Every piece is carefully crafted to blend functionality with elegant \
                      aesthetics.",
    },
    Value {
        title: "Community First",
        description: "We're building a community of wine lovers who appreciate style and \
                      quality.",
    },
    Value {
        title: "Quality Commitment",
        description: "We use only premium materials and maintain the highest standards in \
                      craftsmanship.",
    },
];

const MILESTONES: [Milestone; 4] = [
    Milestone {
        year: "2022",
        title: "The Idea",
        description: "Founded with a vision to create stylish wine accessories for modern \
                      enthusiasts.",
    },
    Milestone {
        year: "2023",
        title: "First Collection",
        description: "Launched our signature line of wine carriers, starting with The \
                      Elegance Tote.",
    },
    Milestone {
        year: "2024",
        title: "Growing Community",
        description: "Reached 1,000+ happy customers and expanded our product line.",
    },
    Milestone {
        year: "2025",
        title: "What's Next",
        description: "Expanding internationally and introducing new sustainable materials.",
    },
];

const USE_CASES: [Value; 3] = [
    Value {
        title: "Dinner Parties",
        description: "Arrive with a bottle that looks as good as it tastes.",
    },
    Value {
        title: "Weekend Getaways",
        description: "Padded carriers keep bottles safe from the car to the cabin.",
    },
    Value {
        title: "Special Celebrations",
        description: "A gift-ready way to bring the bubbly to birthdays and anniversaries.",
    },
];

/// About page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/about.html")]
pub struct AboutTemplate {
    pub values: Vec<Value>,
    pub milestones: Vec<Milestone>,
    pub use_cases: Vec<Value>,
}

/// Standalone coming-soon page served while the pre-launch gate is on.
#[derive(Template, WebTemplate, Default)]
#[template(path = "pages/prelaunch.html")]
pub struct PreLaunchTemplate;

/// Not-found page template.
#[derive(Template, WebTemplate, Default)]
#[template(path = "errors/not_found.html")]
pub struct NotFoundTemplate;

/// Display the about page.
#[instrument]
pub async fn about() -> impl IntoResponse {
    AboutTemplate {
        values: VALUES.to_vec(),
        milestones: MILESTONES.to_vec(),
        use_cases: USE_CASES.to_vec(),
    }
}

/// Fallback for unmatched routes.
#[instrument]
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate)
}

/// Create the static pages router.
pub fn router() -> Router<AppState> {
    Router::new().route("/about", get(about))
}

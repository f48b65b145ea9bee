//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::routes::products::ProductCardView;
use crate::state::AppState;

/// Number of products in the home page line-up.
const FEATURED_COUNT: usize = 3;

/// A customer quote on the home page.
#[derive(Clone)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub text: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        location: "San Francisco, CA",
        text: "I absolutely love my Lulu Vine tote! It's become my go-to for dinner parties \
               and weekend brunches. The quality is exceptional and it gets compliments \
               everywhere I go.",
    },
    Testimonial {
        name: "Emma Rodriguez",
        location: "Austin, TX",
        text: "Perfect for gifting! I bought three different styles for my wine-loving \
               friends and they were all thrilled. The packaging is beautiful and the \
               carriers are so functional.",
    },
    Testimonial {
        name: "Jessica Park",
        location: "New York, NY",
        text: "As someone who hosts a lot, these wine carriers have been a game-changer. \
               They're stylish, practical, and my guests always ask where I got them!",
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub featured: Vec<ProductCardView>,
    pub testimonials: Vec<Testimonial>,
    /// Where a plain quick-add form redirects after posting.
    pub return_to: String,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let featured = state
        .catalog()
        .featured(FEATURED_COUNT)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    HomeTemplate {
        featured,
        testimonials: TESTIMONIALS.to_vec(),
        return_to: "/".to_string(),
    }
}

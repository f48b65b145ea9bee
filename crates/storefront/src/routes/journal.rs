//! Journal route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::filters;
use crate::journal::{JournalCategory, JournalQuery, Post};
use crate::routes::shop::OptionView;
use crate::state::AppState;

/// Post view for templates.
#[derive(Clone)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub category: &'static str,
    pub author: String,
    pub published_on: String,
    pub read_time: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            image: post.image.clone(),
            category: post.category.label(),
            author: post.author.clone(),
            published_on: post.published_on.clone(),
            read_time: post.read_time.clone(),
        }
    }
}

/// Journal index template.
#[derive(Template, WebTemplate)]
#[template(path = "journal/index.html")]
pub struct JournalIndexTemplate {
    pub featured: Option<PostView>,
    pub posts: Vec<PostView>,
    pub categories: Vec<OptionView>,
    pub search: String,
}

/// Display the journal with optional category filter and search.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<JournalQuery>,
) -> impl IntoResponse {
    let listing = state.journal().list(&query);

    let categories = std::iter::once(OptionView {
        value: "all",
        label: "All Posts",
        selected: listing.category.is_none(),
    })
    .chain(JournalCategory::ALL.into_iter().map(|c| OptionView {
        value: c.slug(),
        label: c.label(),
        selected: listing.category == Some(c),
    }))
    .collect();

    JournalIndexTemplate {
        featured: listing.featured.map(PostView::from),
        posts: listing.posts.into_iter().map(PostView::from).collect(),
        categories,
        search: listing.search,
    }
}

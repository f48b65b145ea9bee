//! Journal (blog) posts held in memory.

use std::sync::Arc;

use lulu_vine_core::PostId;
use serde::Deserialize;

/// Journal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JournalCategory {
    WineTips,
    Styling,
    Entertaining,
    Travel,
    Lifestyle,
}

impl JournalCategory {
    pub const ALL: [Self; 5] = [
        Self::WineTips,
        Self::Styling,
        Self::Entertaining,
        Self::Travel,
        Self::Lifestyle,
    ];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::WineTips => "wine-tips",
            Self::Styling => "styling",
            Self::Entertaining => "entertaining",
            Self::Travel => "travel",
            Self::Lifestyle => "lifestyle",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WineTips => "Wine Tips",
            Self::Styling => "Styling Ideas",
            Self::Entertaining => "Entertaining",
            Self::Travel => "Wine Travel",
            Self::Lifestyle => "Lifestyle",
        }
    }

    /// `all` and unknown values mean no filter.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// A journal post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub category: JournalCategory,
    pub author: String,
    /// ISO date, `YYYY-MM-DD`.
    pub published_on: String,
    pub read_time: String,
    pub featured: bool,
}

impl Post {
    fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.excerpt.to_lowercase().contains(needle)
    }
}

/// Journal query string: `?category=&q=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JournalQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

/// Result of a journal listing.
#[derive(Debug)]
pub struct JournalListing<'a> {
    /// Shown above the grid only when nothing narrows the listing.
    pub featured: Option<&'a Post>,
    /// Matching posts, excluding the featured one.
    pub posts: Vec<&'a Post>,
    pub category: Option<JournalCategory>,
    pub search: String,
}

/// Read-only journal store.
#[derive(Debug, Clone)]
pub struct Journal {
    posts: Arc<Vec<Post>>,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new(seed_posts())
    }
}

impl Journal {
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts: Arc::new(posts),
        }
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Filter by category and case-insensitive search over title and excerpt.
    #[must_use]
    pub fn list(&self, query: &JournalQuery) -> JournalListing<'_> {
        let category = query.category.as_deref().and_then(JournalCategory::from_slug);
        let search = query.q.as_deref().unwrap_or_default().trim().to_string();
        let needle = search.to_lowercase();

        let posts = self
            .posts
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .filter(|p| needle.is_empty() || p.matches_search(&needle))
            .filter(|p| !p.featured)
            .collect();

        let unfiltered = category.is_none() && needle.is_empty();
        let featured = if unfiltered {
            self.posts.iter().find(|p| p.featured)
        } else {
            None
        };

        JournalListing {
            featured,
            posts,
            category,
            search,
        }
    }
}

fn pexels(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=800"
    )
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    slug: &str,
    title: &str,
    excerpt: &str,
    photo: u32,
    category: JournalCategory,
    author: &str,
    published_on: &str,
    read_time: &str,
) -> Post {
    Post {
        id: PostId::new(id),
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        image: pexels(photo),
        category,
        author: author.to_string(),
        published_on: published_on.to_string(),
        read_time: read_time.to_string(),
        featured: false,
    }
}

fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            featured: true,
            ..post(
                "1",
                "art-of-wine-gifting",
                "The Art of Wine Gifting: Making Every Bottle Special",
                "Transform a simple bottle of wine into a memorable gift with thoughtful \
                 presentation and the perfect carrier.",
                1_649_565,
                JournalCategory::Styling,
                "Sarah Chen",
                "2024-01-15",
                "5 min read",
            )
        },
        post(
            "2",
            "perfect-wine-tasting-home",
            "Hosting the Perfect Wine Tasting at Home",
            "Create an unforgettable wine tasting experience for your friends with these \
             expert tips and styling ideas.",
            1_284_171,
            JournalCategory::Entertaining,
            "Emma Rodriguez",
            "2024-01-10",
            "7 min read",
        ),
        post(
            "3",
            "wine-country-weekend-packing",
            "Wine Country Weekend: Packing Essentials",
            "Everything you need to know about traveling to wine country in style, including \
             what to pack and how to transport your finds.",
            1_407_322,
            JournalCategory::Travel,
            "Jessica Park",
            "2024-01-05",
            "6 min read",
        ),
        post(
            "4",
            "pairing-wine-carriers-style",
            "Pairing Wine Carriers with Your Personal Style",
            "Discover how to choose the perfect wine carrier that complements your wardrobe \
             and lifestyle.",
            5_591_663,
            JournalCategory::Styling,
            "Sarah Chen",
            "2023-12-28",
            "4 min read",
        ),
        post(
            "5",
            "understanding-wine-storage",
            "Understanding Wine Storage: Temperature, Light, and More",
            "Learn the fundamentals of proper wine storage to preserve your collection and \
             enhance your tasting experience.",
            1_841_841,
            JournalCategory::WineTips,
            "Michael Torres",
            "2023-12-20",
            "8 min read",
        ),
        post(
            "6",
            "sustainable-wine-practices",
            "Sustainable Wine Practices: What to Look For",
            "Explore the world of sustainable and organic wines, and learn how to make \
             environmentally conscious choices.",
            1_338_155,
            JournalCategory::Lifestyle,
            "Emma Rodriguez",
            "2023-12-15",
            "6 min read",
        ),
    ]
}

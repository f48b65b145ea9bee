//! Integration test harness for the Lulu Vine storefront.
//!
//! Each test spawns the real router on an ephemeral port and drives it over
//! HTTP with a cookie-keeping client, so carts persist across requests the
//! way they do in a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p lulu-vine-integration-tests
//! ```

use std::net::SocketAddr;
use std::time::Duration;

use lulu_vine_storefront::{app, config::StorefrontConfig, state::AppState};
use reqwest::{Client, Response, redirect::Policy};

/// Header HTMX adds to its requests.
const HX_REQUEST: &str = "HX-Request";

/// A storefront served on `127.0.0.1` for the lifetime of the test.
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
}

impl TestServer {
    /// Spawn with defaults and no simulated form latency.
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config()).await
    }

    /// Spawn with a custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind or the client cannot be built.
    pub async fn spawn_with(config: StorefrontConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let router = app(AppState::new(config));
        tokio::spawn(async move {
            axum::serve(
                listener,
                router.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .expect("Test server error");
        });

        // Redirects are asserted on, not followed
        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: format!("http://{addr}"),
            client,
        }
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// # Panics
    ///
    /// Panics if the request fails to send.
    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET failed")
    }

    /// # Panics
    ///
    /// Panics if the request fails to send.
    pub async fn htmx_get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .header(HX_REQUEST, "true")
            .send()
            .await
            .expect("HTMX GET failed")
    }

    /// Plain browser form post.
    ///
    /// # Panics
    ///
    /// Panics if the request fails to send.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST failed")
    }

    /// Form post as HTMX sends it.
    ///
    /// # Panics
    ///
    /// Panics if the request fails to send.
    pub async fn htmx_post(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .header(HX_REQUEST, "true")
            .form(form)
            .send()
            .await
            .expect("HTMX POST failed")
    }

    /// Current badge count, read from `/cart/count`.
    ///
    /// # Panics
    ///
    /// Panics if the request fails or the badge is not a number.
    pub async fn cart_count(&self) -> u64 {
        let body = self
            .htmx_get("/cart/count")
            .await
            .text()
            .await
            .expect("Badge body");
        let digits: String = body.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            0
        } else {
            digits.parse().expect("Badge is not a number")
        }
    }
}

/// Default configuration for tests: no simulated latency.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        simulated_latency: Duration::ZERO,
        ..StorefrontConfig::default()
    }
}

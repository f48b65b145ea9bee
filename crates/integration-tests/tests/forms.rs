//! Contact and newsletter forms, including the shared rate limit.

#![allow(clippy::unwrap_used)]

use lulu_vine_integration_tests::TestServer;
use reqwest::StatusCode;

const VALID_CONTACT: [(&str, &str); 4] = [
    ("name", "Emma Rodriguez"),
    ("email", "emma@example.com"),
    ("subject", "wholesale"),
    ("message", "Do you offer wholesale pricing?"),
];

#[tokio::test]
async fn test_contact_page_lists_subjects() {
    let server = TestServer::spawn().await;
    let body = server.get("/contact").await.text().await.unwrap();
    assert!(body.contains("Partnership Opportunity"));
    assert!(body.contains("hello@luluvine.com"));
}

#[tokio::test]
async fn test_contact_success_fragment() {
    let server = TestServer::spawn().await;
    let response = server.htmx_post("/contact", &VALID_CONTACT).await;
    assert_eq!(response.status(), StatusCode::OK);

    let fragment = response.text().await.unwrap();
    assert!(fragment.contains("Message sent!"));
    assert!(!fragment.contains("<html"));
}

#[tokio::test]
async fn test_contact_errors_keep_input() {
    let server = TestServer::spawn().await;
    let response = server
        .htmx_post(
            "/contact",
            &[
                ("name", "Emma"),
                ("email", "not-an-email"),
                ("subject", "press"),
                ("message", ""),
            ],
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let fragment = response.text().await.unwrap();
    assert!(fragment.contains("Please enter a valid email address."));
    assert!(fragment.contains("Please enter a message."));
    assert!(fragment.contains(r#"value="Emma""#));
    assert!(fragment.contains(r#"value="press" selected"#));
}

#[tokio::test]
async fn test_plain_contact_post_renders_page() {
    let server = TestServer::spawn().await;
    let response = server.post_form("/contact", &VALID_CONTACT).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("<html"));
    assert!(body.contains("Message sent!"));
}

#[tokio::test]
async fn test_newsletter_subscribe() {
    let server = TestServer::spawn().await;

    let response = server
        .htmx_post("/newsletter/subscribe", &[("email", " Sarah@Example.com ")])
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("sarah@example.com"));

    let response = server
        .htmx_post("/newsletter/subscribe", &[("email", "sarah@localhost")])
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.text().await.unwrap().contains("valid email"));
}

#[tokio::test]
async fn test_form_posts_are_rate_limited() {
    let server = TestServer::spawn().await;

    for _ in 0..5 {
        let response = server
            .htmx_post("/newsletter/subscribe", &[("email", "a@b.co")])
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    // The limiter is shared with the contact form
    let response = server.htmx_post("/contact", &VALID_CONTACT).await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);

    // Browsing is not limited
    assert_eq!(server.get("/contact").await.status(), StatusCode::OK);
}

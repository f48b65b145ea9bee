//! End-to-end cart flows against a live storefront.

#![allow(clippy::unwrap_used)]

use lulu_vine_integration_tests::TestServer;
use lulu_vine_storefront::middleware::session::SESSION_COOKIE_NAME;
use reqwest::StatusCode;

#[tokio::test]
async fn test_new_visitor_has_empty_cart() {
    let server = TestServer::spawn().await;

    assert_eq!(server.cart_count().await, 0);

    let body = server.get("/cart").await.text().await.unwrap();
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_htmx_add_returns_badge_and_trigger() {
    let server = TestServer::spawn().await;

    let response = server
        .htmx_post("/cart/add", &[("product_id", "1"), ("color", "champagne")])
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["hx-trigger"], "cart-updated");
    let cookie = response.headers()["set-cookie"].to_str().unwrap();
    assert!(cookie.starts_with(&format!("{SESSION_COOKIE_NAME}=")));
    assert!(cookie.contains("HttpOnly"));
    assert!(response.text().await.unwrap().contains('1'));

    assert_eq!(server.cart_count().await, 1);
}

#[tokio::test]
async fn test_repeat_adds_merge_into_one_line() {
    let server = TestServer::spawn().await;

    for _ in 0..2 {
        server
            .htmx_post("/cart/add", &[("product_id", "1"), ("color", "champagne")])
            .await;
    }
    server
        .htmx_post(
            "/cart/add",
            &[("product_id", "1"), ("color", "wine"), ("quantity", "3")],
        )
        .await;

    assert_eq!(server.cart_count().await, 5);

    let body = server.get("/cart").await.text().await.unwrap();
    assert_eq!(body.matches(r#"name="id" value="1-champagne""#).count(), 3);
    assert!(body.contains(r#"name="id" value="1-wine""#));
    // 5 x $89
    assert!(body.contains("$445.00"));
}

#[tokio::test]
async fn test_plain_add_redirects_back() {
    let server = TestServer::spawn().await;

    let response = server
        .post_form(
            "/cart/add",
            &[("product_id", "4"), ("return_to", "/product/minimalist-sleeve")],
        )
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/product/minimalist-sleeve");

    let response = server
        .post_form(
            "/cart/add",
            &[("product_id", "4"), ("return_to", "https://evil.example")],
        )
        .await;
    assert_eq!(response.headers()["location"], "/cart");
    assert_eq!(server.cart_count().await, 2);
}

#[tokio::test]
async fn test_add_rejects_bad_input() {
    let server = TestServer::spawn().await;

    let unknown = server.htmx_post("/cart/add", &[("product_id", "99")]).await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    let bad_color = server
        .htmx_post("/cart/add", &[("product_id", "1"), ("color", "plaid")])
        .await;
    assert_eq!(bad_color.status(), StatusCode::BAD_REQUEST);

    let too_many = server
        .htmx_post("/cart/add", &[("product_id", "1"), ("quantity", "11")])
        .await;
    assert_eq!(too_many.status(), StatusCode::BAD_REQUEST);

    for quantity in ["two", "-1"] {
        let malformed = server
            .htmx_post("/cart/add", &[("product_id", "1"), ("quantity", quantity)])
            .await;
        assert_eq!(malformed.status(), StatusCode::BAD_REQUEST, "{quantity}");
        assert!(malformed.text().await.unwrap().starts_with("Bad request:"));
    }

    assert_eq!(server.cart_count().await, 0);
}

#[tokio::test]
async fn test_update_and_remove_lines() {
    let server = TestServer::spawn().await;
    server
        .htmx_post("/cart/add", &[("product_id", "2"), ("color", "pink")])
        .await;
    server.htmx_post("/cart/add", &[("product_id", "4")]).await;

    let response = server
        .htmx_post("/cart/update", &[("id", "2-pink"), ("quantity", "4")])
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["hx-trigger"], "cart-updated");
    let fragment = response.text().await.unwrap();
    assert!(fragment.contains(r#"id="cart-contents""#));
    assert_eq!(server.cart_count().await, 5);

    let malformed = server
        .htmx_post("/cart/update", &[("id", "2-pink"), ("quantity", "lots")])
        .await;
    assert_eq!(malformed.status(), StatusCode::BAD_REQUEST);
    assert_eq!(server.cart_count().await, 5);

    // Zero removes the line
    server
        .htmx_post("/cart/update", &[("id", "2-pink"), ("quantity", "0")])
        .await;
    assert_eq!(server.cart_count().await, 1);

    let response = server
        .htmx_post("/cart/remove", &[("id", "4"), ("surface", "drawer")])
        .await;
    let fragment = response.text().await.unwrap();
    assert!(fragment.contains(r#"id="mini-cart""#));
    assert_eq!(server.cart_count().await, 0);
}

#[tokio::test]
async fn test_unknown_line_edits_are_ignored() {
    let server = TestServer::spawn().await;
    server.htmx_post("/cart/add", &[("product_id", "3")]).await;

    server
        .htmx_post("/cart/update", &[("id", "nope"), ("quantity", "7")])
        .await;
    server.htmx_post("/cart/remove", &[("id", "nope")]).await;

    assert_eq!(server.cart_count().await, 1);
}

#[tokio::test]
async fn test_toggle_opens_and_closes_drawer() {
    let server = TestServer::spawn().await;
    server.htmx_post("/cart/add", &[("product_id", "6")]).await;

    let closed = server.htmx_get("/cart/drawer").await.text().await.unwrap();
    assert!(!closed.contains("Your Cart"));

    let opened = server
        .htmx_post("/cart/toggle", &[])
        .await
        .text()
        .await
        .unwrap();
    assert!(opened.contains("Your Cart (1)"));
    assert!(opened.contains("The Travel Companion"));

    let drawer = server.htmx_get("/cart/drawer").await.text().await.unwrap();
    assert!(drawer.contains("is-open"));

    let closed = server
        .htmx_post("/cart/toggle", &[])
        .await
        .text()
        .await
        .unwrap();
    assert!(!closed.contains("Your Cart"));
}

#[tokio::test]
async fn test_plain_toggle_redirects_home() {
    let server = TestServer::spawn().await;
    let response = server.post_form("/cart/toggle", &[]).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()["location"], "/");
}

#[tokio::test]
async fn test_order_summary_with_promo() {
    let server = TestServer::spawn().await;
    server
        .htmx_post("/cart/add", &[("product_id", "1"), ("color", "champagne")])
        .await;

    let page = server.get("/cart").await.text().await.unwrap();
    assert!(page.contains("$89.00"));
    assert!(page.contains("Free"));
    assert!(page.contains("$7.12"));
    assert!(page.contains("$96.12"));

    let response = server
        .htmx_post("/cart/promo", &[("code", " welcome10 ")])
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let fragment = response.text().await.unwrap();
    assert!(fragment.contains("WELCOME10"));
    assert!(fragment.contains("-$8.90"));
    assert!(fragment.contains("$86.51"));

    let response = server.htmx_post("/cart/promo/remove", &[]).await;
    let fragment = response.text().await.unwrap();
    assert!(fragment.contains("$96.12"));
    assert!(!fragment.contains("-$8.90"));
}

#[tokio::test]
async fn test_invalid_promo_is_unprocessable() {
    let server = TestServer::spawn().await;
    server.htmx_post("/cart/add", &[("product_id", "4")]).await;

    let response = server.htmx_post("/cart/promo", &[("code", "FREEWINE")]).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let fragment = response.text().await.unwrap();
    assert!(fragment.contains("Promo code FREEWINE is not valid"));

    // $45 + $9.99 shipping + $3.60 tax
    assert!(fragment.contains("$9.99"));
    assert!(fragment.contains("$58.59"));
}

#[tokio::test]
async fn test_carts_are_per_visitor() {
    let server = TestServer::spawn().await;
    server.htmx_post("/cart/add", &[("product_id", "5")]).await;

    let stranger = reqwest::Client::new();
    let body = stranger
        .get(server.url("/cart/count"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(!body.contains("badge"));
    assert_eq!(server.cart_count().await, 1);
}

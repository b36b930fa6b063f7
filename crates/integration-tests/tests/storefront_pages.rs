//! Integration tests for the home page, catalog tabs and static assets.

#![allow(clippy::unwrap_used)]

use automats_integration_tests::TestClient;
use axum::http::StatusCode;

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new();
    let response = client.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_home_page_renders_every_section() {
    let mut client = TestClient::new();
    let page = client.get("/").await;
    assert_eq!(page.status, StatusCode::OK);

    for anchor in ["catalog", "materials", "delivery", "reviews", "contacts"] {
        assert!(
            page.body.contains(&format!("id=\"{anchor}\"")),
            "missing section {anchor}"
        );
    }
    assert!(page.body.contains("Коврики Classic Felt"));
    assert!(page.body.contains("Алексей М."));
    assert!(page.body.contains("info@automats.ru"));
    assert!(page.body.contains("tel:+74951234567"));
    assert!(page.body.contains("Все права защищены"));
}

#[tokio::test]
async fn test_home_page_material_query_selects_tab() {
    let mut client = TestClient::new();
    let page = client.get("/?material=EVA").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Коврики Premium EVA"));
    assert!(page.body.contains("Коврики Sport EVA"));
    assert!(!page.body.contains("Коврики Eco Leather"));
}

#[tokio::test]
async fn test_catalog_fragment_filters_by_material() {
    let mut client = TestClient::new();
    let grid = client
        .hx_get("/catalog?material=%D0%9A%D0%BE%D0%B6%D0%B7%D0%B0%D0%BC")
        .await;

    assert_eq!(grid.status, StatusCode::OK);
    assert!(grid.body.contains("id=\"product-grid\""));
    assert!(grid.body.contains("Коврики Eco Leather"));
    assert!(grid.body.contains("Коврики Lux Leather"));
    assert!(!grid.body.contains("Коврики Comfort Felt"));
    assert!(!grid.body.contains("<html"));
}

#[tokio::test]
async fn test_catalog_fragment_all_and_default() {
    let mut client = TestClient::new();
    let all = client.hx_get("/catalog?material=all").await;
    let default = client.hx_get("/catalog").await;

    assert_eq!(all.body.matches("data-product-id=").count(), 6);
    assert_eq!(all.body, default.body);
}

#[tokio::test]
async fn test_catalog_unknown_material_is_empty() {
    let mut client = TestClient::new();
    let grid = client.hx_get("/catalog?material=rubber").await;

    assert_eq!(grid.status, StatusCode::OK);
    assert_eq!(grid.body.matches("data-product-id=").count(), 0);
    assert!(grid.body.contains("Нет товаров"));
}

#[tokio::test]
async fn test_stylesheet_is_served() {
    let mut client = TestClient::new();
    let response = client.get("/static/css/main.css").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.header("content-type").unwrap().starts_with("text/css"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let mut client = TestClient::new();
    let response = client.get("/products/1").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

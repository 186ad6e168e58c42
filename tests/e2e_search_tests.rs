//! End-to-end tests for catalog search

mod common;

use common::{TestClient, TestServer, ACQUA_DI_GIO_ID, FRAGRANCES_COUNT, LIGHT_BLUE_ID};
use reqwest::StatusCode;
use serde_json::{json, Value};

fn ids(body: &Value) -> Vec<&str> {
    body["fragrances"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_empty_query_returns_everything() {
    let server = TestServer::spawn().await;
    let client = TestClient::authenticated(server.base_url.clone()).await;

    let response = client.search(json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["total"], FRAGRANCES_COUNT);
    assert_eq!(ids(&body).len(), FRAGRANCES_COUNT);
}

#[tokio::test]
async fn test_text_search_looks_into_notes() {
    let server = TestServer::spawn().await;
    let client = TestClient::authenticated(server.base_url.clone()).await;

    let body: Value = client
        .search(json!({ "text": "sea notes" }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body), vec![ACQUA_DI_GIO_ID]);
}

#[tokio::test]
async fn test_filters_are_combined() {
    let server = TestServer::spawn().await;
    let client = TestClient::authenticated(server.base_url.clone()).await;

    let body: Value = client
        .search(json!({
            "concentrations": ["EDT"],
            "notes": ["Bergamot", "Apple"],
            "max_price": 80.0
        }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body), vec![LIGHT_BLUE_ID, ACQUA_DI_GIO_ID]);
}

#[tokio::test]
async fn test_sort_and_limit() {
    let server = TestServer::spawn().await;
    let client = TestClient::authenticated(server.base_url.clone()).await;

    let body: Value = client
        .search(json!({ "sort": "reviews", "limit": 2 }))
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body["total"], FRAGRANCES_COUNT);
    assert_eq!(ids(&body), vec![ACQUA_DI_GIO_ID, LIGHT_BLUE_ID]);
}

#[tokio::test]
async fn test_inverted_price_range_is_rejected() {
    let server = TestServer::spawn().await;
    let client = TestClient::authenticated(server.base_url.clone()).await;

    let response = client
        .search(json!({ "min_price": 150.0, "max_price": 100.0 }))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_requires_session() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.search(json!({})).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use estate_hub::router::catalog_router;
use estate_hub::store::MarketplaceStore;
use serde_json::Value;
use tower::ServiceExt;

fn build_router() -> axum::Router {
    catalog_router(Arc::new(MarketplaceStore::standard()))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = build_router()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload = serde_json::from_slice(&body).expect("json payload");
    (status, payload)
}

fn field<'a>(items: &'a Value, key: &str) -> Vec<&'a str> {
    items
        .as_array()
        .expect("array payload")
        .iter()
        .filter_map(|item| item.get(key).and_then(Value::as_str))
        .collect()
}

#[tokio::test]
async fn providers_are_filtered_and_ranked() {
    let (status, payload) = get("/api/v1/providers?category=painter&sort=price-low").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["total"], 3);

    let prices: Vec<_> = payload["providers"]
        .as_array()
        .expect("providers array")
        .iter()
        .filter_map(|provider| provider["price"]["value"].as_f64())
        .collect();
    assert_eq!(prices, vec![9.0, 18.0, 27.0]);
}

#[tokio::test]
async fn provider_flags_and_direction_apply() {
    let (status, payload) =
        get("/api/v1/providers?category=lawyer&available=true&sort=experience&direction=asc").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        field(&payload["providers"], "name"),
        vec!["Adv. Meera Kulkarni", "Adv. Rohan Iyer", "Adv. Farah Khan"]
    );
}

#[tokio::test]
async fn unknown_category_is_an_empty_listing() {
    let (status, payload) = get("/api/v1/providers?category=astrologer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["total"], 0);
}

#[tokio::test]
async fn foreign_sort_key_is_a_bad_request() {
    let (status, payload) = get("/api/v1/providers?sort=commission").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(payload["error"]
        .as_str()
        .is_some_and(|message| message.contains("commission")));

    let (status, _) = get("/api/v1/leads?sort=sideways").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn provider_lookup_by_id() {
    let (status, payload) = get("/api/v1/providers/16").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["name"], "Adv. Farah Khan");
    assert!(payload["price"]["value"].is_null());

    let (status, _) = get("/api/v1/providers/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_summaries_list_every_section() {
    let (status, payload) = get("/api/v1/providers/categories").await;
    assert_eq!(status, StatusCode::OK);
    let keys = field(&payload, "key");
    assert_eq!(keys.first().copied(), Some("lawyer"));
    assert!(keys.contains(&"cleaning"));
}

#[tokio::test]
async fn faq_search_defaults_to_buyer_view() {
    let (status, payload) = get("/api/v1/faq/search?q=dashboard").await;
    assert_eq!(status, StatusCode::OK);
    let buyer_hits: Vec<_> = payload
        .as_array()
        .expect("matches array")
        .iter()
        .filter_map(|hit| hit["subcategory"]["id"].as_str())
        .collect();
    assert_eq!(buyer_hits, vec!["site-visits"]);

    let (status, payload) = get("/api/v1/faq/search?q=dashboard&role=seller").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload[0]["subcategory"]["id"], "seller-dashboard");
    assert_eq!(payload[0]["category"]["id"], "selling");
    assert!(payload[0]["relevance"].as_u64().is_some_and(|score| score > 0));
}

#[tokio::test]
async fn faq_browse_respects_admin_preview() {
    let (_, admin) = get("/api/v1/faq?role=admin").await;
    assert!(field(&admin, "id").contains(&"selling"));

    let (status, preview) = get("/api/v1/faq?role=admin&acting_as=buyer").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!field(&preview, "id").contains(&"selling"));

    let (status, _) = get("/api/v1/faq?role=landlord").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn leads_filter_by_status_and_summarise() {
    let (status, payload) = get("/api/v1/leads?status=closed&sort=commission").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&payload["leads"], "name"), vec!["Imran Sheikh", "Vikram Rao"]);

    let (status, summary) = get("/api/v1/leads/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary.as_array().map(Vec::len), Some(6));
    assert_eq!(summary[4]["status"], "closed");
    assert_eq!(summary[4]["commission_total"], 130_000.0);
}

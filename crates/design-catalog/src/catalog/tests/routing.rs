use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::catalog::catalog_router;

fn router() -> Router {
    catalog_router(Arc::new(service()))
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = router()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .expect("route executes");
    let status = response.status();
    (status, read_json_body(response).await)
}

async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
    let response = router()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&payload).unwrap()))
                .unwrap(),
        )
        .await
        .expect("route executes");
    let status = response.status();
    (status, read_json_body(response).await)
}

fn row_ids(payload: &Value) -> Vec<String> {
    payload["rows"]
        .as_array()
        .expect("rows array")
        .iter()
        .map(|row| row["id"].as_str().expect("row id").to_string())
        .collect()
}

#[tokio::test]
async fn browse_route_filters_and_sorts() {
    let (status, payload) =
        get("/api/v1/systems?framework=React&sort=githubStars&direction=desc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        row_ids(&payload),
        vec!["material", "chakra", "carbon", "polaris"]
    );
    assert_eq!(payload["total"], 6);
    assert_eq!(payload["matched"], 4);
    assert_eq!(payload["sort"]["key"], "githubStars");
}

#[tokio::test]
async fn browse_route_tracks_selection() {
    let (status, payload) = get("/api/v1/systems?selected=material,chakra&cms=non-cms").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["canCompare"], true);
    assert_eq!(payload["rows"][0]["selected"], true);
    assert_eq!(payload["matched"], 5);
}

#[tokio::test]
async fn browse_route_rejects_bad_queries() {
    let (status, payload) = get("/api/v1/systems?sort=popularity").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("popularity"));

    let (status, _) = get("/api/v1/systems?selected=material,chakra,carbon").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get("/api/v1/systems?cms=sometimes").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn profile_route_returns_ranks() {
    let (status, payload) = get("/api/v1/systems/chakra").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["system"]["name"], "Chakra UI");
    assert_eq!(payload["popularityRank"]["position"], 3);
    assert_eq!(payload["audit"]["totalComponents"], 2);
}

#[tokio::test]
async fn unknown_system_is_not_found() {
    let (status, payload) = get("/api/v1/systems/bootstrap").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("bootstrap"));
}

#[tokio::test]
async fn compare_route_diffs_two_systems() {
    let (status, payload) = get("/api/v1/compare?left=material&right=chakra").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["leftId"], "material");
    assert_eq!(payload["components"]["common"], json!(["Button"]));

    let (status, _) = get("/api/v1/compare?left=material").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get("/api/v1/compare?left=material&right=bootstrap").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn recommendation_route_ranks_answers() {
    let (status, payload) = post_json(
        "/api/v1/recommendations",
        json!({
            "framework": "React",
            "typescript": "required",
            "experience": "beginner",
            "priorities": ["speed"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = payload["results"].as_array().expect("results");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["system"]["id"], "material");
    assert_eq!(results[0]["score"], 93);
    assert_eq!(results[0]["matchPercent"], 93);
    assert_eq!(payload["answers"]["framework"], "React");
}

#[tokio::test]
async fn recommendation_route_rejects_invalid_answers() {
    let (status, payload) = post_json(
        "/api/v1/recommendations",
        json!({
            "framework": "React",
            "priorities": ["speed", "ai", "community"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(payload["error"].is_string());
}

#[tokio::test]
async fn stats_route_summarises_the_catalog() {
    let (status, payload) = get("/api/v1/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["overview"]["totalSystems"], 6);
    assert_eq!(payload["frameworks"][0]["label"], "React");
}

//! HTTP route tests
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::{Value, json};
use seoscope_core::SeoAnalyzer;
use seoscope_server::{app, config::Config, state::AppState};
use tower::ServiceExt;

const OPTIMIZED: &str = include_str!("../../core/tests/fixtures/optimized.json");
const DRAFT: &str = include_str!("../../core/tests/fixtures/draft.json");
const CORPUS_COPY: &str = include_str!("../../core/tests/fixtures/corpus_copy.txt");

fn router() -> Router {
    let config = Config::from_lookup(|_| None).unwrap();
    app(AppState::with_analyzer(SeoAnalyzer::new(), config))
}

fn article(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

fn good_vitals() -> Value {
    json!({ "LCP": 1800, "FID": 20, "CLS": 0.01 })
}

async fn post(uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_liveness() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["status"], "ok");
}

#[tokio::test]
async fn test_score_optimized_article() {
    let body = json!({ "article": article(OPTIMIZED), "coreWebVitals": good_vitals() });
    let (status, report) = post("/api/seo/health", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["seoScore"], 100);
    assert_eq!(report["wordCount"], 1858);
    assert_eq!(report["missingFields"], json!([]));
}

#[tokio::test]
async fn test_score_without_vitals() {
    let body = json!({ "article": article(OPTIMIZED) });
    let (status, report) = post("/api/seo/health", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["seoScore"], 93);
    assert_eq!(report["coreWebVitalsIssues"], json!(["Core Web Vitals data unavailable."]));
}

#[tokio::test]
async fn test_score_with_duplicate_corpus() {
    let body = json!({
        "article": article(OPTIMIZED),
        "coreWebVitals": good_vitals(),
        "otherArticlesContent": ["Notes on gardening.", CORPUS_COPY],
    });
    let (_, report) = post("/api/seo/health", body.to_string()).await;

    assert_eq!(report["seoScore"], 85);
    assert_eq!(report["duplicateContentIssues"], json!(["This content appears to be duplicated."]));
}

#[tokio::test]
async fn test_malformed_payload() {
    let (status, body) = post("/api/seo/health", "{ not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Malformed payload"));
}

#[tokio::test]
async fn test_missing_article_field() {
    let (status, _) = post("/api/seo/health", json!({ "coreWebVitals": good_vitals() }).to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_batch_cross_check() {
    let body = json!({
        "articles": [article(OPTIMIZED), article(OPTIMIZED), article(DRAFT)],
        "crossCheck": true,
    });
    let (status, batch) = post("/api/seo/health/batch", body.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let articles = batch["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0]["report"]["seoScore"], 78);
    assert_eq!(articles[0]["closestMatch"]["label"], "rust-web-services-guide");
    assert_eq!(articles[2]["label"], "draft-notes");
    assert_eq!(batch["summary"]["count"], 3);
    assert_eq!(batch["summary"]["fair"], 2);
    assert_eq!(batch["summary"]["poor"], 1);
}

#[tokio::test]
async fn test_batch_without_cross_check() {
    let body = json!({ "articles": [article(OPTIMIZED), article(OPTIMIZED)], "coreWebVitals": good_vitals() });
    let (_, batch) = post("/api/seo/health/batch", body.to_string()).await;

    for entry in batch["articles"].as_array().unwrap() {
        assert_eq!(entry["report"]["seoScore"], 100);
        assert!(entry.get("closestMatch").is_none());
    }
    assert_eq!(batch["summary"]["averageScore"], 100.0);
}

#[tokio::test]
async fn test_empty_batch_rejected() {
    let (status, body) = post("/api/seo/health/batch", json!({ "articles": [] }).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Malformed payload: articles must not be empty");
}

#[tokio::test]
async fn test_timeout_returns_request_timeout() {
    let config = Config::from_lookup(|key| (key == "SEOSCOPE_TIMEOUT_SECS").then(|| "0".to_string())).unwrap();
    let router = app(AppState::with_analyzer(SeoAnalyzer::new(), config));

    let body = json!({ "article": article(OPTIMIZED) });
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/seo/health")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
}

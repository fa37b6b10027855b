use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use seoscope_core::{Article, BatchEntry, BatchSummary, CoreWebVitals, SeoHealthReport};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::task::spawn_blocking;
use tracing::info;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRequest {
    pub article: Article,
    #[serde(default)]
    pub core_web_vitals: Option<CoreWebVitals>,
    #[serde(default)]
    pub other_articles_content: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub articles: Vec<Article>,
    #[serde(default)]
    pub core_web_vitals: Option<CoreWebVitals>,
    #[serde(default)]
    pub other_articles_content: Vec<String>,
    #[serde(default)]
    pub cross_check: bool,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub articles: Vec<BatchEntry>,
    pub summary: BatchSummary,
}

pub async fn liveness_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })))
}

pub async fn seo_health_handler(
    State(state): State<Arc<AppState>>, payload: Result<Json<HealthRequest>, JsonRejection>,
) -> Result<Json<SeoHealthReport>, AppError> {
    let Json(request) = payload?;

    let report = spawn_blocking(move || {
        state.analyzer.analyze(
            &request.article,
            request.core_web_vitals.as_ref(),
            &request.other_articles_content,
        )
    })
    .await?;

    info!(score = report.seo_score, "Scored article");
    Ok(Json(report))
}

pub async fn seo_batch_handler(
    State(state): State<Arc<AppState>>, payload: Result<Json<BatchRequest>, JsonRejection>,
) -> Result<Json<BatchResponse>, AppError> {
    let Json(request) = payload?;
    if request.articles.is_empty() {
        return Err(AppError::MalformedPayload("articles must not be empty".to_string()));
    }

    let articles = spawn_blocking(move || {
        state.analyzer.analyze_batch(
            &request.articles,
            request.core_web_vitals.as_ref(),
            &request.other_articles_content,
            request.cross_check,
        )
    })
    .await?;

    let summary = BatchSummary::from_entries(&articles);
    info!(count = summary.count, average = summary.average_score, "Scored batch");
    Ok(Json(BatchResponse { articles, summary }))
}

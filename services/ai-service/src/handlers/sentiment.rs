use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::models::{SentimentRequest, SentimentResponse, STATUS_SUCCESS};
use crate::sentiment;

pub async fn analyze_sentiment(
    Json(req): Json<SentimentRequest>,
) -> Result<Json<SentimentResponse>, ApiError> {
    let text = req.text.unwrap_or_default();
    let report = sentiment::analyze(&text)?;

    info!(
        "Classified text as {:?} with {} keywords",
        report.label,
        report.keywords.len()
    );

    Ok(Json(SentimentResponse {
        sentiment: report.label,
        confidence: report.confidence,
        emotions: report.emotions,
        keywords: report.keywords,
        status: STATUS_SUCCESS,
    }))
}

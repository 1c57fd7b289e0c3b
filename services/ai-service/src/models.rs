//! Request and response bodies for the analysis endpoints.
//!
//! Field names follow the wire format consumed by the frontend, so several
//! response structs rename to camelCase.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentLabel;

/// Marker carried by every successful response body.
pub const STATUS_SUCCESS: &str = "success";

// ---- vision ----

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Detection {
    pub label: &'static str,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub detections: Vec<Detection>,
    pub count: usize,
    pub status: &'static str,
}

// ---- sentiment ----

#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub sentiment: SentimentLabel,
    pub confidence: f64,
    pub emotions: BTreeMap<&'static str, f64>,
    pub keywords: Vec<String>,
    pub status: &'static str,
}

// ---- transcription ----

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioMetadata {
    pub duration: &'static str,
    pub word_count: u32,
    pub language: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TranscriptionResponse {
    pub transcription: &'static str,
    pub summary: &'static str,
    pub metadata: AudioMetadata,
    pub status: &'static str,
}

// ---- document ----

#[derive(Debug, Serialize)]
pub struct Entity {
    #[serde(rename = "type")]
    pub entity_type: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub pages: u32,
    pub word_count: u32,
    pub language: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub category: &'static str,
    pub category_label: &'static str,
    pub confidence: f64,
    pub summary: String,
    pub entities: Vec<Entity>,
    pub key_phrases: Vec<&'static str>,
    pub metadata: DocumentMetadata,
    pub status: &'static str,
}

// ---- predictor ----

#[derive(Debug, Clone, Serialize)]
pub struct PredictedPoint {
    pub period: String,
    pub value: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub predictions: Vec<PredictedPoint>,
    pub accuracy: f64,
    pub mse: f64,
    pub trend: &'static str,
    pub change_percent: f64,
    pub chart_data: Vec<f64>,
    pub insights: Vec<String>,
    pub status: &'static str,
}

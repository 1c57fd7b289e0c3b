//! Mock object detection.

use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::models::{DetectRequest, DetectResponse, Detection, STATUS_SUCCESS};

// Fixed detections returned for any image.
const MOCK_DETECTIONS: [(&str, f64); 4] = [
    ("Persona", 0.95),
    ("Laptop", 0.89),
    ("Taza", 0.76),
    ("Teléfono", 0.82),
];

pub async fn detect_objects(
    Json(req): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, ApiError> {
    let image = req
        .image
        .filter(|i| !i.is_empty())
        .ok_or_else(|| ApiError::InvalidInput("No image provided".to_string()))?;

    info!("Detecting objects in {} bytes of image data (mock)", image.len());

    let detections: Vec<Detection> = MOCK_DETECTIONS
        .iter()
        .map(|&(label, confidence)| Detection { label, confidence })
        .collect();
    let count = detections.len();

    Ok(Json(DetectResponse {
        detections,
        count,
        status: STATUS_SUCCESS,
    }))
}

//! Mock document classification.

use axum::extract::Multipart;
use axum::Json;
use rand::Rng;
use tracing::info;

use crate::error::ApiError;
use crate::models::{DocumentMetadata, DocumentResponse, Entity, STATUS_SUCCESS};

// (category, Spanish display label) pairs; one is picked at random.
const CATEGORIES: [(&str, &str); 4] = [
    ("invoice", "Factura"),
    ("contract", "Contrato"),
    ("report", "Reporte"),
    ("letter", "Carta"),
];

const MOCK_ENTITIES: [(&str, &str); 4] = [
    ("Nombre", "Juan Pérez"),
    ("Empresa", "Adbize Corporation"),
    ("Fecha", "15 de Enero 2024"),
    ("Monto", "$5,000 USD"),
];

const MOCK_KEY_PHRASES: [&str; 3] = [
    "análisis de datos",
    "inteligencia artificial",
    "procesamiento de documentos",
];

pub async fn analyze_document(
    mut multipart: Multipart,
) -> Result<Json<DocumentResponse>, ApiError> {
    let mut document: Option<Vec<u8>> = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        if name.as_deref() == Some("document") {
            document = Some(field.bytes().await?.to_vec());
        }
    }

    let document =
        document.ok_or_else(|| ApiError::InvalidInput("No document provided".to_string()))?;

    let (category, category_label) = CATEGORIES[rand::thread_rng().gen_range(0..CATEGORIES.len())];
    info!(
        "Classified {} byte document as {} (mock)",
        document.len(),
        category
    );

    Ok(Json(DocumentResponse {
        category,
        category_label,
        confidence: 0.87,
        summary: format!(
            "Este documento ha sido clasificado como {}. Contiene información \
             relevante que ha sido analizada y procesada.",
            category_label
        ),
        entities: MOCK_ENTITIES
            .iter()
            .map(|&(entity_type, value)| Entity { entity_type, value })
            .collect(),
        key_phrases: MOCK_KEY_PHRASES.to_vec(),
        metadata: DocumentMetadata {
            pages: 3,
            word_count: 1250,
            language: "Español",
        },
        status: STATUS_SUCCESS,
    }))
}

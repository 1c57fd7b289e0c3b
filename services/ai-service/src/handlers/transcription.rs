//! Mock audio transcription.

use axum::extract::Multipart;
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::models::{AudioMetadata, TranscriptionResponse, STATUS_SUCCESS};

const MOCK_TRANSCRIPTION: &str = "\
Esta es una transcripción simulada del audio proporcionado.
En un sistema real, aquí aparecería el texto exacto extraído del audio utilizando
tecnologías como Whisper de OpenAI o Google Speech-to-Text.

El audio puede contener información sobre diversos temas, incluyendo conversaciones,
presentaciones, entrevistas o cualquier contenido de audio que necesite ser convertido a texto.";

const MOCK_SUMMARY: &str = "Resumen: Transcripción de audio simulada para propósitos de \
demostración. En producción, se usaría IA para generar un resumen preciso del contenido.";

pub async fn transcribe_audio(
    mut multipart: Multipart,
) -> Result<Json<TranscriptionResponse>, ApiError> {
    let mut audio: Option<Vec<u8>> = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        if name.as_deref() == Some("audio") {
            audio = Some(field.bytes().await?.to_vec());
        }
    }

    let audio =
        audio.ok_or_else(|| ApiError::InvalidInput("No audio file provided".to_string()))?;

    info!("Transcribing {} byte audio upload (mock)", audio.len());

    Ok(Json(TranscriptionResponse {
        transcription: MOCK_TRANSCRIPTION,
        summary: MOCK_SUMMARY,
        metadata: AudioMetadata {
            duration: "2:35",
            word_count: 89,
            language: "Español",
        },
        status: STATUS_SUCCESS,
    }))
}

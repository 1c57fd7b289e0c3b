pub mod document;
pub mod health;
pub mod predictor;
pub mod sentiment;
pub mod transcription;
pub mod vision;

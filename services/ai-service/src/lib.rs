use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

pub mod config;
pub mod error;
pub mod forecast;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod sentiment;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

pub fn create_app(config: Config) -> Router {
    let state = AppState { config };

    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Analysis endpoints
        .route("/api/vision/detect", post(handlers::vision::detect_objects))
        .route(
            "/api/sentiment/analyze",
            post(handlers::sentiment::analyze_sentiment),
        )
        .route(
            "/api/transcription/process",
            post(handlers::transcription::transcribe_audio),
        )
        .route(
            "/api/document/analyze",
            post(handlers::document::analyze_document),
        )
        .route(
            "/api/predictor/forecast",
            post(handlers::predictor::forecast_data),
        )
        // Middleware stack (order matters!)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::trace_layer())
                .layer(middleware::cors_layer()),
        )
        .with_state(state)
}

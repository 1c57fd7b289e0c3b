//! Mock time-series forecasting.

use axum::extract::Multipart;
use axum::Json;
use tracing::info;

use crate::error::ApiError;
use crate::forecast;
use crate::models::{ForecastResponse, STATUS_SUCCESS};

const DEFAULT_FORECAST_PERIODS: usize = 6;

pub async fn forecast_data(
    mut multipart: Multipart,
) -> Result<Json<ForecastResponse>, ApiError> {
    let mut data: Option<Vec<u8>> = None;
    let mut periods = DEFAULT_FORECAST_PERIODS;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("data") => data = Some(field.bytes().await?.to_vec()),
            Some("forecast") => {
                let raw = field.text().await?;
                periods = raw.trim().parse().map_err(|_| {
                    ApiError::InvalidInput(format!("invalid forecast period count: {}", raw))
                })?;
            }
            // dataType and period are accepted but unused by the mock.
            _ => {}
        }
    }

    let data = data.ok_or_else(|| ApiError::InvalidInput("No data file provided".to_string()))?;

    info!(
        "Forecasting {} periods from {} byte data upload (mock)",
        periods,
        data.len()
    );

    let forecast = forecast::generate(periods)?;

    Ok(Json(ForecastResponse {
        predictions: forecast.predictions,
        accuracy: forecast::MODEL_ACCURACY,
        mse: forecast::MODEL_MSE,
        trend: forecast.trend,
        change_percent: forecast.change_percent,
        chart_data: forecast.chart_data,
        insights: forecast.insights,
        status: STATUS_SUCCESS,
    }))
}

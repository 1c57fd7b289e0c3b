//! Mock time-series forecast generation.
//!
//! Produces a plausible-looking upward series with small random noise. No
//! model runs here; accuracy and error figures are fixed placeholders.

use rand::Rng;

use crate::error::ApiError;
use crate::models::PredictedPoint;

const BASE_VALUE: f64 = 1000.0;
const GROWTH_PER_PERIOD: f64 = 0.05;
const NOISE_RANGE: f64 = 0.02;

// Canned historical series shown before the predicted values in charts.
const HISTORICAL_VALUES: [f64; 6] = [800.0, 850.0, 920.0, 980.0, 1050.0, 1100.0];
const CHART_PREDICTED_POINTS: usize = 6;

pub const MODEL_ACCURACY: f64 = 0.85;
pub const MODEL_MSE: f64 = 12.5;

#[derive(Debug)]
pub struct Forecast {
    pub predictions: Vec<PredictedPoint>,
    pub trend: &'static str,
    pub change_percent: f64,
    pub chart_data: Vec<f64>,
    pub insights: Vec<String>,
}

/// Generates `periods` predicted points plus derived trend data.
pub fn generate(periods: usize) -> Result<Forecast, ApiError> {
    if periods == 0 {
        return Err(ApiError::InvalidInput(
            "forecast must be at least 1 period".to_string(),
        ));
    }

    let mut rng = rand::thread_rng();
    let mut predictions = Vec::with_capacity(periods);
    for i in 0..periods {
        let noise = rng.gen_range(-NOISE_RANGE..NOISE_RANGE);
        let value = BASE_VALUE * (1.0 + i as f64 * GROWTH_PER_PERIOD + noise);
        predictions.push(PredictedPoint {
            period: format!("Período {}", i + 1),
            value,
        });
    }

    let first = predictions[0].value;
    let last = predictions[periods - 1].value;
    let trend = if last > first { "up" } else { "down" };
    let change_percent = (last - first) / first * 100.0;

    let mut chart_data = HISTORICAL_VALUES.to_vec();
    chart_data.extend(
        predictions
            .iter()
            .take(CHART_PREDICTED_POINTS)
            .map(|p| p.value),
    );

    let direction = if trend == "up" { "alcista" } else { "bajista" };
    let insights = vec![
        format!("Se observa una tendencia {} en los datos", direction),
        format!("El cambio proyectado es de {:.1}%", change_percent.abs()),
        "Los valores históricos muestran patrones estacionales".to_string(),
        "Se recomienda revisar los datos en el próximo período".to_string(),
    ];

    Ok(Forecast {
        predictions,
        trend,
        change_percent,
        chart_data,
        insights,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_count_and_labels() {
        let forecast = generate(6).unwrap();
        assert_eq!(forecast.predictions.len(), 6);
        assert_eq!(forecast.predictions[0].period, "Período 1");
        assert_eq!(forecast.predictions[5].period, "Período 6");
    }

    #[test]
    fn test_values_stay_within_noise_bounds() {
        let forecast = generate(8).unwrap();
        for (i, p) in forecast.predictions.iter().enumerate() {
            let expected = BASE_VALUE * (1.0 + i as f64 * GROWTH_PER_PERIOD);
            let slack = BASE_VALUE * NOISE_RANGE;
            assert!(
                (p.value - expected).abs() <= slack,
                "period {} value {} outside expected {} ± {}",
                i + 1,
                p.value,
                expected,
                slack
            );
        }
    }

    #[test]
    fn test_chart_data_prepends_historical_series() {
        let forecast = generate(6).unwrap();
        assert_eq!(forecast.chart_data.len(), 12);
        assert_eq!(&forecast.chart_data[..6], &HISTORICAL_VALUES);
        assert_eq!(forecast.chart_data[6], forecast.predictions[0].value);
    }

    #[test]
    fn test_chart_data_caps_predicted_points() {
        let forecast = generate(10).unwrap();
        assert_eq!(forecast.chart_data.len(), 12);
    }

    #[test]
    fn test_short_forecast_truncates_chart_data() {
        let forecast = generate(2).unwrap();
        assert_eq!(forecast.chart_data.len(), 8);
    }

    #[test]
    fn test_trend_matches_change_direction() {
        // With 5% growth per period and ±2% noise, six periods always trend up.
        let forecast = generate(6).unwrap();
        assert_eq!(forecast.trend, "up");
        assert!(forecast.change_percent > 0.0);
    }

    #[test]
    fn test_insights_reflect_trend() {
        let forecast = generate(6).unwrap();
        assert_eq!(forecast.insights.len(), 4);
        assert!(forecast.insights[0].contains("alcista"));
        assert!(forecast.insights[1].contains('%'));
    }

    #[test]
    fn test_zero_periods_is_invalid_input() {
        let err = generate(0).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}

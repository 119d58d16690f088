// 🔮 Forecaster - Forward projection and insight summary
// Projects the fitted trend line past the historical window and condenses
// the window into the headline insights the cash-flow page renders.

use crate::regression::{LinearRegressionFitter, RegressionModel};
use crate::series::{DailyObservation, SeriesNormalizer, TimeSeriesPoint};
use crate::wage::round_currency;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

// ============================================================================
// RESULT RECORDS
// ============================================================================

/// One projected day past the historical window.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastPoint {
    pub day: usize,
    pub date: NaiveDate,
    pub predicted_amount: f64,
}

/// One historical day overlaid with the model's fitted value.
#[derive(Debug, Clone, Serialize)]
pub struct FittedPoint {
    pub day: usize,
    pub date: NaiveDate,
    pub actual_amount: f64,
    pub predicted_amount: f64,
    pub residual: f64,
    pub transaction_count: u32,
}

/// Direction of the fitted trend after the epsilon dead-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Flat,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Increasing => write!(f, "increasing"),
            Trend::Decreasing => write!(f, "decreasing"),
            Trend::Flat => write!(f, "flat"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Headline summary of the historical window.
#[derive(Debug, Clone, Serialize)]
pub struct Insights {
    pub trend: Trend,
    pub total_days: usize,
    pub total_amount: f64,
    pub total_transactions: u64,
    pub avg_amount_per_day: f64,
    pub avg_transactions_per_day: f64,
    pub min_daily_amount: f64,
    pub max_daily_amount: f64,
    pub date_range: DateRange,
}

/// Full result of one forecast request.
#[derive(Debug, Clone, Serialize)]
pub struct CashFlowReport {
    pub model: RegressionModel,
    pub insights: Insights,
    pub fitted: Vec<FittedPoint>,
    pub forecast_points: Vec<ForecastPoint>,
}

// ============================================================================
// FORECASTER
// ============================================================================

pub struct Forecaster {
    /// Slope magnitude below which the trend reads as flat. The default is
    /// one cent per day; without a dead-band, floating-point noise on a
    /// level series would classify as a trend.
    pub trend_epsilon: f64,
}

impl Forecaster {
    pub fn new() -> Self {
        Forecaster {
            trend_epsilon: 0.01,
        }
    }

    /// Project `horizon` days past the last historical day.
    ///
    /// The horizon bound (1–365) is the presentation layer's contract with
    /// the user; this method evaluates whatever it is handed. An empty
    /// historical window has no date to anchor to and projects nothing.
    pub fn project(
        &self,
        model: &RegressionModel,
        series: &[TimeSeriesPoint],
        horizon: usize,
    ) -> Vec<ForecastPoint> {
        let last = match series.last() {
            Some(p) => p,
            None => return Vec::new(),
        };

        (1..=horizon)
            .map(|offset| {
                let day = last.day + offset;
                ForecastPoint {
                    day,
                    date: last.date + Duration::days(offset as i64),
                    predicted_amount: round_currency(model.predict(day as f64)),
                }
            })
            .collect()
    }

    /// Overlay the model on the historical window.
    pub fn fitted(&self, model: &RegressionModel, series: &[TimeSeriesPoint]) -> Vec<FittedPoint> {
        series
            .iter()
            .map(|p| {
                let predicted = model.predict(p.day as f64);
                FittedPoint {
                    day: p.day,
                    date: p.date,
                    actual_amount: round_currency(p.amount),
                    predicted_amount: round_currency(predicted),
                    residual: round_currency(p.amount - predicted),
                    transaction_count: p.transaction_count,
                }
            })
            .collect()
    }

    /// Condense the window into the headline insights.
    pub fn insights(&self, model: &RegressionModel, series: &[TimeSeriesPoint]) -> Insights {
        let total_days = series.len();
        let total_amount: f64 = series.iter().map(|p| p.amount).sum();
        let total_transactions: u64 = series
            .iter()
            .map(|p| u64::from(p.transaction_count))
            .sum();

        let (avg_amount, avg_transactions) = if total_days > 0 {
            (
                total_amount / total_days as f64,
                total_transactions as f64 / total_days as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let min_daily = series
            .iter()
            .map(|p| p.amount)
            .fold(f64::INFINITY, f64::min);
        let max_daily = series
            .iter()
            .map(|p| p.amount)
            .fold(f64::NEG_INFINITY, f64::max);

        let trend = if model.weight > self.trend_epsilon {
            Trend::Increasing
        } else if model.weight < -self.trend_epsilon {
            Trend::Decreasing
        } else {
            Trend::Flat
        };

        Insights {
            trend,
            total_days,
            total_amount: round_currency(total_amount),
            total_transactions,
            avg_amount_per_day: round_currency(avg_amount),
            avg_transactions_per_day: round_currency(avg_transactions),
            min_daily_amount: if total_days > 0 {
                round_currency(min_daily)
            } else {
                0.0
            },
            max_daily_amount: if total_days > 0 {
                round_currency(max_daily)
            } else {
                0.0
            },
            date_range: DateRange {
                start: series.first().map(|p| p.date),
                end: series.last().map(|p| p.date),
            },
        }
    }
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Run the whole cash-flow pipeline: normalize → fit → project → summarize.
///
/// Pure and infallible, like the payroll pipeline: any input produces a
/// structurally complete report.
pub fn analyze_cash_flow(observations: &[DailyObservation], horizon: usize) -> CashFlowReport {
    let series = SeriesNormalizer::new().normalize(observations);
    let model = LinearRegressionFitter::new().fit(&series);
    let forecaster = Forecaster::new();

    let insights = forecaster.insights(&model, &series);
    let fitted = forecaster.fitted(&model, &series);
    let forecast_points = forecaster.project(&model, &series, horizon);

    CashFlowReport {
        model,
        insights,
        fitted,
        forecast_points,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn observations(amounts: &[f64]) -> Vec<DailyObservation> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        amounts
            .iter()
            .enumerate()
            .map(|(idx, &amount)| DailyObservation {
                date: (start + Duration::days(idx as i64)).to_string(),
                amount,
                transaction_count: 10,
            })
            .collect()
    }

    #[test]
    fn test_two_point_forecast_scenario() {
        // (1, 100), (2, 105) → weight 5, bias 95, day 3 forecast 110
        let report = analyze_cash_flow(&observations(&[100.0, 105.0]), 7);

        assert!((report.model.weight - 5.0).abs() < 1e-9);
        assert!((report.model.bias - 95.0).abs() < 1e-9);

        assert_eq!(report.forecast_points.len(), 7);
        assert_eq!(report.forecast_points[0].day, 3);
        assert_eq!(report.forecast_points[0].predicted_amount, 110.0);
        assert_eq!(report.forecast_points[0].date.to_string(), "2025-01-03");
        assert_eq!(report.forecast_points[6].day, 9);
        assert_eq!(report.forecast_points[6].predicted_amount, 140.0);
    }

    #[test]
    fn test_trend_classification() {
        let up = analyze_cash_flow(&observations(&[100.0, 110.0, 120.0]), 1);
        assert_eq!(up.insights.trend, Trend::Increasing);

        let down = analyze_cash_flow(&observations(&[120.0, 110.0, 100.0]), 1);
        assert_eq!(down.insights.trend, Trend::Decreasing);

        let flat = analyze_cash_flow(&observations(&[100.0, 100.0, 100.0]), 1);
        assert_eq!(flat.insights.trend, Trend::Flat);
    }

    #[test]
    fn test_epsilon_dead_band() {
        let forecaster = Forecaster::new();
        let model = RegressionModel {
            weight: 0.005,
            bias: 100.0,
            r_squared: 1.0,
            mse: 0.0,
            rmse: 0.0,
        };
        let series = SeriesNormalizer::new().normalize(&observations(&[100.0, 100.0]));

        // Slope below the default one-cent-per-day threshold reads as flat
        assert_eq!(forecaster.insights(&model, &series).trend, Trend::Flat);
    }

    #[test]
    fn test_insights_totals() {
        let report = analyze_cash_flow(&observations(&[100.0, 200.0, 300.0]), 1);
        let insights = &report.insights;

        assert_eq!(insights.total_days, 3);
        assert_eq!(insights.total_amount, 600.0);
        assert_eq!(insights.total_transactions, 30);
        assert_eq!(insights.avg_amount_per_day, 200.0);
        assert_eq!(insights.avg_transactions_per_day, 10.0);
        assert_eq!(insights.min_daily_amount, 100.0);
        assert_eq!(insights.max_daily_amount, 300.0);
        assert_eq!(insights.date_range.start.unwrap().to_string(), "2025-01-01");
        assert_eq!(insights.date_range.end.unwrap().to_string(), "2025-01-03");
    }

    #[test]
    fn test_fitted_overlay_residuals() {
        let report = analyze_cash_flow(&observations(&[100.0, 105.0]), 1);

        assert_eq!(report.fitted.len(), 2);
        assert_eq!(report.fitted[0].actual_amount, 100.0);
        assert_eq!(report.fitted[0].predicted_amount, 100.0);
        assert_eq!(report.fitted[0].residual, 0.0);
        assert_eq!(report.fitted[1].transaction_count, 10);
    }

    #[test]
    fn test_empty_window_report_is_complete() {
        let report = analyze_cash_flow(&[], 30);

        assert_eq!(report.model.weight, 0.0);
        assert_eq!(report.model.bias, 0.0);
        assert_eq!(report.insights.total_days, 0);
        assert_eq!(report.insights.total_amount, 0.0);
        assert_eq!(report.insights.min_daily_amount, 0.0);
        assert!(report.insights.date_range.start.is_none());
        assert!(report.fitted.is_empty());
        // No historical date to anchor to → nothing to project
        assert!(report.forecast_points.is_empty());
    }

    #[test]
    fn test_report_serializes_with_trend_string() {
        let report = analyze_cash_flow(&observations(&[100.0, 110.0]), 2);
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"trend\":\"increasing\""));
        assert!(json.contains("\"forecast_points\""));
    }
}

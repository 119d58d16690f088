// 📐 Linear Regression - Closed-form OLS fit over the historical window
// amount = bias + weight * day, solved with the normal equations. No
// gradient descent, no regularization. All degenerate inputs resolve to a
// defined model instead of an error.

use crate::series::TimeSeriesPoint;
use serde::Serialize;

// ============================================================================
// REGRESSION MODEL
// ============================================================================

/// Fitted trend line plus its goodness-of-fit metrics.
#[derive(Debug, Clone, Serialize)]
pub struct RegressionModel {
    /// Slope: change in amount per day
    pub weight: f64,

    /// Intercept at day 0
    pub bias: f64,

    /// Coefficient of determination, 0..=1
    pub r_squared: f64,

    /// Mean squared residual over the historical window
    pub mse: f64,

    /// sqrt(MSE), in the same unit as the amounts
    pub rmse: f64,
}

impl RegressionModel {
    /// Evaluate the fitted line at a day index.
    pub fn predict(&self, day: f64) -> f64 {
        self.bias + self.weight * day
    }
}

// ============================================================================
// FITTER
// ============================================================================

pub struct LinearRegressionFitter;

impl LinearRegressionFitter {
    pub fn new() -> Self {
        LinearRegressionFitter
    }

    /// Fit the trend line over the full historical window.
    ///
    /// weight = Σ(x−x̄)(y−ȳ) / Σ(x−x̄)², bias = ȳ − weight·x̄.
    /// R² = 1 − RSS/TSS; a constant series (TSS = 0) yields R² = 1 when the
    /// fit is exact and 0 otherwise, never a division by zero.
    ///
    /// Fewer than 2 points: regression is undefined, so the result is the
    /// degenerate model: zero slope, bias at the observed mean (0 for an
    /// empty window), all metrics 0.
    pub fn fit(&self, series: &[TimeSeriesPoint]) -> RegressionModel {
        let n = series.len();

        if n < 2 {
            let bias = series.first().map(|p| p.amount).unwrap_or(0.0);
            return RegressionModel {
                weight: 0.0,
                bias,
                r_squared: 0.0,
                mse: 0.0,
                rmse: 0.0,
            };
        }

        let n_f = n as f64;
        let mean_x = series.iter().map(|p| p.day as f64).sum::<f64>() / n_f;
        let mean_y = series.iter().map(|p| p.amount).sum::<f64>() / n_f;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for p in series {
            let dx = p.day as f64 - mean_x;
            sxx += dx * dx;
            sxy += dx * (p.amount - mean_y);
        }

        // Day indices are distinct, but guard anyway: a flat x-axis has no
        // defined slope
        let weight = if sxx > 0.0 { sxy / sxx } else { 0.0 };
        let bias = mean_y - weight * mean_x;

        let mut rss = 0.0;
        let mut tss = 0.0;
        for p in series {
            let residual = p.amount - (bias + weight * p.day as f64);
            rss += residual * residual;

            let dy = p.amount - mean_y;
            tss += dy * dy;
        }

        let r_squared = if tss > 0.0 {
            1.0 - rss / tss
        } else if rss == 0.0 {
            1.0
        } else {
            0.0
        };

        let mse = rss / n_f;

        RegressionModel {
            weight,
            bias,
            r_squared,
            mse,
            rmse: mse.sqrt(),
        }
    }
}

impl Default for LinearRegressionFitter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn series_from(amounts: &[f64]) -> Vec<TimeSeriesPoint> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        amounts
            .iter()
            .enumerate()
            .map(|(idx, &amount)| TimeSeriesPoint {
                day: idx + 1,
                date: start + chrono::Duration::days(idx as i64),
                amount,
                transaction_count: 1,
            })
            .collect()
    }

    #[test]
    fn test_perfect_linear_series() {
        // amount = 100 + 5 * day for day 1..30
        let amounts: Vec<f64> = (1..=30).map(|d| 100.0 + 5.0 * f64::from(d)).collect();
        let model = LinearRegressionFitter::new().fit(&series_from(&amounts));

        assert!((model.weight - 5.0).abs() < 1e-9);
        assert!((model.bias - 100.0).abs() < 1e-9);
        assert!((model.r_squared - 1.0).abs() < 1e-9);
        assert!(model.mse < 1e-9);
        assert!(model.rmse < 1e-9);
    }

    #[test]
    fn test_constant_series() {
        let model = LinearRegressionFitter::new().fit(&series_from(&[500.0; 10]));

        assert_eq!(model.weight, 0.0);
        assert_eq!(model.bias, 500.0);
        assert_eq!(model.r_squared, 1.0);
        assert_eq!(model.mse, 0.0);
    }

    #[test]
    fn test_two_point_series() {
        // (1, 100), (2, 105) → weight 5, bias 95
        let model = LinearRegressionFitter::new().fit(&series_from(&[100.0, 105.0]));

        assert!((model.weight - 5.0).abs() < 1e-9);
        assert!((model.bias - 95.0).abs() < 1e-9);
        assert!((model.predict(3.0) - 110.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let model = LinearRegressionFitter::new().fit(&series_from(&[250.0]));

        assert_eq!(model.weight, 0.0);
        assert_eq!(model.bias, 250.0);
        assert_eq!(model.r_squared, 0.0);
        assert_eq!(model.mse, 0.0);
        assert_eq!(model.rmse, 0.0);
    }

    #[test]
    fn test_empty_window_is_degenerate() {
        let model = LinearRegressionFitter::new().fit(&[]);

        assert_eq!(model.weight, 0.0);
        assert_eq!(model.bias, 0.0);
        assert_eq!(model.r_squared, 0.0);
    }

    #[test]
    fn test_noisy_series_metrics_are_sane() {
        // Up-trend with fixed alternating noise
        let amounts: Vec<f64> = (1..=20)
            .map(|d| 100.0 + 5.0 * f64::from(d) + if d % 2 == 0 { 10.0 } else { -10.0 })
            .collect();
        let model = LinearRegressionFitter::new().fit(&series_from(&amounts));

        assert!(model.weight > 4.0 && model.weight < 6.0);
        assert!(model.r_squared > 0.8 && model.r_squared < 1.0);
        assert!(model.mse > 0.0);
        assert!((model.rmse - model.mse.sqrt()).abs() < 1e-12);
    }
}

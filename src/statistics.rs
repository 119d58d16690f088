// 📈 Order Statistics - Quantiles, histograms, percentile curve
// All quantiles use linear interpolation between order statistics (the
// classic R-7 method), so q=0 is the minimum and q=1 the maximum.

use crate::wage::round_currency;
use serde::Serialize;

// ============================================================================
// QUANTILE
// ============================================================================

/// Value at fractional rank `q` (0..=1) within an ascending-sorted slice.
///
/// position = q * (n - 1); the result interpolates linearly between the two
/// adjacent order statistics. Returns NaN for an empty slice.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let position = (sorted.len() - 1) as f64 * q;
    let base = position.floor() as usize;
    let frac = position - base as f64;

    match sorted.get(base + 1) {
        Some(next) => sorted[base] + frac * (next - sorted[base]),
        None => sorted[base],
    }
}

// ============================================================================
// FIVE-NUMBER SUMMARY
// ============================================================================

/// min / p25 / median / p75 / max of one sorted wage list, pre-rounded for
/// display. NaN throughout when the list is empty.
#[derive(Debug, Clone, Serialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

pub fn five_number_summary(sorted: &[f64]) -> FiveNumberSummary {
    FiveNumberSummary {
        min: round_currency(quantile(sorted, 0.0)),
        p25: round_currency(quantile(sorted, 0.25)),
        median: round_currency(quantile(sorted, 0.5)),
        p75: round_currency(quantile(sorted, 0.75)),
        max: round_currency(quantile(sorted, 1.0)),
    }
}

// ============================================================================
// HISTOGRAM
// ============================================================================

const HISTOGRAM_BINS: usize = 10;

/// One half-open wage bucket. The theoretical maximum is clamped into the
/// last bin rather than overflowing past it.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Build exactly 10 contiguous bins over the sorted wage list.
///
/// Bin width is (max - min) / 10, or 1 when the list is constant so the
/// single value still lands in bin 0. Counts always sum to the input length.
pub fn histogram(sorted: &[f64]) -> Vec<HistogramBin> {
    let min = sorted.first().copied().unwrap_or(0.0);
    let max = sorted.last().copied().unwrap_or(0.0);
    let width = if max > min {
        (max - min) / HISTOGRAM_BINS as f64
    } else {
        1.0
    };

    let mut bins: Vec<HistogramBin> = (0..HISTOGRAM_BINS)
        .map(|i| HistogramBin {
            lower: round_currency(min + i as f64 * width),
            upper: round_currency(min + (i + 1) as f64 * width),
            count: 0,
        })
        .collect();

    for &wage in sorted {
        let slot = ((wage - min) / width).floor() as isize;
        let slot = slot.clamp(0, HISTOGRAM_BINS as isize - 1) as usize;
        bins[slot].count += 1;
    }

    bins
}

// ============================================================================
// PERCENTILE CURVE
// ============================================================================

/// One sample of the global wage distribution, every 5th percentile.
#[derive(Debug, Clone, Serialize)]
pub struct PercentilePoint {
    pub percentile: u8,
    pub wage: f64,
}

/// 21 samples from p0 to p100 inclusive. An empty batch degrades to a flat
/// zero curve rather than NaN so the chart still renders.
pub fn percentile_curve(sorted: &[f64]) -> Vec<PercentilePoint> {
    (0..=20)
        .map(|i| {
            let p = i * 5;
            let value = if sorted.is_empty() {
                0.0
            } else {
                quantile(sorted, f64::from(p) / 100.0)
            };
            PercentilePoint {
                percentile: p as u8,
                wage: round_currency(value),
            }
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

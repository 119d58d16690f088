// 📅 Series Normalization - Raw observations → contiguous daily series
// The regression fitter expects 1-based contiguous day indices; this module
// turns whatever the data-access layer hands over into that shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// RAW OBSERVATION
// ============================================================================

/// One raw cash-flow observation as fetched by the caller. Several
/// observations may share a calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyObservation {
    /// ISO-8601 calendar date ("2025-01-31"); MM/DD/YYYY is also accepted
    pub date: String,
    pub amount: f64,
    pub transaction_count: u32,
}

impl DailyObservation {
    pub fn new(date: &str, amount: f64, transaction_count: u32) -> Self {
        DailyObservation {
            date: date.to_string(),
            amount,
            transaction_count,
        }
    }
}

// ============================================================================
// TIME SERIES POINT
// ============================================================================

/// One normalized day of the historical window.
#[derive(Debug, Clone, Serialize)]
pub struct TimeSeriesPoint {
    /// 1-based, contiguous within the normalized series
    pub day: usize,
    pub date: NaiveDate,
    pub amount: f64,
    pub transaction_count: u32,
}

// ============================================================================
// SERIES NORMALIZER
// ============================================================================

pub struct SeriesNormalizer;

impl SeriesNormalizer {
    pub fn new() -> Self {
        SeriesNormalizer
    }

    /// Normalize raw observations into a regression-ready series:
    /// observations sharing a date are merged (amounts and counts summed),
    /// days are sorted ascending, and 1-based day indices assigned.
    /// Observations with an unparseable date are dropped in-band.
    pub fn normalize(&self, observations: &[DailyObservation]) -> Vec<TimeSeriesPoint> {
        let mut by_date: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();

        for obs in observations {
            let date = match parse_date(&obs.date) {
                Some(d) => d,
                None => continue,
            };
            let entry = by_date.entry(date).or_insert((0.0, 0));
            entry.0 += obs.amount;
            entry.1 += obs.transaction_count;
        }

        by_date
            .into_iter()
            .enumerate()
            .map(|(idx, (date, (amount, transaction_count)))| TimeSeriesPoint {
                day: idx + 1,
                date,
                amount,
                transaction_count,
            })
            .collect()
    }
}

impl Default for SeriesNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a date from string (supports YYYY-MM-DD and MM/DD/YYYY)
fn parse_date(date_str: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%m/%d/%Y") {
        return Some(date);
    }

    None
}

// ============================================================================
// TESTS
// ============================================================================

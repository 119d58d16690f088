// Payroll Insight - Core Library
// Aggregation and forecasting engine behind the payroll dashboard and the
// cash-flow page. Exposes all modules for use in the CLI, API hosts, and
// tests; everything here is a pure function of its input.

pub mod wage;
pub mod records;      // Raw employee rows + batch validation
pub mod aggregation;  // Per-department aggregates
pub mod statistics;   // Quantiles, histograms, percentile curve
pub mod ranking;      // Top earners, Pareto, data-quality counts
pub mod payroll;      // Assembled payroll report
pub mod series;       // Daily cash-flow normalization
pub mod regression;   // Closed-form OLS fit
pub mod forecast;     // Projection + insights
pub mod loader;       // File input (the fallible edge)
pub mod demo;         // Seeded fixtures

// Re-export commonly used types
pub use wage::{parse_wage, round_currency};
pub use records::{EmployeeRecord, RecordValidator, ValidatedRow, WageInput};
pub use aggregation::{DepartmentAggregate, DeptSortKey, GroupAggregator};
pub use statistics::{
    five_number_summary, histogram, percentile_curve, quantile, FiveNumberSummary, HistogramBin,
    PercentilePoint,
};
pub use ranking::{
    DuplicateRecipient, ParetoEntry, RankingBuilder, RankingSummary, RecipientCoverage, TopEarner,
    TopVsRest, WageValidityCounts,
};
pub use payroll::{analyze_payroll, PayrollReport};
pub use series::{DailyObservation, SeriesNormalizer, TimeSeriesPoint};
pub use regression::{LinearRegressionFitter, RegressionModel};
pub use forecast::{
    analyze_cash_flow, CashFlowReport, FittedPoint, ForecastPoint, Forecaster, Insights, Trend,
};
pub use loader::{load_daily_series_csv, load_employees, load_employees_csv, load_employees_json};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 📊 Payroll Report - Full analytics surface for one employee batch
// Assembles validation, grouping, order statistics and rankings into the
// single structured result the presentation layer renders.

use crate::aggregation::{DeptSortKey, GroupAggregator};
use crate::ranking::{
    DuplicateRecipient, ParetoEntry, RankingBuilder, RecipientCoverage, TopEarner, TopVsRest,
    WageValidityCounts,
};
use crate::records::{EmployeeRecord, RecordValidator};
use crate::statistics::{
    five_number_summary, histogram, percentile_curve, HistogramBin, PercentilePoint,
};
use crate::wage::round_currency;
use serde::Serialize;
use std::cmp::Ordering;

// ============================================================================
// VIEW ROWS
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct DeptTotal {
    pub department: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeptAverage {
    pub department: String,
    pub avg: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeptHeadcount {
    pub department: String,
    pub headcount: usize,
}

/// Pie-chart slice: department name and its share of total payroll.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollShare {
    pub name: String,
    pub value: f64,
}

/// Per-department wage spread (the "box plot table").
#[derive(Debug, Clone, Serialize)]
pub struct DeptBoxStats {
    pub department: String,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeptTopEarner {
    pub department: String,
    pub top_wage: f64,
}

/// One dot in the per-department outlier view.
#[derive(Debug, Clone, Serialize)]
pub struct WageScatterPoint {
    pub department: String,
    pub wage: f64,
    pub name: String,
}

// ============================================================================
// PAYROLL REPORT
// ============================================================================

/// Everything the dashboard needs, computed in one pass. Currency fields are
/// pre-rounded to 2 decimals; consumers must not re-round.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollReport {
    pub headcount: usize,
    pub total_payroll: f64,
    pub avg_wage: f64,

    pub total_by_dept: Vec<DeptTotal>,
    pub avg_by_dept: Vec<DeptAverage>,
    pub headcount_by_dept: Vec<DeptHeadcount>,
    pub payroll_share: Vec<PayrollShare>,
    pub dept_box_stats: Vec<DeptBoxStats>,

    pub histogram: Vec<HistogramBin>,
    pub percentile_curve: Vec<PercentilePoint>,
    pub top_vs_rest: TopVsRest,
    pub pareto: Vec<ParetoEntry>,
    pub top_earners: Vec<TopEarner>,
    pub dept_top_earner: Vec<DeptTopEarner>,
    pub wage_scatter_points: Vec<WageScatterPoint>,

    pub recipient_coverage: RecipientCoverage,
    pub duplicate_recipients: Vec<DuplicateRecipient>,
    pub wage_validity: WageValidityCounts,
}

/// Run the whole payroll pipeline over one employee batch.
///
/// Pure and infallible: any input, including the empty batch, produces a
/// structurally complete (if statistically degenerate) report.
pub fn analyze_payroll(records: &[EmployeeRecord]) -> PayrollReport {
    let validator = RecordValidator::new();
    let aggregator = GroupAggregator::new();
    let ranking = RankingBuilder::new();

    let rows = validator.validate(records);
    let valid_count = rows.iter().filter(|r| r.wage_valid).count();

    let total_payroll: f64 = rows
        .iter()
        .filter(|r| r.wage_valid)
        .map(|r| r.wage)
        .sum();
    let avg_wage = if valid_count > 0 {
        total_payroll / valid_count as f64
    } else {
        0.0
    };

    let groups = aggregator.aggregate(&rows);

    let total_by_dept = aggregator
        .sorted_by(&groups, DeptSortKey::TotalDesc)
        .into_iter()
        .map(|g| DeptTotal {
            department: g.department,
            total: round_currency(g.total),
        })
        .collect();

    let avg_by_dept = aggregator
        .sorted_by(&groups, DeptSortKey::AverageDesc)
        .into_iter()
        .map(|g| DeptAverage {
            department: g.department,
            avg: round_currency(g.avg),
        })
        .collect();

    let headcount_by_dept = aggregator
        .sorted_by(&groups, DeptSortKey::HeadcountDesc)
        .into_iter()
        .map(|g| DeptHeadcount {
            department: g.department,
            headcount: g.headcount,
        })
        .collect();

    let payroll_share = aggregator
        .sorted_by(&groups, DeptSortKey::TotalDesc)
        .into_iter()
        .map(|g| PayrollShare {
            name: g.department,
            value: round_currency(g.total),
        })
        .collect();

    let dept_box_stats = aggregator
        .sorted_by(&groups, DeptSortKey::TotalDesc)
        .into_iter()
        .map(|g| {
            let summary = five_number_summary(&g.wages);
            DeptBoxStats {
                department: g.department,
                min: summary.min,
                p25: summary.p25,
                median: summary.median,
                p75: summary.p75,
                max: summary.max,
            }
        })
        .collect();

    let dept_top_earner = aggregator
        .sorted_by(&groups, DeptSortKey::TopWageDesc)
        .into_iter()
        .map(|g| DeptTopEarner {
            department: g.department,
            top_wage: round_currency(g.max),
        })
        .collect();

    // Global sorted wage list feeds the histogram and the percentile curve
    let mut wages: Vec<f64> = rows
        .iter()
        .filter(|r| r.wage_valid)
        .map(|r| r.wage)
        .collect();
    wages.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let wage_scatter_points = rows
        .iter()
        .filter(|r| r.wage_valid)
        .map(|r| WageScatterPoint {
            department: r.department.clone(),
            wage: round_currency(r.wage),
            name: r.name.clone(),
        })
        .collect();

    let summary = ranking.build(&rows);

    PayrollReport {
        headcount: rows.len(),
        total_payroll: round_currency(total_payroll),
        avg_wage: round_currency(avg_wage),
        total_by_dept,
        avg_by_dept,
        headcount_by_dept,
        payroll_share,
        dept_box_stats,
        histogram: histogram(&wages),
        percentile_curve: percentile_curve(&wages),
        top_vs_rest: summary.top_vs_rest,
        pareto: summary.pareto,
        top_earners: summary.top_earners,
        dept_top_earner,
        wage_scatter_points,
        recipient_coverage: summary.recipient_coverage,
        duplicate_recipients: summary.duplicate_recipients,
        wage_validity: summary.wage_validity,
    }
}

// ============================================================================
// TESTS
// ============================================================================

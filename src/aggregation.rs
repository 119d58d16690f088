// 🏢 Group Aggregation - Per-department wage aggregates
// Groups are created lazily on first membership, so every aggregate that
// exists has headcount >= 1 and its average is always defined.

use crate::records::ValidatedRow;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

// ============================================================================
// DEPARTMENT AGGREGATE
// ============================================================================

/// One aggregate per distinct normalized department among wage-valid rows.
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentAggregate {
    pub department: String,
    pub headcount: usize,
    pub total: f64,
    pub min: f64,
    pub max: f64,
    pub avg: f64,

    /// Raw wages, sorted ascending, kept for quantile computation
    pub wages: Vec<f64>,
}

// ============================================================================
// SORT KEYS
// ============================================================================

/// Ordering requested by the consuming view. The aggregator itself imposes
/// no order; every presentation request names its own sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeptSortKey {
    /// Descending by total wage cost
    TotalDesc,
    /// Descending by average wage
    AverageDesc,
    /// Descending by headcount
    HeadcountDesc,
    /// Descending by highest single wage (top-earner view)
    TopWageDesc,
}

// ============================================================================
// GROUP AGGREGATOR
// ============================================================================

pub struct GroupAggregator;

impl GroupAggregator {
    pub fn new() -> Self {
        GroupAggregator
    }

    /// Partition wage-valid rows by department and fold each group into its
    /// aggregate. Rows with an invalid wage are skipped entirely. Output
    /// order is first-seen order of the department in the batch.
    pub fn aggregate(&self, rows: &[ValidatedRow]) -> Vec<DepartmentAggregate> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<DepartmentAggregate> = Vec::new();

        for row in rows.iter().filter(|r| r.wage_valid) {
            let slot = match index.get(&row.department) {
                Some(&i) => i,
                None => {
                    index.insert(row.department.clone(), groups.len());
                    groups.push(DepartmentAggregate {
                        department: row.department.clone(),
                        headcount: 0,
                        total: 0.0,
                        min: row.wage,
                        max: row.wage,
                        avg: 0.0,
                        wages: Vec::new(),
                    });
                    groups.len() - 1
                }
            };

            let group = &mut groups[slot];
            group.headcount += 1;
            group.total += row.wage;
            group.min = group.min.min(row.wage);
            group.max = group.max.max(row.wage);
            group.wages.push(row.wage);
        }

        for group in &mut groups {
            group
                .wages
                .sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
            // headcount >= 1 by construction
            group.avg = group.total / group.headcount as f64;
        }

        groups
    }

    /// Return a copy of the aggregates ordered by the requested sort key.
    /// Ties keep their first-seen relative order (stable sort).
    pub fn sorted_by(
        &self,
        groups: &[DepartmentAggregate],
        key: DeptSortKey,
    ) -> Vec<DepartmentAggregate> {
        let mut out = groups.to_vec();
        out.sort_by(|a, b| {
            let ord = match key {
                DeptSortKey::TotalDesc => b.total.partial_cmp(&a.total),
                DeptSortKey::AverageDesc => b.avg.partial_cmp(&a.avg),
                DeptSortKey::HeadcountDesc => Some(b.headcount.cmp(&a.headcount)),
                DeptSortKey::TopWageDesc => b.max.partial_cmp(&a.max),
            };
            ord.unwrap_or(Ordering::Equal)
        });
        out
    }
}

impl Default for GroupAggregator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

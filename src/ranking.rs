// 🏆 Ranking Builder - Top earners, Pareto series, data-quality counts
// Rankings run over wage-valid rows sorted descending by wage; duplicate
// detection and coverage counts deliberately scan ALL rows, valid or not.

use crate::records::ValidatedRow;
use crate::wage::round_currency;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

// ============================================================================
// RESULT RECORDS
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TopEarner {
    pub name: String,
    pub wage: f64,
}

/// One Pareto entry: rank-ordered wage plus the running cumulative share of
/// total payroll after this earner.
#[derive(Debug, Clone, Serialize)]
pub struct ParetoEntry {
    pub name: String,
    pub wage: f64,
    pub cumulative: f64,
    pub cumulative_pct: f64,
}

/// Two-bucket split of the payroll: the top-N earners vs everyone else.
#[derive(Debug, Clone, Serialize)]
pub struct TopVsRest {
    pub top: f64,
    pub rest: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DuplicateRecipient {
    pub recipient: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipientCoverage {
    pub present: usize,
    pub missing: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WageValidityCounts {
    pub valid: usize,
    pub invalid: usize,
}

/// Everything the ranking builder derives from one batch.
#[derive(Debug, Clone, Serialize)]
pub struct RankingSummary {
    pub top_earners: Vec<TopEarner>,
    pub pareto: Vec<ParetoEntry>,
    pub top_vs_rest: TopVsRest,
    pub duplicate_recipients: Vec<DuplicateRecipient>,
    pub recipient_coverage: RecipientCoverage,
    pub wage_validity: WageValidityCounts,
}

// ============================================================================
// RANKING BUILDER
// ============================================================================

pub struct RankingBuilder {
    /// Earners in the top list and the top-vs-rest split (default: 10)
    pub top_n: usize,

    /// Earners in the Pareto series (default: 15)
    pub pareto_n: usize,

    /// Max duplicate recipients reported (default: 10)
    pub duplicate_limit: usize,
}

impl RankingBuilder {
    pub fn new() -> Self {
        RankingBuilder {
            top_n: 10,
            pareto_n: 15,
            duplicate_limit: 10,
        }
    }

    /// Derive every ranking and data-quality count from one validated batch.
    pub fn build(&self, rows: &[ValidatedRow]) -> RankingSummary {
        let mut desc: Vec<&ValidatedRow> = rows.iter().filter(|r| r.wage_valid).collect();
        desc.sort_by(|a, b| b.wage.partial_cmp(&a.wage).unwrap_or(Ordering::Equal));

        let total_payroll: f64 = desc.iter().map(|r| r.wage).sum();

        RankingSummary {
            top_earners: self.top_earners(&desc),
            pareto: self.pareto(&desc, total_payroll),
            top_vs_rest: self.top_vs_rest(&desc),
            duplicate_recipients: self.duplicate_recipients(rows),
            recipient_coverage: self.recipient_coverage(rows),
            wage_validity: self.wage_validity(rows),
        }
    }

    fn top_earners(&self, desc: &[&ValidatedRow]) -> Vec<TopEarner> {
        desc.iter()
            .take(self.top_n)
            .map(|r| TopEarner {
                name: r.name.clone(),
                wage: round_currency(r.wage),
            })
            .collect()
    }

    /// Cumulative percentage is 0 when total payroll is 0; the series is
    /// still emitted so the chart renders.
    fn pareto(&self, desc: &[&ValidatedRow], total_payroll: f64) -> Vec<ParetoEntry> {
        let mut cumulative = 0.0;

        desc.iter()
            .take(self.pareto_n)
            .enumerate()
            .map(|(idx, r)| {
                cumulative += r.wage;
                let pct = if total_payroll > 0.0 {
                    cumulative / total_payroll * 100.0
                } else {
                    0.0
                };
                let name = if r.name.is_empty() {
                    format!("Emp {}", idx + 1)
                } else {
                    r.name.clone()
                };
                ParetoEntry {
                    name,
                    wage: round_currency(r.wage),
                    cumulative: round_currency(cumulative),
                    cumulative_pct: round_currency(pct),
                }
            })
            .collect()
    }

    fn top_vs_rest(&self, desc: &[&ValidatedRow]) -> TopVsRest {
        let top: f64 = desc.iter().take(self.top_n).map(|r| r.wage).sum();
        let rest: f64 = desc.iter().skip(self.top_n).map(|r| r.wage).sum();
        TopVsRest {
            top: round_currency(top),
            rest: round_currency(rest),
        }
    }

    /// Count occurrences of each non-empty recipient across ALL rows, then
    /// report the first `duplicate_limit` recipients (in first-seen order)
    /// that appear more than once.
    fn duplicate_recipients(&self, rows: &[ValidatedRow]) -> Vec<DuplicateRecipient> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for row in rows {
            if row.recipient.is_empty() {
                continue;
            }
            let entry = counts.entry(row.recipient.as_str()).or_insert(0);
            if *entry == 0 {
                first_seen.push(row.recipient.as_str());
            }
            *entry += 1;
        }

        first_seen
            .into_iter()
            .filter(|recipient| counts[recipient] > 1)
            .take(self.duplicate_limit)
            .map(|recipient| DuplicateRecipient {
                recipient: recipient.to_string(),
                count: counts[recipient],
            })
            .collect()
    }

    fn recipient_coverage(&self, rows: &[ValidatedRow]) -> RecipientCoverage {
        let present = rows.iter().filter(|r| !r.recipient.is_empty()).count();
        RecipientCoverage {
            present,
            missing: rows.len() - present,
        }
    }

    fn wage_validity(&self, rows: &[ValidatedRow]) -> WageValidityCounts {
        let valid = rows.iter().filter(|r| r.wage_valid).count();
        WageValidityCounts {
            valid,
            invalid: rows.len() - valid,
        }
    }
}

impl Default for RankingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

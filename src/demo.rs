// 🎲 Demo Data - Seeded fixtures for the CLI demo mode and tests
// Ported from the dashboard's mock generator: 60 days of cash flow around a
// rising trend, plus a small employee roster with deliberate data-quality
// flaws. Seeded so every run (and every test) sees identical data.

use crate::records::{EmployeeRecord, WageInput};
use crate::series::DailyObservation;
use crate::wage::round_currency;
use chrono::{Duration, NaiveDate};

// ============================================================================
// SEEDED GENERATOR
// ============================================================================

/// Minimal linear-congruential generator. Not statistically serious; it
/// only has to make demo data repeatable without pulling in a rand stack.
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next_state(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Uniform in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        (self.next_state() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [0, bound)
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }
}

// ============================================================================
// CASH-FLOW FIXTURE
// ============================================================================

/// Daily observations following `1000 + 5 * day` with bounded noise, the
/// same shape the original dashboard mocked for its forecast page.
pub fn demo_series(start: NaiveDate, days: usize, seed: u64) -> Vec<DailyObservation> {
    let mut rng = Lcg::new(seed);
    let base = 1000.0;
    let trend = 5.0;

    (0..days)
        .map(|i| {
            let predicted = base + trend * (i as f64 + 1.0) + rng.next_f64() * 50.0;
            let actual = predicted + (rng.next_f64() - 0.5) * 200.0;
            let transaction_count = (rng.next_f64() * 20.0) as u32 + 5;

            DailyObservation {
                date: (start + Duration::days(i as i64)).to_string(),
                amount: round_currency(actual),
                transaction_count,
            }
        })
        .collect()
}

// ============================================================================
// EMPLOYEE FIXTURE
// ============================================================================

const FIRST_NAMES: &[&str] = &[
    "Ada", "Max", "Rosa", "Ivan", "Mei", "Leo", "Nina", "Omar", "Vera", "Sam",
];
const LAST_NAMES: &[&str] = &[
    "Alvarez", "Brandt", "Chen", "Diallo", "Eriksen", "Fujita", "Gomez", "Haas",
];
const DEPARTMENTS: &[&str] = &["Engineering", "Sales", "Operations", "Finance", ""];

/// Roster with realistic flaws: one duplicate recipient, one missing
/// recipient, one unparseable wage, one empty department.
pub fn demo_employees(count: usize, seed: u64) -> Vec<EmployeeRecord> {
    let mut rng = Lcg::new(seed);

    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[rng.next_index(FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.next_index(LAST_NAMES.len())];
            let department = DEPARTMENTS[rng.next_index(DEPARTMENTS.len())];

            let recipient = match i % 9 {
                // A recipient reused across two records
                0 => "@shared".to_string(),
                // A record with no payment handle at all
                4 => String::new(),
                _ => format!("@{}{}", first.to_lowercase(), i),
            };

            let wage = if i % 11 == 7 {
                WageInput::Text("pending review".to_string())
            } else {
                let amount = 1800.0 + rng.next_f64() * 4200.0;
                WageInput::Text(format!("${:.2}", amount))
            };

            EmployeeRecord {
                id: Some(format!("emp-{:03}", i + 1)),
                first_name: first.to_string(),
                last_name: last.to_string(),
                recipient,
                wage,
                department: department.to_string(),
            }
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

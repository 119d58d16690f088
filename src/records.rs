// 🧾 Employee Records - Raw input rows and batch validation
// One ValidatedRow per input record; the batch is rebuilt fresh on every
// aggregation pass and the input is never mutated.

use crate::wage::parse_wage;
use serde::{Deserialize, Serialize};

// ============================================================================
// RAW INPUT
// ============================================================================

/// Wage as it arrives from the data-access layer.
///
/// The upstream record shapes disagree: one variant stores a numeric wage,
/// the other a free-text salary with currency decoration. Both deserialize
/// into this enum; the engine only ever sees a plain decimal quantity and
/// leaves currency symbols to the display layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WageInput {
    Number(f64),
    Text(String),
}

impl WageInput {
    /// Resolve to a decimal amount. Text goes through the wage parser;
    /// anything unparseable is NaN, never an error.
    pub fn as_amount(&self) -> f64 {
        match self {
            WageInput::Number(n) => *n,
            WageInput::Text(s) => parse_wage(s),
        }
    }
}

impl From<f64> for WageInput {
    fn from(n: f64) -> Self {
        WageInput::Number(n)
    }
}

impl From<&str> for WageInput {
    fn from(s: &str) -> Self {
        WageInput::Text(s.to_string())
    }
}

/// EmployeeRecord - one payroll row as fetched by the caller.
///
/// Immutable for the duration of one aggregation pass. The identifier is
/// absent for records that have not been persisted yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    /// Payment handle (e.g. "@maria"). May be empty.
    #[serde(default)]
    pub recipient: String,

    /// Numeric wage or decorated string ("$2,500.00")
    pub wage: WageInput,

    /// May be empty → normalized to the unassigned label
    #[serde(default)]
    pub department: String,
}

// ============================================================================
// VALIDATED ROW
// ============================================================================

/// ValidatedRow - one normalized row per input record.
///
/// `wage_valid` gates membership in every monetary aggregate; rows with an
/// invalid wage still participate in recipient coverage and duplicate
/// detection.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedRow {
    /// Stable key within the batch: id, or `recipient-index` for
    /// not-yet-persisted records
    pub key: String,

    pub name: String,

    /// Trimmed recipient handle (empty = missing)
    pub recipient: String,

    /// Never empty after normalization
    pub department: String,

    /// Parsed wage; NaN when unparseable
    pub wage: f64,

    /// Finite and strictly positive
    pub wage_valid: bool,
}

// ============================================================================
// RECORD VALIDATOR
// ============================================================================

/// Normalizes a raw employee batch into validated rows.
pub struct RecordValidator {
    /// Label substituted for an empty department (default: "Unassigned")
    pub unassigned_label: String,
}

impl RecordValidator {
    pub fn new() -> Self {
        RecordValidator {
            unassigned_label: "Unassigned".to_string(),
        }
    }

    /// Validate a batch. Produces a new sequence; the input is untouched.
    ///
    /// Key synthesis: the record id when present, else
    /// `{recipient}-{index}` ("emp-{index}" when the recipient is empty),
    /// which is unique within one batch even for records without ids.
    pub fn validate(&self, records: &[EmployeeRecord]) -> Vec<ValidatedRow> {
        records
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let wage = record.wage.as_amount();
                let recipient = record.recipient.trim().to_string();

                let key = match &record.id {
                    Some(id) if !id.is_empty() => id.clone(),
                    _ => {
                        let handle = if recipient.is_empty() {
                            "emp"
                        } else {
                            recipient.as_str()
                        };
                        format!("{}-{}", handle, idx)
                    }
                };

                let department = {
                    let trimmed = record.department.trim();
                    if trimmed.is_empty() {
                        self.unassigned_label.clone()
                    } else {
                        trimmed.to_string()
                    }
                };

                let name = format!("{} {}", record.first_name, record.last_name)
                    .trim()
                    .to_string();

                ValidatedRow {
                    key,
                    name,
                    recipient,
                    department,
                    wage,
                    wage_valid: wage.is_finite() && wage > 0.0,
                }
            })
            .collect()
    }
}

impl Default for RecordValidator {
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

    fn record(
        id: Option<&str>,
        first: &str,
        last: &str,
        recipient: &str,
        wage: WageInput,
        department: &str,
    ) -> EmployeeRecord {
        EmployeeRecord {
            id: id.map(|s| s.to_string()),
            first_name: first.to_string(),
            last_name: last.to_string(),
            recipient: recipient.to_string(),
            wage,
            department: department.to_string(),
        }
    }

    #[test]
    fn test_numeric_wage_passes_through() {
        let rows = RecordValidator::new().validate(&[record(
            Some("e1"),
            "Ada",
            "Lovelace",
            "@ada",
            WageInput::Number(2500.0),
            "Engineering",
        )]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "e1");
        assert_eq!(rows[0].name, "Ada Lovelace");
        assert_eq!(rows[0].wage, 2500.0);
        assert!(rows[0].wage_valid);
    }

    #[test]
    fn test_text_wage_is_parsed() {
        let rows = RecordValidator::new().validate(&[record(
            None,
            "Max",
            "Planck",
            "@max",
            WageInput::from("$1,234.56"),
            "Research",
        )]);

        assert_eq!(rows[0].wage, 1234.56);
        assert!(rows[0].wage_valid);
    }

    #[test]
    fn test_unparseable_wage_is_invalid_not_error() {
        let rows = RecordValidator::new().validate(&[record(
            None,
            "No",
            "Wage",
            "@nw",
            WageInput::from("abc"),
            "Sales",
        )]);

        assert!(rows[0].wage.is_nan());
        assert!(!rows[0].wage_valid);
    }

    #[test]
    fn test_zero_and_negative_wages_are_invalid() {
        let validator = RecordValidator::new();
        let rows = validator.validate(&[
            record(None, "Zero", "Pay", "@z", WageInput::Number(0.0), "Ops"),
            record(None, "Neg", "Pay", "@n", WageInput::Number(-100.0), "Ops"),
        ]);

        assert!(!rows[0].wage_valid);
        assert!(!rows[1].wage_valid);
    }

    #[test]
    fn test_key_fallback_for_unpersisted_records() {
        let validator = RecordValidator::new();
        let rows = validator.validate(&[
            record(None, "A", "A", "@a", WageInput::Number(1.0), "X"),
            record(None, "B", "B", "", WageInput::Number(1.0), "X"),
            record(Some(""), "C", "C", "@c", WageInput::Number(1.0), "X"),
        ]);

        assert_eq!(rows[0].key, "@a-0");
        assert_eq!(rows[1].key, "emp-1");
        // Empty-string id counts as absent
        assert_eq!(rows[2].key, "@c-2");
    }

    #[test]
    fn test_empty_department_defaults_to_unassigned() {
        let rows = RecordValidator::new().validate(&[record(
            None,
            "D",
            "D",
            "@d",
            WageInput::Number(1.0),
            "   ",
        )]);

        assert_eq!(rows[0].department, "Unassigned");
    }

    #[test]
    fn test_recipient_is_trimmed() {
        let rows = RecordValidator::new().validate(&[record(
            None,
            "E",
            "E",
            "  @e  ",
            WageInput::Number(1.0),
            "X",
        )]);

        assert_eq!(rows[0].recipient, "@e");
    }
}

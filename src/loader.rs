// 📂 Input Loading - Employee batches and daily series from disk
// The only fallible edge of the crate: the engine itself never errors, but
// files can be missing or malformed, so everything here returns Result.

use crate::records::{EmployeeRecord, WageInput};
use crate::series::DailyObservation;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// ============================================================================
// EMPLOYEES
// ============================================================================

/// Load an employee batch, dispatching on file extension:
/// `.json` → JSON array, anything else → CSV.
pub fn load_employees(path: &Path) -> Result<Vec<EmployeeRecord>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_employees_json(path),
        _ => load_employees_csv(path),
    }
}

/// JSON array of employee objects, the shape the dashboard mock data uses:
/// `[{"id": "...", "first_name": "...", "wage": 2500 | "$2,500.00", ...}]`
pub fn load_employees_json(path: &Path) -> Result<Vec<EmployeeRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let reader = BufReader::new(file);
    let records: Vec<EmployeeRecord> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse employee JSON from {}", path.display()))?;

    Ok(records)
}

/// CSV with header `id,first_name,last_name,recipient,wage,department`.
/// Wage stays textual; the engine's own parser handles any decoration.
pub fn load_employees_csv(path: &Path) -> Result<Vec<EmployeeRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let mut records = Vec::new();
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown.csv")
        .to_string();

    for (line_num, result) in reader.records().enumerate() {
        let record = result.with_context(|| {
            format!("Failed to parse CSV line {} in {}", line_num + 2, filename)
        })?;

        let id = record.get(0).unwrap_or("").trim().to_string();

        records.push(EmployeeRecord {
            id: if id.is_empty() { None } else { Some(id) },
            first_name: record.get(1).unwrap_or("").to_string(),
            last_name: record.get(2).unwrap_or("").to_string(),
            recipient: record.get(3).unwrap_or("").to_string(),
            wage: WageInput::Text(record.get(4).unwrap_or("").to_string()),
            department: record.get(5).unwrap_or("").to_string(),
        });
    }

    Ok(records)
}

// ============================================================================
// DAILY SERIES
// ============================================================================

/// CSV with header `date,amount,transaction_count`, one row per observation.
/// Unparseable amounts fall back to 0; unparseable dates are dropped later
/// by the series normalizer.
pub fn load_daily_series_csv(path: &Path) -> Result<Vec<DailyObservation>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let mut observations = Vec::new();
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown.csv")
        .to_string();

    for (line_num, result) in reader.records().enumerate() {
        let record = result.with_context(|| {
            format!("Failed to parse CSV line {} in {}", line_num + 2, filename)
        })?;

        let amount_str = record.get(1).unwrap_or("");
        let amount = amount_str.trim().parse::<f64>().unwrap_or_else(|_| {
            // Try removing commas
            amount_str.replace(',', "").trim().parse::<f64>().unwrap_or(0.0)
        });

        let transaction_count = record
            .get(2)
            .unwrap_or("")
            .trim()
            .parse::<u32>()
            .unwrap_or(0);

        observations.push(DailyObservation {
            date: record.get(0).unwrap_or("").trim().to_string(),
            amount,
            transaction_count,
        });
    }

    Ok(observations)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_employees_json_mixed_wages() {
        let path = temp_file(
            "payroll_insight_employees.json",
            r#"[
                {"id": "e1", "first_name": "Ada", "last_name": "Lovelace",
                 "recipient": "@ada", "wage": 2500, "department": "Eng"},
                {"first_name": "Max", "last_name": "Planck",
                 "recipient": "@max", "wage": "$1,234.56", "department": ""}
            ]"#,
        );

        let records = load_employees_json(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_deref(), Some("e1"));
        assert_eq!(records[0].wage.as_amount(), 2500.0);
        assert!(records[1].id.is_none());
        assert_eq!(records[1].wage.as_amount(), 1234.56);
    }

    #[test]
    fn test_load_employees_csv() {
        let path = temp_file(
            "payroll_insight_employees.csv",
            "id,first_name,last_name,recipient,wage,department\n\
             e1,Ada,Lovelace,@ada,\"$2,500.00\",Eng\n\
             ,Max,Planck,@max,abc,Sales\n",
        );

        let records = load_employees_csv(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].wage.as_amount(), 2500.0);
        assert!(records[1].id.is_none());
        assert!(records[1].wage.as_amount().is_nan());
    }

    #[test]
    fn test_load_daily_series_csv() {
        let path = temp_file(
            "payroll_insight_series.csv",
            "date,amount,transaction_count\n\
             2025-01-01,\"1,250.50\",12\n\
             2025-01-02,980.25,8\n",
        );

        let observations = load_daily_series_csv(&path).unwrap();

        assert_eq!(observations.len(), 2);
        assert_eq!(observations[0].amount, 1250.5);
        assert_eq!(observations[0].transaction_count, 12);
        assert_eq!(observations[1].date, "2025-01-02");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load_employees(Path::new("/nonexistent/employees.json"));
        assert!(result.is_err());
    }
}

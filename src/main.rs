use anyhow::{bail, Result};
use chrono::NaiveDate;
use std::env;
use std::path::Path;

use payroll_insight::{
    analyze_cash_flow, analyze_payroll, demo, load_daily_series_csv, load_employees,
};

// Application-level bound on the forecast horizon; the engine itself does
// not bound-check, that is this layer's contract with the user.
const MIN_HORIZON: usize = 1;
const MAX_HORIZON: usize = 365;
const DEFAULT_HORIZON: usize = 30;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("payroll") => run_payroll(&args[2..]),
        Some("cashflow") => run_cashflow(&args[2..]),
        Some("demo") => run_demo(&args[2..]),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    println!("payroll-insight {}", payroll_insight::VERSION);
    println!();
    println!("Usage:");
    println!("  payroll-insight payroll <employees.json|employees.csv>");
    println!("  payroll-insight cashflow <daily_series.csv> [horizon_days]");
    println!("  payroll-insight demo [horizon_days]");
    println!();
    println!("Reports are printed to stdout as JSON.");
}

fn run_payroll(args: &[String]) -> Result<()> {
    let path = match args.first() {
        Some(p) => Path::new(p),
        None => bail!("payroll mode needs an input file (JSON or CSV)"),
    };

    println!("📊 Loading employees from {}...", path.display());
    let records = load_employees(path)?;
    println!("✓ Loaded {} employee records", records.len());

    let report = analyze_payroll(&records);
    println!(
        "✓ Analyzed: {} valid wages, {} invalid, total payroll ${:.2}",
        report.wage_validity.valid, report.wage_validity.invalid, report.total_payroll
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_cashflow(args: &[String]) -> Result<()> {
    let path = match args.first() {
        Some(p) => Path::new(p),
        None => bail!("cashflow mode needs an input file (CSV)"),
    };
    let horizon = parse_horizon(args.get(1))?;

    println!("💰 Loading daily series from {}...", path.display());
    let observations = load_daily_series_csv(path)?;
    println!("✓ Loaded {} observations", observations.len());

    let report = analyze_cash_flow(&observations, horizon);
    println!(
        "✓ Fitted: weight {:.4}, bias {:.2}, R² {:.4}; trend {}",
        report.model.weight, report.model.bias, report.model.r_squared, report.insights.trend
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_demo(args: &[String]) -> Result<()> {
    let horizon = parse_horizon(args.first())?;

    println!("🎲 Generating seeded demo data...");
    let roster = demo::demo_employees(40, 42);
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid demo start date");
    let series = demo::demo_series(start, 60, 42);
    println!(
        "✓ Generated {} employees and {} days of cash flow",
        roster.len(),
        series.len()
    );

    let payroll_report = analyze_payroll(&roster);
    let cash_flow_report = analyze_cash_flow(&series, horizon);

    println!(
        "✓ Payroll: headcount {}, total ${:.2}, avg ${:.2}",
        payroll_report.headcount, payroll_report.total_payroll, payroll_report.avg_wage
    );
    println!(
        "✓ Cash flow: trend {}, {} forecast days",
        cash_flow_report.insights.trend,
        cash_flow_report.forecast_points.len()
    );

    println!("{}", serde_json::to_string_pretty(&payroll_report)?);
    println!("{}", serde_json::to_string_pretty(&cash_flow_report)?);
    Ok(())
}

fn parse_horizon(arg: Option<&String>) -> Result<usize> {
    let horizon = match arg {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| anyhow::anyhow!("forecast horizon must be a number, got '{}'", raw))?,
        None => DEFAULT_HORIZON,
    };

    if !(MIN_HORIZON..=MAX_HORIZON).contains(&horizon) {
        bail!(
            "forecast horizon must be between {} and {} days, got {}",
            MIN_HORIZON,
            MAX_HORIZON,
            horizon
        );
    }

    Ok(horizon)
}

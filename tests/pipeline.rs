use std::str::FromStr;

use ledger_breakdown::config::Settings;
use ledger_breakdown::models::{Money, RawRecord, ReportingMonth, Transaction};
use ledger_breakdown::reports::BreakdownReport;
use ledger_breakdown::services::{aggregate, categorize, working_hours, ImportService};
use ledger_breakdown::BreakdownError;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn money(s: &str) -> Money {
    Money::from_decimal(dec(s))
}

fn scenario() -> Vec<Transaction> {
    vec![
        Transaction::new("A", "Cross Charge:Consulting", money("100.00"), "03 March"),
        Transaction::new("A", "Travel:Flights", money("-40.00"), "03 March"),
        Transaction::new("B", "Travel:Hotels", money("-60.00"), "03 March"),
    ]
}

fn report_over(transactions: &[Transaction], hours: &str) -> BreakdownReport {
    let categorized = categorize(transactions).unwrap();
    let aggregates = aggregate(&categorized);
    BreakdownReport::assemble(&aggregates, ReportingMonth::new(2023, 3).unwrap(), dec(hours))
        .unwrap()
}

#[test]
fn two_person_scenario_at_160_hours() {
    let report = report_over(&scenario(), "160");

    assert_eq!(report.revenue["A"], money("100.00"));
    assert_eq!(report.revenue["B"], Money::zero());
    assert_eq!(report.expenses["A"], money("-40.00"));
    assert_eq!(report.expenses["B"], money("-60.00"));
    assert_eq!(report.detailed_expenses["Travel"]["A"], money("-40.00"));
    assert_eq!(report.detailed_expenses["Travel"]["B"], money("-60.00"));
    assert_eq!(report.net_revenue["A"], money("60.00"));
    assert_eq!(report.net_revenue["B"], money("-60.00"));
    assert_eq!(report.hourly_expenses["A"], money("0.25"));
    assert_eq!(report.hourly_expenses["B"], money("0.375"));
    assert_eq!(report.total_revenue, money("100.00"));
    assert_eq!(report.total_expenses, money("-100.00"));
    assert_eq!(report.profit_loss, Money::zero());
    assert_eq!(report.expense_categories, vec!["Travel".to_string()]);
    assert!(report.check_consistency().is_ok());
}

#[test]
fn revenue_only_person_is_zero_filled_but_absent_from_expenses() {
    let transactions = vec![
        Transaction::new("C", "Cross Charge:Fee", money("50.00"), "03 March"),
        Transaction::new("D", "Meals:Team", money("-10.00"), "03 March"),
    ];
    let report = report_over(&transactions, "160");

    assert_eq!(report.people, vec!["C".to_string(), "D".to_string()]);
    assert_eq!(report.revenue["D"], Money::zero());
    assert_eq!(report.net_revenue["C"], money("50.00"));
    assert!(!report.expenses.contains_key("C"));
    assert!(!report.hourly_expenses.contains_key("C"));
}

#[test]
fn positive_non_cross_charge_rows_are_ignored() {
    let transactions = vec![
        Transaction::new("A", "Refund:Travel", money("30.00"), "03 March"),
        Transaction::new("A", "Travel:Flights", money("-40.00"), "03 March"),
    ];
    let report = report_over(&transactions, "160");

    assert_eq!(report.revenue["A"], Money::zero());
    assert_eq!(report.expenses["A"], money("-40.00"));
    assert_eq!(report.expense_categories, vec!["Travel".to_string()]);
}

#[test]
fn empty_category_is_rejected() {
    let transactions = vec![Transaction::new("A", ":Flights", money("-1.00"), "03 March")];
    let err = categorize(&transactions).unwrap_err();
    assert!(err.is_empty_category());
}

#[test]
fn zero_hours_is_division_by_zero() {
    let categorized = categorize(&scenario()).unwrap();
    let aggregates = aggregate(&categorized);
    let err = BreakdownReport::assemble(
        &aggregates,
        ReportingMonth::new(2023, 3).unwrap(),
        Decimal::ZERO,
    )
    .unwrap_err();
    assert!(matches!(err, BreakdownError::DivisionByZero));
}

#[test]
fn february_2024_has_168_hours() {
    assert_eq!(working_hours(2024, 2).unwrap(), Decimal::from(168));
    assert_eq!(working_hours(2023, 3).unwrap(), Decimal::from(184));
}

#[test]
fn report_generation_is_idempotent() {
    let month = ReportingMonth::new(2024, 2).unwrap();
    let first = BreakdownReport::generate(&scenario(), month).unwrap();
    let second = BreakdownReport::generate(&scenario(), month).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.total_working_hours, Decimal::from(168));
}

#[test]
fn csv_ingestion_drops_sentinels_and_reports() {
    let csv = "\
AP Period,Name,Account Name,Amount
01 January,A,Cross Charge:Consulting,\"$1,000.00\"
01 January,A,Meals:Team,(25.50)
01 January TOTAL,,,974.50
GRAND TOTAL,,,974.50
";
    let settings = Settings::default();
    let records: Vec<RawRecord> = ImportService::new(settings.columns.clone())
        .parse_csv_from_bytes(csv.as_bytes())
        .unwrap();
    assert_eq!(records.len(), 4);

    let transactions = settings.normalizer().normalize(&records).unwrap();
    assert_eq!(transactions.len(), 2);

    let report =
        BreakdownReport::generate(&transactions, ReportingMonth::new(2024, 1).unwrap()).unwrap();
    assert_eq!(report.total_revenue, money("1000.00"));
    assert_eq!(report.total_expenses, money("-25.50"));
    assert_eq!(report.profit_loss, money("974.50"));
}

#[test]
fn malformed_amount_reports_row() {
    let records = vec![RawRecord::new(7, "03 March", "A", "Travel:Flights", "twelve")];
    let err = Settings::default()
        .normalizer()
        .normalize(&records)
        .unwrap_err();
    assert!(err.is_malformed_amount());
    assert!(err.to_string().contains("row 7"));
}

#[test]
fn largest_accepted_amounts_render_without_overflow() {
    let records: Vec<RawRecord> = (1..=4)
        .map(|row| {
            RawRecord::new(
                row,
                "03 March",
                format!("P{}", row % 2),
                "Travel:Flights",
                "-1,000,000,000,000,000.00",
            )
        })
        .collect();
    let transactions = Settings::default().normalizer().normalize(&records).unwrap();

    let report =
        BreakdownReport::generate(&transactions, ReportingMonth::new(2023, 3).unwrap()).unwrap();
    assert_eq!(report.total_expenses, money("-4000000000000000.00"));
    assert!(report.check_consistency().is_ok());

    let output = report.format_terminal();
    assert!(output.contains("100.0%"));

    let mut csv = Vec::new();
    report.export_csv(&mut csv).unwrap();
    assert!(String::from_utf8(csv)
        .unwrap()
        .contains("2023-03,,total_expenses,,-4000000000000000.00\n"));
}

#[test]
fn amount_beyond_limit_is_rejected_before_aggregation() {
    let records = vec![
        RawRecord::new(1, "03 March", "A", "Travel:Flights", "-50000000000000000000000000000"),
        RawRecord::new(2, "03 March", "A", "Travel:Flights", "-50000000000000000000000000000"),
    ];
    let err = Settings::default()
        .normalizer()
        .normalize(&records)
        .unwrap_err();
    assert!(err.is_malformed_amount());
    assert!(err.to_string().contains("row 1"));
}

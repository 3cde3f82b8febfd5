#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::db::tests::{broken_store, temp_store, txn};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// A(2024-03-01, +100), B(2024-03-15, -40), C(2024-02-01, +10)
fn abc() -> Vec<Transaction> {
    vec![
        txn("2024-03-01", "09:00:00", "A Corp", dec!(100)),
        txn("2024-03-15", "09:00:00", "B Mart", dec!(-40)),
        txn("2024-02-01", "09:00:00", "C Shop", dec!(10)),
    ]
}

fn vendors(report: &Report) -> Vec<&str> {
    report.transactions.iter().map(|t| t.vendor.as_str()).collect()
}

// ── Date windows ──────────────────────────────────────────────

#[test]
fn test_month_to_date_scenario() {
    let report = select(&ReportWindow::MonthToDate, abc(), day("2024-03-20"));
    assert_eq!(vendors(&report), vec!["B Mart", "A Corp"]);
    assert_eq!(report.total, dec!(60));
    assert_eq!(report.title, "MONTH TO DATE");
}

#[test]
fn test_previous_month_scenario() {
    let report = select(&ReportWindow::PreviousMonth, abc(), day("2024-03-20"));
    assert_eq!(vendors(&report), vec!["C Shop"]);
    assert_eq!(report.total, dec!(10));
}

#[test]
fn test_previous_month_rolls_over_year() {
    assert_eq!(previous_month(day("2024-01-15")), (2023, 12));
    assert_eq!(previous_month(day("2024-03-31")), (2024, 2));

    let all = vec![
        txn("2023-12-31", "23:59:59", "Late December", dec!(-5)),
        txn("2024-12-01", "09:00:00", "Wrong Year", dec!(-7)),
        txn("2024-01-02", "09:00:00", "This Month", dec!(3)),
    ];
    let report = select(&ReportWindow::PreviousMonth, all, day("2024-01-15"));
    assert_eq!(vendors(&report), vec!["Late December"]);
    assert_eq!(report.total, dec!(-5));
}

#[test]
fn test_month_to_date_ignores_same_month_other_year() {
    let all = vec![
        txn("2023-03-10", "09:00:00", "Last Year", dec!(1)),
        txn("2024-03-10", "09:00:00", "This Year", dec!(2)),
    ];
    let report = select(&ReportWindow::MonthToDate, all, day("2024-03-20"));
    assert_eq!(vendors(&report), vec!["This Year"]);
}

#[test]
fn test_year_to_date_and_previous_year() {
    let all = vec![
        txn("2022-06-01", "09:00:00", "Old", dec!(1)),
        txn("2023-01-01", "00:00:00", "Jan", dec!(20)),
        txn("2023-12-31", "23:00:00", "Dec", dec!(-5)),
        txn("2024-02-29", "12:00:00", "Leap", dec!(7)),
    ];
    let ytd = select(&ReportWindow::YearToDate, all.clone(), day("2024-03-01"));
    assert_eq!(vendors(&ytd), vec!["Leap"]);
    assert_eq!(ytd.total, dec!(7));

    let prev = select(&ReportWindow::PreviousYear, all, day("2024-03-01"));
    assert_eq!(vendors(&prev), vec!["Dec", "Jan"]);
    assert_eq!(prev.total, dec!(15));
}

#[test]
fn test_sorted_by_time_within_a_day() {
    let all = vec![
        txn("2024-03-05", "08:00:00", "Breakfast", dec!(-8)),
        txn("2024-03-05", "19:00:00", "Dinner", dec!(-30)),
        txn("2024-03-05", "12:30:00", "Lunch", dec!(-12)),
    ];
    let report = select(&ReportWindow::MonthToDate, all, day("2024-03-20"));
    assert_eq!(vendors(&report), vec!["Dinner", "Lunch", "Breakfast"]);
    assert_eq!(report.total, dec!(-50));
}

#[test]
fn test_empty_result_has_zero_total() {
    let report = select(&ReportWindow::PreviousYear, abc(), day("2024-03-20"));
    assert!(report.transactions.is_empty());
    assert_eq!(report.total, Decimal::ZERO);
}

#[test]
fn test_total_saturates_on_oversized_rows() {
    let huge = txn("2024-03-01", "09:00:00", "Mint", Decimal::MAX);
    let report = select(&ReportWindow::MonthToDate, vec![huge.clone(), huge], day("2024-03-20"));
    assert_eq!(report.transactions.len(), 2);
    assert_eq!(report.total, Decimal::MAX);
}

// ── Vendor search ─────────────────────────────────────────────

#[test]
fn test_vendor_search_case_insensitive() {
    let all = vec![
        txn("2024-03-01", "09:00:00", "Acme Co", dec!(100)),
        txn("2024-03-02", "09:00:00", "Globex", dec!(-3)),
    ];
    let report = select(&ReportWindow::vendor("ACME"), all, day("2024-03-20"));
    assert_eq!(vendors(&report), vec!["Acme Co"]);
    assert_eq!(report.title, "VENDOR SEARCH: acme");
}

#[test]
fn test_vendor_search_spans_all_dates() {
    let all = vec![
        txn("2019-01-01", "09:00:00", "Acme Co", dec!(1)),
        txn("2024-03-02", "09:00:00", "acme co", dec!(2)),
    ];
    let report = select(&ReportWindow::vendor("acme"), all, day("2024-03-20"));
    assert_eq!(report.transactions.len(), 2);
    assert_eq!(report.total, dec!(3));
}

#[test]
fn test_empty_vendor_query_matches_all() {
    let report = select(&ReportWindow::vendor("  "), abc(), day("2024-03-20"));
    assert_eq!(report.transactions.len(), 3);
    assert_eq!(report.total, dec!(70));
}

#[test]
fn test_vendor_variant_built_directly_is_normalised() {
    let window = ReportWindow::Vendor("B MART".into());
    let report = select(&window, abc(), day("2024-03-20"));
    assert_eq!(vendors(&report), vec!["B Mart"]);
}

#[test]
fn test_vendor_query_normalized_once_before_scan() {
    let window = ReportWindow::Vendor("  b MART ".into());
    assert_eq!(window.normalized(), ReportWindow::Vendor("b mart".into()));
    assert_eq!(ReportWindow::MonthToDate.normalized(), ReportWindow::MonthToDate);

    let report = select(&window, abc(), day("2024-03-20"));
    assert_eq!(vendors(&report), vec!["B Mart"]);
    assert_eq!(report.title, "VENDOR SEARCH: b mart");
}

// ── Custom search ─────────────────────────────────────────────

#[test]
fn test_custom_search_blank_matches_all() {
    let search = CustomSearch::parse("", "", "", "", "").unwrap();
    let report = select(&ReportWindow::Custom(search), abc(), day("2024-03-20"));
    assert_eq!(report.transactions.len(), 3);
}

#[test]
fn test_custom_search_date_bounds_inclusive() {
    let search = CustomSearch::parse("2024-02-01", "2024-03-01", "", "", "").unwrap();
    let report = select(&ReportWindow::Custom(search), abc(), day("2024-03-20"));
    assert_eq!(vendors(&report), vec!["A Corp", "C Shop"]);
    assert_eq!(report.total, dec!(110));
}

#[test]
fn test_custom_search_all_criteria() {
    let search = CustomSearch::parse("", "", "mart purchase", "b m", "-40").unwrap();
    let report = select(&ReportWindow::Custom(search), abc(), day("2024-03-20"));
    assert_eq!(vendors(&report), vec!["B Mart"]);

    let miss = CustomSearch::parse("", "", "", "b m", "-40.01").unwrap();
    assert!(select(&ReportWindow::Custom(miss), abc(), day("2024-03-20"))
        .transactions
        .is_empty());
}

#[test]
fn test_custom_search_amount_ignores_scale() {
    let search = CustomSearch::parse("", "", "", "", "100.00").unwrap();
    let report = select(&ReportWindow::Custom(search), abc(), day("2024-03-20"));
    assert_eq!(vendors(&report), vec!["A Corp"]);
}

#[test]
fn test_custom_search_bad_input() {
    assert_eq!(
        CustomSearch::parse("03/01/2024", "", "", "", "").unwrap_err(),
        EntryError::InvalidDate("03/01/2024".into())
    );
    assert_eq!(
        CustomSearch::parse("", "", "", "", "ten").unwrap_err(),
        EntryError::InvalidAmount("ten".into())
    );
}

// ── Window parsing ────────────────────────────────────────────

#[test]
fn test_window_parse() {
    assert_eq!(ReportWindow::parse("mtd"), Some(ReportWindow::MonthToDate));
    assert_eq!(
        ReportWindow::parse("Previous-Month"),
        Some(ReportWindow::PreviousMonth)
    );
    assert_eq!(ReportWindow::parse("ytd"), Some(ReportWindow::YearToDate));
    assert_eq!(
        ReportWindow::parse("previous-year"),
        Some(ReportWindow::PreviousYear)
    );
    assert_eq!(ReportWindow::parse("fortnight"), None);
}

// ── Store-backed ──────────────────────────────────────────────

#[test]
fn test_run_rereads_store_each_time() {
    let (_dir, store) = temp_store();
    let repo = Repository::new(store);
    for t in abc() {
        repo.save(&t).unwrap();
    }
    let today = day("2024-03-20");
    let first = run(&ReportWindow::MonthToDate, &repo, today).unwrap();
    assert_eq!(first.total, dec!(60));

    repo.save(&txn("2024-03-18", "10:00:00", "D Late", dec!(-10)))
        .unwrap();
    let second = run(&ReportWindow::MonthToDate, &repo, today).unwrap();
    assert_eq!(vendors(&second), vec!["D Late", "B Mart", "A Corp"]);
    assert_eq!(second.total, dec!(50));
}

#[test]
fn test_run_on_broken_store_is_an_error() {
    let repo = Repository::new(broken_store());
    assert!(run(&ReportWindow::YearToDate, &repo, day("2024-03-20")).is_err());
}

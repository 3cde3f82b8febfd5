#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use super::*;

/// A store backed by a file in a fresh temp directory. Keep the `TempDir` alive.
pub(crate) fn temp_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(temp_config(&dir));
    store.ensure_schema().unwrap();
    (dir, store)
}

pub(crate) fn temp_config(dir: &TempDir) -> StoreConfig {
    StoreConfig {
        url: dir.path().join("ledger.db").to_string_lossy().into_owned(),
        user: "root".into(),
        password: String::new(),
    }
}

/// A store whose database path can never be opened.
pub(crate) fn broken_store() -> Store {
    Store::new(StoreConfig {
        url: "/nonexistent-ledger-dir/nested/ledger.db".into(),
        user: "root".into(),
        password: String::new(),
    })
}

pub(crate) fn txn(date: &str, time: &str, vendor: &str, amount: Decimal) -> Transaction {
    Transaction::new(
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        NaiveTime::parse_from_str(time, "%H:%M:%S").unwrap(),
        format!("{vendor} purchase"),
        vendor.into(),
        amount,
    )
}

#[test]
fn test_ensure_schema_is_idempotent() {
    let (_dir, store) = temp_store();
    store.ensure_schema().unwrap();
    store.ensure_schema().unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_insert_and_select_roundtrip() {
    let (_dir, store) = temp_store();
    let original = txn("2024-03-01", "10:15:30", "Acme Co", dec!(100.00));
    let id = store.insert(&original).unwrap();
    assert!(id > 0);

    let all = store.select_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], original);
}

#[test]
fn test_insert_assigns_increasing_ids() {
    let (_dir, store) = temp_store();
    let a = store
        .insert(&txn("2024-03-01", "10:00:00", "A", dec!(1)))
        .unwrap();
    let b = store
        .insert(&txn("2024-03-01", "10:00:00", "B", dec!(2)))
        .unwrap();
    assert!(b > a);
}

#[test]
fn test_select_all_newest_first() {
    let (_dir, store) = temp_store();
    store
        .insert(&txn("2024-02-01", "08:00:00", "Old", dec!(10)))
        .unwrap();
    store
        .insert(&txn("2024-03-15", "08:00:00", "Morning", dec!(-40)))
        .unwrap();
    store
        .insert(&txn("2024-03-15", "18:00:00", "Evening", dec!(5)))
        .unwrap();

    let vendors: Vec<String> = store
        .select_all()
        .unwrap()
        .into_iter()
        .map(|t| t.vendor)
        .collect();
    assert_eq!(vendors, vec!["Evening", "Morning", "Old"]);
}

#[test]
fn test_ties_break_by_insertion_order_descending() {
    let (_dir, store) = temp_store();
    store
        .insert(&txn("2024-03-01", "12:00:00", "First", dec!(1)))
        .unwrap();
    store
        .insert(&txn("2024-03-01", "12:00:00", "Second", dec!(2)))
        .unwrap();

    let all = store.select_all().unwrap();
    assert_eq!(all[0].vendor, "Second");
    assert_eq!(all[1].vendor, "First");
}

#[test]
fn test_amount_stored_with_two_decimals_half_away_from_zero() {
    let (_dir, store) = temp_store();
    store
        .insert(&txn("2024-03-01", "12:00:00", "Rounding", dec!(12.345)))
        .unwrap();
    let all = store.select_all().unwrap();
    assert_eq!(all[0].amount, dec!(12.35));
}

#[test]
fn test_negative_amount_preserved() {
    let (_dir, store) = temp_store();
    store
        .insert(&txn("2024-03-01", "12:00:00", "Grocer", dec!(-87.30)))
        .unwrap();
    let all = store.select_all().unwrap();
    assert_eq!(all[0].amount, dec!(-87.30));
    assert!(all[0].is_payment());
}

#[test]
fn test_empty_description_rejected_by_schema() {
    let (_dir, store) = temp_store();
    let mut bad = txn("2024-03-01", "12:00:00", "Acme", dec!(1));
    bad.description = String::new();
    let err = store.insert(&bad).unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_unreachable_store_reports_unavailable() {
    let store = broken_store();
    assert!(matches!(
        store.ensure_schema(),
        Err(StoreError::Unavailable(_))
    ));
    assert!(store.select_all().is_err());
    assert!(store
        .insert(&txn("2024-03-01", "12:00:00", "Acme", dec!(1)))
        .is_err());
}

#[test]
fn test_select_before_schema_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(temp_config(&dir));
    assert!(store.select_all().is_err());
}

#[test]
fn test_corrupt_row_surfaces_as_error() {
    let (dir, store) = temp_store();
    let conn = Connection::open(dir.path().join("ledger.db")).unwrap();
    conn.execute(
        "INSERT INTO transactions (tx_date, tx_time, description, vendor, amount)
         VALUES ('not-a-date', '10:00:00', 'x', 'y', '1.00')",
        [],
    )
    .unwrap();
    drop(conn);
    assert!(store.select_all().is_err());
}

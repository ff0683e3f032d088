use chrono::{Local, NaiveDate};
use expense_tracker_core::config::Config;
use expense_tracker_core::errors::CoreError;
use expense_tracker_core::models::expense::Expense;
use expense_tracker_core::ExpenseTracker;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn data_file(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("expense_tracker.json")
}

fn open(path: &Path) -> ExpenseTracker {
    ExpenseTracker::open(Config::new(path)).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Record operations persist across reopen
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_add_then_list_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = data_file(&dir);

    let added = open(&path).add(dec("99.99"), "shoes").unwrap();

    let tracker = open(&path);
    let listed = tracker.list();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, added.id);
    assert_eq!(listed[0].category, "shoes");
    assert_eq!(listed[0].amount, dec("99.99"));
    assert_eq!(listed[0].date(), Local::now().date_naive());
}

#[test]
fn test_first_add_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = data_file(&dir);
    assert!(!path.exists());

    open(&path).add(dec("1"), "x").unwrap();
    assert!(path.exists());
}

#[test]
fn test_update_keeps_id_and_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = data_file(&dir);
    let original = open(&path).add(dec("20"), "lunch").unwrap();

    let updated = open(&path).update(original.id, dec("25"), "dinner").unwrap();
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_at, original.created_at);

    let tracker = open(&path);
    let stored = tracker.get(original.id).unwrap();
    assert_eq!(stored.amount, dec("25"));
    assert_eq!(stored.category, "dinner");
    assert_eq!(stored.created_at, original.created_at);
}

#[test]
fn test_update_unknown_id_does_not_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = data_file(&dir);
    open(&path).add(dec("20"), "lunch").unwrap();
    let before = fs::read(&path).unwrap();

    let err = open(&path).update(Uuid::new_v4(), dec("1"), "x").unwrap_err();
    assert!(matches!(err, CoreError::ExpenseNotFound(_)));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_delete_known_and_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let path = data_file(&dir);
    let mut tracker = open(&path);
    let keep = tracker.add(dec("1"), "keep").unwrap();
    let gone = tracker.add(dec("2"), "gone").unwrap();

    let removed = tracker.delete(gone.id).unwrap();
    assert_eq!(removed.amount, dec("2"));
    assert_eq!(removed.category, "gone");
    assert_eq!(tracker.len(), 1);

    assert!(matches!(
        tracker.delete(gone.id),
        Err(CoreError::ExpenseNotFound(_))
    ));

    let reopened = open(&path);
    assert_eq!(reopened.len(), 1);
    assert!(reopened.get(keep.id).is_some());
}

#[test]
fn test_clear_empties_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = data_file(&dir);
    let mut tracker = open(&path);
    tracker.add(dec("1"), "a").unwrap();
    tracker.add(dec("2"), "b").unwrap();

    assert_eq!(tracker.clear().unwrap(), 2);
    assert!(tracker.is_empty());
    assert!(open(&path).is_empty());
}

#[test]
fn test_invalid_add_does_not_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = data_file(&dir);
    let mut tracker = open(&path);

    assert!(tracker.add(dec("-3"), "food").is_err());
    assert!(tracker.add(dec("3"), "").is_err());
    assert!(!path.exists());
}

// ═══════════════════════════════════════════════════════════════════
// Queries
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_summary_totals() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&data_file(&dir));
    assert_eq!(tracker.summary().unwrap().total, Decimal::ZERO);

    tracker.add(dec("10.25"), "a").unwrap();
    tracker.add(dec("4.75"), "b").unwrap();
    let summary = tracker.summary().unwrap();
    assert_eq!(summary.total, dec("15.00"));
    assert_eq!(summary.count, 2);
}

#[test]
fn test_monthly_summary_via_tracker() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&data_file(&dir));
    let jan = NaiveDate::from_ymd_opt(2025, 1, 9)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    tracker
        .add_expense(Expense::with_timestamp(dec("60"), "gym", jan))
        .unwrap();

    assert_eq!(tracker.monthly_summary("January", None).unwrap().total, dec("60"));
    assert_eq!(
        tracker.monthly_summary("February", None).unwrap().total,
        Decimal::ZERO
    );
    assert!(matches!(
        tracker.monthly_summary("Frobuary", None),
        Err(CoreError::InvalidMonth(_))
    ));
}

#[test]
fn test_list_by_category_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&data_file(&dir));
    tracker.add(dec("1"), "food").unwrap();
    tracker.add(dec("2"), "rent").unwrap();
    tracker.add(dec("3"), "Food").unwrap();

    let food: Vec<Decimal> = tracker
        .list_by_category("food")
        .iter()
        .map(|e| e.amount)
        .collect();
    assert_eq!(food, vec![dec("1"), dec("3")]);
}

#[test]
fn test_summary_of_huge_amounts_is_an_error_not_a_panic() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&data_file(&dir));
    tracker.add(Decimal::MAX, "a").unwrap();
    tracker.add(Decimal::MAX, "b").unwrap();

    assert!(matches!(tracker.summary(), Err(CoreError::AmountOverflow)));
    assert!(matches!(
        tracker.category_totals(),
        Ok(ref totals) if totals.len() == 2
    ));
    let month = Local::now().format("%B").to_string();
    assert!(matches!(
        tracker.monthly_summary(&month, None),
        Err(CoreError::AmountOverflow)
    ));
}

// ═══════════════════════════════════════════════════════════════════
// Persistence behaviour
// ═══════════════════════════════════════════════════════════════════

/// Replace the data file's parent directory with a plain file so the next
/// save cannot create its temp file.
fn block_saves(path: &Path) {
    let parent = path.parent().unwrap();
    fs::remove_dir_all(parent).unwrap();
    fs::write(parent, "not a directory").unwrap();
}

#[test]
fn test_failed_save_rolls_back_add_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("expense_tracker.json");
    let mut tracker = open(&path);
    tracker.add(dec("8"), "kept").unwrap();

    block_saves(&path);

    assert!(tracker.add(dec("1"), "lost").is_err());
    assert_eq!(tracker.len(), 1);
    assert_eq!(tracker.list()[0].category, "kept");

    assert!(tracker.clear().is_err());
    assert_eq!(tracker.len(), 1);
}

#[test]
fn test_failed_save_rolls_back_update_and_delete() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("expense_tracker.json");
    let mut tracker = open(&path);
    let expense = tracker.add(dec("8"), "kept").unwrap();

    block_saves(&path);

    assert!(tracker.update(expense.id, dec("99"), "changed").is_err());
    let stored = tracker.get(expense.id).unwrap();
    assert_eq!(stored.amount, dec("8"));
    assert_eq!(stored.category, "kept");

    assert!(tracker.delete(expense.id).is_err());
    assert!(tracker.get(expense.id).is_some());
}

#[test]
fn test_save_after_open_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = data_file(&dir);
    let mut tracker = open(&path);
    tracker.add(dec("12.5"), "a").unwrap();
    tracker.add(dec("7"), "b").unwrap();
    let before = fs::read(&path).unwrap();

    open(&path).save().unwrap();
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_corrupt_file_opens_empty_and_is_replaced_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = data_file(&dir);
    fs::write(&path, "[{ broken").unwrap();

    let mut tracker = open(&path);
    assert!(tracker.is_empty());
    tracker.add(dec("5"), "fresh").unwrap();

    let reopened = open(&path);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.list()[0].category, "fresh");
}

#[test]
fn test_format_amount_uses_configured_currency() {
    let dir = tempfile::tempdir().unwrap();
    let tracker =
        ExpenseTracker::open(Config::new(data_file(&dir)).with_currency("$")).unwrap();
    assert_eq!(tracker.format_amount(dec("3.50")), "$3.50");
    assert_eq!(tracker.config().currency, "$");
}

#[test]
fn test_debug_shows_counts_not_records() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&data_file(&dir));
    tracker.add(dec("1"), "secret-category").unwrap();
    let debug = format!("{:?}", tracker);
    assert!(debug.contains("ExpenseTracker"));
    assert!(debug.contains("expenses: 1"));
    assert!(!debug.contains("secret-category"));
}

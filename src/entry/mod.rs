use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{EntryError, SubmitError};
use crate::ledger::LedgerView;
use crate::models::{to_cents, Transaction};
use crate::repository::Repository;

/// Largest magnitude accepted, in cents: ten digits, two of them after the point.
const MAX_CENTS: i64 = 9_999_999_999;

/// Raw text as typed into the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct EntryInput {
    pub(crate) description: String,
    pub(crate) vendor: String,
    pub(crate) amount: String,
    pub(crate) is_deposit: bool,
}

/// Parse a user-entered amount: surrounding whitespace, a leading `$` and
/// thousands separators are tolerated.
pub(crate) fn parse_amount(text: &str) -> Result<Decimal, EntryError> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| EntryError::InvalidAmount(text.trim().to_string()))
}

/// Turns form input into a record stamped with `now`. Nothing is saved here.
pub(crate) fn validate(input: &EntryInput, now: NaiveDateTime) -> Result<Transaction, EntryError> {
    let description = input.description.trim();
    let vendor = input.vendor.trim();
    let amount_text = input.amount.trim();

    if description.is_empty() {
        return Err(EntryError::MissingField("Description"));
    }
    if vendor.is_empty() {
        return Err(EntryError::MissingField("Vendor"));
    }
    if amount_text.is_empty() {
        return Err(EntryError::MissingField("Amount"));
    }

    let parsed = parse_amount(amount_text)?;
    let amount = to_cents(if input.is_deposit { parsed } else { -parsed.abs() });
    if amount.is_zero() || amount.abs() > Decimal::new(MAX_CENTS, 2) {
        return Err(EntryError::InvalidAmount(amount_text.to_string()));
    }

    let time = now.time().with_nanosecond(0).unwrap_or_else(|| now.time());
    Ok(Transaction::new(
        now.date(),
        time,
        description.to_string(),
        vendor.to_string(),
        amount,
    ))
}

/// Validate, then persist through the ledger so it refreshes. Invalid input
/// never reaches the store.
pub(crate) fn submit(
    input: &EntryInput,
    now: NaiveDateTime,
    ledger: &mut LedgerView,
    repo: &Repository,
) -> Result<Transaction, SubmitError> {
    let txn = validate(input, now)?;
    ledger.add_and_reload(repo, &txn)?;
    Ok(txn)
}

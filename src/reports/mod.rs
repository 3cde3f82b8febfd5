use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::entry::parse_amount;
use crate::error::{EntryError, StoreError};
use crate::ledger::sort_newest_first;
use crate::models::{Transaction, DATE_FORMAT};
use crate::repository::Repository;

/// Free-form search. Blank criteria are ignored; all given ones must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CustomSearch {
    pub(crate) from: Option<NaiveDate>,
    pub(crate) to: Option<NaiveDate>,
    pub(crate) description: String,
    pub(crate) vendor: String,
    pub(crate) amount: Option<Decimal>,
}

impl CustomSearch {
    /// Build from raw text fields. Dates are `YYYY-MM-DD`, both bounds inclusive.
    pub(crate) fn parse(
        from: &str,
        to: &str,
        description: &str,
        vendor: &str,
        amount: &str,
    ) -> Result<Self, EntryError> {
        let amount = amount.trim();
        Ok(Self {
            from: parse_optional_date(from)?,
            to: parse_optional_date(to)?,
            description: description.trim().to_lowercase(),
            vendor: vendor.trim().to_lowercase(),
            amount: if amount.is_empty() {
                None
            } else {
                Some(parse_amount(amount)?)
            },
        })
    }

    pub(crate) fn matches(&self, txn: &Transaction) -> bool {
        if self.from.is_some_and(|from| txn.date < from) {
            return false;
        }
        if self.to.is_some_and(|to| txn.date > to) {
            return false;
        }
        if !self.description.is_empty() && !txn.description_contains(&self.description) {
            return false;
        }
        if !self.vendor.is_empty() && !txn.vendor_contains(&self.vendor) {
            return false;
        }
        self.amount.map_or(true, |amount| txn.amount == amount)
    }
}

fn parse_optional_date(text: &str) -> Result<Option<NaiveDate>, EntryError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(Some)
        .map_err(|_| EntryError::InvalidDate(text.to_string()))
}

/// A named selection rule, evaluated against "today".
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReportWindow {
    MonthToDate,
    PreviousMonth,
    YearToDate,
    PreviousYear,
    /// Case-insensitive substring of the vendor. An empty query selects everything.
    Vendor(String),
    Custom(CustomSearch),
}

impl ReportWindow {
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "month-to-date" | "mtd" => Some(Self::MonthToDate),
            "previous-month" | "prev-month" => Some(Self::PreviousMonth),
            "year-to-date" | "ytd" => Some(Self::YearToDate),
            "previous-year" | "prev-year" => Some(Self::PreviousYear),
            _ => None,
        }
    }

    pub(crate) fn vendor(query: &str) -> Self {
        Self::Vendor(query.trim().to_lowercase())
    }

    pub(crate) fn title(&self) -> String {
        match self {
            Self::MonthToDate => "MONTH TO DATE".into(),
            Self::PreviousMonth => "PREVIOUS MONTH".into(),
            Self::YearToDate => "YEAR TO DATE".into(),
            Self::PreviousYear => "PREVIOUS YEAR".into(),
            Self::Vendor(q) => format!("VENDOR SEARCH: {q}"),
            Self::Custom(_) => "CUSTOM SEARCH RESULTS".into(),
        }
    }

    /// Same rule with the vendor query trimmed and lowercased, ready for a scan.
    fn normalized(&self) -> Self {
        match self {
            Self::Vendor(q) => Self::vendor(q),
            other => other.clone(),
        }
    }

    /// Expects a vendor query already normalized, as [`ReportWindow::vendor`] builds it.
    fn matches(&self, txn: &Transaction, today: NaiveDate) -> bool {
        match self {
            Self::MonthToDate => {
                txn.date.year() == today.year() && txn.date.month() == today.month()
            }
            Self::PreviousMonth => {
                let (year, month) = previous_month(today);
                txn.date.year() == year && txn.date.month() == month
            }
            Self::YearToDate => txn.date.year() == today.year(),
            Self::PreviousYear => txn.date.year() == today.year() - 1,
            Self::Vendor(q) => q.is_empty() || txn.vendor_contains(q),
            Self::Custom(search) => search.matches(txn),
        }
    }
}

/// (year, month) one month before `today`; January rolls back to December.
pub(crate) fn previous_month(today: NaiveDate) -> (i32, u32) {
    if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Report {
    pub(crate) title: String,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) total: Decimal,
}

impl Report {
    pub(crate) fn empty(title: String) -> Self {
        Self {
            title,
            transactions: Vec::new(),
            total: Decimal::ZERO,
        }
    }
}

/// Filter then sort newest first. The total is summed once, after the scan.
pub(crate) fn select(window: &ReportWindow, all: Vec<Transaction>, today: NaiveDate) -> Report {
    let window = window.normalized();
    let mut transactions: Vec<Transaction> = all
        .into_iter()
        .filter(|t| window.matches(t, today))
        .collect();
    sort_newest_first(&mut transactions);
    let total = transactions
        .iter()
        .fold(Decimal::ZERO, |sum, t| sum.saturating_add(t.amount));
    Report {
        title: window.title(),
        transactions,
        total,
    }
}

/// Re-reads the store on every call; shares nothing with the ledger view.
pub(crate) fn run(
    window: &ReportWindow,
    repo: &Repository,
    today: NaiveDate,
) -> Result<Report, StoreError> {
    let all = repo.load_all()?;
    Ok(select(window, all, today))
}

#[cfg(test)]
mod tests;

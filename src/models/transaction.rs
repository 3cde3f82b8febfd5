use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Rounds to cents, halves away from zero. A result of zero is never negative.
pub fn to_cents(amount: Decimal) -> Decimal {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if cents.is_zero() {
        cents.abs()
    } else {
        cents
    }
}

/// One ledger entry. The sign of `amount` is the only record of its kind:
/// deposits are non-negative, payments negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
    pub vendor: String,
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        description: String,
        vendor: String,
        amount: Decimal,
    ) -> Self {
        Self {
            date,
            time,
            description,
            vendor,
            amount,
        }
    }

    pub fn is_deposit(&self) -> bool {
        self.amount >= Decimal::ZERO
    }

    pub fn is_payment(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn time_str(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }

    /// Case-insensitive substring match on the vendor. `query` must already be lowercase.
    pub fn vendor_contains(&self, query: &str) -> bool {
        self.vendor.to_lowercase().contains(query)
    }

    pub fn description_contains(&self, query: &str) -> bool {
        self.description.to_lowercase().contains(query)
    }
}

impl std::fmt::Display for Transaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {:<20} | {:<16} | {:.2}",
            self.date_str(),
            self.time_str(),
            self.description,
            self.vendor,
            self.amount
        )
    }
}

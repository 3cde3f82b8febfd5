use rust_decimal::Decimal;
use std::cmp::Reverse;

use crate::error::StoreError;
use crate::models::Transaction;
use crate::repository::Repository;

pub(crate) type Predicate = Box<dyn Fn(&Transaction) -> bool>;

/// Which side of the ledger to show, decided by the sign of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum KindFilter {
    #[default]
    All,
    Deposits,
    Payments,
}

impl KindFilter {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Deposits => "Deposits",
            Self::Payments => "Payments",
        }
    }

    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "deposits" | "deposit" | "d" => Some(Self::Deposits),
            "payments" | "payment" | "p" => Some(Self::Payments),
            _ => None,
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::All => Self::Deposits,
            Self::Deposits => Self::Payments,
            Self::Payments => Self::All,
        }
    }

    pub(crate) fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Deposits => txn.is_deposit(),
            Self::Payments => txn.is_payment(),
        }
    }
}

impl std::fmt::Display for KindFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The ledger tab's criteria: a kind plus an optional vendor substring, both must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct LedgerFilter {
    pub(crate) kind: KindFilter,
    vendor: String,
}

impl LedgerFilter {
    pub(crate) fn new(kind: KindFilter, vendor: &str) -> Self {
        Self {
            kind,
            vendor: vendor.trim().to_lowercase(),
        }
    }

    pub(crate) fn matches(&self, txn: &Transaction) -> bool {
        self.kind.matches(txn) && (self.vendor.is_empty() || txn.vendor_contains(&self.vendor))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Totals {
    pub(crate) income: Decimal,
    pub(crate) expenses: Decimal,
    pub(crate) net: Decimal,
}

/// One pass: non-negative amounts are income, negative ones expenses. Sums
/// saturate, so oversized rows already in the store cannot overflow.
pub(crate) fn totals(txns: &[Transaction]) -> Totals {
    let (income, expenses) = txns.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(income, expenses), txn| {
            if txn.is_deposit() {
                (income.saturating_add(txn.amount), expenses)
            } else {
                (income, expenses.saturating_add(txn.amount))
            }
        },
    );
    Totals {
        income,
        expenses,
        net: income.saturating_add(expenses),
    }
}

/// Newest first by (date, time). Stable, so equal timestamps keep their incoming order.
pub(crate) fn sort_newest_first(txns: &mut [Transaction]) {
    txns.sort_by_key(|t| Reverse((t.date, t.time)));
}

/// Records passing `predicate`, in their original order.
pub(crate) fn apply_filter(all: &[Transaction], predicate: &dyn Fn(&Transaction) -> bool) -> Vec<Transaction> {
    all.iter().filter(|t| predicate(t)).cloned().collect()
}

/// Full loaded set, the active filter, and the derived visible subset.
pub(crate) struct LedgerView {
    all: Vec<Transaction>,
    filter: Predicate,
    visible: Vec<Transaction>,
}

impl Default for LedgerView {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerView {
    pub(crate) fn new() -> Self {
        Self {
            all: Vec::new(),
            filter: Box::new(|_| true),
            visible: Vec::new(),
        }
    }

    /// Re-reads the store. On a store fault the ledger is shown empty and the error returned.
    pub(crate) fn reload(&mut self, repo: &Repository) -> Result<(), StoreError> {
        let (all, result) = match repo.load_all() {
            Ok(all) => (all, Ok(())),
            Err(e) => (Vec::new(), Err(e)),
        };
        self.replace_all(all);
        result
    }

    pub(crate) fn replace_all(&mut self, mut all: Vec<Transaction>) {
        sort_newest_first(&mut all);
        self.all = all;
        self.visible = apply_filter(&self.all, &*self.filter);
    }

    pub(crate) fn set_filter<F>(&mut self, predicate: F)
    where
        F: Fn(&Transaction) -> bool + 'static,
    {
        self.filter = Box::new(predicate);
        self.visible = apply_filter(&self.all, &*self.filter);
    }

    pub(crate) fn set_ledger_filter(&mut self, filter: LedgerFilter) {
        self.set_filter(move |txn| filter.matches(txn));
    }

    /// Persists, then reloads whatever the save outcome. The new record shows
    /// only if it passes the active filter.
    pub(crate) fn add_and_reload(
        &mut self,
        repo: &Repository,
        txn: &Transaction,
    ) -> Result<(), StoreError> {
        let saved = repo.save(txn);
        let reloaded = self.reload(repo);
        saved.and(reloaded)
    }

    pub(crate) fn all(&self) -> &[Transaction] {
        &self.all
    }

    pub(crate) fn visible(&self) -> &[Transaction] {
        &self.visible
    }

    pub(crate) fn totals(&self) -> Totals {
        totals(&self.visible)
    }
}

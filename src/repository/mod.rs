use tracing::error;

use crate::db::Store;
use crate::error::StoreError;
use crate::models::Transaction;

/// Maps store rows to ledger records. Holds no cache: every load re-reads the store.
pub(crate) struct Repository {
    store: Store,
}

impl Repository {
    pub(crate) fn new(store: Store) -> Self {
        Self { store }
    }

    /// Logged and swallowed on failure; the app keeps running without a table.
    pub(crate) fn ensure_schema(&self) {
        if let Err(e) = self.store.ensure_schema() {
            error!(error = %e, "could not ensure database schema");
        }
    }

    /// All records, newest first. A fault is logged here; whether to show an
    /// empty ledger or fail is up to the caller.
    pub(crate) fn load_all(&self) -> Result<Vec<Transaction>, StoreError> {
        self.store.select_all().inspect_err(|e| {
            error!(error = %e, "could not load transactions");
        })
    }

    /// Inserts without validating; the entry form has already done that.
    pub(crate) fn save(&self, txn: &Transaction) -> Result<(), StoreError> {
        match self.store.insert(txn) {
            Ok(_) => Ok(()),
            Err(e) => {
                error!(error = %e, vendor = %txn.vendor, "could not save transaction");
                Err(e)
            }
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.store
            .count()
            .map(|n| usize::try_from(n).unwrap_or(0))
            .unwrap_or(0)
    }
}

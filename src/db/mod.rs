mod schema;

use chrono::{NaiveDate, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::models::{to_cents, Transaction, DATE_FORMAT, TIME_FORMAT};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// The `transactions` table. Every call opens its own connection and drops it
/// before returning, on success and on error alike.
pub(crate) struct Store {
    config: StoreConfig,
}

impl Store {
    pub(crate) fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let path = self.config.db_path();
        let conn = Connection::open(&path)?;
        // Concurrent writers are serialized by SQLite's own locking.
        conn.busy_timeout(BUSY_TIMEOUT)?;
        debug!(user = %self.config.user, path = %path.display(), "opened store connection");
        Ok(conn)
    }

    /// Idempotent; safe to call on every startup.
    pub(crate) fn ensure_schema(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute_batch(schema::SCHEMA)?;
        info!(url = %self.config.url, "transactions table ready");
        Ok(())
    }

    pub(crate) fn insert(&self, txn: &Transaction) -> Result<i64, StoreError> {
        let conn = self.connect()?;
        conn.execute(
            schema::INSERT_TRANSACTION,
            params![
                txn.date_str(),
                txn.time_str(),
                txn.description,
                txn.vendor,
                to_cents(txn.amount).to_string(),
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!(id, vendor = %txn.vendor, amount = %txn.amount, "inserted transaction");
        Ok(id)
    }

    /// Every row, newest first: date, then time, then insertion order.
    pub(crate) fn select_all(&self) -> Result<Vec<Transaction>, StoreError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(schema::SELECT_ALL)?;
        let rows = stmt.query_map([], map_row)?;
        let txns = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        debug!(count = txns.len(), "loaded transactions");
        Ok(txns)
    }

    pub(crate) fn count(&self) -> Result<i64, StoreError> {
        let conn = self.connect()?;
        Ok(conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?)
    }
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    let date: String = row.get(0)?;
    let time: String = row.get(1)?;
    let amount: String = row.get(4)?;
    Ok(Transaction {
        date: NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|e| conversion(0, e))?,
        time: NaiveTime::parse_from_str(&time, TIME_FORMAT).map_err(|e| conversion(1, e))?,
        description: row.get(2)?,
        vendor: row.get(3)?,
        amount: Decimal::from_str(&amount).map_err(|e| conversion(4, e))?,
    })
}

fn conversion<E>(column: usize, err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(err))
}

#[cfg(test)]
pub(crate) mod tests;

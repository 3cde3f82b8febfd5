use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use crate::models::Transaction;

const HEADER: [&str; 5] = ["date", "time", "description", "vendor", "amount"];

/// Write rows as CSV in the order given. Returns how many were written.
pub(crate) fn write_csv<W: Write>(writer: W, txns: &[Transaction]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for txn in txns {
        wtr.write_record([
            txn.date_str(),
            txn.time_str(),
            txn.description.clone(),
            txn.vendor.clone(),
            format!("{:.2}", txn.amount),
        ])?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(txns.len())
}

pub(crate) fn export_to_path(path: &Path, txns: &[Transaction]) -> Result<usize> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(file, txns)
}

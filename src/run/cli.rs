use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;

use crate::entry::{self, EntryInput};
use crate::export;
use crate::ledger::{KindFilter, LedgerFilter, LedgerView, Totals};
use crate::models::Transaction;
use crate::reports::{self, CustomSearch, Report, ReportWindow};
use crate::repository::Repository;
use crate::ui::util::format_amount;

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Record a deposit (default) or a payment
    Add {
        #[arg(long)]
        description: String,
        #[arg(long)]
        vendor: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Store as a payment (negative amount)
        #[arg(long)]
        payment: bool,
    },
    /// Print the ledger with deposit/payment totals
    Ledger {
        /// all, deposits or payments
        #[arg(long, default_value = "all")]
        kind: String,
        /// Case-insensitive vendor substring
        #[arg(long, default_value = "")]
        vendor: String,
    },
    /// month-to-date, previous-month, year-to-date, previous-year, or `vendor <QUERY>`
    Report {
        window: String,
        query: Option<String>,
    },
    /// Search by any combination of date range, description, vendor and exact amount
    Search {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        vendor: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Write the (filtered) ledger to a CSV file
    Export {
        path: PathBuf,
        #[arg(long, default_value = "all")]
        kind: String,
        #[arg(long, default_value = "")]
        vendor: String,
    },
}

pub(crate) fn as_cli(command: Command, repo: &Repository) -> Result<()> {
    match command {
        Command::Add {
            description,
            vendor,
            amount,
            payment,
        } => cli_add(
            EntryInput {
                description,
                vendor,
                amount,
                is_deposit: !payment,
            },
            repo,
        ),
        Command::Ledger { kind, vendor } => cli_ledger(&kind, &vendor, repo),
        Command::Report { window, query } => cli_report(&window, query.as_deref(), repo),
        Command::Search {
            from,
            to,
            description,
            vendor,
            amount,
        } => {
            let search = CustomSearch::parse(
                from.as_deref().unwrap_or_default(),
                to.as_deref().unwrap_or_default(),
                description.as_deref().unwrap_or_default(),
                vendor.as_deref().unwrap_or_default(),
                amount.as_deref().unwrap_or_default(),
            )?;
            print_report(&run_report(&ReportWindow::Custom(search), repo)?);
            Ok(())
        }
        Command::Export { path, kind, vendor } => cli_export(&path, &kind, &vendor, repo),
    }
}

fn cli_add(input: EntryInput, repo: &Repository) -> Result<()> {
    let mut ledger = LedgerView::new();
    let now = chrono::Local::now().naive_local();
    match entry::submit(&input, now, &mut ledger, repo) {
        Ok(txn) => {
            println!("Transaction saved successfully!");
            println!("{txn}");
            Ok(())
        }
        Err(e) => Err(e).context("Transaction not saved"),
    }
}

fn parse_ledger_filter(kind: &str, vendor: &str) -> Result<LedgerFilter> {
    let kind = KindFilter::parse(kind)
        .ok_or_else(|| anyhow::anyhow!("Unknown kind '{kind}' (use all, deposits or payments)"))?;
    Ok(LedgerFilter::new(kind, vendor))
}

fn load_ledger(kind: &str, vendor: &str, repo: &Repository) -> Result<LedgerView> {
    let filter = parse_ledger_filter(kind, vendor)?;
    let mut view = LedgerView::new();
    view.set_ledger_filter(filter);
    view.reload(repo).context("Could not load transactions")?;
    Ok(view)
}

fn cli_ledger(kind: &str, vendor: &str, repo: &Repository) -> Result<()> {
    let view = load_ledger(kind, vendor, repo)?;
    println!("LEDGER ({} of {} stored)", view.visible().len(), repo.count());
    print_rows(view.visible());
    print_totals(&view.totals());
    Ok(())
}

/// Unlike the TUI, an unreachable store fails the command so the exit status shows it.
fn run_report(window: &ReportWindow, repo: &Repository) -> Result<Report> {
    let today = chrono::Local::now().date_naive();
    reports::run(window, repo, today).context("Could not run report")
}

fn cli_report(window: &str, query: Option<&str>, repo: &Repository) -> Result<()> {
    let window = if window.eq_ignore_ascii_case("vendor") {
        ReportWindow::vendor(query.unwrap_or_default())
    } else {
        ReportWindow::parse(window).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown report '{window}' (use month-to-date, previous-month, year-to-date, previous-year or vendor <QUERY>)"
            )
        })?
    };
    print_report(&run_report(&window, repo)?);
    Ok(())
}

fn cli_export(path: &std::path::Path, kind: &str, vendor: &str, repo: &Repository) -> Result<()> {
    let view = load_ledger(kind, vendor, repo)?;
    let count = export::export_to_path(path, view.visible())?;
    println!("Exported {count} transactions to {}", path.display());
    Ok(())
}

fn print_rows(txns: &[Transaction]) {
    println!(
        "{:<10} | {:<8} | {:<20} | {:<16} | Amount",
        "Date", "Time", "Description", "Vendor"
    );
    println!("{}", "─".repeat(74));
    for txn in txns {
        println!("{txn}");
    }
    println!("{}", "─".repeat(74));
}

fn print_totals(totals: &Totals) {
    println!("  Deposits:  {}", format_amount(totals.income));
    println!("  Payments:  {}", format_amount(totals.expenses));
    println!("  Net:       {}", format_amount(totals.net));
}

fn print_report(report: &Report) {
    println!("========== {} ==========", report.title);
    if report.transactions.is_empty() {
        println!("No matching transactions found.");
    } else {
        print_rows(&report.transactions);
    }
    println!("Total: {}", format_amount(report.total));
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

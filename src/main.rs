mod config;
mod db;
mod entry;
mod error;
mod export;
mod ledger;
mod logging;
mod models;
mod reports;
mod repository;
mod run;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::config::{ConfigOverrides, StoreConfig};
use crate::db::Store;
use crate::repository::Repository;

const LOG_FILE: &str = "ledgertui.log";

#[derive(Parser, Debug)]
#[command(name = "ledgertui", version)]
#[command(about = "Personal account ledger: record deposits and payments, filter, run reports")]
struct Args {
    /// Database location (path or sqlite:// URL). Env: LEDGER_DB_URL
    #[arg(long, global = true)]
    db_url: Option<String>,
    /// Database user. Env: LEDGER_DB_USER
    #[arg(long, global = true)]
    db_user: Option<String>,
    /// Database password. Env: LEDGER_DB_PASSWORD
    #[arg(long, global = true)]
    db_password: Option<String>,
    /// Log filter, e.g. `info` or `ledgertui=debug`. Defaults to RUST_LOG, then `warn`
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Without a command the interactive TUI starts
    #[command(subcommand)]
    command: Option<run::Command>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = args.log_level.as_deref();
    match args.command {
        Some(_) => logging::init_stderr(level),
        None => logging::init_file(level, &config::data_dir()?.join(LOG_FILE))?,
    }

    let overrides = ConfigOverrides {
        url: args.db_url,
        user: args.db_user,
        password: args.db_password,
    };
    let config = StoreConfig::from_env(&overrides)?;
    debug!(?config, "resolved store config");

    let repo = Repository::new(Store::new(config));
    repo.ensure_schema();

    match args.command {
        Some(command) => run::as_cli(command, &repo),
        None => run::as_tui(&repo),
    }
}

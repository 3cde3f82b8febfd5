use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const ENV_URL: &str = "LEDGER_DB_URL";
pub(crate) const ENV_USER: &str = "LEDGER_DB_USER";
pub(crate) const ENV_PASSWORD: &str = "LEDGER_DB_PASSWORD";

const DEFAULT_USER: &str = "root";
const DB_FILE: &str = "ledger.db";
const URL_SCHEME: &str = "sqlite://";

/// Values given explicitly at startup (command-line flags). They win over everything else.
#[derive(Debug, Clone, Default)]
pub(crate) struct ConfigOverrides {
    pub(crate) url: Option<String>,
    pub(crate) user: Option<String>,
    pub(crate) password: Option<String>,
}

/// Connection settings for the record store, resolved once and passed in.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct StoreConfig {
    pub(crate) url: String,
    pub(crate) user: String,
    pub(crate) password: String,
}

impl StoreConfig {
    /// Override > environment > built-in default, per field.
    ///
    /// A blank user from the environment is ignored; a blank password is a
    /// legitimate value and is kept.
    pub(crate) fn resolve<F>(overrides: &ConfigOverrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match overrides.url.clone().or_else(|| non_blank(env(ENV_URL))) {
            Some(url) => url,
            None => default_db_path()?.to_string_lossy().into_owned(),
        };
        let user = overrides
            .user
            .clone()
            .or_else(|| non_blank(env(ENV_USER)))
            .unwrap_or_else(|| DEFAULT_USER.to_string());
        let password = overrides
            .password
            .clone()
            .or_else(|| env(ENV_PASSWORD))
            .unwrap_or_default();

        Ok(Self {
            url,
            user,
            password,
        })
    }

    pub(crate) fn from_env(overrides: &ConfigOverrides) -> Result<Self> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Filesystem path of the database, with any `sqlite://` prefix removed.
    pub(crate) fn db_path(&self) -> PathBuf {
        PathBuf::from(self.url.strip_prefix(URL_SCHEME).unwrap_or(&self.url))
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let password = if self.password.is_empty() { "" } else { "***" };
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &password)
            .finish()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "ledgertui", "LedgerTUI")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}

fn default_db_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(DB_FILE))
}

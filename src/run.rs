mod cli;
mod tui;

pub(crate) use cli::{as_cli, Command};
pub(crate) use tui::as_tui;

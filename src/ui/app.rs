use chrono::{NaiveDate, NaiveDateTime};

use crate::entry::{self, EntryInput};
use crate::ledger::{KindFilter, LedgerFilter, LedgerView};
use crate::reports::{self, Report, ReportWindow};
use crate::repository::Repository;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Ledger,
    Add,
    Reports,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Ledger, Self::Add, Self::Reports]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ledger => write!(f, "Ledger"),
            Self::Add => write!(f, "Add"),
            Self::Reports => write!(f, "Reports"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Search,
    Editing,
    VendorPrompt,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Search => write!(f, "SEARCH"),
            Self::Editing => write!(f, "EDIT"),
            Self::VendorPrompt => write!(f, "VENDOR"),
        }
    }
}

/// Field with focus on the add form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AddField {
    Kind,
    Description,
    Vendor,
    Amount,
}

impl AddField {
    pub(crate) fn all() -> &'static [AddField] {
        &[Self::Kind, Self::Description, Self::Vendor, Self::Amount]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Kind => "Type",
            Self::Description => "Description",
            Self::Vendor => "Vendor",
            Self::Amount => "Amount",
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Self::Kind => Self::Description,
            Self::Description => Self::Vendor,
            Self::Vendor => Self::Amount,
            Self::Amount => Self::Kind,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Amount,
            Self::Description => Self::Kind,
            Self::Vendor => Self::Description,
            Self::Amount => Self::Vendor,
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) visible_rows: usize,

    // Ledger
    pub(crate) ledger: LedgerView,
    pub(crate) kind_filter: KindFilter,
    pub(crate) vendor_search: String,
    pub(crate) ledger_index: usize,
    pub(crate) ledger_scroll: usize,

    // Add
    pub(crate) form: EntryInput,
    pub(crate) form_field: AddField,

    // Reports
    pub(crate) report: Option<Report>,
    pub(crate) last_window: Option<ReportWindow>,
    pub(crate) vendor_prompt: String,
    pub(crate) report_index: usize,
    pub(crate) report_scroll: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Ledger,
            input_mode: InputMode::Normal,
            status_message: String::new(),
            show_help: false,
            visible_rows: 20,

            ledger: LedgerView::new(),
            kind_filter: KindFilter::All,
            vendor_search: String::new(),
            ledger_index: 0,
            ledger_scroll: 0,

            form: EntryInput {
                is_deposit: true,
                ..Default::default()
            },
            form_field: AddField::Description,

            report: None,
            last_window: None,
            vendor_prompt: String::new(),
            report_index: 0,
            report_scroll: 0,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    // ── Ledger ────────────────────────────────────────────────

    pub(crate) fn reload_ledger(&mut self, repo: &Repository) {
        match self.ledger.reload(repo) {
            Ok(()) => self.set_status(format!("Loaded {} transactions", self.ledger.all().len())),
            Err(e) => self.set_status(format!("Error: {e}")),
        }
        self.clamp_ledger_cursor();
    }

    /// Push the current kind + vendor criteria into the view model.
    pub(crate) fn apply_ledger_filter(&mut self) {
        self.ledger
            .set_ledger_filter(LedgerFilter::new(self.kind_filter, &self.vendor_search));
        self.clamp_ledger_cursor();
    }

    pub(crate) fn cycle_kind_filter(&mut self) {
        self.kind_filter = self.kind_filter.next();
        self.apply_ledger_filter();
        self.set_status(format!("Showing: {}", self.kind_filter));
    }

    pub(crate) fn clear_ledger_filter(&mut self) {
        self.kind_filter = KindFilter::All;
        self.vendor_search.clear();
        self.apply_ledger_filter();
    }

    fn clamp_ledger_cursor(&mut self) {
        let len = self.ledger.visible().len();
        if self.ledger_index >= len {
            self.ledger_index = len.saturating_sub(1);
        }
        if self.ledger_scroll > self.ledger_index {
            self.ledger_scroll = self.ledger_index;
        }
    }

    // ── Add ───────────────────────────────────────────────────

    pub(crate) fn form_field_mut(&mut self) -> Option<&mut String> {
        match self.form_field {
            AddField::Kind => None,
            AddField::Description => Some(&mut self.form.description),
            AddField::Vendor => Some(&mut self.form.vendor),
            AddField::Amount => Some(&mut self.form.amount),
        }
    }

    pub(crate) fn toggle_form_kind(&mut self) {
        self.form.is_deposit = !self.form.is_deposit;
    }

    /// On success the inputs clear; on failure they are kept and the reason shown.
    pub(crate) fn submit_form(&mut self, repo: &Repository, now: NaiveDateTime) {
        match entry::submit(&self.form, now, &mut self.ledger, repo) {
            Ok(txn) => {
                self.form.description.clear();
                self.form.vendor.clear();
                self.form.amount.clear();
                self.form_field = AddField::Description;
                self.clamp_ledger_cursor();
                self.set_status(format!(
                    "Transaction saved successfully! {} {:.2}",
                    txn.vendor, txn.amount
                ));
            }
            Err(e) => self.set_status(format!("Error: {e}")),
        }
    }

    // ── Reports ───────────────────────────────────────────────

    pub(crate) fn run_report(&mut self, window: ReportWindow, repo: &Repository, today: NaiveDate) {
        let report = match reports::run(&window, repo, today) {
            Ok(report) => {
                self.set_status(format!(
                    "{}: {} transactions",
                    report.title,
                    report.transactions.len()
                ));
                report
            }
            Err(e) => {
                self.set_status(format!("Error: {e}"));
                Report::empty(window.title())
            }
        };
        self.report = Some(report);
        self.last_window = Some(window);
        self.report_index = 0;
        self.report_scroll = 0;
    }

    pub(crate) fn rerun_report(&mut self, repo: &Repository, today: NaiveDate) {
        match self.last_window.clone() {
            Some(window) => self.run_report(window, repo, today),
            None => self.set_status("Pick a report first"),
        }
    }

    pub(crate) fn report_len(&self) -> usize {
        self.report.as_ref().map_or(0, |r| r.transactions.len())
    }

    // ── Cursor movement ───────────────────────────────────────

    pub(crate) fn move_down(&mut self) {
        let page = self.visible_rows;
        match self.screen {
            Screen::Ledger => {
                let len = self.ledger.visible().len();
                scroll_down(&mut self.ledger_index, &mut self.ledger_scroll, len, page);
            }
            Screen::Reports => {
                let len = self.report_len();
                scroll_down(&mut self.report_index, &mut self.report_scroll, len, page);
            }
            Screen::Add => self.form_field = self.form_field.next(),
        }
    }

    pub(crate) fn move_up(&mut self) {
        match self.screen {
            Screen::Ledger => scroll_up(&mut self.ledger_index, &mut self.ledger_scroll),
            Screen::Reports => scroll_up(&mut self.report_index, &mut self.report_scroll),
            Screen::Add => self.form_field = self.form_field.prev(),
        }
    }

    pub(crate) fn goto_top(&mut self) {
        match self.screen {
            Screen::Ledger => scroll_to_top(&mut self.ledger_index, &mut self.ledger_scroll),
            Screen::Reports => scroll_to_top(&mut self.report_index, &mut self.report_scroll),
            Screen::Add => self.form_field = AddField::Kind,
        }
    }

    pub(crate) fn goto_bottom(&mut self) {
        let page = self.visible_rows;
        match self.screen {
            Screen::Ledger => {
                let len = self.ledger.visible().len();
                scroll_to_bottom(&mut self.ledger_index, &mut self.ledger_scroll, len, page);
            }
            Screen::Reports => {
                let len = self.report_len();
                scroll_to_bottom(&mut self.report_index, &mut self.report_scroll, len, page);
            }
            Screen::Add => self.form_field = AddField::Amount,
        }
    }
}

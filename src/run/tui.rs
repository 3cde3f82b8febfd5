use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use crate::reports::ReportWindow;
use crate::repository::Repository;
use crate::ui::app::{AddField, App, InputMode, Screen};

pub(crate) fn as_tui(repo: &Repository) -> Result<()> {
    let mut app = App::new();
    app.reload_ledger(repo);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("tui started");
    let result = run_app(&mut terminal, &mut app, repo);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    repo: &Repository,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // tab + status + command bars, filter and totals lines, borders and header
            let content_height = f.area().height.saturating_sub(8) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            handle_key(key, app, repo);
        }
    }
    Ok(())
}

fn handle_key(key: KeyEvent, app: &mut App, repo: &Repository) {
    if app.show_help {
        app.show_help = false;
        return;
    }
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app, repo),
        InputMode::Search => handle_search_input(key, app),
        InputMode::Editing => handle_editing_input(key, app, repo),
        InputMode::VendorPrompt => handle_vendor_prompt(key, app, repo),
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App, repo: &Repository) {
    match key.code {
        KeyCode::Char('1') => switch_screen(app, Screen::Ledger),
        KeyCode::Char('2') => switch_screen(app, Screen::Add),
        KeyCode::Char('3') => switch_screen(app, Screen::Reports),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            switch_screen(app, screens[(idx + 1) % screens.len()]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, screens[prev]);
        }
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') => app.goto_top(),
        KeyCode::Char('G') => app.goto_bottom(),
        KeyCode::Char('?') => app.show_help = true,
        _ => match app.screen {
            Screen::Ledger => handle_ledger_key(key, app, repo),
            Screen::Add => {
                if key.code == KeyCode::Enter || key.code == KeyCode::Char('i') {
                    app.input_mode = InputMode::Editing;
                }
            }
            Screen::Reports => handle_reports_key(key, app, repo),
        },
    }
}

fn handle_ledger_key(key: KeyEvent, app: &mut App, repo: &Repository) {
    match key.code {
        KeyCode::Char('t') => app.cycle_kind_filter(),
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
        }
        KeyCode::Char('r') => app.reload_ledger(repo),
        KeyCode::Esc => {
            app.clear_ledger_filter();
            app.set_status("Filters cleared");
        }
        _ => {}
    }
}

fn handle_reports_key(key: KeyEvent, app: &mut App, repo: &Repository) {
    let window = match key.code {
        KeyCode::Char('m') => ReportWindow::MonthToDate,
        KeyCode::Char('p') => ReportWindow::PreviousMonth,
        KeyCode::Char('y') => ReportWindow::YearToDate,
        KeyCode::Char('Y') => ReportWindow::PreviousYear,
        KeyCode::Char('v') => {
            app.vendor_prompt.clear();
            app.input_mode = InputMode::VendorPrompt;
            return;
        }
        KeyCode::Char('r') => {
            app.rerun_report(repo, today());
            return;
        }
        _ => return,
    };
    app.run_report(window, repo, today());
}

/// Live vendor search on the ledger: every keystroke re-filters.
fn handle_search_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.vendor_search.clear();
            app.apply_ledger_filter();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.vendor_search.pop();
            app.apply_ledger_filter();
        }
        KeyCode::Char(c) => {
            app.vendor_search.push(c);
            app.apply_ledger_filter();
        }
        _ => {}
    }
}

fn handle_editing_input(key: KeyEvent, app: &mut App, repo: &Repository) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            let now = chrono::Local::now().naive_local();
            app.submit_form(repo, now);
        }
        KeyCode::Up | KeyCode::BackTab => app.form_field = app.form_field.prev(),
        KeyCode::Down | KeyCode::Tab => app.form_field = app.form_field.next(),
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            if app.form_field == AddField::Kind =>
        {
            app.toggle_form_kind();
        }
        KeyCode::Backspace => {
            if let Some(field) = app.form_field_mut() {
                field.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(field) = app.form_field_mut() {
                field.push(c);
            }
        }
        _ => {}
    }
}

fn handle_vendor_prompt(key: KeyEvent, app: &mut App, repo: &Repository) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
            let window = ReportWindow::vendor(&app.vendor_prompt);
            app.run_report(window, repo, today());
        }
        KeyCode::Esc => {
            app.vendor_prompt.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.vendor_prompt.pop();
        }
        KeyCode::Char(c) => app.vendor_prompt.push(c),
        _ => {}
    }
}

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    app.status_message.clear();
    app.input_mode = if screen == Screen::Add {
        InputMode::Editing
    } else {
        InputMode::Normal
    };
}

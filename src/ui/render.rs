use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::theme;
use super::util::gap;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let num = i + 1;
            if *s == app.screen {
                Line::from(vec![
                    Span::styled(format!("{num}:"), theme::dim_style()),
                    Span::styled(
                        s.to_string(),
                        Style::default()
                            .fg(theme::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(format!("{num}:{s}"), theme::dim_style()))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Ledger => super::screens::ledger::render(f, area, app),
        Screen::Add => super::screens::add::render(f, area, app),
        Screen::Reports => super::screens::reports::render(f, area, app),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Search | InputMode::VendorPrompt => theme::YELLOW,
        InputMode::Editing => theme::GREEN,
    };
    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = format!(" {} | {} txns", app.screen, app.ledger.all().len());

    let right = match app.screen {
        Screen::Ledger => " t type | / vendor | r reload | ? help ",
        Screen::Add => " Enter save | Esc leave form | ? help ",
        Screen::Reports => " m p y Y v reports | r refresh | ? help ",
    };

    let left = format!("{mode_label}{info}");
    let pad = gap(area.width as usize, &left, right);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(info, theme::status_bar_style()),
        Span::styled(pad, theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Search => (
            Line::from(vec![
                Span::styled("/", Style::default().fg(theme::YELLOW)),
                Span::styled(app.vendor_search.as_str(), theme::command_bar_style()),
                Span::styled(
                    format!("  ({} matches)", app.ledger.visible().len()),
                    theme::dim_style(),
                ),
            ]),
            Some(1 + app.vendor_search.chars().count() as u16),
        ),
        InputMode::VendorPrompt => (
            Line::from(vec![
                Span::styled("vendor> ", Style::default().fg(theme::YELLOW)),
                Span::styled(app.vendor_prompt.as_str(), theme::command_bar_style()),
            ]),
            Some(8 + app.vendor_prompt.chars().count() as u16),
        ),
        InputMode::Normal | InputMode::Editing => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press 1-3 or Tab to switch tabs, ? for help, Ctrl-q to quit",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    app.status_message.as_str(),
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let rows: &[(&str, &[&str])] = &[
        (
            " Navigation",
            &[
                "  j/k or Up/Down   Move cursor           1-3        Switch tabs",
                "  Tab/Shift-Tab    Cycle tabs            g/G        Top/Bottom",
                "  Ctrl-q           Quit                  ?          This help",
            ],
        ),
        (
            " Ledger",
            &[
                "  t                Cycle All/Deposits/Payments",
                "  /                Vendor search (live)  Esc        Clear filters",
                "  r                Reload from the database",
            ],
        ),
        (
            " Add",
            &[
                "  Up/Down          Change field          Space      Deposit/Payment",
                "  Enter            Save transaction      Esc        Leave the form",
            ],
        ),
        (
            " Reports",
            &[
                "  m / p            Month to date / Previous month",
                "  y / Y            Year to date / Previous year",
                "  v                Search by vendor      r          Re-run last report",
            ],
        ),
    ];

    let mut help_text = vec![
        Line::from(Span::styled(
            " LedgerTUI Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (section, lines) in rows {
        help_text.push(Line::from(Span::styled(*section, theme::section_style())));
        for line in *lines {
            help_text.push(Line::from(Span::styled(*line, theme::normal_style())));
        }
        help_text.push(Line::from(""));
    }
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}

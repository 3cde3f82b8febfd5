use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter line
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Totals
        ])
        .split(area);

    render_filter_line(f, chunks[0], app);

    let visible = app.ledger.visible();
    let title = format!(" Ledger ({} of {}) ", visible.len(), app.ledger.all().len());
    if visible.is_empty() {
        let hint: &[&str] = if app.ledger.all().is_empty() {
            &["No transactions yet", "Press 2 to add one"]
        } else {
            &["Nothing matches the current filter", "Press Esc to clear it"]
        };
        super::render_empty(f, chunks[1], title, hint);
    } else {
        super::render_transaction_table(
            f,
            chunks[1],
            title,
            visible,
            app.ledger_index,
            app.ledger_scroll,
        );
    }

    render_totals(f, chunks[2], app);
}

fn render_filter_line(f: &mut Frame, area: Rect, app: &App) {
    let vendor = if app.vendor_search.is_empty() {
        Span::styled("(any)", theme::dim_style())
    } else {
        Span::styled(format!("'{}'", app.vendor_search), theme::normal_style())
    };
    let line = Line::from(vec![
        Span::styled(" Type: ", theme::dim_style()),
        Span::styled(app.kind_filter.as_str(), theme::section_style()),
        Span::styled("   Vendor search: ", theme::dim_style()),
        vendor,
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_totals(f: &mut Frame, area: Rect, app: &App) {
    let totals = app.ledger.totals();
    let line = Line::from(vec![
        Span::styled(" Totals (visible rows):  ", theme::dim_style()),
        Span::styled("Deposits: ", theme::dim_style()),
        Span::styled(format_amount(totals.income), theme::amount_style(totals.income)),
        Span::styled("   Payments: ", theme::dim_style()),
        Span::styled(
            format_amount(totals.expenses),
            theme::amount_style(totals.expenses),
        ),
        Span::styled("   Net: ", theme::dim_style()),
        Span::styled(format_amount(totals.net), theme::amount_style(totals.net)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

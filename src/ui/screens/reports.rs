use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

const MENU: &[(&str, &str)] = &[
    ("m", "Month To Date"),
    ("p", "Previous Month"),
    ("y", "Year To Date"),
    ("Y", "Previous Year"),
    ("v", "Search Vendor"),
    ("r", "Refresh"),
];

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Menu
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Total
        ])
        .split(area);

    let mut menu = vec![Span::raw(" ")];
    for (key, label) in MENU {
        menu.push(Span::styled(key.to_string(), theme::section_style()));
        menu.push(Span::styled(format!(" {label}   "), theme::dim_style()));
    }
    f.render_widget(Paragraph::new(Line::from(menu)), chunks[0]);

    let Some(report) = &app.report else {
        super::render_empty(f, chunks[1], " Reports ".into(), &["Pick a report..."]);
        return;
    };

    let title = format!(" {} ({}) ", report.title, report.transactions.len());
    if report.transactions.is_empty() {
        super::render_empty(f, chunks[1], title, &["No matching transactions found."]);
    } else {
        super::render_transaction_table(
            f,
            chunks[1],
            title,
            &report.transactions,
            app.report_index,
            app.report_scroll,
        );
    }

    let total = Line::from(vec![
        Span::styled(" Total: ", theme::dim_style()),
        Span::styled(format_amount(report.total), theme::amount_style(report.total)),
    ]);
    f.render_widget(Paragraph::new(total), chunks[2]);
}

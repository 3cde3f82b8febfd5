pub(crate) mod add;
pub(crate) mod ledger;
pub(crate) mod reports;

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::models::Transaction;
use crate::ui::theme;
use crate::ui::util::{format_signed, truncate};

/// Date | Time | Description | Vendor | Amount, scrolled to `scroll` with `cursor` highlighted.
pub(crate) fn render_transaction_table(
    f: &mut Frame,
    area: Rect,
    title: String,
    txns: &[Transaction],
    cursor: usize,
    scroll: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(title, theme::title_style()));

    let header = Row::new(
        ["Date", "Time", "Description", "Vendor", "Amount"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::header_style())),
    )
    .height(1);

    let rows: Vec<Row> = txns
        .iter()
        .enumerate()
        .skip(scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == cursor {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(txn.date_str()),
                Cell::from(txn.time_str()),
                Cell::from(truncate(&txn.description, 36)),
                Cell::from(truncate(&txn.vendor, 24)),
                Cell::from(Span::styled(
                    format_signed(txn.amount),
                    theme::amount_style(txn.amount),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(11),
        Constraint::Length(9),
        Constraint::Min(20),
        Constraint::Length(24),
        Constraint::Length(14),
    ];

    f.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

/// Centered hint lines inside a bordered block, for empty states.
pub(crate) fn render_empty(f: &mut Frame, area: Rect, title: String, lines: &[&str]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(title, theme::title_style()));
    let mut text = vec![Line::from("")];
    for line in lines {
        text.push(Line::from(Span::styled(line.to_string(), theme::dim_style())));
        text.push(Line::from(""));
    }
    f.render_widget(Paragraph::new(text).centered().block(block), area);
}

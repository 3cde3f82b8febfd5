use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{AddField, App, InputMode};
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Editing;
    let mut lines = vec![Line::from("")];

    for field in AddField::all() {
        let focused = editing && *field == app.form_field;
        let label_style = if focused {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        let marker = if focused { "> " } else { "  " };

        let value = match field {
            AddField::Kind => kind_spans(app.form.is_deposit),
            AddField::Description => text_spans(&app.form.description, focused),
            AddField::Vendor => text_spans(&app.form.vendor, focused),
            AddField::Amount => text_spans(&app.form.amount, focused),
        };

        let mut spans = vec![Span::styled(
            format!("{marker}{:<13}", format!("{}:", field.label())),
            label_style,
        )];
        spans.extend(value);
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "  Enter saves. Payments are stored as negative amounts.",
        theme::dim_style(),
    )));
    lines.push(Line::from(Span::styled(
        "  Up/Down move between fields, Space toggles the type, Esc leaves the form.",
        theme::dim_style(),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(" Add Transaction ", theme::title_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn kind_spans(is_deposit: bool) -> Vec<Span<'static>> {
    let on = theme::selected_style();
    let off = theme::dim_style();
    vec![
        Span::styled(" Deposit ", if is_deposit { on } else { off }),
        Span::raw("  "),
        Span::styled(" Payment (Debit) ", if is_deposit { off } else { on }),
    ]
}

fn text_spans(value: &str, focused: bool) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(value.to_string(), theme::normal_style())];
    if focused {
        spans.push(Span::styled("_", Style::default().fg(theme::ACCENT)));
    }
    spans
}

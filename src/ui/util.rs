use rust_decimal::Decimal;

use crate::models::to_cents;

/// Money with thousands separators and cents, sign in front of the `$`:
/// `-1234.5` → `"-$1,234.50"`.
pub(crate) fn format_amount(val: Decimal) -> String {
    let rounded = to_cents(val);
    let formatted = format!("{:.2}", rounded.abs());
    let (int_part, cents) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Like [`format_amount`] but deposits carry an explicit `+`.
pub(crate) fn format_signed(val: Decimal) -> String {
    if val >= Decimal::ZERO {
        format!("+{}", format_amount(val))
    } else {
        format_amount(val)
    }
}

/// Cut to at most `max` characters, the last one being "…" when shortened.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max - 1).collect();
    format!("{kept}…")
}

/// Spaces needed so `left` and `right` fill `width` columns.
pub(crate) fn gap(width: usize, left: &str, right: &str) -> String {
    let used = left.chars().count() + right.chars().count();
    " ".repeat(width.saturating_sub(used))
}

pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page.saturating_sub(1));
        }
    }
}

pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}

//! Display formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use models::parse_timestamp;
use time::macros::format_description;

/// Placeholder rendered for absent values.
pub const MISSING: &str = "\u{2014}";

/// Format an amount in the display currency with two decimals.
#[must_use]
pub fn money(amount: f64) -> String {
    format!("\u{20B9} {amount:.2}")
}

/// Format an optional amount, falling back to the placeholder.
#[must_use]
pub fn opt_money(amount: Option<f64>) -> String {
    amount.map_or_else(|| MISSING.to_owned(), money)
}

/// Render an optional text cell, trimming and falling back to the
/// placeholder when empty.
#[must_use]
pub fn opt_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_owned(),
        _ => MISSING.to_owned(),
    }
}

/// Render a transfer counterparty cell: account number plus bank when
/// both are known. Non-transfer rows carry neither and get the
/// placeholder.
#[must_use]
pub fn recipient(account: Option<&str>, bank: Option<&str>) -> String {
    let account = account.map(str::trim).filter(|s| !s.is_empty());
    let bank = bank.map(str::trim).filter(|s| !s.is_empty());
    match (account, bank) {
        (Some(account), Some(bank)) => format!("{account} ({bank})"),
        (Some(text), None) | (None, Some(text)) => text.to_owned(),
        (None, None) => MISSING.to_owned(),
    }
}

/// Render a backend timestamp for display.
///
/// Parseable values are normalized to `YYYY-MM-DD HH:MM`; anything the
/// parser rejects is shown verbatim so no ledger row loses its raw value.
#[must_use]
pub fn timestamp(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return MISSING.to_owned();
    };
    match parse_timestamp(raw) {
        Some(instant) => instant
            .format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
            .unwrap_or_else(|_| raw.to_owned()),
        None => raw.to_owned(),
    }
}

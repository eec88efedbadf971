//! Date-range filtering over ledger rows.
//!
//! Bounds are calendar dates interpreted as whole UTC days, both ends
//! inclusive. With no bounds set the filter is the identity, so rows whose
//! timestamps the parser rejects still appear in an unfiltered statement;
//! once either bound is set, unparseable rows are excluded rather than
//! guessed into the range.

#[cfg(test)]
#[path = "statement_test.rs"]
mod statement_test;

use models::Transaction;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Parse a `YYYY-MM-DD` form input into a bound. Blank means unset.
#[must_use]
pub fn parse_bound(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]")).ok()
}

fn within(instant: OffsetDateTime, from: Option<Date>, to: Option<Date>) -> bool {
    let day = instant.date();
    if let Some(from) = from {
        if day < from {
            return false;
        }
    }
    if let Some(to) = to {
        if day > to {
            return false;
        }
    }
    true
}

/// Filter ledger rows to the inclusive `[from, to]` day range.
#[must_use]
pub fn filter_by_date_range(rows: &[Transaction], from: Option<Date>, to: Option<Date>) -> Vec<Transaction> {
    if from.is_none() && to.is_none() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.parsed_timestamp().is_some_and(|instant| within(instant, from, to)))
        .cloned()
        .collect()
}

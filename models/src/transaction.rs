//! The canonical transaction type and timestamp normalization.
//!
//! DESIGN
//! ======
//! The backend is inconsistent about where it puts a transaction's
//! timestamp (`date`, `time`, `createdAt`, or `transactionDate` depending
//! on the endpoint). Rather than repeating fallback lookups in every page,
//! the raw alternatives are captured here and [`Transaction::timestamp`]
//! resolves them once. Everything downstream works with the resolved value.

#[cfg(test)]
#[path = "transaction_test.rs"]
mod transaction_test;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Ledger entry type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Transfer,
}

impl TransactionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdraw => "WITHDRAW",
            Self::Transfer => "TRANSFER",
        }
    }
}

/// One ledger entry, append-only from the client's perspective.
///
/// `balance` is the server-supplied post-transaction balance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<TransactionKind>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub recipient_bank: Option<String>,
    #[serde(default)]
    pub recipient_account: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub transaction_date: Option<String>,
}

impl Transaction {
    /// The first non-empty of the alternative timestamp fields.
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        [&self.date, &self.time, &self.created_at, &self.transaction_date]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }

    /// The resolved timestamp parsed to an instant, if it parses at all.
    #[must_use]
    pub fn parsed_timestamp(&self) -> Option<OffsetDateTime> {
        self.timestamp().and_then(parse_timestamp)
    }
}

/// `POST /api/transfer` request body.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub sender_account_number: String,
    pub receiver_account_number: String,
    pub ifsc_code: String,
    pub amount: f64,
    pub purpose: String,
}

/// Parse a backend timestamp into an instant.
///
/// Accepts RFC 3339, `T`- or space-separated naive datetimes with optional
/// subseconds, and bare `YYYY-MM-DD` dates. Naive values are taken as UTC,
/// matching how the backend serializes its local datetimes.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }

    let datetime_formats = [
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    ];
    for format in datetime_formats {
        if let Ok(parsed) = PrimitiveDateTime::parse(raw, format) {
            return Some(parsed.assume_utc());
        }
    }

    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_utc())
}

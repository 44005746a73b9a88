use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A financial transaction on a customer account, as returned by the
/// transaction-listing endpoint.
///
/// `status` and `type` are kept as plain strings rather than enums: the
/// server's casing and vocabulary are part of what the suites assert, so
/// values must survive the round trip untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier for the transaction.
    pub transaction_id: String,

    /// Signed amount. Negative for debits, positive for credits.
    pub amount: f64,

    /// Currency code (e.g. "GBP").
    pub currency: String,

    /// Merchant name. May be null.
    pub merchant_name: Option<String>,

    /// Transaction instant, ISO 8601 with offset
    /// (e.g. "2025-06-06T00:00:00+00:00").
    pub timestamp: DateTime<FixedOffset>,

    /// "Pending" or "Booked".
    pub status: String,

    /// "Debit" or "Credit".
    #[serde(rename = "type")]
    pub tx_type: String,

    /// Sub-type, e.g. "Card Payment" or "ATM Withdrawal".
    pub sub_type: String,

    /// Numeric category, 1 to 20 inclusive.
    pub category_id: i64,

    /// Description supplied by the merchant or provider.
    pub description: Option<String>,
}

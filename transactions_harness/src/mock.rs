//! A wiremock responder that emulates the documented behavior of the remote
//! transactions endpoint: query-parameter validation with the exact 400
//! messages the real API returns, filter semantics, and contract ordering
//! of the result list.
//!
//! The core client passes every parameter through unmodified, so the suites
//! can drive the full request/response cycle against this mock and assert
//! the same things the live-API suites assert.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;
use transactions_api::types::Transaction;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// In-memory transaction store keyed by customer id, mountable as the
/// `/transactions` endpoint of a [`MockServer`].
#[derive(Default)]
pub struct TransactionsMock {
    customers: HashMap<String, Vec<Transaction>>,
}

impl TransactionsMock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a customer and their transaction history. Customers not
    /// registered here but queried with a well-formed guid get an empty list.
    pub fn with_customer(mut self, customer_id: &str, transactions: Vec<Transaction>) -> Self {
        self.customers
            .insert(customer_id.to_string(), transactions);
        self
    }

    /// Mounts this contract on `server` as `GET /transactions`.
    pub async fn mount(self, server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/transactions"))
            .respond_with(self)
            .mount(server)
            .await;
    }
}

impl Respond for TransactionsMock {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let params: HashMap<String, String> = request.url.query_pairs().into_owned().collect();

        let Some(customer_id) = params.get("customerId") else {
            return bad_request("Missing customerId query parameter");
        };
        if !is_guid(customer_id) {
            return bad_request("Invalid customerId guid format");
        }

        let category_id = match params.get("categoryId") {
            None => None,
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) if (1..=20).contains(&n) => Some(n),
                _ => return bad_request("categoryId must be an integer between 1 and 20"),
            },
        };

        let from_date = match parse_date(&params, "fromDate") {
            Ok(date) => date,
            Err(()) => return bad_request("fromDate must be in YYYY-MM-DD format"),
        };
        let to_date = match parse_date(&params, "toDate") {
            Ok(date) => date,
            Err(()) => return bad_request("toDate must be in YYYY-MM-DD format"),
        };
        if let (Some(from), Some(to)) = (from_date, to_date) {
            if to < from {
                return bad_request("toDate must be after fromDate (or on the same day)");
            }
        }

        let include_pending = flag(&params, "includePending");
        let include_debit = flag(&params, "includeDebit");
        let include_credit = flag(&params, "includeCredit");

        let mut transactions: Vec<Transaction> = self
            .customers
            .get(customer_id)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|tx| include_pending || !tx.status.eq_ignore_ascii_case("pending"))
            .filter(|tx| include_debit || !tx.tx_type.eq_ignore_ascii_case("debit"))
            .filter(|tx| include_credit || !tx.tx_type.eq_ignore_ascii_case("credit"))
            .filter(|tx| category_id.map_or(true, |id| tx.category_id == id))
            .filter(|tx| {
                let date = tx.timestamp.date_naive();
                from_date.map_or(true, |from| date >= from)
                    && to_date.map_or(true, |to| date <= to)
            })
            .collect();
        transactions.sort_by(contract_order);

        ResponseTemplate::new(200).set_body_json(&transactions)
    }
}

/// The documented sort: pending before booked, timestamp descending within
/// each group, then merchant name nulls-first ascending (case-insensitive)
/// at equal timestamps.
fn contract_order(a: &Transaction, b: &Transaction) -> Ordering {
    let rank = |tx: &Transaction| u8::from(!tx.status.eq_ignore_ascii_case("pending"));
    rank(a)
        .cmp(&rank(b))
        .then_with(|| b.timestamp.cmp(&a.timestamp))
        .then_with(|| match (&a.merchant_name, &b.merchant_name) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        })
}

/// The remote API returns its 400 messages as a JSON-encoded bare string.
fn bad_request(message: &str) -> ResponseTemplate {
    tracing::debug!("rejecting request: {}", message);
    ResponseTemplate::new(400).set_body_string(format!("\"{message}\""))
}

fn parse_date(params: &HashMap<String, String>, key: &str) -> Result<Option<NaiveDate>, ()> {
    match params.get(key) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ()),
    }
}

/// Boolean query flags default to true when absent, matching the API docs.
fn flag(params: &HashMap<String, String>, key: &str) -> bool {
    params.get(key).map(|v| v != "false").unwrap_or(true)
}

fn is_guid(s: &str) -> bool {
    if s.len() != 36 {
        return false;
    }
    s.char_indices().all(|(i, c)| match i {
        8 | 13 | 18 | 23 => c == '-',
        _ => c.is_ascii_hexdigit(),
    })
}

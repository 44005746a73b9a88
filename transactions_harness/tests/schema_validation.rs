//! Schema conformance: response bodies must match the checked-in
//! transaction schema.

mod common;

use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use transactions_api::TransactionQuery;

fn schema_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("schema").join(name)
}

fn load_schema(name: &str) -> Value {
    let path = schema_path(name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("read schema {}: {}", path.display(), e));
    serde_json::from_str(&text).expect("schema is valid JSON")
}

#[tokio::test]
async fn transaction_responses_conform_to_schema() {
    let harness = common::setup().await;
    let schema = load_schema("transaction.schema.json");
    let validator =
        jsonschema::draft202012::new(&schema).expect("transaction schema compiles");

    for customer_id in &harness.customers.valid_data {
        let query = TransactionQuery::default().with_customer_id(customer_id);
        let resp = harness.client.get_transactions(&query).await.unwrap();
        assert!(resp.is_success());

        let body: Value = serde_json::from_str(&resp.body).expect("body is valid JSON");
        if let Err(e) = validator.validate(&body) {
            panic!("response for customer {customer_id} failed validation: {e}");
        }
    }
}

#[tokio::test]
async fn empty_response_conforms_to_schema() {
    let harness = common::setup().await;
    let schema = load_schema("transaction.schema.json");
    let validator =
        jsonschema::draft202012::new(&schema).expect("transaction schema compiles");

    let customer_id = &harness.customers.no_data[0];
    let query = TransactionQuery::default().with_customer_id(customer_id);
    let resp = harness.client.get_transactions(&query).await.unwrap();

    let body: Value = serde_json::from_str(&resp.body).expect("body is valid JSON");
    assert!(validator.is_valid(&body));
}

#[test]
fn schema_rejects_out_of_range_category_and_unknown_status() {
    let schema = load_schema("transaction.schema.json");
    let validator =
        jsonschema::draft202012::new(&schema).expect("transaction schema compiles");

    let bad_category = json!([{
        "transactionId": "t1",
        "amount": -1.0,
        "currency": "GBP",
        "merchantName": null,
        "timestamp": "2025-06-01T00:00:00+00:00",
        "status": "Booked",
        "type": "Debit",
        "subType": "Card Payment",
        "categoryId": 232323,
        "description": "out of range"
    }]);
    assert!(!validator.is_valid(&bad_category));

    let bad_status = json!([{
        "transactionId": "t2",
        "amount": -1.0,
        "currency": "GBP",
        "merchantName": null,
        "timestamp": "2025-06-01T00:00:00+00:00",
        "status": "Settled",
        "type": "Debit",
        "subType": "Card Payment",
        "categoryId": 2,
        "description": "unknown status"
    }]);
    assert!(!validator.is_valid(&bad_status));

    let missing_field = json!([{
        "amount": -1.0,
        "currency": "GBP",
        "timestamp": "2025-06-01T00:00:00+00:00",
        "status": "Booked",
        "type": "Debit",
        "subType": "Card Payment",
        "categoryId": 2
    }]);
    assert!(!validator.is_valid(&missing_field));
}

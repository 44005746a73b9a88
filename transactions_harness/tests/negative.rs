//! Negative suites: the documented 400 responses for malformed parameters.
//! The core client passes every value through unmodified; the messages
//! asserted here are the ones the remote API documents.

mod common;

use common::error_message;
use transactions_api::TransactionQuery;

#[tokio::test]
async fn malformed_customer_ids_are_rejected_as_invalid_guids() {
    let harness = common::setup().await;

    for customer_id in &harness.customers.invalid_data {
        let query = TransactionQuery::default().with_customer_id(customer_id);
        let resp = harness.client.get_transactions(&query).await.unwrap();

        assert_eq!(resp.status.as_u16(), 400, "customer {customer_id}");
        assert_eq!(
            error_message(&resp.body),
            "Invalid customerId guid format",
            "customer {customer_id}"
        );
    }
}

#[tokio::test]
async fn missing_customer_id_is_rejected() {
    let harness = common::setup().await;

    let resp = harness
        .client
        .get_transactions(&TransactionQuery::default())
        .await
        .unwrap();

    assert_eq!(resp.status.as_u16(), 400);
    assert_eq!(error_message(&resp.body), "Missing customerId query parameter");
}

#[tokio::test]
async fn empty_customer_id_is_omitted_and_rejected_as_missing() {
    let harness = common::setup().await;

    // An empty string never reaches the wire, so the server sees no
    // customerId at all.
    let query = TransactionQuery::default().with_customer_id("");
    let resp = harness.client.get_transactions(&query).await.unwrap();

    assert_eq!(resp.status.as_u16(), 400);
    assert_eq!(error_message(&resp.body), "Missing customerId query parameter");
}

#[tokio::test]
async fn malformed_from_date_is_rejected() {
    let harness = common::setup().await;
    let customer_id = &harness.customers.valid_data[0];

    let query = TransactionQuery::default()
        .with_customer_id(customer_id)
        .with_from_date("2022");
    let resp = harness.client.get_transactions(&query).await.unwrap();

    assert_eq!(resp.status.as_u16(), 400);
    assert_eq!(
        error_message(&resp.body),
        "fromDate must be in YYYY-MM-DD format"
    );
}

#[tokio::test]
async fn malformed_to_date_is_rejected() {
    let harness = common::setup().await;
    let customer_id = &harness.customers.valid_data[0];

    let query = TransactionQuery::default()
        .with_customer_id(customer_id)
        .with_to_date("01-06-2025");
    let resp = harness.client.get_transactions(&query).await.unwrap();

    assert_eq!(resp.status.as_u16(), 400);
    assert_eq!(
        error_message(&resp.body),
        "toDate must be in YYYY-MM-DD format"
    );
}

#[tokio::test]
async fn category_id_above_range_is_rejected() {
    let harness = common::setup().await;
    let customer_id = &harness.customers.valid_data[0];

    let query = TransactionQuery::default()
        .with_customer_id(customer_id)
        .with_category_id(232323);
    let resp = harness.client.get_transactions(&query).await.unwrap();

    assert_eq!(resp.status.as_u16(), 400);
    assert_eq!(
        error_message(&resp.body),
        "categoryId must be an integer between 1 and 20"
    );
}

#[tokio::test]
async fn negative_category_id_is_rejected() {
    let harness = common::setup().await;
    let customer_id = &harness.customers.valid_data[0];

    let query = TransactionQuery::default()
        .with_customer_id(customer_id)
        .with_category_id(-33);
    let resp = harness.client.get_transactions(&query).await.unwrap();

    assert_eq!(resp.status.as_u16(), 400);
    assert_eq!(
        error_message(&resp.body),
        "categoryId must be an integer between 1 and 20"
    );
}

#[tokio::test]
async fn to_date_before_from_date_is_rejected() {
    let harness = common::setup().await;
    let customer_id = &harness.customers.valid_data[0];

    let query = TransactionQuery::default()
        .with_customer_id(customer_id)
        .with_from_date("2025-06-10")
        .with_to_date("2025-06-01");
    let resp = harness.client.get_transactions(&query).await.unwrap();

    assert_eq!(resp.status.as_u16(), 400);
    assert_eq!(
        error_message(&resp.body),
        "toDate must be after fromDate (or on the same day)"
    );
}

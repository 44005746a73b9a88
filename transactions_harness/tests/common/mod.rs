#![allow(dead_code)]

use transactions_api::Client;
use transactions_harness::mock::TransactionsMock;
use transactions_harness::testdata::{self, CustomerTestData};
use transactions_harness::init_tracing;
use wiremock::MockServer;

pub struct Harness {
    pub server: MockServer,
    pub client: Client,
    pub customers: CustomerTestData,
}

/// Starts a mock transactions endpoint seeded with the checked-in customer
/// test data: every `ValidData` customer gets the sample history, every
/// `NoData` customer an empty one.
pub async fn setup() -> Harness {
    init_tracing();
    let customers = CustomerTestData::load_default().unwrap();
    let transactions = testdata::sample_transactions().unwrap();

    let mut mock = TransactionsMock::new();
    for id in &customers.valid_data {
        mock = mock.with_customer(id, transactions.clone());
    }
    for id in &customers.no_data {
        mock = mock.with_customer(id, Vec::new());
    }

    let server = MockServer::start().await;
    mock.mount(&server).await;
    let client = Client::new(&server.uri()).unwrap();

    Harness {
        server,
        client,
        customers,
    }
}

/// The remote API wraps its 400 messages in JSON string quotes.
pub fn error_message(body: &str) -> &str {
    body.trim_matches('"')
}

//! File-based customer test data, shared by the suites.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use transactions_api::types::Transaction;

/// Customer ids used by the suites, grouped by expected behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerTestData {
    /// Valid ids for customers with no transactions.
    #[serde(rename = "NoData")]
    pub no_data: Vec<String>,
    /// Valid ids for customers with transaction history.
    #[serde(rename = "ValidData")]
    pub valid_data: Vec<String>,
    /// Ids the API must reject as malformed.
    #[serde(rename = "InvalidData")]
    pub invalid_data: Vec<String>,
}

impl CustomerTestData {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading customer test data from {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("parsing customer test data from {}", path.display()))
    }

    /// Loads the checked-in `testdata/customerTestData.json`.
    pub fn load_default() -> anyhow::Result<Self> {
        Self::load(&default_path())
    }
}

pub fn default_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/customerTestData.json")
}

/// Loads the checked-in sample transaction history, used as the mock
/// server's dataset. The file is deliberately stored unsorted; the mock
/// applies the contract ordering before responding.
pub fn sample_transactions() -> anyhow::Result<Vec<Transaction>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/transactions.json");
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("reading sample transactions from {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("parsing sample transactions from {}", path.display()))
}

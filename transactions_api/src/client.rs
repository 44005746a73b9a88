//! HTTP client for the transaction-listing API.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{serialize, QueryPair, QueryParams, TransactionQuery},
    types::Transaction,
    Error,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_ENDPOINT: &str = "/transactions";

/// HTTP client for the transactions API.
///
/// Owns the transport defaults (base URL, 10-second timeout, JSON content
/// type) so no call site repeats them. Holds one pooled `reqwest::Client`,
/// which is documented safe for concurrent request dispatch, so a single
/// `Client` can be shared across test tasks.
pub struct Client {
    base_url: Url,
    endpoint: String,
    http: reqwest::Client,
}

/// An outbound request under construction: method, relative path, headers,
/// and the query pairs to append at dispatch time.
pub struct Request {
    method: Method,
    path: String,
    headers: Vec<(String, String)>,
    query: Vec<QueryPair>,
}

impl Request {
    /// Appends pre-serialized query pairs.
    pub fn with_query_pairs(mut self, pairs: Vec<QueryPair>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Serializes `params` and appends the resulting pairs.
    pub fn with_params<Q: QueryParams>(self, params: &Q) -> Result<Self, Error> {
        let pairs = serialize(params)?;
        Ok(self.with_query_pairs(pairs))
    }

    /// Adds a header, keeping the defaults in place.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// The outcome of one dispatched request.
///
/// 4xx/5xx responses are ordinary values here, with `data` left as `None`
/// and the raw body preserved verbatim so callers can assert on the remote
/// API's error messages.
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl Client {
    /// Creates a client with the fixed 10-second request timeout and the
    /// default `/transactions` endpoint.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom timeout. Tests use this to provoke
    /// [`Error::Timeout`] without waiting out the full 10 seconds.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        if base_url.trim().is_empty() {
            return Err(Error::InvalidConfiguration(
                "base URL cannot be empty".to_string(),
            ));
        }
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::InvalidConfiguration(format!("invalid base URL: {e}")))?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("failed to build HTTP client: {}", e);
                Error::InvalidConfiguration(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(Self {
            base_url,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http,
        })
    }

    /// Overrides the transaction-listing endpoint path.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Starts a request against `path`, pre-populated with
    /// `Content-Type: application/json`.
    pub fn new_request(&self, path: &str, method: Method) -> Result<Request, Error> {
        if path.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "request path cannot be empty".to_string(),
            ));
        }
        Ok(Request {
            method,
            path: path.to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            query: Vec::new(),
        })
    }

    /// Dispatches `request` and returns the structured outcome.
    ///
    /// Only transport-level problems become errors: a timeout maps to
    /// [`Error::Timeout`], other failures to [`Error::RequestFailed`], and a
    /// success-status body that does not match `T` to [`Error::Deserialize`].
    /// There are no retries; a failed call is reported once.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<ApiResponse<T>, Error> {
        let mut url = self
            .base_url
            .join(&request.path)
            .map_err(|e| Error::InvalidArgument(format!("invalid request path: {e}")))?;
        for pair in &request.query {
            url.query_pairs_mut().append_pair(&pair.key, &pair.value);
        }

        let mut builder = self.http.request(request.method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let resp = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                tracing::error!("request timed out: {}", e);
                Error::Timeout
            } else {
                tracing::error!("request failed: {}", e);
                Error::RequestFailed
            }
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        let data = if status.is_success() {
            Some(serde_json::from_str::<T>(&body).map_err(|e| {
                tracing::error!("failed to parse response body: {} | body: {}", e, body);
                Error::Deserialize(e)
            })?)
        } else {
            None
        };

        Ok(ApiResponse {
            status,
            headers,
            body,
            data,
        })
    }

    /// Fetches the transaction list for the given filter parameters.
    pub async fn get_transactions(
        &self,
        query: &TransactionQuery,
    ) -> Result<ApiResponse<Vec<Transaction>>, Error> {
        let endpoint = self.endpoint.clone();
        let request = self.new_request(&endpoint, Method::GET)?.with_params(query)?;
        self.execute(request).await
    }
}

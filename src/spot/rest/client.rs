//! Bitget REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::auth::{CredentialsProvider, SystemClock, TimestampProvider, encode_query, sign_request};
use crate::error::{BitgetError, error_codes};
use crate::spot::rest::account::AccountApi;
use crate::spot::rest::endpoints::{BITGET_BASE_URL, public};
use crate::spot::rest::market::MarketApi;
use crate::spot::rest::response::ApiResponse;

/// Query parameter type to name when calling [`SpotRestClient::get`] or
/// [`SpotRestClient::post`] without parameters.
pub type NoParams = [(&'static str, &'static str)];

/// The Bitget REST API client.
///
/// Every call made through [`get`](Self::get) and [`post`](Self::post) is
/// signed with the configured credentials and returns the raw
/// [`ApiResponse`]. Account and market wrappers are grouped under
/// [`account`](Self::account) and [`market`](Self::market).
///
/// Construction probes `/api/v2/public/time` once; the outcome is available
/// from [`is_connected`](Self::is_connected) and never prevents the client
/// from being used.
///
/// # Example
///
/// ```rust,no_run
/// use bitget_api_client::auth::StaticCredentials;
/// use bitget_api_client::spot::rest::SpotRestClient;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("key", "secret", "passphrase"));
///     let client = SpotRestClient::new(credentials).await;
///     println!("Reachable: {}", client.is_connected());
///
///     let response = client.account().info().await?;
///     println!("{}: {}", response.status(), response.body());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpotRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
    timestamp_provider: Arc<dyn TimestampProvider>,
    connected: bool,
}

impl SpotRestClient {
    /// Create a client with default settings and run the connectivity probe.
    pub async fn new(credentials: Arc<dyn CredentialsProvider>) -> Self {
        Self::builder(credentials).build().await
    }

    /// Create a new client builder.
    pub fn builder(credentials: Arc<dyn CredentialsProvider>) -> SpotRestClientBuilder {
        SpotRestClientBuilder::new(credentials)
    }

    /// Result of the connectivity probe made at construction.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Account and wallet endpoints.
    pub fn account(&self) -> AccountApi<'_> {
        AccountApi::new(self)
    }

    /// Market data endpoints.
    pub fn market(&self) -> MarketApi<'_> {
        MarketApi::new(self)
    }

    /// Probe the unauthenticated server time endpoint.
    ///
    /// Returns `true` only for HTTP 200 with a success `code` in the body.
    /// Every failure, including transport errors, yields `false`. The flag
    /// reported by [`is_connected`](Self::is_connected) is not updated.
    pub async fn ping(&self) -> bool {
        let url = format!("{}{}", self.base_url, public::TIME);

        let response = match self.http_client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Connectivity probe failed: {}", e);
                return false;
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Connectivity probe returned HTTP {}", status);
            return false;
        }

        match response.json::<Value>().await {
            Ok(body) if probe_succeeded(&body) => true,
            Ok(body) => {
                tracing::warn!("Connectivity probe returned error body: {}", body);
                false
            }
            Err(e) => {
                tracing::warn!("Connectivity probe returned malformed body: {}", e);
                false
            }
        }
    }

    /// Make a signed GET request.
    ///
    /// `params` are form-encoded in field order and appended to the path;
    /// `body` is sent verbatim. Both take part in the signature. `endpoint`
    /// is signed in its normalized form, so `/a b` is signed as `/a%20b`.
    pub async fn get<Q>(
        &self,
        endpoint: &str,
        params: Option<&Q>,
        body: Option<&str>,
    ) -> Result<ApiResponse, BitgetError>
    where
        Q: Serialize + ?Sized,
    {
        self.send_signed(Method::GET, endpoint, params, body).await
    }

    /// Make a signed POST request.
    ///
    /// `body` must already be serialized (usually JSON text); it is signed
    /// and sent byte for byte.
    pub async fn post<Q>(
        &self,
        endpoint: &str,
        params: Option<&Q>,
        body: Option<&str>,
    ) -> Result<ApiResponse, BitgetError>
    where
        Q: Serialize + ?Sized,
    {
        self.send_signed(Method::POST, endpoint, params, body).await
    }

    async fn send_signed<Q>(
        &self,
        method: Method,
        endpoint: &str,
        params: Option<&Q>,
        body: Option<&str>,
    ) -> Result<ApiResponse, BitgetError>
    where
        Q: Serialize + ?Sized,
    {
        let creds = self.credentials.get_credentials();
        let timestamp = self.timestamp_provider.now_millis();

        // Sign the path as it goes on the wire, after URL normalization.
        let query = encode_query(params)?;
        let url = Url::parse(&format!("{}{}{}", self.base_url, endpoint, query))?;
        let auth = sign_request(creds, timestamp, method.as_str(), url.path(), &query, body)?;

        tracing::debug!(%method, endpoint, timestamp, "Sending signed request");

        let mut request = self
            .http_client
            .request(method, url)
            .headers(auth.to_header_map()?);
        if let Some(body) = body {
            request = request.body(body.to_owned());
        }

        let response = request.send().await?;
        ApiResponse::read(response).await
    }
}

fn probe_succeeded(body: &Value) -> bool {
    match body.get("code") {
        Some(Value::String(code)) => code == error_codes::SUCCESS,
        Some(Value::Number(code)) => code.as_u64() == Some(0),
        _ => false,
    }
}

impl std::fmt::Debug for SpotRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotRestClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.credentials.get_credentials().api_key)
            .field("connected", &self.connected)
            .finish()
    }
}

/// Builder for [`SpotRestClient`].
pub struct SpotRestClientBuilder {
    base_url: String,
    credentials: Arc<dyn CredentialsProvider>,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl SpotRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(credentials: Arc<dyn CredentialsProvider>) -> Self {
        Self {
            base_url: BITGET_BASE_URL.to_string(),
            credentials,
            timestamp_provider: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a custom timestamp provider.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a total timeout per request. Defaults to the transport's default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client and run the connectivity probe.
    pub async fn build(self) -> SpotRestClient {
        let mut client = self.build_without_probe();
        client.connected = client.ping().await;
        client
    }

    fn build_without_probe(self) -> SpotRestClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("bitget-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("bitget-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = match reqwest_builder.build() {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(
                    "Failed to build HTTP client, falling back to defaults without timeout or user agent: {}",
                    e
                );
                reqwest::Client::new()
            }
        };

        // Tracing only; every call is a single attempt.
        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemClock::new()));

        SpotRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            timestamp_provider,
            connected: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{FixedTimestamp, StaticCredentials};

    fn offline_client() -> SpotRestClient {
        SpotRestClientBuilder::new(Arc::new(StaticCredentials::new("key", "secret", "pass")))
            .base_url("http://127.0.0.1:9/")
            .timestamp_provider(Arc::new(FixedTimestamp(1)))
            .build_without_probe()
    }

    #[test]
    fn test_probe_success_codes() {
        assert!(probe_succeeded(&serde_json::json!({"code": "00000", "data": {}})));
        assert!(probe_succeeded(&serde_json::json!({"code": 0})));
        assert!(!probe_succeeded(&serde_json::json!({"code": "40009"})));
        assert!(!probe_succeeded(&serde_json::json!({"code": 1})));
        assert!(!probe_succeeded(&serde_json::json!({"data": {}})));
        assert!(!probe_succeeded(&serde_json::json!([1, 2, 3])));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = offline_client();
        assert_eq!(client.base_url, "http://127.0.0.1:9");
        assert!(!client.is_connected());
    }

    #[test]
    fn test_debug_hides_secrets() {
        let debug_str = format!("{:?}", offline_client());
        assert!(debug_str.contains("key"));
        assert!(!debug_str.contains("secret"));
        assert!(!debug_str.contains("pass"));
    }
}

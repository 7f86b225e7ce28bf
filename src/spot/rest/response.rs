//! Raw responses and the Bitget response envelope.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, BitgetError, error_codes};
use crate::types::serde_helpers::{optional_millis, string_or_number};

/// A response exactly as the transport returned it.
///
/// Non-2xx statuses are not turned into errors; inspect [`status`](Self::status)
/// or decode the [`envelope`](Self::envelope) to find out how the call went.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl ApiResponse {
    /// Build from parts. Mostly useful for tests and mocks.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<String>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Read the status, headers and full body text from a transport response.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, BitgetError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        Ok(Self::new(status, headers, body))
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Consume and return the body text.
    pub fn into_body(self) -> String {
        self.body
    }

    /// Whether the HTTP status is 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON into any type.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, BitgetError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Decode the body as a Bitget envelope with `data` of type `T`.
    ///
    /// ```rust
    /// use bitget_api_client::spot::rest::ApiResponse;
    /// use reqwest::StatusCode;
    /// use reqwest::header::HeaderMap;
    ///
    /// let body = r#"{"code":"00000","msg":"success","requestTime":1700000000000,"data":{"serverTime":"1700000000000"}}"#;
    /// let response = ApiResponse::new(StatusCode::OK, HeaderMap::new(), body);
    /// let envelope = response.envelope::<serde_json::Value>().unwrap();
    /// assert!(envelope.is_success());
    /// assert_eq!(envelope.request_time, Some(1_700_000_000_000));
    /// ```
    pub fn envelope<T: DeserializeOwned>(&self) -> Result<Envelope<T>, BitgetError> {
        self.json()
    }
}

/// Bitget's standard response wrapper: `{code, msg, requestTime, data}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// `"00000"` on success.
    #[serde(deserialize_with = "string_or_number::deserialize")]
    pub code: String,
    /// Human-readable message.
    #[serde(default)]
    pub msg: String,
    /// Server time the request was handled, in milliseconds.
    #[serde(default, deserialize_with = "optional_millis::deserialize")]
    pub request_time: Option<u64>,
    /// Payload, absent on most errors. A missing field decodes as `None`.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Whether `code` denotes success. A numeric `0` counts as success too.
    pub fn is_success(&self) -> bool {
        self.code == error_codes::SUCCESS || self.code == "0"
    }

    /// Turn a non-success code into [`BitgetError::Api`] and return the payload
    /// otherwise.
    pub fn into_result(self) -> Result<Option<T>, BitgetError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(BitgetError::Api(ApiError::new(self.code, self.msg)))
        }
    }
}

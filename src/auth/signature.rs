//! HMAC-SHA256 signature generation for Bitget API authentication.
//!
//! Bitget signs every authenticated request over a pre-hash string built as:
//! ```text
//! timestamp + METHOD + requestPath + ("?" + queryString) + body
//! ```
//!
//! The pre-hash is signed with HMAC-SHA256 keyed by the raw API secret, and
//! the digest is base64-encoded into the `ACCESS-SIGN` header. There are no
//! separators between the fields; client and server must agree byte for byte.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::BitgetError;

type HmacSha256 = Hmac<Sha256>;

/// `ACCESS-KEY` header name.
pub const ACCESS_KEY: &str = "ACCESS-KEY";
/// `ACCESS-SIGN` header name.
pub const ACCESS_SIGN: &str = "ACCESS-SIGN";
/// `ACCESS-PASSPHRASE` header name.
pub const ACCESS_PASSPHRASE: &str = "ACCESS-PASSPHRASE";
/// `ACCESS-TIMESTAMP` header name.
pub const ACCESS_TIMESTAMP: &str = "ACCESS-TIMESTAMP";
/// `Content-Type` header name.
pub const CONTENT_TYPE: &str = "Content-Type";
/// Content type sent with every signed request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Serialize query parameters into the `?key=value&...` suffix used both in
/// the pre-hash and on the wire.
///
/// Field order of a struct (or element order of a sequence of pairs) is kept
/// as is. Values are form-encoded. Returns an empty string when there are no
/// parameters or they serialize to nothing.
///
/// ```rust
/// use bitget_api_client::auth::encode_query;
///
/// let params = [("coin", "USDT"), ("assetType", "hold_only")];
/// let query = encode_query(Some(&params[..])).unwrap();
/// assert_eq!(query, "?coin=USDT&assetType=hold_only");
/// ```
pub fn encode_query<Q>(params: Option<&Q>) -> Result<String, BitgetError>
where
    Q: Serialize + ?Sized,
{
    let Some(params) = params else {
        return Ok(String::new());
    };

    let encoded = serde_urlencoded::to_string(params)?;
    if encoded.is_empty() {
        Ok(encoded)
    } else {
        Ok(format!("?{encoded}"))
    }
}

/// Build the pre-hash string for a request.
///
/// `query` is the output of [`encode_query`] (empty or starting with `?`).
/// `body` is the exact text sent as the request body.
pub fn pre_hash(timestamp: u64, method: &str, endpoint: &str, query: &str, body: Option<&str>) -> String {
    format!(
        "{}{}{}{}{}",
        timestamp,
        method.to_uppercase(),
        endpoint,
        query,
        body.unwrap_or_default()
    )
}

/// HMAC-SHA256 the pre-hash with the secret and base64-encode the digest.
pub fn sign(secret: &str, pre_hash: &str) -> Result<String, BitgetError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| BitgetError::Auth(format!("Invalid HMAC key: {e}")))?;
    mac.update(pre_hash.as_bytes());
    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Sign a request for Bitget's API and assemble its authentication headers.
///
/// # Arguments
///
/// * `credentials` - API credentials containing key, secret and passphrase
/// * `timestamp` - Milliseconds since the UNIX epoch
/// * `method` - HTTP method (case-insensitive)
/// * `endpoint` - The API path (e.g., "/api/v2/spot/account/info")
/// * `query` - The encoded query suffix from [`encode_query`]
/// * `body` - The serialized request body, if any
///
/// # Example
///
/// ```rust
/// use bitget_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("key", "s", "passphrase");
/// let headers = sign_request(
///     &credentials,
///     1_700_000_000_000,
///     "GET",
///     "/api/v2/spot/account/info",
///     "",
///     None,
/// )?;
/// assert_eq!(headers.signature(), "4YqhV1weGHZhm5lZ8uMjhWUY9FbbncAQfIX9x7VtC8M=");
/// # Ok(())
/// # }
/// ```
pub fn sign_request<'a>(
    credentials: &'a Credentials,
    timestamp: u64,
    method: &str,
    endpoint: &str,
    query: &str,
    body: Option<&str>,
) -> Result<AuthHeaders<'a>, BitgetError> {
    let message = pre_hash(timestamp, method, endpoint, query, body);
    let signature = sign(credentials.expose_secret(), &message)?;

    Ok(AuthHeaders {
        credentials,
        signature,
        timestamp,
    })
}

/// The header set attached to a signed request.
pub struct AuthHeaders<'a> {
    credentials: &'a Credentials,
    signature: String,
    timestamp: u64,
}

impl AuthHeaders<'_> {
    /// The base64 signature sent as `ACCESS-SIGN`.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The timestamp that was signed and is sent as `ACCESS-TIMESTAMP`.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// The five header name/value pairs, in the order Bitget documents them.
    pub fn pairs(&self) -> [(&'static str, String); 5] {
        [
            (ACCESS_KEY, self.credentials.api_key.clone()),
            (ACCESS_SIGN, self.signature.clone()),
            (ACCESS_PASSPHRASE, self.credentials.expose_passphrase().to_string()),
            (ACCESS_TIMESTAMP, self.timestamp.to_string()),
            (CONTENT_TYPE, JSON_CONTENT_TYPE.to_string()),
        ]
    }

    /// Convert into a `HeaderMap` ready to attach to a request.
    ///
    /// The signature and passphrase values are marked sensitive so they are
    /// masked in `Debug` output.
    pub fn to_header_map(&self) -> Result<HeaderMap, BitgetError> {
        let mut headers = HeaderMap::with_capacity(5);
        for (name, value) in self.pairs() {
            let mut header_value = HeaderValue::from_str(&value)
                .map_err(|e| BitgetError::Auth(format!("Invalid {name} header value: {e}")))?;
            if name == ACCESS_SIGN || name == ACCESS_PASSPHRASE {
                header_value.set_sensitive(true);
            }
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| BitgetError::Auth(format!("Invalid header name {name}: {e}")))?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }
}

impl std::fmt::Debug for AuthHeaders<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthHeaders")
            .field("api_key", &self.credentials.api_key)
            .field("signature", &"[REDACTED]")
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFO: &str = "/api/v2/spot/account/info";

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct AssetsQuery {
        coin: Option<&'static str>,
        asset_type: &'static str,
    }

    #[test]
    fn test_pre_hash_without_params_or_body() {
        let message = pre_hash(1_700_000_000_000, "GET", INFO, "", None);
        assert_eq!(message, "1700000000000GET/api/v2/spot/account/info");
    }

    #[test]
    fn test_pre_hash_uppercases_method() {
        let message = pre_hash(1, "post", "/x", "", Some("{}"));
        assert_eq!(message, "1POST/x{}");
    }

    #[test]
    fn test_pre_hash_field_order() {
        let message = pre_hash(42, "POST", "/path", "?a=1", Some(r#"{"b":2}"#));
        assert_eq!(message, r#"42POST/path?a=1{"b":2}"#);
    }

    #[test]
    fn test_known_signature_vector() {
        let message = pre_hash(1_700_000_000_000, "GET", INFO, "", None);
        let signature = sign("s", &message).unwrap();
        assert_eq!(signature, "4YqhV1weGHZhm5lZ8uMjhWUY9FbbncAQfIX9x7VtC8M=");
    }

    #[test]
    fn test_known_signature_vector_with_query() {
        let query = encode_query(Some(&AssetsQuery {
            coin: Some("USDT"),
            asset_type: "hold_only",
        }))
        .unwrap();
        let message = pre_hash(1_700_000_000_000, "GET", "/api/v2/spot/account/assets", &query, None);
        assert_eq!(
            sign("s", &message).unwrap(),
            "GeBb5Uxv208x9z97hJF2hkJh4SgEA02AXP5k+tbDhFE="
        );
    }

    #[test]
    fn test_signature_consistency() {
        let credentials = Credentials::new("key", "my_secret", "pass");
        let sig1 = sign_request(&credentials, 12345, "GET", INFO, "?coin=BTC", None).unwrap();
        let sig2 = sign_request(&credentials, 12345, "GET", INFO, "?coin=BTC", None).unwrap();
        assert_eq!(sig1.signature(), sig2.signature());
    }

    #[test]
    fn test_signature_changes_with_each_input() {
        let credentials = Credentials::new("key", "my_secret", "pass");
        let base = sign_request(&credentials, 12345, "POST", INFO, "?coin=BTC", Some("{}"))
            .unwrap()
            .signature()
            .to_string();

        let variants = [
            sign_request(&credentials, 12346, "POST", INFO, "?coin=BTC", Some("{}")),
            sign_request(&credentials, 12345, "GET", INFO, "?coin=BTC", Some("{}")),
            sign_request(&credentials, 12345, "POST", "/api/v2/spot/account/assets", "?coin=BTC", Some("{}")),
            sign_request(&credentials, 12345, "POST", INFO, "?coin=ETH", Some("{}")),
            sign_request(&credentials, 12345, "POST", INFO, "?coin=BTC", Some(r#"{"a":1}"#)),
        ];

        for variant in variants {
            assert_ne!(variant.unwrap().signature(), base);
        }
    }

    #[test]
    fn test_signature_is_base64_sha256() {
        let signature = sign("secret", "payload").unwrap();
        let decoded = BASE64.decode(&signature).unwrap();
        assert_eq!(decoded.len(), 32);
        assert_eq!(signature.len(), 44);
    }

    #[test]
    fn test_encode_query_preserves_insertion_order() {
        let params = [("coin", "USDT"), ("assetType", "hold_only")];
        assert_eq!(
            encode_query(Some(&params[..])).unwrap(),
            "?coin=USDT&assetType=hold_only"
        );
    }

    #[test]
    fn test_encode_query_struct_field_order() {
        let query = AssetsQuery {
            coin: Some("USDT"),
            asset_type: "hold_only",
        };
        assert_eq!(
            encode_query(Some(&query)).unwrap(),
            "?coin=USDT&assetType=hold_only"
        );
    }

    #[test]
    fn test_encode_query_empty() {
        let empty: [(&str, &str); 0] = [];
        assert_eq!(encode_query(Some(&empty[..])).unwrap(), "");
        assert_eq!(encode_query::<[(&str, &str)]>(None).unwrap(), "");
    }

    #[test]
    fn test_encode_query_escapes_values() {
        let params = [("remark", "a b&c")];
        assert_eq!(encode_query(Some(&params[..])).unwrap(), "?remark=a+b%26c");
    }

    #[test]
    fn test_header_set() {
        let credentials = Credentials::new("my_key", "s", "my_pass");
        let headers = sign_request(&credentials, 1_700_000_000_000, "GET", INFO, "", None).unwrap();

        let map = headers.to_header_map().unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map["ACCESS-KEY"], "my_key");
        assert_eq!(map["ACCESS-SIGN"], "4YqhV1weGHZhm5lZ8uMjhWUY9FbbncAQfIX9x7VtC8M=");
        assert_eq!(map["ACCESS-PASSPHRASE"], "my_pass");
        assert_eq!(map["ACCESS-TIMESTAMP"], "1700000000000");
        assert_eq!(map["Content-Type"], "application/json");
        assert!(map["ACCESS-SIGN"].is_sensitive());
    }

    #[test]
    fn test_header_value_rejects_control_characters() {
        let credentials = Credentials::new("bad\nkey", "s", "pass");
        let headers = sign_request(&credentials, 1, "GET", INFO, "", None).unwrap();
        assert!(matches!(headers.to_header_map(), Err(BitgetError::Auth(_))));
    }

    #[test]
    fn test_auth_headers_debug_redacted() {
        let credentials = Credentials::new("key", "s", "pass");
        let headers = sign_request(&credentials, 1, "GET", INFO, "", None).unwrap();
        let debug_str = format!("{:?}", headers);
        assert!(!debug_str.contains(headers.signature()));
        assert!(!debug_str.contains("pass"));
    }
}

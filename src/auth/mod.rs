//! Authentication module for the Bitget API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Millisecond timestamps taken at signing time
//! - Pre-hash construction and HMAC-SHA256 signing
//! - Assembly of the `ACCESS-*` header set

mod credentials;
mod signature;
mod timestamp;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use signature::{
    ACCESS_KEY, ACCESS_PASSPHRASE, ACCESS_SIGN, ACCESS_TIMESTAMP, AuthHeaders, CONTENT_TYPE,
    JSON_CONTENT_TYPE, encode_query, pre_hash, sign, sign_request,
};
pub use timestamp::{FixedTimestamp, SystemClock, TimestampProvider};

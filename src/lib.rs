//! # Bitget Client
//!
//! An async Rust client library for the Bitget v2 REST API.
//!
//! ## Features
//!
//! - HMAC-SHA256 request signing with the `ACCESS-*` header set
//! - Account, wallet and spot market data wrappers
//! - Raw responses with opt-in envelope decoding
//! - Strong typing for request parameters
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bitget_api_client::auth::StaticCredentials;
//! use bitget_api_client::spot::rest::SpotRestClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = Arc::new(StaticCredentials::new("key", "secret", "passphrase"));
//!     let client = SpotRestClient::new(credentials).await;
//!     let response = client.market().tickers(Some("BTCUSDT")).await?;
//!     println!("{}", response.body());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod spot;
pub mod types;

// Re-export commonly used types at crate root
pub use error::BitgetError;
pub use types::common::{AccountType, AssetType, Granularity, TransferType};

/// Result type alias using BitgetError
pub type Result<T> = std::result::Result<T, BitgetError>;

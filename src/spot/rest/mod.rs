//! Bitget REST API client.
//!
//! [`SpotRestClient`] signs every request and hands back the raw
//! [`ApiResponse`]. Endpoint wrappers are grouped by concern:
//!
//! - [`account`] - account info, balances, bills, transfers, withdrawals, deposits
//! - [`market`] - symbols, tickers, depth, candles, trades
//!
//! ```rust,no_run
//! use bitget_api_client::auth::StaticCredentials;
//! use bitget_api_client::spot::rest::SpotRestClient;
//! use bitget_api_client::spot::rest::account::{AccountAssetsRequest, AssetBalance};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), bitget_api_client::BitgetError> {
//! let credentials = Arc::new(StaticCredentials::new("key", "secret", "passphrase"));
//! let client = SpotRestClient::new(credentials).await;
//!
//! let request = AccountAssetsRequest {
//!     coin: Some("USDT".to_string()),
//!     ..Default::default()
//! };
//! let response = client.account().assets(Some(&request)).await?;
//! let balances = response.envelope::<Vec<AssetBalance>>()?.into_result()?;
//! # Ok(())
//! # }
//! ```

pub mod account;
mod client;
pub mod endpoints;
pub mod market;
mod response;

pub use account::AccountApi;
pub use client::{NoParams, SpotRestClient, SpotRestClientBuilder};
pub use market::MarketApi;
pub use response::{ApiResponse, Envelope};

//! Market data endpoints.
//!
//! The exchange does not require authentication here, but every call still
//! goes through the signed [`SpotRestClient::get`] so headers are uniform.

mod types;

pub use types::*;

use serde::Serialize;

use crate::error::BitgetError;
use crate::spot::rest::client::NoParams;
use crate::spot::rest::endpoints::{market, public};
use crate::spot::rest::{ApiResponse, SpotRestClient};

#[derive(Serialize)]
struct SymbolParams<'a> {
    symbol: &'a str,
}

/// Market data operations.
#[derive(Debug, Clone, Copy)]
pub struct MarketApi<'a> {
    client: &'a SpotRestClient,
}

impl<'a> MarketApi<'a> {
    pub(crate) fn new(client: &'a SpotRestClient) -> Self {
        Self { client }
    }

    /// Get the server time.
    ///
    /// Unlike [`SpotRestClient::ping`] this returns the full response.
    pub async fn server_time(&self) -> Result<ApiResponse, BitgetError> {
        self.client.get::<NoParams>(public::TIME, None, None).await
    }

    /// Get symbol configuration.
    ///
    /// # Arguments
    ///
    /// * `symbol` - A single pair (e.g., "BTCUSDT"), or `None` for all.
    pub async fn symbols(&self, symbol: Option<&str>) -> Result<ApiResponse, BitgetError> {
        let params = symbol.map(|symbol| SymbolParams { symbol });
        self.client.get(public::SYMBOLS, params.as_ref(), None).await
    }

    /// Get ticker information.
    ///
    /// # Arguments
    ///
    /// * `symbol` - A single pair, or `None` for all.
    pub async fn tickers(&self, symbol: Option<&str>) -> Result<ApiResponse, BitgetError> {
        let params = symbol.map(|symbol| SymbolParams { symbol });
        self.client.get(market::TICKERS, params.as_ref(), None).await
    }

    /// Get merged depth.
    pub async fn merge_depth(&self, request: &MergeDepthRequest) -> Result<ApiResponse, BitgetError> {
        self.client.get(market::MERGE_DEPTH, Some(request), None).await
    }

    /// Get the order book.
    pub async fn orderbook(&self, request: &OrderbookRequest) -> Result<ApiResponse, BitgetError> {
        self.client.get(market::ORDERBOOK, Some(request), None).await
    }

    /// Get recent candlesticks.
    pub async fn candles(&self, request: &CandlesRequest) -> Result<ApiResponse, BitgetError> {
        self.client.get(market::CANDLES, Some(request), None).await
    }

    /// Get historical candlesticks.
    pub async fn history_candles(
        &self,
        request: &HistoryCandlesRequest,
    ) -> Result<ApiResponse, BitgetError> {
        self.client
            .get(market::HISTORY_CANDLES, Some(request), None)
            .await
    }

    /// Get recent trades.
    pub async fn fills(&self, request: &FillsRequest) -> Result<ApiResponse, BitgetError> {
        self.client.get(market::FILLS, Some(request), None).await
    }

    /// Get historical trades.
    pub async fn fills_history(
        &self,
        request: &FillsHistoryRequest,
    ) -> Result<ApiResponse, BitgetError> {
        self.client
            .get(market::FILLS_HISTORY, Some(request), None)
            .await
    }
}

//! Bitget v2 REST API endpoint constants.

/// Base URL for the Bitget REST API.
pub const BITGET_BASE_URL: &str = "https://api.bitget.com";

/// Public endpoints (no authentication required by the exchange).
pub mod public {
    /// Get server time. Also used as the connectivity probe.
    pub const TIME: &str = "/api/v2/public/time";
    /// Get spot symbol configuration.
    pub const SYMBOLS: &str = "/api/v2/spot/public/symbols";
}

/// Spot market data endpoints.
pub mod market {
    /// Get tickers.
    pub const TICKERS: &str = "/api/v2/spot/market/tickers";
    /// Get merged depth.
    pub const MERGE_DEPTH: &str = "/api/v2/spot/market/merge-depth";
    /// Get order book.
    pub const ORDERBOOK: &str = "/api/v2/spot/market/orderbook";
    /// Get recent candlesticks.
    pub const CANDLES: &str = "/api/v2/spot/market/candles";
    /// Get historical candlesticks.
    pub const HISTORY_CANDLES: &str = "/api/v2/spot/market/history-candles";
    /// Get recent trades.
    pub const FILLS: &str = "/api/v2/spot/market/fills";
    /// Get historical trades.
    pub const FILLS_HISTORY: &str = "/api/v2/spot/market/fills-history";
}

/// Account and wallet endpoints (authentication required).
pub mod account {
    /// Get account information.
    pub const INFO: &str = "/api/v2/spot/account/info";
    /// Get account assets.
    pub const ASSETS: &str = "/api/v2/spot/account/assets";
    /// Get account bills.
    pub const BILLS: &str = "/api/v2/spot/account/bills";
    /// Get transfer records.
    pub const TRANSFER_RECORDS: &str = "/api/v2/spot/account/transferRecords";
    /// Transfer between accounts.
    pub const TRANSFER: &str = "/api/v2/spot/wallet/transfer";
    /// Withdraw coins.
    pub const WITHDRAWAL: &str = "/api/v2/spot/wallet/withdrawal";
    /// Get deposit address.
    pub const DEPOSIT_ADDRESS: &str = "/api/v2/spot/wallet/deposit-address";
    /// Get deposit records.
    pub const DEPOSIT_RECORDS: &str = "/api/v2/spot/wallet/deposit-records";
    /// Get withdrawal records.
    pub const WITHDRAWAL_RECORDS: &str = "/api/v2/spot/wallet/withdrawal-records";
}

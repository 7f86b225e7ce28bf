//! Common domain types for the Bitget API.
//!
//! Each enum serializes to the literal string Bitget expects in query
//! parameters and JSON bodies.

use serde::{Deserialize, Serialize};

/// Which balances `/account/assets` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// Only coins with a non-zero position
    HoldOnly,
    /// Every coin
    All,
}

impl AssetType {
    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::HoldOnly => "hold_only",
            AssetType::All => "all",
        }
    }
}

/// Account (product line) used as a transfer source or destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Spot account
    Spot,
    /// P2P / funding account
    P2p,
    /// Coin-margined futures
    CoinFutures,
    /// USDT-margined futures
    UsdtFutures,
    /// USDC-margined futures
    UsdcFutures,
    /// Cross margin
    CrossedMargin,
    /// Isolated margin
    IsolatedMargin,
}

impl AccountType {
    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Spot => "spot",
            AccountType::P2p => "p2p",
            AccountType::CoinFutures => "coin_futures",
            AccountType::UsdtFutures => "usdt_futures",
            AccountType::UsdcFutures => "usdc_futures",
            AccountType::CrossedMargin => "crossed_margin",
            AccountType::IsolatedMargin => "isolated_margin",
        }
    }
}

/// Withdrawal route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    /// On-chain withdrawal to an external address
    OnChain,
    /// Internal transfer to another Bitget user
    InternalTransfer,
}

impl TransferType {
    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferType::OnChain => "on_chain",
            TransferType::InternalTransfer => "internal_transfer",
        }
    }
}

/// How the recipient of an internal transfer is identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InnerToType {
    /// Registered email
    Email,
    /// Registered mobile number (requires `areaCode`)
    Mobile,
    /// Bitget user ID
    Uid,
}

impl InnerToType {
    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            InnerToType::Email => "email",
            InnerToType::Mobile => "mobile",
            InnerToType::Uid => "uid",
        }
    }
}

/// Candlestick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    #[serde(rename = "1min")]
    Min1,
    #[serde(rename = "3min")]
    Min3,
    #[serde(rename = "5min")]
    Min5,
    #[serde(rename = "15min")]
    Min15,
    #[serde(rename = "30min")]
    Min30,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "4h")]
    Hour4,
    #[serde(rename = "6h")]
    Hour6,
    #[serde(rename = "12h")]
    Hour12,
    #[serde(rename = "1day")]
    Day1,
    #[serde(rename = "3day")]
    Day3,
    #[serde(rename = "1week")]
    Week1,
    #[serde(rename = "1M")]
    Month1,
    /// UTC-aligned variants
    #[serde(rename = "6Hutc")]
    Hour6Utc,
    #[serde(rename = "12Hutc")]
    Hour12Utc,
    #[serde(rename = "1Dutc")]
    Day1Utc,
    #[serde(rename = "3Dutc")]
    Day3Utc,
    #[serde(rename = "1Wutc")]
    Week1Utc,
    #[serde(rename = "1Mutc")]
    Month1Utc,
}

impl Granularity {
    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Min1 => "1min",
            Granularity::Min3 => "3min",
            Granularity::Min5 => "5min",
            Granularity::Min15 => "15min",
            Granularity::Min30 => "30min",
            Granularity::Hour1 => "1h",
            Granularity::Hour4 => "4h",
            Granularity::Hour6 => "6h",
            Granularity::Hour12 => "12h",
            Granularity::Day1 => "1day",
            Granularity::Day3 => "3day",
            Granularity::Week1 => "1week",
            Granularity::Month1 => "1M",
            Granularity::Hour6Utc => "6Hutc",
            Granularity::Hour12Utc => "12Hutc",
            Granularity::Day1Utc => "1Dutc",
            Granularity::Day3Utc => "3Dutc",
            Granularity::Week1Utc => "1Wutc",
            Granularity::Month1Utc => "1Mutc",
        }
    }
}

/// Price aggregation step for `/market/orderbook`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderbookType {
    /// No aggregation
    Step0,
    /// Narrowest aggregation step
    Step1,
    /// Aggregation step 2
    Step2,
    /// Aggregation step 3
    Step3,
    /// Aggregation step 4
    Step4,
    /// Widest aggregation step
    Step5,
}

/// Price precision for `/market/merge-depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthPrecision {
    /// The symbol's own price precision
    Scale0,
    /// One decimal place coarser
    Scale1,
    /// Two decimal places coarser
    Scale2,
    /// Three decimal places coarser
    Scale3,
}

/// Number of levels for `/market/merge-depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MergeDepthLimit {
    /// Best level only
    #[serde(rename = "1")]
    One,
    /// Five levels
    #[serde(rename = "5")]
    Five,
    /// Fifteen levels
    #[serde(rename = "15")]
    Fifteen,
    /// Fifty levels
    #[serde(rename = "50")]
    Fifty,
    /// Every level the exchange holds
    #[serde(rename = "max")]
    Max,
}

impl MergeDepthLimit {
    /// The wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeDepthLimit::One => "1",
            MergeDepthLimit::Five => "5",
            MergeDepthLimit::Fifteen => "15",
            MergeDepthLimit::Fifty => "50",
            MergeDepthLimit::Max => "max",
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_display_as_str!(
    AssetType,
    AccountType,
    TransferType,
    InnerToType,
    Granularity,
    MergeDepthLimit,
);

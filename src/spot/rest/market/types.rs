//! Types for market data endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::{maybe_decimal, millis, optional_millis};
use crate::types::{DepthPrecision, Granularity, MergeDepthLimit, OrderbookType};

/// Request for merged depth.
#[derive(Debug, Clone, Serialize)]
pub struct MergeDepthRequest {
    /// Trading pair, e.g. `BTCUSDT`.
    pub symbol: String,
    /// Price precision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<DepthPrecision>,
    /// Number of levels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<MergeDepthLimit>,
}

impl MergeDepthRequest {
    /// Create a merged depth request for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            precision: None,
            limit: None,
        }
    }
}

/// Request for the order book.
#[derive(Debug, Clone, Serialize)]
pub struct OrderbookRequest {
    /// Trading pair.
    pub symbol: String,
    /// Price aggregation step.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub depth_type: Option<OrderbookType>,
    /// Number of levels (exchange default 150).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl OrderbookRequest {
    /// Create an order book request for a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            depth_type: None,
            limit: None,
        }
    }
}

/// Request for recent candlesticks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlesRequest {
    /// Trading pair.
    pub symbol: String,
    /// Candle interval.
    pub granularity: Granularity,
    /// Start time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Number of candles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl CandlesRequest {
    /// Create a candlestick request.
    pub fn new(symbol: impl Into<String>, granularity: Granularity) -> Self {
        Self {
            symbol: symbol.into(),
            granularity,
            start_time: None,
            end_time: None,
            limit: None,
        }
    }
}

/// Request for historical candlesticks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryCandlesRequest {
    /// Trading pair.
    pub symbol: String,
    /// Candle interval.
    pub granularity: Granularity,
    /// Return candles before this time, in milliseconds.
    pub end_time: u64,
    /// Number of candles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl HistoryCandlesRequest {
    /// Create a historical candlestick request.
    pub fn new(symbol: impl Into<String>, granularity: Granularity, end_time: u64) -> Self {
        Self {
            symbol: symbol.into(),
            granularity,
            end_time,
            limit: None,
        }
    }
}

/// Request for recent trades.
#[derive(Debug, Clone, Serialize)]
pub struct FillsRequest {
    /// Trading pair.
    pub symbol: String,
    /// Number of trades.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl FillsRequest {
    /// Create a recent trades request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
        }
    }
}

/// Request for historical trades.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillsHistoryRequest {
    /// Trading pair.
    pub symbol: String,
    /// Number of trades.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Return trades older than this trade ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_less_than: Option<String>,
    /// Start time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
}

impl FillsHistoryRequest {
    /// Create a historical trades request.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            limit: None,
            id_less_than: None,
            start_time: None,
            end_time: None,
        }
    }
}

/// `data` of `/public/time`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Server time in milliseconds.
    #[serde(deserialize_with = "millis::deserialize")]
    pub server_time: u64,
}

/// One entry of `/market/tickers`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    pub symbol: String,
    /// Last traded price.
    #[serde(rename = "lastPr")]
    pub last_price: Decimal,
    #[serde(default, deserialize_with = "maybe_decimal::deserialize")]
    pub open: Option<Decimal>,
    #[serde(default, rename = "high24h", deserialize_with = "maybe_decimal::deserialize")]
    pub high_24h: Option<Decimal>,
    #[serde(default, rename = "low24h", deserialize_with = "maybe_decimal::deserialize")]
    pub low_24h: Option<Decimal>,
    #[serde(default, rename = "bidPr", deserialize_with = "maybe_decimal::deserialize")]
    pub bid_price: Option<Decimal>,
    #[serde(default, rename = "askPr", deserialize_with = "maybe_decimal::deserialize")]
    pub ask_price: Option<Decimal>,
    #[serde(default, rename = "bidSz", deserialize_with = "maybe_decimal::deserialize")]
    pub bid_size: Option<Decimal>,
    #[serde(default, rename = "askSz", deserialize_with = "maybe_decimal::deserialize")]
    pub ask_size: Option<Decimal>,
    /// Base coin volume over 24h.
    #[serde(default, deserialize_with = "maybe_decimal::deserialize")]
    pub base_volume: Option<Decimal>,
    /// Quote coin volume over 24h.
    #[serde(default, deserialize_with = "maybe_decimal::deserialize")]
    pub quote_volume: Option<Decimal>,
    /// 24h change as a ratio.
    #[serde(default, rename = "change24h", deserialize_with = "maybe_decimal::deserialize")]
    pub change_24h: Option<Decimal>,
    /// Snapshot time in milliseconds.
    #[serde(default, deserialize_with = "optional_millis::deserialize")]
    pub ts: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orderbook_type_renamed() {
        let request = OrderbookRequest {
            depth_type: Some(OrderbookType::Step0),
            limit: Some(50),
            ..OrderbookRequest::new("BTCUSDT")
        };
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "symbol=BTCUSDT&type=step0&limit=50"
        );
    }

    #[test]
    fn test_merge_depth_max_limit() {
        let request = MergeDepthRequest {
            precision: Some(DepthPrecision::Scale0),
            limit: Some(MergeDepthLimit::Max),
            ..MergeDepthRequest::new("BTCUSDT")
        };
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "symbol=BTCUSDT&precision=scale0&limit=max"
        );
    }

    #[test]
    fn test_candles_query() {
        let request = CandlesRequest {
            limit: Some(100),
            ..CandlesRequest::new("BTCUSDT", Granularity::Min15)
        };
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "symbol=BTCUSDT&granularity=15min&limit=100"
        );
    }

    #[test]
    fn test_history_candles_requires_end_time() {
        let request = HistoryCandlesRequest::new("ETHUSDT", Granularity::Day1, 1_700_000_000_000);
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "symbol=ETHUSDT&granularity=1day&endTime=1700000000000"
        );
    }

    #[test]
    fn test_server_time_deserialize() {
        let time: ServerTime = serde_json::from_str(r#"{"serverTime":"1688008631614"}"#).unwrap();
        assert_eq!(time.server_time, 1_688_008_631_614);
    }

    #[test]
    fn test_ticker_deserialize() {
        let json = r#"{
            "symbol": "BTCUSDT",
            "high24h": "37775.65",
            "open": "35134.2",
            "lastPr": "36980.2",
            "low24h": "34413.1",
            "quoteVolume": "1032416.8",
            "baseVolume": "28.7",
            "usdtVolume": "1032416.8",
            "bidPr": "36980.1",
            "askPr": "36980.3",
            "bidSz": "0.3",
            "askSz": "",
            "openUtc": "36456.2",
            "ts": "1695806160000",
            "changeUtc24h": "0.01437",
            "change24h": "0.05253"
        }"#;
        let ticker: Ticker = serde_json::from_str(json).unwrap();
        assert_eq!(ticker.symbol, "BTCUSDT");
        assert_eq!(ticker.last_price, "36980.2".parse::<Decimal>().unwrap());
        assert!(ticker.ask_size.is_none());
        assert_eq!(ticker.ts, Some(1_695_806_160_000));
    }
}

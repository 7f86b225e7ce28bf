//! Example: Spot market data.
//!
//! Run with: cargo run --example market_data

use std::sync::Arc;

use bitget_api_client::Granularity;
use bitget_api_client::auth::{EnvCredentials, StaticCredentials};
use bitget_api_client::spot::rest::SpotRestClient;
use bitget_api_client::spot::rest::market::{CandlesRequest, OrderbookRequest, ServerTime, Ticker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Market endpoints accept any key, so fall back to placeholders.
    let client = match EnvCredentials::try_from_env() {
        Some(creds) => SpotRestClient::new(Arc::new(creds)).await,
        None => {
            let creds = StaticCredentials::new("anonymous", "anonymous", "anonymous");
            SpotRestClient::new(Arc::new(creds)).await
        }
    };
    if !client.is_connected() {
        println!("Bitget is not reachable");
        return Ok(());
    }

    let market = client.market();

    if let Some(time) = market.server_time().await?.envelope::<ServerTime>()?.into_result()? {
        println!("Server time: {}", time.server_time);
    }

    let tickers = market
        .tickers(Some("BTCUSDT"))
        .await?
        .envelope::<Vec<Ticker>>()?
        .into_result()?
        .unwrap_or_default();
    for ticker in &tickers {
        println!(
            "{} last={} bid={:?} ask={:?}",
            ticker.symbol, ticker.last_price, ticker.bid_price, ticker.ask_price
        );
    }

    let book = market
        .orderbook(&OrderbookRequest {
            limit: Some(5),
            ..OrderbookRequest::new("BTCUSDT")
        })
        .await?;
    println!("Order book: {}", book.body());

    let candles = market
        .candles(&CandlesRequest {
            limit: Some(3),
            ..CandlesRequest::new("BTCUSDT", Granularity::Hour1)
        })
        .await?;
    println!("Candles: {}", candles.body());

    Ok(())
}

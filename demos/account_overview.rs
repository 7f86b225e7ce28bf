//! Example: Account info and balances.
//!
//! Run with: cargo run --example account_overview
//!
//! Reads BITGET_API_KEY, BITGET_API_SECRET and BITGET_API_PASSPHRASE from the
//! environment (a `.env` file works too).

use std::sync::Arc;

use bitget_api_client::AssetType;
use bitget_api_client::auth::EnvCredentials;
use bitget_api_client::spot::rest::SpotRestClient;
use bitget_api_client::spot::rest::account::{AccountAssetsRequest, AccountInfo, AssetBalance};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => Arc::new(creds),
        None => {
            println!(
                "Set BITGET_API_KEY, BITGET_API_SECRET and BITGET_API_PASSPHRASE to run this example."
            );
            return Ok(());
        }
    };

    let client = SpotRestClient::new(credentials).await;
    println!("Connected: {}", client.is_connected());

    let response = client.account().info().await?;
    match response.envelope::<AccountInfo>()?.into_result() {
        Ok(Some(info)) => println!("User {} ({:?})", info.user_id, info.authorities),
        Ok(None) => println!("Empty account info"),
        Err(e) => println!("Account info rejected: {}", e),
    }

    let request = AccountAssetsRequest {
        asset_type: Some(AssetType::HoldOnly),
        ..Default::default()
    };
    let response = client.account().assets(Some(&request)).await?;
    if !response.is_success() {
        println!("HTTP {}: {}", response.status(), response.body());
        return Ok(());
    }

    let balances = response
        .envelope::<Vec<AssetBalance>>()?
        .into_result()?
        .unwrap_or_default();
    for balance in balances {
        println!("{:>8} {}", balance.coin, balance.available);
    }

    Ok(())
}

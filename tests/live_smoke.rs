use std::sync::Arc;

use bitget_api_client::auth::EnvCredentials;
use bitget_api_client::spot::rest::SpotRestClient;
use bitget_api_client::spot::rest::account::AccountInfo;

fn live_tests_enabled() -> bool {
    std::env::var("BITGET_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_account_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = SpotRestClient::new(Arc::new(credentials)).await;
    assert!(client.is_connected());

    let info = client.account().info().await?.envelope::<AccountInfo>()?.into_result()?;
    assert!(info.is_some_and(|info| !info.user_id.is_empty()));

    Ok(())
}

//! Account and wallet endpoints (authentication required).
//!
//! Reached through [`SpotRestClient::account`]. Each method is a single
//! signed round trip that returns the raw [`ApiResponse`]; decode it with
//! [`ApiResponse::envelope`] and the payload types in this module.

mod types;

pub use types::*;

use crate::error::BitgetError;
use crate::spot::rest::client::NoParams;
use crate::spot::rest::endpoints::account;
use crate::spot::rest::{ApiResponse, SpotRestClient};

/// Account and wallet operations.
#[derive(Debug, Clone, Copy)]
pub struct AccountApi<'a> {
    client: &'a SpotRestClient,
}

impl<'a> AccountApi<'a> {
    pub(crate) fn new(client: &'a SpotRestClient) -> Self {
        Self { client }
    }

    /// Get account information.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use bitget_api_client::auth::StaticCredentials;
    /// use bitget_api_client::spot::rest::SpotRestClient;
    /// use bitget_api_client::spot::rest::account::AccountInfo;
    /// use std::sync::Arc;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let credentials = Arc::new(StaticCredentials::new("key", "secret", "passphrase"));
    ///     let client = SpotRestClient::new(credentials).await;
    ///
    ///     let response = client.account().info().await?;
    ///     if let Some(info) = response.envelope::<AccountInfo>()?.into_result()? {
    ///         println!("User {} can {:?}", info.user_id, info.authorities);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn info(&self) -> Result<ApiResponse, BitgetError> {
        self.client.get::<NoParams>(account::INFO, None, None).await
    }

    /// Get account assets.
    ///
    /// # Arguments
    ///
    /// * `request` - Optional filters; `None` sends no query parameters.
    pub async fn assets(
        &self,
        request: Option<&AccountAssetsRequest>,
    ) -> Result<ApiResponse, BitgetError> {
        self.client.get(account::ASSETS, request, None).await
    }

    /// Get account bills.
    pub async fn bills(
        &self,
        request: Option<&AccountBillsRequest>,
    ) -> Result<ApiResponse, BitgetError> {
        self.client.get(account::BILLS, request, None).await
    }

    /// Transfer assets between account types.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<ApiResponse, BitgetError> {
        let body = serde_json::to_string(request)?;
        self.client
            .post::<NoParams>(account::TRANSFER, None, Some(&body))
            .await
    }

    /// Get transfer records.
    pub async fn transfer_records(
        &self,
        request: &TransferRecordsRequest,
    ) -> Result<ApiResponse, BitgetError> {
        self.client
            .get(account::TRANSFER_RECORDS, Some(request), None)
            .await
    }

    /// Withdraw coins, on-chain or as an internal transfer.
    pub async fn withdraw(&self, request: &WithdrawalRequest) -> Result<ApiResponse, BitgetError> {
        let body = serde_json::to_string(request)?;
        self.client
            .post::<NoParams>(account::WITHDRAWAL, None, Some(&body))
            .await
    }

    /// Get the deposit address for a coin.
    pub async fn deposit_address(
        &self,
        request: &DepositAddressRequest,
    ) -> Result<ApiResponse, BitgetError> {
        self.client
            .get(account::DEPOSIT_ADDRESS, Some(request), None)
            .await
    }

    /// Get deposit records.
    pub async fn deposit_records(
        &self,
        request: &DepositRecordsRequest,
    ) -> Result<ApiResponse, BitgetError> {
        self.client
            .get(account::DEPOSIT_RECORDS, Some(request), None)
            .await
    }

    /// Get withdrawal records.
    pub async fn withdrawal_records(
        &self,
        request: &WithdrawalRecordsRequest,
    ) -> Result<ApiResponse, BitgetError> {
        self.client
            .get(account::WITHDRAWAL_RECORDS, Some(request), None)
            .await
    }
}

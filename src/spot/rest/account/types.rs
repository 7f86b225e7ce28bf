//! Types for account and wallet endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::{empty_string_as_none, maybe_decimal, optional_millis};
use crate::types::{AccountType, AssetType, InnerToType, TransferType};

/// Request for account assets.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAssetsRequest {
    /// Restrict to a single coin, e.g. `USDT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    /// Which balances to list. The exchange defaults to `hold_only`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
}

/// Request for account bills.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBillsRequest {
    /// Coin name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    /// Billing group (`deposit`, `withdraw`, `transaction`, `transfer`, `other`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_type: Option<String>,
    /// Business type of the bill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    /// Start time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Page size (exchange default 100, max 500).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Return entries older than this bill ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_less_than: Option<String>,
}

/// Request to move funds between account types.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Source account.
    pub from_type: AccountType,
    /// Destination account.
    pub to_type: AccountType,
    /// Amount to transfer.
    pub amount: Decimal,
    /// Coin to transfer.
    pub coin: String,
    /// Required when either side is an isolated margin account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Custom transfer ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_oid: Option<String>,
}

impl TransferRequest {
    /// Create a transfer request with the required fields.
    pub fn new(
        from_type: AccountType,
        to_type: AccountType,
        amount: Decimal,
        coin: impl Into<String>,
    ) -> Self {
        Self {
            from_type,
            to_type,
            amount,
            coin: coin.into(),
            symbol: None,
            client_oid: None,
        }
    }
}

/// Request for transfer records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecordsRequest {
    /// Coin name.
    pub coin: String,
    /// Source account of the transfers.
    pub from_type: AccountType,
    /// Start time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u64>,
    /// Custom transfer ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_oid: Option<String>,
    /// Page size (exchange default 100, max 500).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Return entries older than this transfer ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_less_than: Option<String>,
}

impl TransferRecordsRequest {
    /// Create a transfer records request with the required fields.
    pub fn new(coin: impl Into<String>, from_type: AccountType) -> Self {
        Self {
            coin: coin.into(),
            from_type,
            start_time: None,
            end_time: None,
            client_oid: None,
            limit: None,
            id_less_than: None,
        }
    }
}

/// Request to withdraw coins on-chain or to another Bitget user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    /// Coin to withdraw.
    pub coin: String,
    /// On-chain or internal transfer.
    pub transfer_type: TransferType,
    /// Destination address, or email / mobile / UID for internal transfers.
    pub address: String,
    /// Amount to withdraw.
    pub size: Decimal,
    /// Network, e.g. `trc20`. Required for on-chain withdrawals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    /// How `address` identifies the recipient of an internal transfer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_to_type: Option<InnerToType>,
    /// Required when `inner_to_type` is `mobile`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_code: Option<String>,
    /// Address tag / memo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    /// Custom withdrawal ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_oid: Option<String>,
}

impl WithdrawalRequest {
    /// Create a withdrawal request with the required fields.
    pub fn new(
        coin: impl Into<String>,
        transfer_type: TransferType,
        address: impl Into<String>,
        size: Decimal,
    ) -> Self {
        Self {
            coin: coin.into(),
            transfer_type,
            address: address.into(),
            size,
            chain: None,
            inner_to_type: None,
            area_code: None,
            tag: None,
            remark: None,
            client_oid: None,
        }
    }
}

/// Request for a deposit address.
#[derive(Debug, Clone, Serialize)]
pub struct DepositAddressRequest {
    /// Coin name.
    pub coin: String,
    /// Network, e.g. `trc20`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
}

impl DepositAddressRequest {
    /// Create a deposit address request for a coin.
    pub fn new(coin: impl Into<String>) -> Self {
        Self {
            coin: coin.into(),
            chain: None,
        }
    }
}

/// Request for deposit records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecordsRequest {
    /// Start time in milliseconds.
    pub start_time: u64,
    /// End time in milliseconds.
    pub end_time: u64,
    /// Coin name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    /// Deposit order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Return entries older than this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_less_than: Option<String>,
    /// Page size (exchange default 20, max 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl DepositRecordsRequest {
    /// Create a deposit records request for a time window.
    pub fn new(start_time: u64, end_time: u64) -> Self {
        Self {
            start_time,
            end_time,
            coin: None,
            order_id: None,
            id_less_than: None,
            limit: None,
        }
    }
}

/// Request for withdrawal records.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRecordsRequest {
    /// Start time in milliseconds.
    pub start_time: u64,
    /// End time in milliseconds.
    pub end_time: u64,
    /// Coin name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    /// Custom withdrawal ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_oid: Option<String>,
    /// Return entries older than this ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_less_than: Option<String>,
    /// Withdrawal order ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Page size (exchange default 20, max 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl WithdrawalRecordsRequest {
    /// Create a withdrawal records request for a time window.
    pub fn new(start_time: u64, end_time: u64) -> Self {
        Self {
            start_time,
            end_time,
            coin: None,
            client_oid: None,
            id_less_than: None,
            order_id: None,
            limit: None,
        }
    }
}

/// `data` of `/account/info`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    /// User ID.
    pub user_id: String,
    /// Inviter user ID.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub inviter_id: Option<String>,
    /// IP whitelist bound to the key.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub ips: Option<String>,
    /// Permissions granted to the key.
    #[serde(default)]
    pub authorities: Vec<String>,
    /// Trader role.
    #[serde(default)]
    pub trader_type: Option<String>,
    /// Registration time in milliseconds.
    #[serde(default, deserialize_with = "optional_millis::deserialize")]
    pub regis_time: Option<u64>,
}

/// One entry of `/account/assets`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    /// Coin name.
    pub coin: String,
    /// Available balance.
    pub available: Decimal,
    /// Frozen in open orders.
    #[serde(default, deserialize_with = "maybe_decimal::deserialize")]
    pub frozen: Option<Decimal>,
    /// Locked for other reasons.
    #[serde(default, deserialize_with = "maybe_decimal::deserialize")]
    pub locked: Option<Decimal>,
    /// Restricted availability.
    #[serde(default, deserialize_with = "maybe_decimal::deserialize")]
    pub limit_available: Option<Decimal>,
    /// Last update time in milliseconds.
    #[serde(default, deserialize_with = "optional_millis::deserialize")]
    pub u_time: Option<u64>,
}

/// `data` of `/wallet/transfer`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResult {
    /// Exchange-assigned transfer ID.
    pub transfer_id: String,
    /// Custom ID echoed back, if one was sent.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub client_oid: Option<String>,
}

/// `data` of `/wallet/withdrawal`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalResult {
    /// Withdrawal order ID.
    pub order_id: String,
    /// Custom ID echoed back, if one was sent.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub client_oid: Option<String>,
}

/// `data` of `/wallet/deposit-address`.
#[derive(Debug, Clone, Deserialize)]
pub struct DepositAddress {
    /// Deposit address.
    pub address: String,
    /// Network the address belongs to.
    pub chain: String,
    /// Coin name.
    pub coin: String,
    /// Address tag / memo, if the chain uses one.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub tag: Option<String>,
    /// Blockchain explorer link.
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_body_omits_unset_fields() {
        let request = TransferRequest::new(
            AccountType::Spot,
            AccountType::UsdtFutures,
            Decimal::new(10, 0),
            "USDT",
        );
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"fromType":"spot","toType":"usdt_futures","amount":"10","coin":"USDT"}"#
        );
    }

    #[test]
    fn test_withdrawal_body_keeps_present_empty_values() {
        let request = WithdrawalRequest {
            tag: Some(String::new()),
            ..WithdrawalRequest::new("USDT", TransferType::OnChain, "TXaddr", Decimal::new(5, 1))
        };
        let json: serde_json::Value = serde_json::to_value(&request).unwrap();
        let body = json.as_object().unwrap();

        assert_eq!(body["transferType"], "on_chain");
        assert_eq!(body["size"], "0.5");
        assert_eq!(body["tag"], "");
        assert!(!body.contains_key("chain"));
        assert!(!body.contains_key("remark"));
        assert!(!body.contains_key("clientOid"));
    }

    #[test]
    fn test_bills_query_keeps_zero_limit() {
        let request = AccountBillsRequest {
            limit: Some(0),
            ..Default::default()
        };
        assert_eq!(serde_urlencoded::to_string(&request).unwrap(), "limit=0");
    }

    #[test]
    fn test_assets_query_order() {
        let request = AccountAssetsRequest {
            coin: Some("USDT".to_string()),
            asset_type: Some(AssetType::HoldOnly),
        };
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "coin=USDT&assetType=hold_only"
        );
        assert_eq!(
            serde_urlencoded::to_string(&AccountAssetsRequest::default()).unwrap(),
            ""
        );
    }

    #[test]
    fn test_deposit_records_query() {
        let request = DepositRecordsRequest {
            coin: Some("BTC".to_string()),
            ..DepositRecordsRequest::new(1_700_000_000_000, 1_700_086_400_000)
        };
        assert_eq!(
            serde_urlencoded::to_string(&request).unwrap(),
            "startTime=1700000000000&endTime=1700086400000&coin=BTC"
        );
    }

    #[test]
    fn test_asset_balance_deserialize() {
        let json = r#"{
            "coin": "USDT",
            "available": "100.5",
            "frozen": "0",
            "locked": "0",
            "limitAvailable": "",
            "uTime": "1700000000000"
        }"#;
        let balance: AssetBalance = serde_json::from_str(json).unwrap();
        assert_eq!(balance.coin, "USDT");
        assert_eq!(balance.available, Decimal::new(1005, 1));
        assert_eq!(balance.frozen, Some(Decimal::ZERO));
        assert!(balance.limit_available.is_none());
        assert_eq!(balance.u_time, Some(1_700_000_000_000));
    }

    #[test]
    fn test_deposit_address_empty_tag() {
        let json = r#"{"address":"TXaddr","chain":"TRC20","coin":"USDT","tag":"","url":"https://tronscan.org"}"#;
        let address: DepositAddress = serde_json::from_str(json).unwrap();
        assert!(address.tag.is_none());
        assert_eq!(address.chain, "TRC20");
    }
}

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

// Gas values proposed by the requesting site. Only their presence changes
// what the summary shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DappSuggestedGasFees {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
}

impl TxParams {
    // EIP-1559 transactions carry a fee cap instead of a flat gas price
    pub fn is_eip1559(&self) -> bool {
        self.max_fee_per_gas.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMeta {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dapp_suggested_gas_fees: Option<DappSuggestedGasFees>,
    #[serde(default)]
    pub tx_params: TxParams,
}

impl TransactionMeta {
    /// A record with no id and no gas parameters, the fallback when the
    /// transaction under confirmation cannot be found.
    pub fn is_empty(&self) -> bool {
        *self == TransactionMeta::default()
    }
}

// Fee bounds computed upstream for one transaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFee {
    pub minimum_fee_wei: U256,
    pub maximum_fee_wei: U256,
}

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use super::{DappSuggestedGasFees, TransactionFee};

// Everything the gas summary reads for one render pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasDisplayInput {
    #[serde(default)]
    pub is_mainnet: bool,
    #[serde(default)]
    pub is_multi_layer_fee_network: bool,
    #[serde(default)]
    pub use_currency_rate_check: bool,
    #[serde(default)]
    pub use_native_currency_as_primary_currency: bool,
    #[serde(default)]
    pub native_currency_symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dapp_suggested_gas_fees: Option<DappSuggestedGasFees>,
    #[serde(default)]
    pub minimum_fee_wei: U256,
    #[serde(default)]
    pub maximum_fee_wei: U256,
    // id of the transaction the fees belong to, forwarded to the layer-1 line
    #[serde(default)]
    pub transaction_id: String,
}

impl GasDisplayInput {
    pub fn with_fee(mut self, fee: TransactionFee) -> Self {
        self.minimum_fee_wei = fee.minimum_fee_wei;
        self.maximum_fee_wei = fee.maximum_fee_wei;
        self
    }
}

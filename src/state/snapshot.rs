use std::collections::HashMap;
use std::fs;
use std::path::Path;

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use super::{NetworkStore, PreferencesStore, TransactionStore};
use crate::common::DisplayError;
use crate::currency::CurrencyRate;
use crate::display::FormatterConfig;
use crate::gas::{FeeCalculator, TransactionFee, TransactionMeta};

pub const MAINNET_CHAIN_ID: u64 = 1;

// Chains whose fee includes a separate layer-1 data charge
pub const MULTI_LAYER_FEE_CHAIN_IDS: &[u64] = &[
    10,       // OP Mainnet
    420,      // Optimism Goerli
    11155420, // OP Sepolia
    8453,     // Base
    84531,    // Base Goerli
    84532,    // Base Sepolia
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkState {
    pub chain_id: u64,
    pub native_currency: String,
    pub base_fee_per_gas: U256,
}

impl Default for NetworkState {
    fn default() -> Self {
        Self {
            chain_id: MAINNET_CHAIN_ID,
            native_currency: "ETH".to_string(),
            base_fee_per_gas: U256::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub use_native_currency_as_primary_currency: bool,
    pub use_currency_rate_check: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            use_native_currency_as_primary_currency: true,
            use_currency_rate_check: true,
        }
    }
}

/// Point-in-time copy of the wallet state the gas summary reads.
///
/// Implements every store trait, so a snapshot loaded from JSON can drive
/// the formatter without a live wallet behind it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSnapshot {
    pub network: NetworkState,
    pub preferences: Preferences,
    pub currency: Option<CurrencyRate>,
    pub unapproved_txs: HashMap<String, TransactionMeta>,
    pub current_transaction: Option<TransactionMeta>,
    pub draft_transaction: Option<TransactionMeta>,
    pub display: FormatterConfig,
}

impl AppSnapshot {
    pub fn from_json(json: &str) -> Result<Self, DisplayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, DisplayError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn currency_rate(&self) -> CurrencyRate {
        self.currency.clone().unwrap_or(CurrencyRate {
            current_currency: "usd".to_string(),
            conversion_rate: None,
        })
    }
}

impl TransactionStore for AppSnapshot {
    fn unapproved_transactions(&self) -> &HashMap<String, TransactionMeta> {
        &self.unapproved_txs
    }

    fn current_transaction(&self) -> Option<&TransactionMeta> {
        self.current_transaction.as_ref()
    }

    fn draft_transaction(&self) -> Option<&TransactionMeta> {
        self.draft_transaction.as_ref()
    }

    fn transaction_fee(&self, transaction: &TransactionMeta) -> TransactionFee {
        FeeCalculator::transaction_fee(&transaction.tx_params, self.network.base_fee_per_gas)
    }
}

impl PreferencesStore for AppSnapshot {
    fn use_native_currency_as_primary_currency(&self) -> bool {
        self.preferences.use_native_currency_as_primary_currency
    }

    fn use_currency_rate_check(&self) -> bool {
        self.preferences.use_currency_rate_check
    }
}

impl NetworkStore for AppSnapshot {
    fn is_mainnet(&self) -> bool {
        self.network.chain_id == MAINNET_CHAIN_ID
    }

    fn is_multi_layer_fee_network(&self) -> bool {
        MULTI_LAYER_FEE_CHAIN_IDS.contains(&self.network.chain_id)
    }

    fn native_currency_symbol(&self) -> &str {
        &self.network.native_currency
    }
}

use alloy::primitives::U256;
use tracing::{debug, warn};

use super::{NetworkStore, PreferencesStore, TransactionStore};
use crate::gas::{GasDisplayInput, TransactionMeta};

/// Build the gas summary input from the current store contents.
///
/// Fees come from the draft transaction when it has content, then from the
/// unapproved transaction matching the current confirmation, and finally
/// from an empty record, which yields zero fees.
pub fn assemble_input<T, P, N>(transactions: &T, preferences: &P, network: &N) -> GasDisplayInput
where
    T: TransactionStore,
    P: PreferencesStore,
    N: NetworkStore,
{
    let current = transactions.current_transaction();
    let transaction_id = current.map(|tx| tx.id.clone()).unwrap_or_default();

    let empty = TransactionMeta::default();
    let transaction = match transactions.draft_transaction().filter(|tx| !tx.is_empty()) {
        Some(draft) => {
            debug!(transaction_id = %transaction_id, "using draft gas values");
            draft
        }
        None => match transactions.unapproved_transactions().get(&transaction_id) {
            Some(tx) => tx,
            None => {
                warn!(
                    transaction_id = %transaction_id,
                    "transaction not found, showing zero fees"
                );
                &empty
            }
        },
    };

    let fee = transactions.transaction_fee(transaction);

    GasDisplayInput {
        is_mainnet: network.is_mainnet(),
        is_multi_layer_fee_network: network.is_multi_layer_fee_network(),
        use_currency_rate_check: preferences.use_currency_rate_check(),
        use_native_currency_as_primary_currency: preferences
            .use_native_currency_as_primary_currency(),
        native_currency_symbol: network.native_currency_symbol().to_string(),
        dapp_suggested_gas_fees: current.and_then(|tx| tx.dapp_suggested_gas_fees.clone()),
        minimum_fee_wei: U256::ZERO,
        maximum_fee_wei: U256::ZERO,
        transaction_id,
    }
    .with_fee(fee)
}

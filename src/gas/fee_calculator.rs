use super::{TransactionFee, TxParams};
use alloy::primitives::U256;

pub struct FeeCalculator;

impl FeeCalculator {
    // compute min and max fee for a transaction
    // missing fields count as zero, overflow saturates
    pub fn transaction_fee(params: &TxParams, base_fee_per_gas: U256) -> TransactionFee {
        let gas = params.gas.unwrap_or_default();

        if params.is_eip1559() {
            let max_fee_per_gas = params.max_fee_per_gas.unwrap_or_default();
            let priority = params.max_priority_fee_per_gas.unwrap_or_default();
            let effective = base_fee_per_gas.saturating_add(priority).min(max_fee_per_gas);

            return TransactionFee {
                minimum_fee_wei: gas.saturating_mul(effective),
                maximum_fee_wei: gas.saturating_mul(max_fee_per_gas),
            };
        }

        // legacy: a single gas price bounds both ends
        let fee = gas.saturating_mul(params.gas_price.unwrap_or_default());
        TransactionFee {
            minimum_fee_wei: fee,
            maximum_fee_wei: fee,
        }
    }
}

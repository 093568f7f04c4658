use std::collections::HashMap;

use crate::gas::{TransactionFee, TransactionMeta};

// Read side of the transaction controller
pub trait TransactionStore {
    fn unapproved_transactions(&self) -> &HashMap<String, TransactionMeta>;

    // the confirmation currently on screen
    fn current_transaction(&self) -> Option<&TransactionMeta>;

    // gas values the user is editing, if any
    fn draft_transaction(&self) -> Option<&TransactionMeta>;

    fn transaction_fee(&self, transaction: &TransactionMeta) -> TransactionFee;
}

pub trait PreferencesStore {
    fn use_native_currency_as_primary_currency(&self) -> bool;
    fn use_currency_rate_check(&self) -> bool;
}

pub trait NetworkStore {
    fn is_mainnet(&self) -> bool;
    fn is_multi_layer_fee_network(&self) -> bool;
    fn native_currency_symbol(&self) -> &str;
}

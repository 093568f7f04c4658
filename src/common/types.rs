use serde::{Deserialize, Serialize};

// Which slot of the user's currency preference an amount is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencyType {
    Primary,
    Secondary,
}

// Concrete denomination an amount ends up rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencyMode {
    Native,
    Fiat,
}

impl CurrencyType {
    /// Resolve the preference slot to a denomination.
    ///
    /// With the native currency as primary, PRIMARY is native and SECONDARY
    /// is fiat; otherwise the two are swapped.
    pub fn mode(self, use_native_currency_as_primary_currency: bool) -> CurrencyMode {
        match (self, use_native_currency_as_primary_currency) {
            (CurrencyType::Primary, true) | (CurrencyType::Secondary, false) => CurrencyMode::Native,
            (CurrencyType::Primary, false) | (CurrencyType::Secondary, true) => CurrencyMode::Fiat,
        }
    }
}

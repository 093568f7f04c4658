use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use super::{format_fixed, format_trimmed, parse_rate, round_to_decimals};
use crate::common::{
    CONVERSION_RATE_DECIMALS, CurrencyMode, DEFAULT_FIAT_DISPLAY_DECIMALS,
    DEFAULT_NATIVE_DISPLAY_DECIMALS, DisplayError, NATIVE_CURRENCY_DECIMALS,
};
use crate::display::CurrencyAmount;

/// Turns a wei amount into display text in the user's chosen currency.
pub trait CurrencyAmountRenderer {
    fn render(&self, amount: &CurrencyAmount) -> Result<String, DisplayError>;
}

// Fiat side of the currency preference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRate {
    pub current_currency: String,
    // fiat units per one native coin, as a decimal string
    #[serde(default)]
    pub conversion_rate: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PreferencedCurrencyRenderer {
    use_native_currency_as_primary_currency: bool,
    native_currency_symbol: String,
    fiat_currency: String,
    // fixed point with CONVERSION_RATE_DECIMALS
    conversion_rate: Option<U256>,
}

impl PreferencedCurrencyRenderer {
    pub fn new(
        use_native_currency_as_primary_currency: bool,
        native_currency_symbol: &str,
        rate: &CurrencyRate,
    ) -> Result<Self, DisplayError> {
        let conversion_rate = rate
            .conversion_rate
            .as_deref()
            .map(|r| parse_rate(r, CONVERSION_RATE_DECIMALS))
            .transpose()?;

        Ok(Self {
            use_native_currency_as_primary_currency,
            native_currency_symbol: native_currency_symbol.to_string(),
            fiat_currency: rate.current_currency.to_uppercase(),
            conversion_rate,
        })
    }

    fn render_native(&self, amount: &CurrencyAmount) -> Result<String, DisplayError> {
        let decimals = amount.decimals.unwrap_or(DEFAULT_NATIVE_DISPLAY_DECIMALS);
        let value = format_trimmed(amount.value_wei, NATIVE_CURRENCY_DECIMALS, decimals)?;
        Ok(with_label(value, &self.native_currency_symbol, amount.hide_label))
    }

    fn render_fiat(&self, amount: &CurrencyAmount) -> Result<String, DisplayError> {
        let rate = self
            .conversion_rate
            .ok_or_else(|| DisplayError::MissingConversionRate(self.fiat_currency.clone()))?;

        let scaled = amount
            .value_wei
            .checked_mul(rate)
            .ok_or_else(|| DisplayError::AmountOverflow(self.fiat_currency.clone()))?;

        let decimals = amount.decimals.unwrap_or(DEFAULT_FIAT_DISPLAY_DECIMALS);
        let rounded = round_to_decimals(
            scaled,
            NATIVE_CURRENCY_DECIMALS + CONVERSION_RATE_DECIMALS,
            decimals,
        );
        Ok(with_label(
            format_fixed(rounded, decimals),
            &self.fiat_currency,
            amount.hide_label,
        ))
    }
}

impl CurrencyAmountRenderer for PreferencedCurrencyRenderer {
    fn render(&self, amount: &CurrencyAmount) -> Result<String, DisplayError> {
        match amount
            .currency
            .mode(self.use_native_currency_as_primary_currency)
        {
            CurrencyMode::Native => self.render_native(amount),
            CurrencyMode::Fiat => self.render_fiat(amount),
        }
    }
}

fn with_label(value: String, label: &str, hide_label: bool) -> String {
    if hide_label || label.is_empty() {
        value
    } else {
        format!("{} {}", value, label)
    }
}

use alloy::primitives::U256;
use tracing::warn;

use crate::common::{
    CurrencyType, DEFAULT_NATIVE_DISPLAY_DECIMALS, DisplayError, NATIVE_CURRENCY_DECIMALS, keys,
};
use crate::currency::{CurrencyAmountRenderer, format_trimmed};
use crate::display::{
    AmountLine, CurrencyAmount, DetailItem, DisplayPlan, Layer1FeeMessage, Tooltip,
};
use crate::i18n::Localizer;

// Printed before amounts that are still being recomputed upstream
pub const HEARTBEAT_MARKER: &str = "~ ";
const INDENT: &str = "  ";
const TOOLTIP_MARKER: &str = "(i) ";
// Shown in place of a primary amount that has no conversion rate yet
pub const UNAVAILABLE_AMOUNT: &str = "--";

/// Works out the layer-1 share of a multi-layer fee. Usually backed by a
/// call to the network's fee oracle.
pub trait Layer1FeeSource {
    fn layer1_fee(&self, message: &Layer1FeeMessage) -> Option<U256>;
}

pub struct TextRenderer<'a> {
    localizer: &'a dyn Localizer,
    currency: &'a dyn CurrencyAmountRenderer,
    layer1: Option<&'a dyn Layer1FeeSource>,
}

impl<'a> TextRenderer<'a> {
    pub fn new(localizer: &'a dyn Localizer, currency: &'a dyn CurrencyAmountRenderer) -> Self {
        Self {
            localizer,
            currency,
            layer1: None,
        }
    }

    pub fn with_layer1_source(mut self, source: &'a dyn Layer1FeeSource) -> Self {
        self.layer1 = Some(source);
        self
    }

    pub fn render(&self, plan: &DisplayPlan) -> Result<Vec<String>, DisplayError> {
        match plan {
            DisplayPlan::Standard { details } => self.render_item(details),
            DisplayPlan::MultiLayer { total, layer1 } => {
                let mut lines = self.render_item(total)?;
                lines.extend(self.render_layer1(layer1)?);
                Ok(lines)
            }
        }
    }

    fn render_item(&self, item: &DetailItem) -> Result<Vec<String>, DisplayError> {
        let t = self.localizer;
        let mut lines = vec![t.message(&item.title.heading)];

        if let Some(tooltip) = &item.title.tooltip {
            for message in tooltip.messages() {
                lines.push(format!("{}{}{}", INDENT, TOOLTIP_MARKER, t.message(message)));
            }
            if let Tooltip::GasExplanation { learn_more, .. } = tooltip {
                lines.push(format!("{}{}{}", INDENT, TOOLTIP_MARKER, learn_more.href));
            }
        }

        // secondary amounts without a rate are left out
        if let Some(text) = item
            .detail_text
            .as_ref()
            .map(|line| self.render_amount(line))
            .transpose()?
            .flatten()
        {
            lines.push(format!("{}{}", INDENT, text));
        }

        let total = self.render_amount(&item.detail_total)?;
        lines.push(format!(
            "{}{}",
            INDENT,
            total.as_deref().unwrap_or(UNAVAILABLE_AMOUNT)
        ));

        if let Some(sub_text) = &item.sub_text {
            let amount = self.render_amount(&sub_text.amount)?;
            lines.push(format!(
                "{}{} {}",
                INDENT,
                t.message(&sub_text.label),
                amount.as_deref().unwrap_or(UNAVAILABLE_AMOUNT)
            ));
        }

        if let Some(sub_title) = &item.sub_title {
            lines.push(format!("{}{}", INDENT, t.message(sub_title)));
        }

        Ok(lines)
    }

    fn render_layer1(&self, message: &Layer1FeeMessage) -> Result<Vec<String>, DisplayError> {
        let t = self.localizer;

        let Some(layer1_fee) = self.layer1.and_then(|source| source.layer1_fee(message)) else {
            // no oracle: reference the layer-2 fee in the native currency
            let layer2_fee = format_trimmed(
                message.layer2_fee_wei,
                NATIVE_CURRENCY_DECIMALS,
                DEFAULT_NATIVE_DISPLAY_DECIMALS,
            )?;
            return Ok(vec![format!(
                "{}: {} {}",
                t.t(keys::LAYER2_FEES, &[]),
                layer2_fee,
                message.native_currency
            )]);
        };

        let total_fee = layer1_fee.saturating_add(message.layer2_fee_wei);
        let layer1_text = self.render_or_placeholder(&primary_amount(layer1_fee, message))?;
        let total_text = self.render_or_placeholder(&primary_amount(total_fee, message))?;

        Ok(vec![
            format!("{}: {}", t.t(keys::LAYER1_FEES, &[]), layer1_text),
            format!("{}: {}", t.t(keys::TOTAL, &[]), total_text),
        ])
    }

    // None when the amount needs a conversion rate that is not available
    fn render_currency(&self, amount: &CurrencyAmount) -> Result<Option<String>, DisplayError> {
        match self.currency.render(amount) {
            Ok(text) => Ok(Some(text)),
            Err(DisplayError::MissingConversionRate(currency)) => {
                warn!(%currency, "no conversion rate, amount not shown");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn render_or_placeholder(&self, amount: &CurrencyAmount) -> Result<String, DisplayError> {
        Ok(self
            .render_currency(amount)?
            .unwrap_or_else(|| UNAVAILABLE_AMOUNT.to_string()))
    }

    fn render_amount(&self, line: &AmountLine) -> Result<Option<String>, DisplayError> {
        let Some(text) = self.render_currency(&line.amount)? else {
            return Ok(None);
        };
        if line.heartbeat {
            Ok(Some(format!("{}{}", HEARTBEAT_MARKER, text)))
        } else {
            Ok(Some(text))
        }
    }
}

fn primary_amount(value_wei: U256, message: &Layer1FeeMessage) -> CurrencyAmount {
    CurrencyAmount {
        value_wei,
        currency: CurrencyType::Primary,
        hide_label: message.hide_label,
        decimals: None,
    }
}

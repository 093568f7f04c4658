use tracing::debug;

use super::{
    AmountLine, CurrencyAmount, DetailItem, DetailTitle, DisplayPlan, FormatterConfig,
    Layer1FeeMessage, Link, Message, MessageArg, SubText, Tooltip,
};
use crate::common::{
    CurrencyType, GAS_EXPLANATION_URL, LAYER1_MESSAGE_KEY, LAYER2_TOTAL_DECIMALS,
    LEGACY_GAS_DETAILS_KEY, LEGACY_TOTAL_ITEM_KEY, STANDARD_TOTAL_DECIMALS, keys,
};
use crate::gas::GasDisplayInput;
use alloy::primitives::U256;

/// Chooses which gas summary variant to show for a confirmation and
/// describes its fields.
///
/// Formatting is pure: the same input always yields the same plan, and
/// no state is kept between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct GasSummaryFormatter {
    config: FormatterConfig,
}

impl GasSummaryFormatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn format(&self, input: &GasDisplayInput) -> DisplayPlan {
        if input.is_multi_layer_fee_network {
            debug!(
                transaction_id = %input.transaction_id,
                "formatting multi-layer gas summary"
            );
            return self.format_multi_layer(input);
        }

        debug!(
            transaction_id = %input.transaction_id,
            dapp_suggested = input.dapp_suggested_gas_fees.is_some(),
            "formatting standard gas summary"
        );
        DisplayPlan::Standard {
            details: self.format_standard(input),
        }
    }

    fn format_multi_layer(&self, input: &GasDisplayInput) -> DisplayPlan {
        let total = DetailItem {
            key: LEGACY_TOTAL_ITEM_KEY.to_string(),
            title: DetailTitle {
                heading: Message::new(keys::LAYER2_GAS_HEADING),
                tooltip: None,
            },
            detail_text: input
                .use_currency_rate_check
                .then(|| secondary_line(input, input.minimum_fee_wei, false)),
            detail_total: primary_line(
                input,
                input.minimum_fee_wei,
                Some(LAYER2_TOTAL_DECIMALS),
                false,
            ),
            sub_text: None,
            sub_title: None,
            no_bold: true,
            flex_width_values: true,
        };

        let layer1 = Layer1FeeMessage {
            key: LAYER1_MESSAGE_KEY.to_string(),
            transaction_id: input.transaction_id.clone(),
            layer2_fee_wei: input.minimum_fee_wei,
            native_currency: input.native_currency_symbol.clone(),
            hide_label: !input.use_native_currency_as_primary_currency,
        };

        DisplayPlan::MultiLayer { total, layer1 }
    }

    fn format_standard(&self, input: &GasDisplayInput) -> DetailItem {
        let heartbeat = self.config.show_heartbeat;
        let dapp_suggested = input.dapp_suggested_gas_fees.is_some();

        let tooltip = if dapp_suggested {
            Tooltip::DappSuggested {
                content: Message::new(keys::DAPP_GAS_TOOLTIP),
            }
        } else {
            gas_explanation_tooltip(input.is_mainnet)
        };

        DetailItem {
            key: LEGACY_GAS_DETAILS_KEY.to_string(),
            title: DetailTitle {
                heading: Message::new(keys::GAS_HEADING),
                tooltip: Some(tooltip),
            },
            detail_text: input
                .use_currency_rate_check
                .then(|| secondary_line(input, input.minimum_fee_wei, heartbeat)),
            detail_total: primary_line(
                input,
                input.minimum_fee_wei,
                Some(STANDARD_TOTAL_DECIMALS),
                heartbeat,
            ),
            // shown whether or not the rate check is on
            sub_text: Some(SubText {
                label: Message::new(keys::MAX_FEE_LABEL),
                amount: primary_line(input, input.maximum_fee_wei, None, heartbeat),
            }),
            sub_title: dapp_suggested.then(|| Message::new(keys::DAPP_GAS_MORE_INFO)),
            no_bold: false,
            flex_width_values: false,
        }
    }
}

fn gas_explanation_tooltip(is_mainnet: bool) -> Tooltip {
    // the intro names the network only on mainnet
    let network_name = if is_mainnet {
        MessageArg::Key(keys::NETWORK_NAME_ETHEREUM.to_string())
    } else {
        MessageArg::Text(String::new())
    };

    Tooltip::GasExplanation {
        intro: Message::with_args(keys::GAS_TOOLTIP_INTRO, vec![network_name]),
        explanation: Message::new(keys::GAS_TOOLTIP_EXPLANATION),
        learn_more: Link {
            href: GAS_EXPLANATION_URL.to_string(),
            text: Message::new(keys::GAS_TOOLTIP_CONVERSION),
        },
    }
}

// primary amounts carry a label only when the native currency is primary
fn primary_line(
    input: &GasDisplayInput,
    value_wei: U256,
    decimals: Option<u8>,
    heartbeat: bool,
) -> AmountLine {
    AmountLine {
        amount: CurrencyAmount {
            value_wei,
            currency: CurrencyType::Primary,
            hide_label: !input.use_native_currency_as_primary_currency,
            decimals,
        },
        heartbeat,
    }
}

fn secondary_line(input: &GasDisplayInput, value_wei: U256, heartbeat: bool) -> AmountLine {
    AmountLine {
        amount: CurrencyAmount {
            value_wei,
            currency: CurrencyType::Secondary,
            hide_label: input.use_native_currency_as_primary_currency,
            decimals: None,
        },
        heartbeat,
    }
}

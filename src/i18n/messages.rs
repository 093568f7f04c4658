use std::collections::HashMap;

use tracing::warn;

use super::{Localizer, substitute};
use crate::common::keys;

// Built-in English catalog
#[derive(Debug, Clone)]
pub struct EnglishMessages {
    messages: HashMap<&'static str, &'static str>,
}

impl Default for EnglishMessages {
    fn default() -> Self {
        let messages = HashMap::from([
            (keys::GAS_HEADING, "Estimated gas fee"),
            (keys::LAYER2_GAS_HEADING, "Layer 2 gas fee"),
            (
                keys::DAPP_GAS_TOOLTIP,
                "Edit to use the recommended gas fee based on the latest block.",
            ),
            (
                keys::GAS_TOOLTIP_INTRO,
                "Gas fees are paid to crypto miners who process transactions on the $1 network.",
            ),
            (
                keys::GAS_TOOLTIP_EXPLANATION,
                "Gas fees are set by the network and fluctuate based on network traffic and transaction complexity.",
            ),
            (keys::GAS_TOOLTIP_CONVERSION, "Learn more about gas fees"),
            (keys::NETWORK_NAME_ETHEREUM, "Ethereum"),
            (keys::MAX_FEE_LABEL, "Max fee:"),
            (keys::DAPP_GAS_MORE_INFO, "Site suggested"),
            (keys::LAYER1_FEES, "Layer 1 fees"),
            (keys::LAYER2_FEES, "Layer 2 fees"),
            (keys::TOTAL, "Total"),
        ]);
        Self { messages }
    }
}

impl EnglishMessages {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Localizer for EnglishMessages {
    fn t(&self, key: &str, args: &[String]) -> String {
        match self.messages.get(key) {
            Some(template) => substitute(template, args),
            None => {
                warn!(key, "missing translation, falling back to key");
                key.to_string()
            }
        }
    }
}

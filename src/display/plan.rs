//! Render plan produced by the gas summary formatter.
//!
//! A plan names what to show, not how it looks: text is carried as
//! unresolved [`Message`] keys and amounts as raw wei plus display
//! options, so any rendering layer can consume it.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::common::CurrencyType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageArg {
    // another localization key, resolved before substitution
    Key(String),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub key: String,
    pub args: Vec<MessageArg>,
}

impl Message {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            args: Vec::new(),
        }
    }

    pub fn with_args(key: &str, args: Vec<MessageArg>) -> Self {
        Self {
            key: key.to_string(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub href: String,
    pub text: Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "kind")]
pub enum Tooltip {
    DappSuggested {
        content: Message,
    },
    GasExplanation {
        intro: Message,
        explanation: Message,
        learn_more: Link,
    },
}

impl Tooltip {
    // every message the tooltip would show, in display order
    pub fn messages(&self) -> Vec<&Message> {
        match self {
            Tooltip::DappSuggested { content } => vec![content],
            Tooltip::GasExplanation {
                intro,
                explanation,
                learn_more,
            } => vec![intro, explanation, &learn_more.text],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailTitle {
    pub heading: Message,
    pub tooltip: Option<Tooltip>,
}

// A wei amount plus the options a currency renderer needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyAmount {
    pub value_wei: U256,
    pub currency: CurrencyType,
    pub hide_label: bool,
    // None means the renderer's default precision
    pub decimals: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountLine {
    pub amount: CurrencyAmount,
    pub heartbeat: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubText {
    pub label: Message,
    pub amount: AmountLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailItem {
    pub key: String,
    pub title: DetailTitle,
    pub detail_text: Option<AmountLine>,
    pub detail_total: AmountLine,
    pub sub_text: Option<SubText>,
    pub sub_title: Option<Message>,
    pub no_bold: bool,
    pub flex_width_values: bool,
}

impl DetailItem {
    pub fn amounts(&self) -> Vec<&CurrencyAmount> {
        let mut amounts = Vec::new();
        if let Some(line) = &self.detail_text {
            amounts.push(&line.amount);
        }
        amounts.push(&self.detail_total.amount);
        if let Some(sub_text) = &self.sub_text {
            amounts.push(&sub_text.amount.amount);
        }
        amounts
    }
}

// Handed to an external renderer that works out the layer-1 share
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer1FeeMessage {
    pub key: String,
    pub transaction_id: String,
    pub layer2_fee_wei: U256,
    pub native_currency: String,
    // same rule as other primary amounts
    pub hide_label: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "kind")]
pub enum DisplayPlan {
    MultiLayer {
        total: DetailItem,
        layer1: Layer1FeeMessage,
    },
    Standard {
        details: DetailItem,
    },
}

impl DisplayPlan {
    pub fn entry_count(&self) -> usize {
        match self {
            DisplayPlan::MultiLayer { .. } => 2,
            DisplayPlan::Standard { .. } => 1,
        }
    }

    /// The detail item that carries the total, present in both variants.
    pub fn detail_item(&self) -> &DetailItem {
        match self {
            DisplayPlan::MultiLayer { total, .. } => total,
            DisplayPlan::Standard { details } => details,
        }
    }

    pub fn secondary_amounts(&self) -> Vec<&CurrencyAmount> {
        self.detail_item()
            .amounts()
            .into_iter()
            .filter(|amount| amount.currency == CurrencyType::Secondary)
            .collect()
    }
}

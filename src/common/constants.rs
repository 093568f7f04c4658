// Decimal places of the native currency (1 ETH = 10^18 wei)
pub const NATIVE_CURRENCY_DECIMALS: u8 = 18;

// Decimal places shown for the gas total on each screen variant
pub const LAYER2_TOTAL_DECIMALS: u8 = 18;
pub const STANDARD_TOTAL_DECIMALS: u8 = 6;

// Renderer defaults when an amount carries no explicit precision
pub const DEFAULT_NATIVE_DISPLAY_DECIMALS: u8 = 8;
pub const DEFAULT_FIAT_DISPLAY_DECIMALS: u8 = 2;

// Conversion rates are parsed into fixed point with this many decimals
pub const CONVERSION_RATE_DECIMALS: u8 = 8;

pub const GAS_EXPLANATION_URL: &str =
    "https://community.metamask.io/t/what-is-gas-why-do-transactions-take-so-long/3172";

// Detail item keys
pub const LEGACY_TOTAL_ITEM_KEY: &str = "legacy-total-item";
pub const LEGACY_GAS_DETAILS_KEY: &str = "legacy-gas-details";
pub const LAYER1_MESSAGE_KEY: &str = "confirm-layer-1";

/// Localization keys used by the gas summary.
pub mod keys {
    pub const GAS_HEADING: &str = "transactionDetailGasHeading";
    pub const LAYER2_GAS_HEADING: &str = "transactionDetailLayer2GasHeading";
    pub const DAPP_GAS_TOOLTIP: &str = "transactionDetailDappGasTooltip";
    pub const GAS_TOOLTIP_INTRO: &str = "transactionDetailGasTooltipIntro";
    pub const GAS_TOOLTIP_EXPLANATION: &str = "transactionDetailGasTooltipExplanation";
    pub const GAS_TOOLTIP_CONVERSION: &str = "transactionDetailGasTooltipConversion";
    pub const NETWORK_NAME_ETHEREUM: &str = "networkNameEthereum";
    pub const MAX_FEE_LABEL: &str = "editGasSubTextFeeLabel";
    pub const DAPP_GAS_MORE_INFO: &str = "transactionDetailDappGasMoreInfo";
    pub const LAYER1_FEES: &str = "layer1Fees";
    pub const LAYER2_FEES: &str = "layer2Fees";
    pub const TOTAL: &str = "total";
}

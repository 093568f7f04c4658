pub mod cli;
pub mod common;
pub mod currency;
pub mod display;
pub mod gas;
pub mod i18n;
pub mod render;
pub mod state;

// Re-export commonly used types for convenience
pub use common::{CurrencyMode, CurrencyType, DisplayError};
pub use currency::{CurrencyAmountRenderer, CurrencyRate, PreferencedCurrencyRenderer};
pub use display::{DisplayPlan, FormatterConfig, GasSummaryFormatter};
pub use gas::{DappSuggestedGasFees, GasDisplayInput, TransactionFee, TransactionMeta};
pub use i18n::{EnglishMessages, Localizer};
pub use render::{Layer1FeeSource, TextRenderer};
pub use state::{AppSnapshot, NetworkStore, PreferencesStore, TransactionStore, assemble_input};

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::common::DisplayError;
use crate::currency::PreferencedCurrencyRenderer;
use crate::display::GasSummaryFormatter;
use crate::i18n::EnglishMessages;
use crate::render::TextRenderer;
use crate::state::{AppSnapshot, NetworkStore, PreferencesStore, assemble_input};

/// Print the gas fee summary for a pending confirmation.
#[derive(Parser, Debug)]
#[command(name = "gas-summary", version)]
pub struct Cli {
    /// Wallet state snapshot (JSON).
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Print the display plan as JSON instead of rendered text.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

// Output lines for one invocation
pub fn run(cli: &Cli) -> Result<Vec<String>, DisplayError> {
    let snapshot = AppSnapshot::load(&cli.snapshot)?;
    info!(path = %cli.snapshot.display(), "snapshot loaded");

    let input = assemble_input(&snapshot, &snapshot, &snapshot);
    let plan = GasSummaryFormatter::new(snapshot.display).format(&input);

    if cli.json {
        return Ok(vec![serde_json::to_string_pretty(&plan)?]);
    }

    let messages = EnglishMessages::new();
    let currency = PreferencedCurrencyRenderer::new(
        snapshot.use_native_currency_as_primary_currency(),
        snapshot.native_currency_symbol(),
        &snapshot.currency_rate(),
    )?;
    TextRenderer::new(&messages, &currency).render(&plan)
}

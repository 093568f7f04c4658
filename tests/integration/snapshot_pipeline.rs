use std::ffi::OsString;
use std::io::Write;

use alloy::primitives::U256;
use anyhow::Result;
use clap::Parser;
use gas_summary::cli::{Cli, run};
use gas_summary::display::{DisplayPlan, Tooltip};
use gas_summary::render::UNAVAILABLE_AMOUNT;
use gas_summary::{
    AppSnapshot, EnglishMessages, GasSummaryFormatter, NetworkStore, PreferencedCurrencyRenderer,
    PreferencesStore, TextRenderer, assemble_input,
};
use tempfile::NamedTempFile;

// Mainnet legacy transfer: 21000 gas at 20 gwei
const MAINNET_SNAPSHOT: &str = r#"{
    "network": { "chainId": 1, "nativeCurrency": "ETH" },
    "preferences": {
        "useNativeCurrencyAsPrimaryCurrency": true,
        "useCurrencyRateCheck": true
    },
    "currency": { "currentCurrency": "usd", "conversionRate": "2000" },
    "unapprovedTxs": {
        "1": {
            "id": "1",
            "txParams": { "gas": "0x5208", "gasPrice": "0x4a817c800" }
        }
    },
    "currentTransaction": {
        "id": "1",
        "txParams": { "gas": "0x5208", "gasPrice": "0x4a817c800" }
    },
    "display": { "showHeartbeat": false }
}"#;

fn write_snapshot(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

fn render(snapshot: &AppSnapshot) -> Result<Vec<String>> {
    let input = assemble_input(snapshot, snapshot, snapshot);
    let plan = GasSummaryFormatter::new(snapshot.display).format(&input);

    let messages = EnglishMessages::new();
    let currency = PreferencedCurrencyRenderer::new(
        snapshot.use_native_currency_as_primary_currency(),
        snapshot.native_currency_symbol(),
        &snapshot.currency_rate(),
    )?;
    Ok(TextRenderer::new(&messages, &currency).render(&plan)?)
}

#[test]
fn test_mainnet_snapshot_renders_standard_summary() -> Result<()> {
    let file = write_snapshot(MAINNET_SNAPSHOT)?;
    let snapshot = AppSnapshot::load(file.path())?;

    let input = assemble_input(&snapshot, &snapshot, &snapshot);
    // 21000 * 20 gwei
    assert_eq!(input.minimum_fee_wei, U256::from(420_000_000_000_000_u64));

    let lines = render(&snapshot)?;
    eprintln!("{}", lines.join("\n"));

    assert_eq!(lines[0], "Estimated gas fee");
    assert!(lines.iter().any(|l| l.contains("on the Ethereum network")));
    assert!(lines.contains(&"  0.84".to_string()));
    assert!(lines.contains(&"  0.00042 ETH".to_string()));
    assert!(lines.contains(&"  Max fee: 0.00042 ETH".to_string()));
    assert!(!lines.iter().any(|l| l.contains("Site suggested")));
    Ok(())
}

#[test]
fn test_dapp_suggested_snapshot_shows_note() -> Result<()> {
    let mut snapshot = AppSnapshot::from_json(MAINNET_SNAPSHOT)?;
    if let Some(current) = snapshot.current_transaction.as_mut() {
        current.dapp_suggested_gas_fees = Some(Default::default());
    }

    let input = assemble_input(&snapshot, &snapshot, &snapshot);
    let plan = GasSummaryFormatter::new(snapshot.display).format(&input);
    assert!(matches!(
        plan.detail_item().title.tooltip,
        Some(Tooltip::DappSuggested { .. })
    ));

    let lines = render(&snapshot)?;
    assert_eq!(lines.last().map(String::as_str), Some("  Site suggested"));
    Ok(())
}

#[test]
fn test_optimism_snapshot_renders_layer2_heading() -> Result<()> {
    let json = MAINNET_SNAPSHOT.replace(r#""chainId": 1"#, r#""chainId": 10"#);
    let snapshot = AppSnapshot::from_json(&json)?;

    let input = assemble_input(&snapshot, &snapshot, &snapshot);
    let plan = GasSummaryFormatter::new(snapshot.display).format(&input);

    let DisplayPlan::MultiLayer { layer1, .. } = &plan else {
        panic!("expected multi-layer plan, got {:?}", plan);
    };
    assert_eq!(layer1.transaction_id, "1");
    assert_eq!(layer1.layer2_fee_wei, input.minimum_fee_wei);

    let lines = render(&snapshot)?;
    assert_eq!(lines[0], "Layer 2 gas fee");
    Ok(())
}

#[test]
fn test_fiat_primary_without_rate_shows_placeholders() -> Result<()> {
    let json = MAINNET_SNAPSHOT
        .replace(
            r#""useNativeCurrencyAsPrimaryCurrency": true"#,
            r#""useNativeCurrencyAsPrimaryCurrency": false"#,
        )
        .replace(r#", "conversionRate": "2000""#, "");
    let snapshot = AppSnapshot::from_json(&json)?;

    let lines = render(&snapshot)?;
    assert!(lines.contains(&format!("  {}", UNAVAILABLE_AMOUNT)));
    // the native secondary amount still renders
    assert!(lines.contains(&"  0.00042 ETH".to_string()));
    Ok(())
}

#[test]
fn test_default_snapshot_renders_zero_summary() -> Result<()> {
    let snapshot = AppSnapshot::from_json("{}")?;

    let lines = render(&snapshot)?;
    assert_eq!(lines[0], "Estimated gas fee");
    assert!(lines.contains(&"  ~ 0 ETH".to_string()));
    assert!(lines.contains(&"  Max fee: ~ 0 ETH".to_string()));
    Ok(())
}

#[test]
fn test_optimism_without_rate_check_references_layer2_fee() -> Result<()> {
    let snapshot = AppSnapshot::from_json(
        r#"{"network": {"chainId": 10}, "preferences": {"useCurrencyRateCheck": false}}"#,
    )?;

    let lines = render(&snapshot)?;
    assert_eq!(
        lines,
        vec!["Layer 2 gas fee", "  0 ETH", "Layer 2 fees: 0 ETH"]
    );
    Ok(())
}

#[test]
fn test_cli_parses_snapshot_and_json_flag() -> Result<()> {
    let cli = Cli::try_parse_from(["gas-summary", "state.json", "--json"])?;
    assert_eq!(cli.snapshot.to_str(), Some("state.json"));
    assert!(cli.json);

    let cli = Cli::try_parse_from(["gas-summary", "state.json"])?;
    assert!(!cli.json);
    Ok(())
}

#[test]
fn test_cli_rejects_unknown_flag_and_missing_snapshot() {
    assert!(Cli::try_parse_from(["gas-summary", "state.json", "--verbose"]).is_err());
    assert!(Cli::try_parse_from(["gas-summary"]).is_err());
}

#[test]
fn test_cli_json_output_is_the_plan() -> Result<()> {
    let file = write_snapshot(MAINNET_SNAPSHOT)?;
    let args: Vec<OsString> = vec![
        "gas-summary".into(),
        file.path().as_os_str().to_owned(),
        "--json".into(),
    ];
    let cli = Cli::try_parse_from(args)?;

    let lines = run(&cli)?;
    assert_eq!(lines.len(), 1);

    let plan: DisplayPlan = serde_json::from_str(&lines[0])?;
    assert_eq!(plan.entry_count(), 1);
    assert_eq!(
        plan.detail_item().detail_total.amount.value_wei,
        U256::from(420_000_000_000_000_u64)
    );
    Ok(())
}

#[test]
fn test_cli_text_output_matches_renderer() -> Result<()> {
    let file = write_snapshot(MAINNET_SNAPSHOT)?;
    let cli = Cli {
        snapshot: file.path().to_path_buf(),
        json: false,
    };

    let snapshot = AppSnapshot::load(file.path())?;
    assert_eq!(run(&cli)?, render(&snapshot)?);
    Ok(())
}

#[test]
fn test_plan_serializes_with_kind_tag() -> Result<()> {
    let snapshot = AppSnapshot::from_json(MAINNET_SNAPSHOT)?;
    let input = assemble_input(&snapshot, &snapshot, &snapshot);
    let plan = GasSummaryFormatter::new(snapshot.display).format(&input);

    let value = serde_json::to_value(&plan)?;
    assert_eq!(value["kind"], "standard");
    assert_eq!(value["details"]["detailTotal"]["amount"]["decimals"], 6);
    Ok(())
}

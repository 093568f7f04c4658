use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gas_summary::cli::{Cli, run};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let lines =
        run(&cli).with_context(|| format!("rendering snapshot {}", cli.snapshot.display()))?;

    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

use clap::Parser;
use pnr_check::utils::logger;
use pnr_check::{CliConfig, Shell, SystemClock};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pnr-check");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), SystemClock, config.json);
    shell.run()?;

    tracing::info!("Session ended");
    Ok(())
}

//! Main entry point for jobtrack.

use anyhow::Context;
use clap::Parser;
use jobtrack_cli::{App, Cli};
use jobtrack_common::init_logging;
use jobtrack_config::ConfigLoader;
use tracing::{debug, error};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?;

    // Logs go to stderr so stdout stays machine-readable
    let mut logging = config.logging.to_logging_config();
    if let Some(level) = cli.log_level.clone() {
        logging.level = level;
    }
    init_logging(&logging).context("failed to initialize logging")?;
    debug!(?cli, "Parsed command line");

    let app = App::new(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = app.run(&cli.command, &mut out) {
        error!("Command failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

//! Monty Hall Simulator

use clap::Parser;
use monty_hall_sim::{Config, Result, VERSION, cli, init_logging};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let config = if let Some(config_path) = &args.config {
        Config::from_file(config_path)?
    } else {
        Config::load()?
    };

    // Keep the TUI screen clean: interactive sessions always log to a file
    let log_file = config.logging.file.clone().or_else(|| {
        args.command
            .is_interactive()
            .then(|| std::env::temp_dir().join("monty-hall-sim.log"))
    });
    init_logging(&config.logging.level, log_file.as_deref())?;

    tracing::info!("Monty Hall Simulator v{}", VERSION);
    tracing::debug!("Parsed arguments: {:?}", args);
    tracing::debug!("Loaded configuration: {:?}", config);

    cli::execute(args, config)
}

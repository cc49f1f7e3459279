//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::{Config, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// Monty Hall Simulator CLI
#[derive(Parser, Debug)]
#[command(name = "monty-hall-sim")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively in the terminal UI
    Play {
        /// Seed for reproducible games (overrides config)
        #[arg(long, env = "MONTY_HALL_SEED")]
        seed: Option<u64>,
    },

    /// Run a batch of simulated games and print the win rates
    Simulate {
        /// Number of games to simulate (defaults to game.default_trials)
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        trials: Option<String>,

        /// Seed for reproducible runs (overrides config)
        #[arg(long, env = "MONTY_HALL_SEED")]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        output: OutputFormat,
    },
}

impl Commands {
    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self, Commands::Play { .. })
    }
}

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text table
    Table,
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    match args.command {
        Commands::Play { seed } => commands::play::execute(seed, &config),
        Commands::Simulate {
            trials,
            seed,
            output,
        } => commands::simulate::execute(trials, seed, output, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["monty-hall-sim", "simulate", "-n", "500", "--seed", "3"])
            .unwrap();

        match cli.command {
            Commands::Simulate {
                trials,
                seed,
                output,
            } => {
                assert_eq!(trials.as_deref(), Some("500"));
                assert_eq!(seed, Some(3));
                assert_eq!(output, OutputFormat::Table);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_keeps_raw_trial_text() {
        // validation happens in the batch runner, not in clap
        let cli = Cli::try_parse_from(["monty-hall-sim", "simulate", "--trials", "-5"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Simulate { trials: Some(ref t), .. } if t == "-5"
        ));
    }

    #[test]
    fn test_cli_play() {
        let cli = Cli::try_parse_from(["monty-hall-sim", "--config", "my.toml", "play"]).unwrap();
        assert!(cli.command.is_interactive());
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let cli = Cli::try_parse_from(["monty-hall-sim", "simulate", "--output", "xml"]);
        assert!(cli.is_err());
    }
}

//! CLI command implementations
//!
//! This module contains the implementation for each CLI command.

use crate::{Config, Result};

/// Play command implementation
pub mod play {
    use super::*;
    use crate::game::{RngChooser, Session};

    /// Execute the play command
    pub fn execute(seed: Option<u64>, config: &Config) -> Result<()> {
        let seed = config.seed(seed);
        let session = Session::new(RngChooser::from_seed_option(seed));

        tracing::info!("Launching TUI...");
        crate::tui::run(session, config)
    }
}

/// Simulate command implementation
pub mod simulate {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::cli::output::{SimulationReport, output_json, output_table};
    use crate::game::{RngChooser, parse_trial_count, run_batch};

    /// Execute the simulate command
    pub fn execute(
        trials: Option<String>,
        seed: Option<u64>,
        output_format: OutputFormat,
        config: &Config,
    ) -> Result<()> {
        let raw = trials.unwrap_or_else(|| config.game.default_trials.to_string());
        let trials = parse_trial_count(&raw)?;
        let seed = config.seed(seed);

        tracing::info!("Simulating {} games", trials);
        let mut chooser = RngChooser::from_seed_option(seed);
        let result = run_batch(trials, &mut chooser);
        let report = SimulationReport::new(&result, seed);

        let mut stdout = std::io::stdout();
        match output_format {
            OutputFormat::Json => output_json(&mut stdout, &report),
            OutputFormat::Table => output_table(&mut stdout, &report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::cli::OutputFormat;

    #[test]
    fn test_simulate_rejects_invalid_trials() {
        let config = Config::default();
        for raw in ["-5", "abc", "0"] {
            let err =
                simulate::execute(Some(raw.to_string()), Some(1), OutputFormat::Json, &config)
                    .unwrap_err();
            assert!(matches!(err, Error::InvalidTrialCount { .. }));
        }
    }

    #[test]
    fn test_simulate_uses_configured_default() {
        let mut config = Config::default();
        config.game.default_trials = 10;
        assert!(simulate::execute(None, Some(5), OutputFormat::Table, &config).is_ok());
    }
}

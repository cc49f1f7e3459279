//! Output formatting module
//!
//! This module handles formatting batch results for different output formats.

use crate::{
    Result,
    game::{BatchResult, Statistics},
};
use serde::Serialize;

/// Batch run summary as printed by `simulate`
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub trials: u64,
    pub switch_wins: u64,
    pub stay_wins: u64,
    pub switch_win_rate: f64,
    pub stay_win_rate: f64,
    pub seed: Option<u64>,
    pub generated_at: String,
}

impl SimulationReport {
    pub fn new(result: &BatchResult, seed: Option<u64>) -> Self {
        let mut stats = Statistics::new();
        stats.replace_with_batch(result);
        Self {
            trials: stats.trials,
            switch_wins: stats.switch_wins,
            stay_wins: stats.stay_wins,
            switch_win_rate: stats.switch_win_rate(),
            stay_win_rate: stats.stay_win_rate(),
            seed,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Output the report as JSON
pub fn output_json(w: &mut impl std::io::Write, report: &SimulationReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, report)?;
    writeln!(w)?; // Add trailing newline
    Ok(())
}

/// Output the report as text table
pub fn output_table(w: &mut impl std::io::Write, report: &SimulationReport) -> Result<()> {
    writeln!(w, "Monty Hall Simulation - Results")?;
    writeln!(w, "{}", "=".repeat(48))?;
    writeln!(w)?;

    writeln!(w, "Total trials: {}", report.trials)?;
    if let Some(seed) = report.seed {
        writeln!(w, "Seed:         {}", seed)?;
    }
    writeln!(w)?;

    writeln!(w, "{:<10} {:>14} {:>12}", "Strategy", "Wins", "Win Rate")?;
    writeln!(w, "{:-<48}", "")?;
    writeln!(
        w,
        "{:<10} {:>14} {:>11.1}%",
        "Switch", report.switch_wins, report.switch_win_rate
    )?;
    writeln!(
        w,
        "{:<10} {:>14} {:>11.1}%",
        "Stay", report.stay_wins, report.stay_win_rate
    )?;
    writeln!(w)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_report() -> SimulationReport {
        SimulationReport::new(
            &BatchResult {
                trials: 1000,
                switch_wins: 667,
                stay_wins: 333,
            },
            Some(42),
        )
    }

    #[test]
    fn test_report_rates() {
        let report = create_test_report();
        assert!((report.switch_win_rate - 66.7).abs() < 1e-9);
        assert!((report.stay_win_rate - 33.3).abs() < 1e-9);
    }

    #[test]
    fn test_output_json() {
        let report = create_test_report();

        let mut output = Vec::new();
        output_json(&mut output, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["trials"], 1000);
        assert_eq!(value["switch_wins"], 667);
        assert_eq!(value["stay_wins"], 333);
        assert_eq!(value["seed"], 42);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_output_table() {
        let report = create_test_report();

        let mut output = Vec::new();
        output_table(&mut output, &report).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Total trials: 1000"));
        assert!(text.contains("Seed:         42"));
        assert!(text.contains("66.7%"));
        assert!(text.contains("33.3%"));
    }
}

//! Statistics aggregator

use super::{BatchResult, Outcome};
use serde::{Deserialize, Serialize};

/// Running win tallies across rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub trials: u64,
    pub switch_wins: u64,
    pub stay_wins: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one interactively played round
    pub fn record_interactive(&mut self, outcome: Outcome) {
        self.trials += 1;
        if outcome.won {
            if outcome.switched {
                self.switch_wins += 1;
            } else {
                self.stay_wins += 1;
            }
        }
    }

    /// Overwrite every counter with a finished batch run
    pub fn replace_with_batch(&mut self, result: &BatchResult) {
        *self = Self {
            trials: result.trials,
            switch_wins: result.switch_wins,
            stay_wins: result.stay_wins,
        };
    }

    /// Switch wins as a percentage of all trials (0 when empty)
    pub fn switch_win_rate(&self) -> f64 {
        percentage(self.switch_wins, self.trials)
    }

    /// Stay wins as a percentage of all trials (0 when empty)
    pub fn stay_win_rate(&self) -> f64 {
        percentage(self.stay_wins, self.trials)
    }

    /// Labelled series for the win-rate chart
    pub fn chart_series(&self) -> [(&'static str, f64); 2] {
        [
            ("Switch", self.switch_win_rate()),
            ("Stay", self.stay_win_rate()),
        ]
    }
}

fn percentage(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

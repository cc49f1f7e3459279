//! Batch simulation runner
//!
//! Runs many independent rounds without interaction and reports only the
//! aggregate counts. Both strategies are scored against the same draw in
//! every trial.

use super::{DoorChooser, round::host_reveal};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::num::{IntErrorKind, NonZeroU64};

/// Aggregate counts of a finished batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub trials: u64,
    pub switch_wins: u64,
    pub stay_wins: u64,
}

/// Validate a user-supplied trial count.
///
/// Surrounding whitespace is ignored; anything other than a positive
/// base-10 integer is rejected.
pub fn parse_trial_count(raw: &str) -> Result<NonZeroU64> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| Error::invalid_trial_count(raw, reason);

    if trimmed.is_empty() {
        return Err(invalid("enter a number of simulations"));
    }

    match trimmed.parse::<u64>() {
        Ok(n) => NonZeroU64::new(n).ok_or_else(|| invalid("must be a positive number")),
        Err(e) => Err(match e.kind() {
            IntErrorKind::PosOverflow => invalid("number is too large"),
            _ if trimmed.starts_with('-') && is_finite_number(&trimmed[1..]) => {
                invalid("must be a positive number")
            }
            _ if is_finite_number(trimmed) => invalid("must be a whole number"),
            _ => invalid("not a number"),
        }),
    }
}

fn is_finite_number(s: &str) -> bool {
    s.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Run `trials` independent games and count wins for both strategies
pub fn run_batch(trials: NonZeroU64, chooser: &mut impl DoorChooser) -> BatchResult {
    let trials = trials.get();
    let mut switch_wins = 0;
    let mut stay_wins = 0;

    for _ in 0..trials {
        let prize = chooser.any_door();
        let selected = chooser.any_door();
        let reveal = host_reveal(prize, selected, chooser);

        if reveal.remaining == prize {
            switch_wins += 1;
        }
        if selected == prize {
            stay_wins += 1;
        }
    }

    let result = BatchResult {
        trials,
        switch_wins,
        stay_wins,
    };
    tracing::info!(
        "Batch of {} trials: switch won {}, stay won {}",
        trials,
        switch_wins,
        stay_wins
    );
    result
}

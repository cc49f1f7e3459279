//! Game session
//!
//! The session owns the current round, the statistics and the random
//! source. The presentation layer holds a session, forwards user input to
//! its transition methods and re-renders from the returned values and the
//! read-only accessors.

use super::{
    BatchResult, Door, DoorChooser, Outcome, Phase, Reveal, Round, Statistics,
    batch::{parse_trial_count, run_batch},
};
use crate::Result;

/// Display state of a single door
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoorView {
    pub door: Door,
    pub selectable: bool,
    pub selected: bool,
    pub revealed: bool,
    pub winner: bool,
    /// What is shown behind the door once it is open
    pub caption: Option<&'static str>,
}

/// Interactive game plus aggregate statistics
pub struct Session<C> {
    round: Round,
    stats: Statistics,
    chooser: C,
}

impl<C: DoorChooser> Session<C> {
    /// Create a session with a freshly started round
    pub fn new(mut chooser: C) -> Self {
        let round = Round::start(&mut chooser);
        Self {
            round,
            stats: Statistics::new(),
            chooser,
        }
    }

    /// Replace the current round with a new one
    pub fn start_round(&mut self) {
        self.round = Round::start(&mut self.chooser);
    }

    pub fn select_door(&mut self, door: Door) -> Option<Reveal> {
        self.round.select_door(door, &mut self.chooser)
    }

    /// Resolve the round and count it in the statistics
    pub fn decide(&mut self, switched: bool) -> Option<Outcome> {
        let outcome = self.round.decide(switched)?;
        self.stats.record_interactive(outcome);
        Some(outcome)
    }

    /// Validate `raw_trials`, run the batch and replace the statistics.
    ///
    /// On invalid input nothing is run and the statistics are untouched.
    pub fn run_batch(&mut self, raw_trials: &str) -> Result<BatchResult> {
        let trials = parse_trial_count(raw_trials).inspect_err(|e| {
            tracing::warn!("Batch run rejected: {}", e);
        })?;
        let result = run_batch(trials, &mut self.chooser);
        self.stats.replace_with_batch(&result);
        Ok(result)
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn door_view(&self, door: Door) -> DoorView {
        let phase = self.round.phase();
        let resolved = phase == Phase::Resolved;
        let is_prize = door == self.round.prize_door();
        let revealed = self.round.revealed_door() == Some(door);

        let caption = if resolved && is_prize {
            Some("Car")
        } else if revealed || resolved {
            Some("Goat")
        } else {
            None
        };

        DoorView {
            door,
            selectable: phase == Phase::NotStarted,
            selected: self.round.selected_door() == Some(door),
            revealed,
            winner: resolved && is_prize,
            caption,
        }
    }

    pub fn door_views(&self) -> [DoorView; 3] {
        Door::ALL.map(|door| self.door_view(door))
    }

    /// Prompt for the current phase
    pub fn instruction(&self) -> String {
        match (self.round.phase(), self.round.revealed_door(), self.round.outcome()) {
            (Phase::NotStarted, _, _) => "Select a door to begin!".to_string(),
            (Phase::Selected, Some(revealed), _) => format!(
                "Door {} has a goat! Do you want to switch or stay?",
                revealed
            ),
            (Phase::Resolved, _, Some(outcome)) => format!(
                "You {} and {}!",
                if outcome.switched { "switched" } else { "stayed" },
                if outcome.won { "won" } else { "lost" }
            ),
            _ => String::new(),
        }
    }
}

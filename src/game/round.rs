//! Round state machine
//!
//! A round moves linearly through `NotStarted → Selected → Resolved`.
//! Out-of-phase calls are rejected as no-ops and report `None`, so the
//! presentation layer never has to guard transitions itself.

use super::{Door, DoorChooser};

/// Position of a round in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    NotStarted,
    Selected,
    Resolved,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::NotStarted => "Not started",
            Phase::Selected => "Door selected",
            Phase::Resolved => "Resolved",
        }
    }
}

/// Final result of a resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub won: bool,
    pub switched: bool,
}

/// What the host shows after the player picks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub revealed: Door,
    pub remaining: Door,
}

/// One play-through of the three-door puzzle
#[derive(Debug, Clone)]
pub struct Round {
    prize_door: Door,
    selected_door: Option<Door>,
    reveal: Option<Reveal>,
    phase: Phase,
    outcome: Option<Outcome>,
}

impl Round {
    /// Start a round with the prize placed uniformly at random
    pub fn start(chooser: &mut impl DoorChooser) -> Self {
        Self::with_prize(chooser.any_door())
    }

    /// Start a round with a known prize door
    pub fn with_prize(prize_door: Door) -> Self {
        tracing::debug!("New round, prize behind door {}", prize_door);
        Self {
            prize_door,
            selected_door: None,
            reveal: None,
            phase: Phase::NotStarted,
            outcome: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn prize_door(&self) -> Door {
        self.prize_door
    }

    pub fn selected_door(&self) -> Option<Door> {
        self.selected_door
    }

    pub fn revealed_door(&self) -> Option<Door> {
        self.reveal.map(|r| r.revealed)
    }

    pub fn remaining_door(&self) -> Option<Door> {
        self.reveal.map(|r| r.remaining)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Record the player's pick and let the host open a goat door.
    ///
    /// Only accepted while `NotStarted`.
    pub fn select_door(&mut self, door: Door, chooser: &mut impl DoorChooser) -> Option<Reveal> {
        if self.phase != Phase::NotStarted {
            tracing::debug!("Rejected selection of door {} in phase {:?}", door, self.phase);
            return None;
        }

        let reveal = host_reveal(self.prize_door, door, chooser);
        self.selected_door = Some(door);
        self.reveal = Some(reveal);
        self.phase = Phase::Selected;

        tracing::debug!(
            "Selected door {}, host opens door {}, remaining door {}",
            door,
            reveal.revealed,
            reveal.remaining
        );
        Some(reveal)
    }

    /// Switch to the remaining door or stay with the selection.
    ///
    /// Only accepted while `Selected`.
    pub fn decide(&mut self, switched: bool) -> Option<Outcome> {
        let (Phase::Selected, Some(selected), Some(reveal)) =
            (self.phase, self.selected_door, self.reveal)
        else {
            tracing::debug!("Rejected decision in phase {:?}", self.phase);
            return None;
        };

        let final_door = if switched { reveal.remaining } else { selected };
        let outcome = Outcome {
            won: final_door == self.prize_door,
            switched,
        };
        self.outcome = Some(outcome);
        self.phase = Phase::Resolved;

        tracing::debug!("Round resolved: {:?}", outcome);
        Some(outcome)
    }
}

/// Pick the door the host opens and derive the switch target.
///
/// The host draws uniformly among doors that are neither the prize nor the
/// player's pick: two candidates when the pick is the prize, one otherwise.
pub(crate) fn host_reveal(prize: Door, selected: Door, chooser: &mut impl DoorChooser) -> Reveal {
    let candidates = Door::excluding(prize, selected);
    // candidates is never empty with three doors
    let revealed = chooser
        .choose(&candidates)
        .unwrap_or_else(|| candidates[0]);
    let remaining = Door::third(selected, revealed).unwrap_or(prize);
    Reveal {
        revealed,
        remaining,
    }
}

//! Door representation

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three doors on stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Door {
    One,
    Two,
    Three,
}

impl Door {
    /// All doors in display order
    pub const ALL: [Door; 3] = [Door::One, Door::Two, Door::Three];

    pub fn number(&self) -> u8 {
        match self {
            Door::One => 1,
            Door::Two => 2,
            Door::Three => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Door::One),
            2 => Some(Door::Two),
            3 => Some(Door::Three),
            _ => None,
        }
    }

    /// Doors that are neither `a` nor `b`, in display order.
    ///
    /// Yields two doors when `a == b` and exactly one otherwise.
    pub fn excluding(a: Door, b: Door) -> Vec<Door> {
        Self::ALL
            .into_iter()
            .filter(|d| *d != a && *d != b)
            .collect()
    }

    /// The single door that is neither `a` nor `b`.
    ///
    /// Returns `None` when `a == b`, since two doors would qualify.
    pub fn third(a: Door, b: Door) -> Option<Door> {
        match Self::excluding(a, b).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_round_trip() {
        for door in Door::ALL {
            assert_eq!(Door::from_number(door.number()), Some(door));
        }
        assert_eq!(Door::from_number(0), None);
        assert_eq!(Door::from_number(4), None);
    }

    #[test]
    fn test_excluding() {
        assert_eq!(Door::excluding(Door::One, Door::Two), vec![Door::Three]);
        assert_eq!(
            Door::excluding(Door::Two, Door::Two),
            vec![Door::One, Door::Three]
        );
    }

    #[test]
    fn test_third() {
        assert_eq!(Door::third(Door::One, Door::Three), Some(Door::Two));
        assert_eq!(Door::third(Door::Three, Door::Two), Some(Door::One));
        assert_eq!(Door::third(Door::One, Door::One), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Door::Two.to_string(), "2");
    }
}

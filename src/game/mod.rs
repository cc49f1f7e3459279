//! Game module - Monty Hall round state machine, statistics and batch runs

pub mod batch;
pub mod door;
pub mod random;
pub mod round;
pub mod session;
pub mod stats;

// Re-export key types
pub use batch::{BatchResult, parse_trial_count, run_batch};
pub use door::Door;
pub use random::{DoorChooser, RngChooser};
pub use round::{Outcome, Phase, Reveal, Round};
pub use session::{DoorView, Session};
pub use stats::Statistics;

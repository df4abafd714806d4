//! Focus/break interval timer.

mod engine;

pub use engine::{Mode, TimerEngine, BREAK_LENGTH_RANGE, FOCUS_LENGTH_RANGE};

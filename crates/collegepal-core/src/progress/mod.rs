//! Gamified progression: activity rewards, bounded skills, and streaks.

mod activity;
mod store;
pub mod streak;

pub use activity::{ActivityKind, Reward};
pub use store::{ActivityOutcome, ProgressState, SKILL_MAX, SKILL_NAMES, XP_PER_LEVEL};
pub use streak::StreakDecision;

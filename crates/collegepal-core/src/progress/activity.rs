//! Activity kinds and their reward table.
//!
//! Every rewarded user action carries exactly one [`ActivityKind`]. The
//! kind→reward mapping is fixed; collaborators never pass deltas themselves.

use serde::{Deserialize, Serialize};

/// A tag identifying which collaborator triggered a reward.
///
/// The CRUD kinds are reported once per successful record creation (never on
/// edits); `FocusSession` once per focus phase that runs to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Note,
    Task,
    Planner,
    Database,
    FocusSession,
}

/// Skill deltas and XP gain applied for one activity.
///
/// Skills only ever increase, so deltas are unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Reward {
    pub grind: u32,
    pub focus: u32,
    pub planning: u32,
    pub execution: u32,
    pub consistency: u32,
    pub recovery: u32,
    pub xp: u32,
}

impl ActivityKind {
    /// The fixed reward applied when this activity is recorded.
    pub fn reward(self) -> Reward {
        match self {
            ActivityKind::Note => Reward {
                grind: 2,
                planning: 2,
                xp: 4,
                ..Reward::default()
            },
            ActivityKind::Task => Reward {
                execution: 3,
                focus: 2,
                xp: 5,
                ..Reward::default()
            },
            ActivityKind::Planner => Reward {
                planning: 4,
                consistency: 2,
                xp: 4,
                ..Reward::default()
            },
            ActivityKind::Database => Reward {
                focus: 3,
                grind: 1,
                xp: 4,
                ..Reward::default()
            },
            ActivityKind::FocusSession => Reward {
                grind: 4,
                focus: 4,
                execution: 3,
                consistency: 2,
                xp: 8,
                ..Reward::default()
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Note => "note",
            ActivityKind::Task => "task",
            ActivityKind::Planner => "planner block",
            ActivityKind::Database => "database record",
            ActivityKind::FocusSession => "focus session",
        }
    }
}

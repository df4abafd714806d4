//! Persisted progression state and its single mutation entry point.
//!
//! All reward computation goes through [`ProgressState::record_activity`].
//! Collaborators (note/task/planner/database editors, the timer) only ever
//! report an [`ActivityKind`]; the deltas, clamping, and day-boundary
//! bookkeeping live here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::activity::{ActivityKind, Reward};
use super::streak::{self, StreakDecision};

/// Upper bound for every skill score.
pub const SKILL_MAX: u32 = 100;

/// XP required per level; level is always `1 + xp / XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u32 = 100;

/// The six bounded skill accumulators, in radar-chart order.
pub const SKILL_NAMES: [&str; 6] = [
    "grind",
    "focus",
    "planning",
    "execution",
    "consistency",
    "recovery",
];

/// Experience, skills, and streak counters.
///
/// Level is derived from `xp` on read and never stored, so the two cannot
/// diverge. Every field defaults individually so a partially-shaped persisted
/// blob degrades gracefully.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressState {
    #[serde(default)]
    xp: u32,
    #[serde(default)]
    grind: u32,
    #[serde(default)]
    focus: u32,
    #[serde(default)]
    planning: u32,
    #[serde(default)]
    execution: u32,
    #[serde(default)]
    consistency: u32,
    #[serde(default)]
    recovery: u32,
    /// Count of distinct calendar days with at least one rewarded activity.
    #[serde(default)]
    sessions: u32,
    #[serde(default)]
    streak_days: u32,
    #[serde(default)]
    last_active_date: Option<NaiveDate>,
    #[serde(default)]
    focus_sessions_completed: u32,
}

/// What one `record_activity` call did, for event reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityOutcome {
    pub xp_gained: u32,
    pub level: u32,
    pub streak: StreakDecision,
}

impl ProgressState {
    /// Apply the reward for one activity occurring on `today`.
    ///
    /// Skill deltas are clamped to `[0, SKILL_MAX]`; session and streak
    /// counters move at most once per calendar date no matter how many
    /// activities land on it.
    pub fn record_activity(&mut self, kind: ActivityKind, today: NaiveDate) -> ActivityOutcome {
        let reward = kind.reward();
        self.apply_skill_deltas(&reward);
        if kind == ActivityKind::FocusSession {
            self.focus_sessions_completed += 1;
        }

        let decision = streak::evaluate(today, self.last_active_date);
        match decision {
            StreakDecision::FirstActivity | StreakDecision::Broken => {
                self.sessions += 1;
                self.streak_days = 1;
            }
            StreakDecision::Continued => {
                self.sessions += 1;
                self.streak_days += 1;
            }
            StreakDecision::AlreadyCounted => {}
        }
        if decision.counts_new_day() {
            self.last_active_date = Some(today);
        }

        self.xp += reward.xp;

        ActivityOutcome {
            xp_gained: reward.xp,
            level: self.level(),
            streak: decision,
        }
    }

    fn apply_skill_deltas(&mut self, reward: &Reward) {
        self.grind = (self.grind + reward.grind).min(SKILL_MAX);
        self.focus = (self.focus + reward.focus).min(SKILL_MAX);
        self.planning = (self.planning + reward.planning).min(SKILL_MAX);
        self.execution = (self.execution + reward.execution).min(SKILL_MAX);
        self.consistency = (self.consistency + reward.consistency).min(SKILL_MAX);
        self.recovery = (self.recovery + reward.recovery).min(SKILL_MAX);
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// Derived level: `1 + floor(xp / 100)`.
    pub fn level(&self) -> u32 {
        1 + self.xp / XP_PER_LEVEL
    }

    /// XP progress within the current level, `0..XP_PER_LEVEL`.
    pub fn xp_into_level(&self) -> u32 {
        self.xp % XP_PER_LEVEL
    }

    /// Level badge title shown next to the avatar.
    pub fn badge_title(&self) -> &'static str {
        match self.level() {
            0..=2 => "Rookie",
            3..=4 => "Grinder",
            _ => "Pro",
        }
    }

    /// The six skill scores in [`SKILL_NAMES`] order.
    pub fn skills(&self) -> [u32; 6] {
        [
            self.grind,
            self.focus,
            self.planning,
            self.execution,
            self.consistency,
            self.recovery,
        ]
    }

    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    pub fn streak_days(&self) -> u32 {
        self.streak_days
    }

    pub fn last_active_date(&self) -> Option<NaiveDate> {
        self.last_active_date
    }

    pub fn focus_sessions_completed(&self) -> u32 {
        self.focus_sessions_completed
    }

    /// Polygon vertices for the hexagonal radar chart, one per skill.
    ///
    /// Geometry matches the profile view: vertices start at 12 o'clock and
    /// proceed clockwise at 60 degree spacing, radius scaled by score/100.
    pub fn radar_points(&self, center: (f64, f64), max_radius: f64) -> Vec<(f64, f64)> {
        self.skills()
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                let ratio = f64::from(value.min(SKILL_MAX)) / f64::from(SKILL_MAX);
                let angle = (-90.0 + i as f64 * 60.0).to_radians();
                let r = max_radius * ratio;
                (center.0 + r * angle.cos(), center.1 + r * angle.sin())
            })
            .collect()
    }
}

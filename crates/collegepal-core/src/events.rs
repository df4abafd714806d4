use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progress::ActivityKind;
use crate::timer::Mode;

/// Every engine transition produces an Event.
/// The CLI prints them as JSON; display collaborators poll snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_seconds: u32,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_seconds: u32,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: Mode,
        remaining_seconds: u32,
        at: DateTime<Utc>,
    },
    /// A phase ran its countdown to zero.
    TimerCompleted {
        /// The phase that finished.
        finished: Mode,
        /// The phase the engine is in afterwards.
        next_mode: Mode,
        auto_switched: bool,
        at: DateTime<Utc>,
    },
    /// Manual focus/break flip.
    ModeSwitched {
        mode: Mode,
        remaining_seconds: u32,
        at: DateTime<Utc>,
    },
    LengthsConfigured {
        focus_length: u32,
        break_length: u32,
        at: DateTime<Utc>,
    },
    /// A reward was applied by the progress store.
    ActivityRecorded {
        kind: ActivityKind,
        xp_gained: u32,
        xp: u32,
        level: u32,
        sessions: u32,
        streak_days: u32,
        at: DateTime<Utc>,
    },
    TimerSnapshot {
        mode: Mode,
        running: bool,
        remaining_seconds: u32,
        focus_length: u32,
        break_length: u32,
        auto_switch: bool,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_tag_by_type() {
        let event = Event::TimerPaused {
            remaining_seconds: 90,
            at: Utc::now(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "TimerPaused");
        assert_eq!(json["remaining_seconds"], 90);
    }
}

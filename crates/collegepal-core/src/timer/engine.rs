//! Two-phase pomodoro timer state machine.
//!
//! The engine has no internal thread and never reads the wall clock for
//! countdown purposes: the host delivers one `tick()` per second while the
//! timer runs. Each delivery performs exactly one decrement-then-check
//! transition, so coalesced ticks can never double-fire a completion.
//!
//! The engine also performs no I/O and does not know about the progress
//! store. Focus completions surface as [`Event::TimerCompleted`]; the owning
//! service turns those into activity rewards.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// The timer's current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Focus,
    Break,
}

impl Mode {
    pub fn other(self) -> Mode {
        match self {
            Mode::Focus => Mode::Break,
            Mode::Break => Mode::Focus,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Focus => "Focus",
            Mode::Break => "Break",
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Focus
    }
}

/// Valid range for the focus phase length, minutes.
pub const FOCUS_LENGTH_RANGE: (u32, u32) = (1, 90);
/// Valid range for the break phase length, minutes.
pub const BREAK_LENGTH_RANGE: (u32, u32) = (1, 60);

const DEFAULT_FOCUS_LENGTH: u32 = 25;
const DEFAULT_BREAK_LENGTH: u32 = 5;

fn default_focus_length() -> u32 {
    DEFAULT_FOCUS_LENGTH
}
fn default_break_length() -> u32 {
    DEFAULT_BREAK_LENGTH
}

/// Core timer engine.
///
/// Effective state space is `{Focus, Break} x {running, paused}`; the initial
/// state is Focus-paused with a full focus countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    #[serde(default)]
    mode: Mode,
    #[serde(default)]
    remaining_seconds: u32,
    /// Focus phase length in minutes, clamped to [1, 90].
    #[serde(default = "default_focus_length")]
    focus_length: u32,
    /// Break phase length in minutes, clamped to [1, 60].
    #[serde(default = "default_break_length")]
    break_length: u32,
    #[serde(default)]
    running: bool,
    /// When set, a completed phase flips mode and keeps running.
    #[serde(default)]
    auto_switch: bool,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self {
            mode: Mode::Focus,
            remaining_seconds: DEFAULT_FOCUS_LENGTH * 60,
            focus_length: DEFAULT_FOCUS_LENGTH,
            break_length: DEFAULT_BREAK_LENGTH,
            running: false,
            auto_switch: false,
        }
    }
}

impl TimerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn focus_length(&self) -> u32 {
        self.focus_length
    }

    pub fn break_length(&self) -> u32 {
        self.break_length
    }

    pub fn auto_switch(&self) -> bool {
        self.auto_switch
    }

    /// Configured length of `mode`, in seconds.
    fn mode_seconds(&self, mode: Mode) -> u32 {
        let minutes = match mode {
            Mode::Focus => self.focus_length,
            Mode::Break => self.break_length,
        };
        minutes * 60
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::TimerSnapshot {
            mode: self.mode,
            running: self.running,
            remaining_seconds: self.remaining_seconds,
            focus_length: self.focus_length,
            break_length: self.break_length,
            auto_switch: self.auto_switch,
            at: Utc::now(),
        }
    }

    /// Repair state loaded from storage: lengths back into range, and a
    /// paused timer with no countdown refilled to the current mode's length.
    pub fn normalize(&mut self) {
        self.focus_length = self
            .focus_length
            .clamp(FOCUS_LENGTH_RANGE.0, FOCUS_LENGTH_RANGE.1);
        self.break_length = self
            .break_length
            .clamp(BREAK_LENGTH_RANGE.0, BREAK_LENGTH_RANGE.1);
        if !self.running && self.remaining_seconds == 0 {
            self.remaining_seconds = self.mode_seconds(self.mode);
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin (or resume) the countdown. No-op if already running.
    pub fn start(&mut self) -> Option<Event> {
        if self.running {
            return None;
        }
        if self.remaining_seconds == 0 {
            self.remaining_seconds = self.mode_seconds(self.mode);
        }
        self.running = true;
        Some(Event::TimerStarted {
            mode: self.mode,
            remaining_seconds: self.remaining_seconds,
            at: Utc::now(),
        })
    }

    /// Suspend the countdown, retaining the remaining time. Idempotent.
    pub fn pause(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.running = false;
        Some(Event::TimerPaused {
            remaining_seconds: self.remaining_seconds,
            at: Utc::now(),
        })
    }

    /// Stop and refill the countdown for the current mode.
    pub fn reset(&mut self) -> Option<Event> {
        self.running = false;
        self.remaining_seconds = self.mode_seconds(self.mode);
        Some(Event::TimerReset {
            mode: self.mode,
            remaining_seconds: self.remaining_seconds,
            at: Utc::now(),
        })
    }

    /// Deliver one one-second tick. Ignored while paused.
    ///
    /// Returns the completion event when the countdown hits zero.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.running {
            return None;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            return Some(self.complete());
        }
        None
    }

    /// Phase completion: stop, then either auto-switch into the other mode
    /// and keep running, or refill the current mode and stay paused.
    fn complete(&mut self) -> Event {
        let finished = self.mode;
        self.running = false;
        if self.auto_switch {
            self.mode = self.mode.other();
            self.remaining_seconds = self.mode_seconds(self.mode);
            self.running = true;
        } else {
            self.remaining_seconds = self.mode_seconds(self.mode);
        }
        Event::TimerCompleted {
            finished,
            next_mode: self.mode,
            auto_switched: self.auto_switch,
            at: Utc::now(),
        }
    }

    /// Update phase lengths, silently clamping out-of-range values.
    ///
    /// While paused, changing the current mode's length resynchronizes the
    /// countdown; changing the other mode's never does.
    pub fn configure_lengths(&mut self, focus_minutes: u32, break_minutes: u32) -> Option<Event> {
        let focus = focus_minutes.clamp(FOCUS_LENGTH_RANGE.0, FOCUS_LENGTH_RANGE.1);
        let brk = break_minutes.clamp(BREAK_LENGTH_RANGE.0, BREAK_LENGTH_RANGE.1);
        let focus_changed = focus != self.focus_length;
        let break_changed = brk != self.break_length;
        self.focus_length = focus;
        self.break_length = brk;

        if !self.running {
            let resync = match self.mode {
                Mode::Focus => focus_changed,
                Mode::Break => break_changed,
            };
            if resync {
                self.remaining_seconds = self.mode_seconds(self.mode);
            }
        }
        Some(Event::LengthsConfigured {
            focus_length: self.focus_length,
            break_length: self.break_length,
            at: Utc::now(),
        })
    }

    pub fn set_auto_switch(&mut self, enabled: bool) {
        self.auto_switch = enabled;
    }

    /// Manually flip phase and refill the countdown for the new mode.
    ///
    /// Allowed while running: the old countdown is discarded, not preserved
    /// for later resumption.
    pub fn toggle_mode(&mut self) -> Option<Event> {
        self.mode = self.mode.other();
        self.remaining_seconds = self.mode_seconds(self.mode);
        Some(Event::ModeSwitched {
            mode: self.mode,
            remaining_seconds: self.remaining_seconds,
            at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_focus_paused_full_countdown() {
        let engine = TimerEngine::new();
        assert_eq!(engine.mode(), Mode::Focus);
        assert!(!engine.running());
        assert_eq!(engine.remaining_seconds(), 25 * 60);
    }

    #[test]
    fn start_then_tick_counts_down() {
        let mut engine = TimerEngine::new();
        assert!(engine.start().is_some());
        assert!(engine.running());
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_seconds(), 25 * 60 - 1);
    }

    #[test]
    fn start_is_noop_while_running() {
        let mut engine = TimerEngine::new();
        engine.start();
        assert!(engine.start().is_none());
    }

    #[test]
    fn tick_ignored_while_paused() {
        let mut engine = TimerEngine::new();
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_seconds(), 25 * 60);
    }

    #[test]
    fn pause_retains_remaining_and_is_idempotent() {
        let mut engine = TimerEngine::new();
        engine.start();
        engine.tick();
        engine.tick();
        assert!(engine.pause().is_some());
        assert_eq!(engine.remaining_seconds(), 25 * 60 - 2);
        let before = engine.clone();
        assert!(engine.pause().is_none());
        assert_eq!(engine.remaining_seconds(), before.remaining_seconds());
        assert_eq!(engine.mode(), before.mode());
    }

    #[test]
    fn reset_refills_current_mode() {
        let mut engine = TimerEngine::new();
        engine.start();
        engine.tick();
        engine.reset();
        assert!(!engine.running());
        assert_eq!(engine.remaining_seconds(), engine.focus_length() * 60);
    }

    #[test]
    fn completion_without_auto_switch_stays_in_mode() {
        let mut engine = TimerEngine::new();
        engine.configure_lengths(1, 1);
        engine.start();
        for _ in 0..59 {
            assert!(engine.tick().is_none());
        }
        let event = engine.tick().expect("60th tick completes");
        match event {
            Event::TimerCompleted {
                finished,
                next_mode,
                auto_switched,
                ..
            } => {
                assert_eq!(finished, Mode::Focus);
                assert_eq!(next_mode, Mode::Focus);
                assert!(!auto_switched);
            }
            other => panic!("expected TimerCompleted, got {other:?}"),
        }
        assert!(!engine.running());
        assert_eq!(engine.mode(), Mode::Focus);
        assert_eq!(engine.remaining_seconds(), 60);
    }

    #[test]
    fn completion_with_auto_switch_enters_break_running() {
        let mut engine = TimerEngine::new();
        engine.configure_lengths(1, 5);
        engine.set_auto_switch(true);
        engine.start();
        let mut completed = None;
        for _ in 0..60 {
            if let Some(ev) = engine.tick() {
                completed = Some(ev);
            }
        }
        match completed.expect("focus phase completes") {
            Event::TimerCompleted {
                finished,
                next_mode,
                auto_switched,
                ..
            } => {
                assert_eq!(finished, Mode::Focus);
                assert_eq!(next_mode, Mode::Break);
                assert!(auto_switched);
            }
            other => panic!("expected TimerCompleted, got {other:?}"),
        }
        assert_eq!(engine.mode(), Mode::Break);
        assert!(engine.running());
        // Freshly started, not yet ticked.
        assert_eq!(engine.remaining_seconds(), 5 * 60);
    }

    #[test]
    fn break_completion_flows_back_to_focus_under_auto_switch() {
        let mut engine = TimerEngine::new();
        engine.configure_lengths(1, 1);
        engine.set_auto_switch(true);
        engine.start();
        for _ in 0..60 {
            engine.tick();
        }
        assert_eq!(engine.mode(), Mode::Break);
        for _ in 0..60 {
            engine.tick();
        }
        assert_eq!(engine.mode(), Mode::Focus);
        assert!(engine.running());
    }

    #[test]
    fn configure_clamps_out_of_range_lengths() {
        let mut engine = TimerEngine::new();
        engine.configure_lengths(0, 200);
        assert_eq!(engine.focus_length(), 1);
        assert_eq!(engine.break_length(), 60);
    }

    #[test]
    fn configure_resyncs_current_mode_only_while_paused() {
        let mut engine = TimerEngine::new();
        engine.configure_lengths(30, 5);
        assert_eq!(engine.remaining_seconds(), 30 * 60);

        // Changing the other mode's length leaves the countdown alone.
        engine.start();
        engine.tick();
        engine.pause();
        let mid = engine.remaining_seconds();
        engine.configure_lengths(30, 10);
        assert_eq!(engine.remaining_seconds(), mid);

        // Changing the current mode's length while running leaves it alone.
        engine.start();
        engine.configure_lengths(45, 10);
        assert_eq!(engine.remaining_seconds(), mid);
        assert_eq!(engine.focus_length(), 45);
    }

    #[test]
    fn toggle_mode_discards_running_countdown() {
        let mut engine = TimerEngine::new();
        engine.start();
        engine.tick();
        engine.toggle_mode();
        assert_eq!(engine.mode(), Mode::Break);
        assert_eq!(engine.remaining_seconds(), engine.break_length() * 60);
        // Running flag is untouched by a manual toggle.
        assert!(engine.running());
    }

    #[test]
    fn normalize_refills_empty_paused_countdown() {
        let json = r#"{"mode":"break","remaining_seconds":0,"running":false}"#;
        let mut engine: TimerEngine = serde_json::from_str(json).unwrap();
        engine.normalize();
        assert_eq!(engine.remaining_seconds(), engine.break_length() * 60);
    }

    #[test]
    fn normalize_clamps_persisted_lengths() {
        let json = r#"{"focus_length":500,"break_length":0}"#;
        let mut engine: TimerEngine = serde_json::from_str(json).unwrap();
        engine.normalize();
        assert_eq!(engine.focus_length(), 90);
        assert_eq!(engine.break_length(), 1);
    }
}

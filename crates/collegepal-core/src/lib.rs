//! # College Pal Core Library
//!
//! Core business logic for College Pal, a personal productivity tracker with
//! a gamified progression layer. The CLI binary is a thin layer over this
//! crate; a GUI shell would sit on the same [`App`] service.
//!
//! ## Architecture
//!
//! - **Progress engine**: experience, level, six bounded skill scores, and a
//!   consecutive-day streak, mutated only through a single
//!   `record_activity` entry point
//! - **Timer**: a two-phase focus/break state machine driven by an external
//!   one-second tick; focus completions feed back into the progress engine
//! - **Storage**: one JSON state blob plus TOML-based configuration
//!
//! ## Key Components
//!
//! - [`App`]: the controller owning all mutable state
//! - [`ProgressState`]: experience/skills/streak accumulators
//! - [`TimerEngine`]: the focus/break state machine
//! - [`StateStore`] / [`Config`]: persistence

pub mod app;
pub mod error;
pub mod events;
pub mod profile;
pub mod progress;
pub mod records;
pub mod storage;
pub mod timer;

pub use app::App;
pub use error::{ConfigError, CoreError, StorageError};
pub use events::Event;
pub use profile::Profile;
pub use progress::{ActivityKind, ProgressState, StreakDecision, SKILL_MAX, SKILL_NAMES};
pub use records::{DatabaseRow, Note, PlannerBlock, Task};
pub use storage::{AppState, Config, StateStore};
pub use timer::{Mode, TimerEngine};

//! Whole-blob JSON persistence for the application state.
//!
//! One file under one namespace: loaded in full at startup, overwritten in
//! full on every mutation. Loading is deliberately forgiving -- a missing or
//! unparseable file yields the default state, and missing fields inside an
//! otherwise valid blob default individually via serde.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::StorageError;
use crate::profile::Profile;
use crate::progress::ProgressState;
use crate::records::{DatabaseRow, Note, PlannerBlock, Task};
use crate::timer::TimerEngine;

const STATE_FILE: &str = "state.json";

/// Everything College Pal persists, as one serializable record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub planner_blocks: Vec<PlannerBlock>,
    #[serde(default)]
    pub database_rows: Vec<DatabaseRow>,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub stats: ProgressState,
    #[serde(default)]
    pub timer: TimerEngine,
}

/// Reads and writes the single state file.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Store at the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            path: data_dir()?.join(STATE_FILE),
        })
    }

    /// Store at an explicit path (tests, alternate profiles).
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the full state, falling back to defaults on any read or parse
    /// failure. Never propagates an error to the caller.
    pub fn load(&self) -> AppState {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                eprintln!("warning: discarding unreadable state file: {e}");
                AppState::default()
            }),
            Err(_) => AppState::default(),
        }
    }

    /// Overwrite the state file with the given state.
    pub fn save(&self, state: &AppState) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

mod config;
mod state;

pub use config::Config;
pub use state::{AppState, StateStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/collegepal[-dev]/` based on COLLEGEPAL_ENV.
///
/// Set COLLEGEPAL_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("COLLEGEPAL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("collegepal-dev")
    } else {
        base_dir.join("collegepal")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

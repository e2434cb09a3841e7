use log::{debug, warn};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::game::GameState;

/// Key the game state is kept under. Also the default save file stem.
pub const STORAGE_KEY: &str = "rockScissorsPaperGame";

/// Somewhere to keep the game state between sessions.
pub trait ScoreStore {
    /// Load the previously saved state. Missing or unreadable state is `None`.
    fn load(&self) -> Option<GameState>;

    /// Save the full state.
    fn save(&mut self, state: &GameState) -> Result<(), StoreError>;
}

/// Failure modes for stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o error")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize game state")]
    Serialization(#[from] serde_json::Error),
    #[error("storage unavailable")]
    Unavailable,
}

/// Stores the state as JSON in a single file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> Option<GameState> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No saved state at {}", self.path.display());
                return None;
            }
            Err(e) => {
                warn!("Could not read {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(state) => Some(state),
            Err(e) => {
                warn!("Ignoring corrupt state in {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn save(&mut self, state: &GameState) -> Result<(), StoreError> {
        let contents = serde_json::to_string(state)?;
        std::fs::write(&self.path, contents)?;
        debug!("Saved {:?} to {}", state, self.path.display());
        Ok(())
    }
}

/// Keeps the state in memory only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Option<GameState>,
    /// Fail every save, as if the backing storage were unavailable.
    pub fail_writes: bool,
}

impl MemoryStore {
    #[cfg(test)]
    pub fn with_state(state: GameState) -> Self {
        MemoryStore {
            state: Some(state),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn failing() -> Self {
        MemoryStore {
            fail_writes: true,
            ..Default::default()
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Option<GameState> {
        self.state
    }

    fn save(&mut self, state: &GameState) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable);
        }
        self.state = Some(*state);
        Ok(())
    }
}

/// The persisted high score: one JSON number in a file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::HighScoreError;

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
    stored: u32,
}

impl HighScoreStore {
    /// Read the stored score.  A missing file counts as 0; a file that is not
    /// a JSON number is an error so it never gets silently overwritten.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, HighScoreError> {
        let path = path.into();
        let stored = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str::<u32>(contents.trim()).map_err(|source| {
                HighScoreError::Parse {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("no high score at {}, starting from 0", path.display());
                0
            }
            Err(source) => return Err(HighScoreError::Read { path, source }),
        };
        Ok(HighScoreStore { path, stored })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The value currently on disk.
    pub fn stored(&self) -> u32 {
        self.stored
    }

    /// Write `high_score` if it beats the stored value.  Returns `true` if the
    /// file was written.
    pub fn persist_if_improved(&mut self, high_score: u32) -> Result<bool, HighScoreError> {
        if high_score <= self.stored {
            return Ok(false);
        }
        let encoded = serde_json::to_string(&high_score).map_err(|source| HighScoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, encoded).map_err(|source| HighScoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::info!("high score {} saved to {}", high_score, self.path.display());
        self.stored = high_score;
        Ok(true)
    }
}

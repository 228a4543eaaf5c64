use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::APP_DIR_NAME;

const SCORE_FILE_NAME: &str = "scores.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Failure reading or writing the score file.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("score file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Durable single-value store for the high score.
///
/// Both operations are best-effort: failures are logged, never surfaced.
pub trait ScoreStore {
    /// Returns the stored high score, or 0 when absent or unreadable.
    fn load(&self) -> u32;

    fn save(&mut self, high_score: u32);
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn default_scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// High score kept as a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonScoreStore {
    fn default() -> Self {
        Self::new(default_scores_path())
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&self) -> u32 {
        match load_high_score_from_path(&self.path) {
            Ok(score) => score,
            Err(error) => {
                warn!(
                    "ignoring unreadable score file {}: {error}",
                    self.path.display()
                );
                0
            }
        }
    }

    fn save(&mut self, high_score: u32) {
        match save_high_score_to_path(&self.path, high_score) {
            Ok(()) => debug!("saved high score {high_score} to {}", self.path.display()),
            Err(error) => warn!(
                "failed to save high score to {}: {error}",
                self.path.display()
            ),
        }
    }
}

/// In-memory store that records every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    pub stored: Option<u32>,
    pub writes: Vec<u32>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            stored: Some(high_score),
            writes: Vec::new(),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.stored.unwrap_or(0)
    }

    fn save(&mut self, high_score: u32) {
        self.stored = Some(high_score);
        self.writes.push(high_score);
    }
}

fn load_high_score_from_path(path: &Path) -> Result<u32, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str::<ScoreFile>(&raw)?.high_score)
}

fn save_high_score_to_path(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload)?;

    fs::write(path, json)?;
    Ok(())
}

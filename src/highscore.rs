//! High-score persistence: a single JSON object `{"high_score": N}`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

pub trait HighScoreStore {
    /// Stored high score, or 0 when nothing usable is stored.  Never fails.
    fn load(&self) -> u32;

    /// Overwrite the stored high score.
    fn save(&mut self, score: u32) -> Result<()>;
}

/// Saves `score` only when it beats what is stored.  Returns whether it did.
pub fn record_if_higher(store: &mut impl HighScoreStore, score: u32) -> Result<bool> {
    if score <= store.load() {
        return Ok(false);
    }
    store.save(score)?;
    Ok(true)
}

// ── JSON file ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for JsonFileStore {
    fn load(&self) -> u32 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                log::info!("no high score at {}: {}", self.path.display(), e);
                return 0;
            }
        };
        match serde_json::from_str::<HighScoreFile>(&text) {
            Ok(file) => file.high_score,
            Err(e) => {
                log::warn!("ignoring malformed high score file {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<()> {
        let text = serde_json::to_string(&HighScoreFile { high_score: score })?;
        fs::write(&self.path, text)?;
        log::info!("high score {} saved to {}", score, self.path.display());
        Ok(())
    }
}

// ── In memory ─────────────────────────────────────────────────────────────────

/// Store that lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    high_score: u32,
    saves: u32,
}

impl MemoryStore {
    pub fn with_score(high_score: u32) -> Self {
        MemoryStore { high_score, saves: 0 }
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.high_score
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.high_score = score;
        self.saves += 1;
        Ok(())
    }
}

//! Best-run leaderboard
//!
//! Tracks the top 10 runs across sessions. Persisted as JSON next to
//! whatever path the embedder chooses; the simulation core never touches it.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum number of entries to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single best-run entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Coins collected during the run
    pub coins: u32,
    /// Ground covered, pixels
    pub distance: f32,
    /// Unix timestamp (s) when achieved
    pub timestamp: u64,
}

/// Best-run leaderboard, sorted descending by score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a run to the leaderboard if it qualifies.
    /// Returns the rank achieved (1-indexed) or `None`.
    pub fn add_score(
        &mut self,
        score: u64,
        coins: u32,
        distance: f32,
        timestamp: u64,
    ) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            coins,
            distance,
            timestamp,
        };

        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The best score so far (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the leaderboard from a JSON file; a missing file is an empty
    /// leaderboard, not an error.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        if !path.exists() {
            log::info!("no high-score file at {}, starting fresh", path.display());
            return Ok(Self::new());
        }
        let json = std::fs::read_to_string(path)?;
        let scores: Self = serde_json::from_str(&json).map_err(std::io::Error::other)?;
        log::info!("loaded {} high scores", scores.entries.len());
        Ok(scores)
    }

    /// Save the leaderboard as JSON.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("high scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

//! Persistent highscore table.
//!
//! The table lives in a single TOML file (default [`HIGHSCORE_PATH`]) holding
//! one `entries` array, best score first, at most [`HIGHSCORE_CAPACITY`] long.
//! Every mutation rewrites the whole file.
//!
//! ## Failure handling
//!
//! | Situation                       | Behaviour                                   |
//! |---------------------------------|---------------------------------------------|
//! | File missing                    | seed with the sentinel entry, persist, return |
//! | File empty / undecodable / no entries | same as missing                       |
//! | File unreadable (permissions)   | [`LanderError::StorageRead`]                |
//! | Write fails                     | [`LanderError::StorageWrite`]; old file kept |
//!
//! Writes go to `<file>.tmp` and are renamed over the real file, so a failed
//! save never leaves a half-written table behind.
//!
//! ## Ties
//!
//! Sorting is stable and new entries are appended before sorting, so among
//! equal scores the earlier entry ranks higher.  A new score that only ties
//! the tenth place does not make the table.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{
    HIGHSCORE_CAPACITY, HIGHSCORE_PATH, HIGHSCORE_SENTINEL_NAME, HIGHSCORE_SENTINEL_SCORE,
};
use crate::error::{LanderError, LanderResult};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HighscoreEntry {
    pub name: String,
    pub score: i64,
}

impl HighscoreEntry {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Ranked leaderboard, best first.
#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HighscoreTable {
    pub entries: Vec<HighscoreEntry>,
}

impl Default for HighscoreTable {
    fn default() -> Self {
        Self::sentinel()
    }
}

impl HighscoreTable {
    /// The table a fresh or reset store holds.
    pub fn sentinel() -> Self {
        Self {
            entries: vec![HighscoreEntry::new(
                HIGHSCORE_SENTINEL_NAME,
                HIGHSCORE_SENTINEL_SCORE,
            )],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append, re-rank and cut the table down to `capacity`.
    pub fn insert(&mut self, entry: HighscoreEntry, capacity: usize) {
        self.entries.push(entry);
        self.normalize(capacity);
    }

    /// Whether `score` would survive an [`insert`](Self::insert).
    pub fn qualifies(&self, score: i64, capacity: usize) -> bool {
        if capacity == 0 {
            return false;
        }
        self.entries.len() < capacity
            || self
                .entries
                .get(capacity - 1)
                .is_some_and(|last| score > last.score)
    }

    /// Stable descending sort followed by truncation.
    fn normalize(&mut self, capacity: usize) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(capacity);
    }
}

/// File-backed highscore store.
///
/// Holds only the path; the file is opened for the duration of each call.
#[derive(Resource, Debug, Clone)]
pub struct HighscoreStore {
    path: PathBuf,
    capacity: usize,
}

impl Default for HighscoreStore {
    fn default() -> Self {
        Self::new(HIGHSCORE_PATH)
    }
}

impl HighscoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_capacity(path, HIGHSCORE_CAPACITY)
    }

    pub fn with_capacity(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read the table, creating the file with the sentinel entry if it is
    /// missing, empty or corrupt.
    pub fn load_or_init(&self) -> LanderResult<HighscoreTable> {
        match self.read()? {
            Some(table) => Ok(table),
            None => {
                let table = HighscoreTable::sentinel();
                self.write(&table)?;
                info!("Initialised highscore table at {}", self.path.display());
                Ok(table)
            }
        }
    }

    /// Add `(name, score)` and persist the re-ranked table.
    ///
    /// Name length is not checked here; the name-entry box enforces it.
    pub fn append(&self, name: &str, score: i64) -> LanderResult<HighscoreTable> {
        let mut table = self.load_or_init()?;
        table.insert(HighscoreEntry::new(name, score), self.capacity);
        self.write(&table)?;
        info!("Recorded highscore {} for {:?}", score, name);
        Ok(table)
    }

    /// Overwrite the store with the sentinel-only table.
    pub fn reset(&self) -> LanderResult<HighscoreTable> {
        let table = HighscoreTable::sentinel();
        self.write(&table)?;
        info!("Reset highscore table at {}", self.path.display());
        Ok(table)
    }

    /// `Ok(None)` when the file is absent or holds no usable table.
    fn read(&self) -> LanderResult<Option<HighscoreTable>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                warn!(
                    "Highscore file {} is not text; reinitialising",
                    self.path.display()
                );
                return Ok(None);
            }
            Err(source) => {
                return Err(LanderError::StorageRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match toml::from_str::<HighscoreTable>(&contents) {
            Ok(mut table) if !table.is_empty() => {
                table.normalize(self.capacity);
                Ok(Some(table))
            }
            Ok(_) => Ok(None),
            Err(err) => {
                warn!(
                    "Highscore file {} is corrupt ({}); reinitialising",
                    self.path.display(),
                    err
                );
                Ok(None)
            }
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write(&self, table: &HighscoreTable) -> LanderResult<()> {
        let serialized = toml::to_string_pretty(table).map_err(|err| LanderError::StorageEncode {
            reason: err.to_string(),
        })?;

        let write_err = |source: io::Error| LanderError::StorageWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let temp = self.temp_path();
        let replaced = fs::write(&temp, serialized).and_then(|()| fs::rename(&temp, &self.path));
        if let Err(source) = replaced {
            let _ = fs::remove_file(&temp);
            error!(
                "Failed to replace highscore file {}: {}",
                self.path.display(),
                source
            );
            return Err(write_err(source));
        }
        Ok(())
    }
}

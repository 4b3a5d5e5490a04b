use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::PersistError;
use crate::stats::Stats;

/// Capability interface for settings and statistics persistence.
///
/// Loading returns `Ok(None)` when nothing has been saved yet. The game never
/// requires any of these to succeed; callers fall back to defaults on error.
pub trait Store {
    fn load_settings(&self) -> Result<Option<Settings>, PersistError>;
    fn save_settings(&mut self, settings: &Settings) -> Result<(), PersistError>;
    fn load_stats(&self) -> Result<Option<Stats>, PersistError>;
    fn save_stats(&mut self, stats: &Stats) -> Result<(), PersistError>;
}

/// File-backed store: `settings.toml` and `stats.json` under one directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    fn settings_path(&self) -> PathBuf {
        self.dir.join("settings.toml")
    }

    fn stats_path(&self) -> PathBuf {
        self.dir.join("stats.json")
    }

    fn read(path: &Path) -> Result<Option<String>, PersistError> {
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(path)
            .map(Some)
            .map_err(|source| PersistError::FileRead {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write(path: &Path, content: &str) -> Result<(), PersistError> {
        fs::write(path, content).map_err(|source| PersistError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Store for FileStore {
    fn load_settings(&self) -> Result<Option<Settings>, PersistError> {
        match Self::read(&self.settings_path())? {
            Some(content) => Ok(Some(toml::from_str(&content)?)),
            None => Ok(None),
        }
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), PersistError> {
        Self::write(&self.settings_path(), &toml::to_string_pretty(settings)?)
    }

    fn load_stats(&self) -> Result<Option<Stats>, PersistError> {
        match Self::read(&self.stats_path())? {
            Some(content) => Ok(Some(serde_json::from_str(&content)?)),
            None => Ok(None),
        }
    }

    fn save_stats(&mut self, stats: &Stats) -> Result<(), PersistError> {
        Self::write(&self.stats_path(), &serde_json::to_string_pretty(stats)?)
    }
}

/// In-memory store for tests and for running without a writable directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: Option<Settings>,
    stats: Option<Stats>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load_settings(&self) -> Result<Option<Settings>, PersistError> {
        Ok(self.settings)
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), PersistError> {
        self.settings = Some(*settings);
        Ok(())
    }

    fn load_stats(&self) -> Result<Option<Stats>, PersistError> {
        Ok(self.stats)
    }

    fn save_stats(&mut self, stats: &Stats) -> Result<(), PersistError> {
        self.stats = Some(*stats);
        Ok(())
    }
}

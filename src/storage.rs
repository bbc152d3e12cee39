#![cfg(feature = "std")]

//! Persistence of game snapshots and running scores.
//!
//! Records are stored as JSON strings under fixed keys. A record that fails to
//! parse is logged and treated as missing, so a corrupt store never prevents a
//! fresh game from starting.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::snapshot::{GameSnapshot, GameStatistics};

const STATISTICS_KEY: &str = "score";
const SNAPSHOT_KEY: &str = "gameState";

/// Backend for the persisted records, keyed by string.
pub trait Storage {
    /// Raw value stored under `key`, if any.
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set_item(&mut self, key: &str, value: String) -> anyhow::Result<()>;

    fn remove_item(&mut self, key: &str) -> anyhow::Result<()>;

    fn game_statistics(&self) -> anyhow::Result<Option<GameStatistics>> {
        read_record(self, STATISTICS_KEY)
    }

    fn update_game_statistics(&mut self, statistics: &GameStatistics) -> anyhow::Result<()> {
        let json = serde_json::to_string(statistics)?;
        self.set_item(STATISTICS_KEY, json)
    }

    fn game_snapshot(&self) -> anyhow::Result<Option<GameSnapshot>> {
        read_record(self, SNAPSHOT_KEY)
    }

    fn update_game_snapshot(&mut self, snapshot: &GameSnapshot) -> anyhow::Result<()> {
        let json = serde_json::to_string(snapshot)?;
        self.set_item(SNAPSHOT_KEY, json)
    }

    /// Forget both the score and the saved game.
    fn reset(&mut self) -> anyhow::Result<()> {
        self.remove_item(STATISTICS_KEY)?;
        self.remove_item(SNAPSHOT_KEY)
    }
}

fn read_record<S, T>(storage: &S, key: &str) -> anyhow::Result<Option<T>>
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = storage.get_item(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            log::warn!("discarding corrupt '{}' record: {}", key, e);
            Ok(None)
        }
    }
}

/// Volatile storage kept in a map; used by tests and when no state directory is given.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    data: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.data.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> anyhow::Result<()> {
        self.data.remove(key);
        Ok(())
    }
}

/// Storage that keeps one `<key>.json` file per record inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Use `dir` for state files. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading {}", path.display())),
        }
    }

    fn set_item(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating {}", self.dir.display()))?;
        let path = self.path(key);
        fs::write(&path, value).with_context(|| format!("writing {}", path.display()))
    }

    fn remove_item(&mut self, key: &str) -> anyhow::Result<()> {
        let path = self.path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", path.display())),
        }
    }
}

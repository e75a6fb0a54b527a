//! Persistence port for the watchlist.
//!
//! The store behaves like a browser's local key-value storage: the whole list is
//! read once at startup and the whole list is written back on every mutation.

use anyhow::{anyhow, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use stockdash_util::{read_json, write_json};
use tracing::{debug, trace, warn};

/// Key the list is stored under.
pub const WATCHLIST_KEY: &str = "watchlist";

pub trait WatchlistStore {
    /// The persisted list; absent or unreadable data yields an empty list.
    fn load(&self) -> Vec<String>;

    /// Overwrite the persisted list with `symbols`.
    fn save(&self, symbols: &[String]) -> Result<()>;
}

impl<T: WatchlistStore + ?Sized> WatchlistStore for Arc<T> {
    fn load(&self) -> Vec<String> {
        (**self).load()
    }

    fn save(&self, symbols: &[String]) -> Result<()> {
        (**self).save(symbols)
    }
}

impl<T: WatchlistStore + ?Sized> WatchlistStore for Box<T> {
    fn load(&self) -> Vec<String> {
        (**self).load()
    }

    fn save(&self, symbols: &[String]) -> Result<()> {
        (**self).save(symbols)
    }
}

/// JSON object file, one entry per key:
/// ```json
/// { "watchlist": ["AAPL", "MSFT"] }
/// ```
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

    fn entries(&self) -> Result<Map<String, Value>> {
        read_json(&self.path)
    }
}

impl WatchlistStore for JsonFileStore {
    fn load(&self) -> Vec<String> {
        if !self.path.exists() {
            debug!("no watchlist file at {}; starting empty", self.path.display());
            return vec![];
        }

        let mut entries = match self.entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("unreadable watchlist file {}: {e}", self.path.display());
                return vec![];
            }
        };

        match entries.remove(WATCHLIST_KEY) {
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                warn!("malformed `{WATCHLIST_KEY}` entry in {}: {e}", self.path.display());
                vec![]
            }),
            None => vec![],
        }
    }

    fn save(&self, symbols: &[String]) -> Result<()> {
        // other keys in the file survive the overwrite
        let mut entries = if self.path.exists() {
            self.entries().unwrap_or_default()
        } else {
            Map::new()
        };
        entries.insert(WATCHLIST_KEY.to_string(), Value::from(symbols.to_vec()));
        write_json(&self.path, &entries)?;
        trace!("watchlist of {} saved to {}", symbols.len(), self.path.display());
        Ok(())
    }
}

/// In-memory store; nothing outlives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    symbols: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new(symbols: Vec<String>) -> Self {
        MemoryStore {
            symbols: Mutex::new(symbols),
        }
    }
}

impl WatchlistStore for MemoryStore {
    fn load(&self) -> Vec<String> {
        self.symbols
            .lock()
            .map(|symbols| symbols.clone())
            .unwrap_or_default()
    }

    fn save(&self, symbols: &[String]) -> Result<()> {
        let mut stored = self
            .symbols
            .lock()
            .map_err(|e| anyhow!("memory store lock poisoned: {e}"))?;
        *stored = symbols.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scratch(PathBuf);

    impl Scratch {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("stockdash-store-{}-{name}", std::process::id()));
            std::fs::create_dir_all(&dir).unwrap();
            Scratch(dir)
        }

        fn file(&self) -> PathBuf {
            self.0.join("storage.json")
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn absent_file_loads_empty() {
        let scratch = Scratch::new("absent");
        let store = JsonFileStore::new(scratch.file());
        assert!(store.load().is_empty());
    }

    #[test]
    fn unparseable_file_loads_empty() {
        let scratch = Scratch::new("garbage");
        std::fs::write(scratch.file(), "{not json").unwrap();
        let store = JsonFileStore::new(scratch.file());
        assert!(store.load().is_empty());

        std::fs::write(scratch.file(), r#"{"watchlist": 42}"#).unwrap();
        assert!(store.load().is_empty());

        std::fs::write(scratch.file(), r#"["AAPL"]"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_overwrites_full_list() {
        let scratch = Scratch::new("overwrite");
        let store = JsonFileStore::new(scratch.file());

        store.save(&["AAPL".into(), "MSFT".into()]).unwrap();
        assert_eq!(store.load(), ["AAPL", "MSFT"]);

        store.save(&["MSFT".into()]).unwrap();
        assert_eq!(store.load(), ["MSFT"]);
    }

    #[test]
    fn save_keeps_other_keys() {
        let scratch = Scratch::new("keys");
        std::fs::write(scratch.file(), r#"{"theme": "dark", "watchlist": ["TSLA"]}"#).unwrap();
        let store = JsonFileStore::new(scratch.file());

        store.save(&["NVDA".into()]).unwrap();
        let raw: Map<String, Value> = read_json(scratch.file()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(store.load(), ["NVDA"]);
    }

    #[test]
    fn memory_store_seeded_from_file_leaves_file_alone() {
        let scratch = Scratch::new("seeded");
        let file = JsonFileStore::new(scratch.file());
        file.save(&["AAPL".into()]).unwrap();

        let store: Box<dyn WatchlistStore> = Box::new(MemoryStore::new(file.load()));
        assert_eq!(store.load(), ["AAPL"]);
        store.save(&["AAPL".into(), "MSFT".into()]).unwrap();
        assert_eq!(store.load(), ["AAPL", "MSFT"]);
        assert_eq!(file.load(), ["AAPL"]);
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new(vec!["AAPL".into()]);
        assert_eq!(store.load(), ["AAPL"]);
        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
    }
}

use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of uppercase ticker symbols.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Watchlist(Vec<String>);

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `symbol` uppercased; `false` when it is blank or already listed.
    pub fn add(&mut self, symbol: &str) -> bool {
        let symbol = symbol.trim().to_uppercase();
        if symbol.is_empty() || self.contains(&symbol) {
            return false;
        }
        self.0.push(symbol);
        true
    }

    /// Drop the entry equal to `symbol` exactly; `false` when it is not listed.
    pub fn remove(&mut self, symbol: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|entry| entry != symbol);
        self.0.len() != before
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.iter().any(|entry| entry == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

// persisted lists are normalized on the way in
impl From<Vec<String>> for Watchlist {
    fn from(symbols: Vec<String>) -> Self {
        let mut watchlist = Watchlist::new();
        for symbol in symbols {
            watchlist.add(&symbol);
        }
        watchlist
    }
}

impl From<Watchlist> for Vec<String> {
    fn from(watchlist: Watchlist) -> Self {
        watchlist.0
    }
}

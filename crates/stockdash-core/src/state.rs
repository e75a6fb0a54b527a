//! Session state and the reducer that moves it between renders.
//!
//! Every user interaction becomes an [`Action`]; [`SessionState::update`] applies it
//! synchronously and hands back the one [`Effect`] (if any) the caller must run. Fetch
//! results come back in as [`Action::FetchSettled`].
//!
//! Searches are tagged with a [`RequestId`]. Only the most recently issued search may
//! touch the state when it settles; anything older is dropped on arrival.

use crate::schema::quote::QuoteSeries;
use crate::watchlist::Watchlist;
use tracing::{debug, trace};

pub const EMPTY_SYMBOL_ERROR: &str = "Please enter a stock symbol.";
pub const FETCH_FAILED_ERROR: &str = "Could not fetch data. Please check the symbol.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The text field changed.
    EditSymbol(String),

    /// Search for `Some(symbol)` directly, or for the text field's value.
    Search(Option<String>),

    /// A fetch issued by [`Effect::Fetch`] finished.
    FetchSettled {
        request: RequestId,
        outcome: Result<QuoteSeries, String>,
    },

    /// Add the current symbol to the watchlist.
    AddToWatchlist,

    RemoveFromWatchlist(String),

    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,

    /// Fetch `symbol` and dispatch the outcome as [`Action::FetchSettled`] with `request`.
    Fetch { request: RequestId, symbol: String },

    /// Overwrite the persisted watchlist.
    Persist(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Contents of the symbol text field.
    pub symbol: String,
    pub series: Option<QuoteSeries>,
    pub error: Option<String>,
    pub loading: bool,
    pub dark_mode: bool,
    pub watchlist: Watchlist,
    /// The search whose result is still wanted, with the symbol it asked for.
    pending: Option<(RequestId, String)>,
    last_request: RequestId,
}

impl SessionState {
    pub fn new(watchlist: Watchlist) -> Self {
        SessionState {
            watchlist,
            ..Default::default()
        }
    }

    #[cfg(test)]
    fn pending(&self) -> Option<RequestId> {
        self.pending.as_ref().map(|(request, _)| *request)
    }

    pub fn update(&mut self, action: Action) -> Effect {
        trace!("applying {action:?}");
        match action {
            Action::EditSymbol(symbol) => {
                self.symbol = symbol;
                Effect::None
            }

            Action::Search(explicit) => {
                let input = explicit.unwrap_or_else(|| self.symbol.clone());
                let symbol = input.trim();
                if symbol.is_empty() {
                    self.error = Some(EMPTY_SYMBOL_ERROR.to_string());
                    return Effect::None;
                }

                self.last_request = RequestId(self.last_request.0 + 1);
                let request = self.last_request;
                if let Some((stale, stale_symbol)) = self.pending.replace((request, symbol.to_string())) {
                    debug!("search {stale:?} for {stale_symbol} superseded by {request:?}");
                }
                self.loading = true;

                Effect::Fetch {
                    request,
                    symbol: symbol.to_string(),
                }
            }

            Action::FetchSettled { request, outcome } => {
                let symbol = match self.pending.take() {
                    Some((latest, symbol)) if latest == request => symbol,
                    other => {
                        debug!("dropping stale result of {request:?}");
                        self.pending = other;
                        return Effect::None;
                    }
                };

                match outcome {
                    Ok(series) => {
                        self.series = Some(series);
                        self.symbol = symbol;
                        self.error = None;
                    }
                    Err(e) => {
                        debug!("[{symbol}] fetch failed: {e}");
                        self.series = None;
                        self.error = Some(FETCH_FAILED_ERROR.to_string());
                    }
                }
                self.loading = false;
                Effect::None
            }

            Action::AddToWatchlist => {
                if self.watchlist.add(&self.symbol) {
                    Effect::Persist(self.watchlist.as_slice().to_vec())
                } else {
                    Effect::None
                }
            }

            Action::RemoveFromWatchlist(symbol) => {
                self.watchlist.remove(&symbol);
                Effect::Persist(self.watchlist.as_slice().to_vec())
            }

            Action::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                Effect::None
            }
        }
    }
}

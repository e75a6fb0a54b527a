use crate::api::QuoteFetcher;
use crate::state::{Action, Effect, SessionState};
use crate::stats::Summary;
use crate::store::WatchlistStore;
use crate::theme::Theme;
use crate::watchlist::Watchlist;
use tracing::{debug, error};

/// The dashboard view-model: session state plus the two ports it talks to.
///
/// Every interaction goes through [`Dashboard::dispatch`]; the convenience methods
/// below are thin wrappers that build the matching [`Action`].
pub struct Dashboard<F, S> {
    state: SessionState,
    fetcher: F,
    store: S,
}

impl<F, S> Dashboard<F, S>
where
    F: QuoteFetcher,
    S: WatchlistStore,
{
    /// Start a session with the watchlist held in `store`.
    pub fn new(fetcher: F, store: S) -> Self {
        let watchlist = Watchlist::from(store.load());
        debug!("session started with {} watchlist entries", watchlist.len());
        Dashboard {
            state: SessionState::new(watchlist),
            fetcher,
            store,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.state.dark_mode)
    }

    /// Statistics for the current series, if one is displayed.
    pub fn summary(&self) -> Option<Summary> {
        self.state.series.as_ref().map(Summary::of)
    }

    /// Apply `action` and run whatever it asks for, feeding fetch results back in.
    pub async fn dispatch(&mut self, action: Action) {
        let mut next = Some(action);
        while let Some(action) = next.take() {
            match self.state.update(action) {
                Effect::None => {}

                Effect::Fetch { request, symbol } => {
                    let outcome = self
                        .fetcher
                        .fetch(&symbol)
                        .await
                        .map_err(|e| format!("{e:#}"));
                    next = Some(Action::FetchSettled { request, outcome });
                }

                Effect::Persist(symbols) => {
                    if let Err(e) = self.store.save(&symbols) {
                        error!("failed to persist watchlist: {e:#}");
                    }
                }
            }
        }
    }

    pub async fn edit_symbol(&mut self, symbol: impl Into<String>) {
        self.dispatch(Action::EditSymbol(symbol.into())).await
    }

    /// Search for whatever is in the text field.
    pub async fn search(&mut self) {
        self.dispatch(Action::Search(None)).await
    }

    /// Search for `symbol` without touching the text field first.
    pub async fn search_symbol(&mut self, symbol: impl Into<String>) {
        self.dispatch(Action::Search(Some(symbol.into()))).await
    }

    pub async fn add_to_watchlist(&mut self) {
        self.dispatch(Action::AddToWatchlist).await
    }

    pub async fn remove_from_watchlist(&mut self, symbol: impl Into<String>) {
        self.dispatch(Action::RemoveFromWatchlist(symbol.into())).await
    }

    /// Selecting a watchlist entry searches for it.
    pub async fn select_watchlist_entry(&mut self, symbol: &str) {
        self.search_symbol(symbol).await
    }

    pub async fn toggle_theme(&mut self) {
        self.dispatch(Action::ToggleTheme).await
    }
}

pub mod api;
pub mod dashboard;
pub mod schema;
pub mod state;
pub mod stats;
pub mod store;
pub mod theme;
pub mod watchlist;

pub use crate::api::{HttpFetcher, QuoteFetcher};
pub use crate::dashboard::Dashboard;
pub use crate::schema::quote::QuoteSeries;
pub use crate::state::{Action, Effect, RequestId, SessionState};
pub use crate::store::{JsonFileStore, MemoryStore, WatchlistStore};
pub use crate::theme::Theme;
pub use crate::watchlist::Watchlist;

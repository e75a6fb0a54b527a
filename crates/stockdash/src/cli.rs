use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stockdash_core::api::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Sets the level of tracing
    #[arg(long, value_enum, ignore_case = true, default_value_t = TraceLevel::WARN, global = true)]
    pub trace: TraceLevel,

    /// Root URL of the quote service; quotes are read from `<URL>/stock/<SYMBOL>`
    #[arg(long, env = "STOCKDASH_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// File the watchlist is kept in
    #[arg(long, env = "STOCKDASH_WATCHLIST", default_value = "./watchlist.json", global = true)]
    pub watchlist: PathBuf,

    /// User agent sent to the quote service
    #[arg(long, env = "USER_AGENT", default_value = concat!("stockdash/", env!("CARGO_PKG_VERSION")), global = true)]
    pub user_agent: String,

    /// Read the watchlist file but keep every change in memory
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Start in dark mode
    #[arg(long, global = true)]
    pub dark: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fetch a symbol's price history and print the dashboard.
    Search { symbol: String },

    /// Manage the saved watchlist.
    Watch {
        #[command(subcommand)]
        action: WatchArgs,
    },

    /// Run the dashboard as an interactive session (the default).
    Interactive,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum WatchArgs {
    /// Print the saved symbols.
    List,

    /// Save a symbol (stored uppercase; duplicates are ignored).
    Add { symbol: String },

    /// Forget a saved symbol.
    Rm { symbol: String },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceLevel {
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl From<TraceLevel> for tracing::Level {
    fn from(level: TraceLevel) -> Self {
        match level {
            TraceLevel::DEBUG => tracing::Level::DEBUG,
            TraceLevel::INFO => tracing::Level::INFO,
            TraceLevel::WARN => tracing::Level::WARN,
            TraceLevel::ERROR => tracing::Level::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["stockdash"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.trace, TraceLevel::WARN);
        assert!(!cli.dark);
        assert!(!cli.no_persist);
    }

    #[test]
    fn no_persist_flag() {
        let cli = Cli::try_parse_from(["stockdash", "watch", "add", "aapl", "--no-persist"]).unwrap();
        assert!(cli.no_persist);
    }

    #[test]
    fn search_with_flags() {
        let cli = Cli::try_parse_from([
            "stockdash",
            "search",
            "aapl",
            "--trace",
            "DEBUG",
            "--base-url",
            "http://127.0.0.1:9000",
            "--dark",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Commands::Search { symbol: "aapl".into() }));
        assert_eq!(cli.trace, TraceLevel::DEBUG);
        assert_eq!(cli.base_url, "http://127.0.0.1:9000");
        assert!(cli.dark);
    }

    #[test]
    fn watch_subcommands() {
        let cli = Cli::try_parse_from(["stockdash", "watch", "rm", "MSFT"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Watch {
                action: WatchArgs::Rm { symbol: "MSFT".into() }
            })
        );
        assert!(Cli::try_parse_from(["stockdash", "watch", "add"]).is_err());
    }
}

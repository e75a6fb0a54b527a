use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, WatchArgs};
use dotenv::dotenv;
use std::process::ExitCode;
use stockdash_core::{
    Action, Dashboard, HttpFetcher, JsonFileStore, MemoryStore, QuoteFetcher, WatchlistStore,
};
use tracing::{debug, subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

mod chart;
mod cli;
mod render;
mod session;

fn preprocess(trace_level: Level) -> Result<()> {
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(trace_level)
        .with_writer(std::io::stderr)
        .finish();
    subscriber::set_global_default(my_subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // .env feeds the `env = ...` fallbacks of the cli
    dotenv().ok();
    let cli = Cli::parse();
    preprocess(cli.trace.into())?;
    trace!("Command line input recorded: {cli:#?}");

    let fetcher = HttpFetcher::with_user_agent(&cli.base_url, &cli.user_agent)?;
    let file = JsonFileStore::new(&cli.watchlist);
    debug!(
        "quote service at {}, watchlist at {} (persist: {})",
        fetcher.base_url(),
        file.path().display(),
        !cli.no_persist
    );
    let store: Box<dyn WatchlistStore> = if cli.no_persist {
        Box::new(MemoryStore::new(file.load()))
    } else {
        Box::new(file)
    };

    let mut dash = Dashboard::new(fetcher, store);
    if cli.dark {
        dash.toggle_theme().await;
    }

    // cli framework:
    // "> stockdash <COMMAND>"
    match cli.command.unwrap_or(Commands::Interactive) {
        // "> stockdash search <SYMBOL>"
        Commands::Search { symbol } => {
            session::dispatch(&mut dash, Action::Search(Some(symbol))).await;
            println!("{}", render::dashboard(dash.state()));
            if dash.state().error.is_some() {
                return Ok(ExitCode::FAILURE);
            }
        }

        // "> stockdash watch [list add rm]"
        Commands::Watch { action } => {
            match action {
                WatchArgs::List => {}
                WatchArgs::Add { symbol } => {
                    dash.edit_symbol(symbol).await;
                    dash.add_to_watchlist().await;
                }
                // entries are stored uppercase
                WatchArgs::Rm { symbol } => {
                    dash.remove_from_watchlist(symbol.trim().to_uppercase()).await;
                }
            }
            print_watchlist(&dash);
        }

        // "> stockdash [interactive]"
        Commands::Interactive => session::interactive(&mut dash).await?,
    }

    Ok(ExitCode::SUCCESS)
}

fn print_watchlist<F, S>(dash: &Dashboard<F, S>)
where
    F: QuoteFetcher,
    S: WatchlistStore,
{
    for line in render::watchlist_lines(dash.state()) {
        println!("{line}");
    }
}

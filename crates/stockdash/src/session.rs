use crate::render;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input, Select};
use stockdash_core::{Action, Dashboard, QuoteFetcher, WatchlistStore};
use stockdash_util::spinner;
use tracing::{info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Search,
    AddToWatchlist,
    OpenEntry,
    RemoveEntry,
    ToggleTheme,
    Buy,
    Sell,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 8] = [
        MenuItem::Search,
        MenuItem::AddToWatchlist,
        MenuItem::OpenEntry,
        MenuItem::RemoveEntry,
        MenuItem::ToggleTheme,
        MenuItem::Buy,
        MenuItem::Sell,
        MenuItem::Quit,
    ];

    pub fn label(&self, toggle_label: &str) -> String {
        match self {
            MenuItem::Search => "Search".to_string(),
            MenuItem::AddToWatchlist => "Add to Watchlist".to_string(),
            MenuItem::OpenEntry => "Open watchlist entry".to_string(),
            MenuItem::RemoveEntry => "Remove watchlist entry".to_string(),
            MenuItem::ToggleTheme => toggle_label.to_string(),
            MenuItem::Buy => "BUY".to_string(),
            MenuItem::Sell => "SELL".to_string(),
            MenuItem::Quit => "Quit".to_string(),
        }
    }
}

/// Dispatch `action`, with a spinner up while a fetch is outstanding.
pub async fn dispatch<F, S>(dash: &mut Dashboard<F, S>, action: Action)
where
    F: QuoteFetcher,
    S: WatchlistStore,
{
    let searching = matches!(action, Action::Search(_));
    let pb = searching.then(|| spinner("Loading..."));
    dash.dispatch(action).await;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
}

/// Menu-driven dashboard; re-renders after every action until the user quits.
pub async fn interactive<F, S>(dash: &mut Dashboard<F, S>) -> Result<()>
where
    F: QuoteFetcher,
    S: WatchlistStore,
{
    let prompt_theme = ColorfulTheme::default();

    loop {
        println!("{}\n", render::dashboard(dash.state()));

        let toggle = dash.theme().toggle_label();
        let labels: Vec<String> = MenuItem::ALL.iter().map(|item| item.label(toggle)).collect();
        let Some(choice) = Select::with_theme(&prompt_theme)
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            break;
        };
        let item = MenuItem::ALL[choice];
        trace!("menu selection: {item:?}");

        match item {
            MenuItem::Search => {
                let symbol: String = Input::with_theme(&prompt_theme)
                    .with_prompt("Enter a stock symbol (e.g. AAPL)")
                    .with_initial_text(dash.state().symbol.clone())
                    .allow_empty(true)
                    .interact_text()?;
                dash.edit_symbol(symbol).await;
                dispatch(dash, Action::Search(None)).await;
            }

            MenuItem::AddToWatchlist => dash.add_to_watchlist().await,

            MenuItem::OpenEntry => {
                if let Some(symbol) = pick_entry(dash, "Open", &prompt_theme)? {
                    dispatch(dash, Action::Search(Some(symbol))).await;
                }
            }

            MenuItem::RemoveEntry => {
                if let Some(symbol) = pick_entry(dash, "Remove", &prompt_theme)? {
                    dash.remove_from_watchlist(symbol).await;
                }
            }

            MenuItem::ToggleTheme => dash.toggle_theme().await,

            // trading is not wired to anything
            MenuItem::Buy | MenuItem::Sell => {
                info!("{item:?} pressed; no order placed");
                println!("Trading is not available; no order was placed.");
            }

            MenuItem::Quit => break,
        }
    }

    Ok(())
}

fn pick_entry<F, S>(dash: &Dashboard<F, S>, verb: &str, theme: &ColorfulTheme) -> Result<Option<String>>
where
    F: QuoteFetcher,
    S: WatchlistStore,
{
    let entries: Vec<&str> = dash.state().watchlist.iter().collect();
    if entries.is_empty() {
        println!("No stocks saved.");
        return Ok(None);
    }

    let choice = FuzzySelect::with_theme(theme)
        .with_prompt(format!("{verb} which stock?"))
        .items(&entries)
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|i| entries[i].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_labels() {
        let labels: Vec<String> = MenuItem::ALL.iter().map(|item| item.label("Dark Mode")).collect();
        assert_eq!(
            labels,
            [
                "Search",
                "Add to Watchlist",
                "Open watchlist entry",
                "Remove watchlist entry",
                "Dark Mode",
                "BUY",
                "SELL",
                "Quit",
            ]
        );
        assert_eq!(MenuItem::ToggleTheme.label("Light Mode"), "Light Mode");
    }
}

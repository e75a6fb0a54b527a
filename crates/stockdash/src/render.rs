//! Terminal rendering of the dashboard; every colour comes from the [`Theme`].

use crate::chart;
use colored::{ColoredString, Colorize};
use stockdash_core::stats::{Summary, NOT_AVAILABLE};
use stockdash_core::theme::{Rgb, Theme};
use stockdash_core::{QuoteSeries, SessionState};

const WIDTH: usize = 76;
const CHART_WIDTH: usize = 60;
const CHART_HEIGHT: usize = 10;

pub fn dashboard(state: &SessionState) -> String {
    let theme = Theme::for_mode(state.dark_mode);
    let mut out = vec![];

    out.push(header(&theme));
    out.extend(sidebar(state, &theme));

    let mut page = vec![String::new(), format!(" Symbol: {}", state.symbol), String::new()];
    if state.loading {
        page.push(" Loading...".to_string());
    }
    out.extend(block(&page, theme.text, theme.background));

    if let Some(error) = &state.error {
        out.push(paint(&bar(&format!(" {error}")), theme.error, theme.background));
    }

    if let Some(series) = &state.series {
        out.extend(cards(series, &theme));
    }

    out.into_iter()
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Watchlist entries with their 1-based positions, as listed in the sidebar.
pub fn watchlist_lines(state: &SessionState) -> Vec<String> {
    if state.watchlist.is_empty() {
        return vec![" No stocks saved.".to_string()];
    }
    state
        .watchlist
        .iter()
        .enumerate()
        .map(|(i, symbol)| format!(" {:>2}. {symbol:<8} ✖", i + 1))
        .collect()
}

fn sidebar(state: &SessionState, theme: &Theme) -> Vec<ColoredString> {
    let mut lines = vec![String::new(), " Watchlist".to_string()];
    lines.extend(watchlist_lines(state));
    lines.push(String::new());

    let mut out = block(&lines, theme.sidebar_text, theme.sidebar_bg);
    let toggle = format!(" [ {} ] ", theme.toggle_label());
    out.push(paint(&toggle, theme.sidebar_text, theme.toggle_bg));
    out
}

fn cards(series: &QuoteSeries, theme: &Theme) -> Vec<ColoredString> {
    let symbol = series.symbol.to_uppercase();
    let summary = Summary::of(series);
    let mut out = vec![];

    // chart card
    let mut lines = vec![String::new(), format!(" {symbol} - Price Trend"), String::new()];
    out.extend(block(&lines, theme.card_text, theme.card_bg));
    for line in chart::plot(&series.closing_prices, CHART_WIDTH, CHART_HEIGHT) {
        out.push(paint(&bar(&line), theme.chart_line, theme.card_bg));
    }
    if let (Some(first), Some(last)) = (series.first_date(), series.last_date()) {
        let width = series.len().min(CHART_WIDTH);
        out.push(paint(&bar(&chart::x_axis(first, last, width)), theme.card_text, theme.card_bg));
    }

    // latest data card
    lines = vec![
        String::new(),
        " Latest Data".to_string(),
        format!("   Close: {}", dollars(&summary.close())),
        format!("   High: ${}", summary.high()),
        format!("   Low: ${}", summary.low()),
        format!("   Change: {}", percent(&summary.latest_change())),
        String::new(),
    ];
    out.extend(block(&lines, theme.card_text, theme.card_bg));
    out.extend(trade_buttons(theme));

    // change cards
    lines = vec![
        String::new(),
        format!(" {symbol} Change"),
        format!("   1 Day: {}", percent(&summary.change_1d())),
        format!("   5 Day: {}", percent(&summary.change_5d())),
        format!("   Month: {}", percent(&summary.change_30d())),
        String::new(),
        " US Sector (IT)".to_string(),
        "   1 Day: ▼0%".to_string(),
        "   5 Day: ▼1%".to_string(),
        "   Month: ▲8%".to_string(),
        String::new(),
    ];
    out.extend(block(&lines, theme.card_text, theme.card_bg));
    out
}

fn header(theme: &Theme) -> ColoredString {
    paint(&bar(" Stock Dashboard"), theme.header_text, theme.accent).bold()
}

fn trade_buttons(theme: &Theme) -> [ColoredString; 2] {
    [
        paint("   BUY   ", theme.button_text, theme.buy).bold(),
        paint("   SELL  ", theme.button_text, theme.sell).bold(),
    ]
}

fn percent(value: &str) -> String {
    if value == NOT_AVAILABLE {
        value.to_string()
    } else {
        format!("{value}%")
    }
}

fn dollars(value: &str) -> String {
    if value == NOT_AVAILABLE {
        value.to_string()
    } else {
        format!("${value}")
    }
}

fn bar(text: &str) -> String {
    format!("{text:<WIDTH$}")
}

fn block(lines: &[String], fg: Rgb, bg: Rgb) -> Vec<ColoredString> {
    lines.iter().map(|line| paint(&bar(line), fg, bg)).collect()
}

fn paint(text: &str, fg: Rgb, bg: Rgb) -> ColoredString {
    text.truecolor(fg.0, fg.1, fg.2).on_truecolor(bg.0, bg.1, bg.2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::Color;
    use stockdash_core::Watchlist;

    fn plain(state: &SessionState) -> String {
        colored::control::set_override(false);
        dashboard(state)
            .lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn aapl() -> SessionState {
        let mut state = SessionState::default();
        state.symbol = "AAPL".into();
        state.series = Some(
            QuoteSeries::new("aapl", vec!["d1".into(), "d2".into()], vec![150.0, 155.5]).unwrap(),
        );
        state
    }

    #[test]
    fn empty_session() {
        let out = plain(&SessionState::default());
        assert!(out.contains("Stock Dashboard"));
        assert!(out.contains("No stocks saved."));
        assert!(out.contains("[ Dark Mode ]"));
        assert!(!out.contains("Latest Data"));
        assert!(!out.contains("Loading..."));
    }

    #[test]
    fn statistics_cards() {
        let out = plain(&aapl());
        assert!(out.contains("AAPL - Price Trend"));
        assert!(out.contains("Close: $155.50"));
        assert!(out.contains("High: $155.50"));
        assert!(out.contains("Low: $150.00"));
        assert!(out.contains("Change: 3.67%"));
        assert!(out.contains("1 Day: 3.67%"));
        assert!(out.contains("5 Day: N/A"));
        assert!(out.contains("Month: N/A"));
        assert!(out.contains("US Sector (IT)"));
        assert!(out.contains("BUY"));
        assert!(out.contains("SELL"));
    }

    #[test]
    fn loading_and_error() {
        let mut state = SessionState::default();
        state.loading = true;
        state.error = Some("Please enter a stock symbol.".into());
        let out = plain(&state);
        assert!(out.contains("Loading..."));
        assert!(out.contains("Please enter a stock symbol."));
    }

    #[test]
    fn watchlist_and_dark_toggle() {
        let mut state = SessionState::new(Watchlist::from(vec!["aapl".to_string(), "msft".to_string()]));
        state.dark_mode = true;
        assert_eq!(watchlist_lines(&state), ["  1. AAPL     ✖", "  2. MSFT     ✖"]);
        let out = plain(&state);
        assert!(out.contains("[ Light Mode ]"));
        assert!(!out.contains("No stocks saved."));
    }

    #[test]
    fn header_and_buttons_take_theme_colours() {
        let theme = Theme {
            header_text: Rgb(1, 2, 3),
            button_text: Rgb(4, 5, 6),
            ..Theme::dark()
        };

        let banner = header(&theme);
        assert_eq!(banner.fgcolor(), Some(Color::TrueColor { r: 1, g: 2, b: 3 }));
        assert_eq!(banner.bgcolor(), Some(Color::TrueColor { r: 0x25, g: 0x63, b: 0xeb }));

        for button in trade_buttons(&theme) {
            assert_eq!(button.fgcolor(), Some(Color::TrueColor { r: 4, g: 5, b: 6 }));
        }
    }
}

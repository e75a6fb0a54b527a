//! Display statistics derived from a closing-price sequence.
//!
//! Nothing here is cached; every figure is recomputed from the series on demand.

use crate::schema::quote::QuoteSeries;

/// Shown wherever a figure cannot be computed.
pub const NOT_AVAILABLE: &str = "N/A";

/// Percentage change between the last price and the price `days` points before it.
///
/// `None` when fewer than `days + 1` prices exist, or when the earlier price is zero.
pub fn change_over_days(prices: &[f64], days: usize) -> Option<f64> {
    if prices.len() < days + 1 {
        return None;
    }
    let last = prices[prices.len() - 1];
    let base = prices[prices.len() - 1 - days];
    if base == 0.0 {
        return None;
    }
    Some((last - base) / base * 100.0)
}

pub fn latest_close(prices: &[f64]) -> Option<f64> {
    prices.last().copied()
}

/// Maximum price; 0.0 for an empty sequence.
pub fn high(prices: &[f64]) -> f64 {
    prices.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// Minimum price; 0.0 for an empty sequence.
pub fn low(prices: &[f64]) -> f64 {
    prices.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Two decimal places, or [`NOT_AVAILABLE`].
pub fn fmt_fixed(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Every figure on the dashboard's statistic cards, for one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub close: Option<f64>,
    pub high: f64,
    pub low: f64,
    pub change_1d: Option<f64>,
    pub change_5d: Option<f64>,
    pub change_30d: Option<f64>,
}

impl Summary {
    pub fn of(series: &QuoteSeries) -> Self {
        let prices = &series.closing_prices;
        Summary {
            close: latest_close(prices),
            high: high(prices),
            low: low(prices),
            change_1d: change_over_days(prices, 1),
            change_5d: change_over_days(prices, 5),
            change_30d: change_over_days(prices, 30),
        }
    }

    pub fn close(&self) -> String {
        fmt_fixed(self.close)
    }

    pub fn high(&self) -> String {
        fmt_fixed(Some(self.high))
    }

    pub fn low(&self) -> String {
        fmt_fixed(Some(self.low))
    }

    /// The headline "latest change" is the 1-day change.
    pub fn latest_change(&self) -> String {
        fmt_fixed(self.change_1d)
    }

    pub fn change_1d(&self) -> String {
        fmt_fixed(self.change_1d)
    }

    pub fn change_5d(&self) -> String {
        fmt_fixed(self.change_5d)
    }

    pub fn change_30d(&self) -> String {
        fmt_fixed(self.change_30d)
    }
}

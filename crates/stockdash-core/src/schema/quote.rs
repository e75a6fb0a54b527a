use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Closing-price history for a single stock, oldest first.
///
/// ```json
/// {
///     "symbol": "AAPL",
///     "dates": ["2024-05-01", "2024-05-02"],
///     "closing_prices": [150.0, 155.5]
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct QuoteSeries {
    pub symbol: String,
    pub dates: Vec<String>,
    pub closing_prices: Vec<f64>,
}

impl QuoteSeries {
    pub fn new(symbol: impl Into<String>, dates: Vec<String>, closing_prices: Vec<f64>) -> Result<Self> {
        let series = QuoteSeries {
            symbol: symbol.into(),
            dates,
            closing_prices,
        };
        series.validate()?;
        Ok(series)
    }

    /// Every date label must pair with exactly one closing price.
    pub fn validate(&self) -> Result<()> {
        if self.dates.len() != self.closing_prices.len() {
            bail!(
                "[{}] {} dates against {} closing prices",
                self.symbol,
                self.dates.len(),
                self.closing_prices.len()
            );
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.closing_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closing_prices.is_empty()
    }

    pub fn first_date(&self) -> Option<&str> {
        self.dates.first().map(String::as_str)
    }

    pub fn last_date(&self) -> Option<&str> {
        self.dates.last().map(String::as_str)
    }
}

/// Body of a `GET /stock/{symbol}` response.
///
/// The quote service answers unknown symbols with a 200 and an error object:
/// ```json
/// { "error": "No data found for this symbol." }
/// ```
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum QuotePayload {
    Series(QuoteSeries),
    Error { error: String },
}

impl QuotePayload {
    /// Collapse the payload into a validated series.
    pub fn into_series(self) -> Result<QuoteSeries> {
        match self {
            QuotePayload::Series(series) => {
                series.validate()?;
                Ok(series)
            }
            QuotePayload::Error { error } => bail!("quote service error: {error}"),
        }
    }
}

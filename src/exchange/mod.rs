//! Exchange Abstraction Layer
//!
//! Provides the read-only market-catalog and ticker interfaces that pairlist
//! filters consume. Filters never talk to an exchange directly; they see a
//! point-in-time snapshot supplied by a `MarketProvider`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use crate::types::Ticker;

/// Metadata for one tradable market on the exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    pub base: String,
    pub quote: String,
    /// Whether the market is currently open for trading.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// The exchange's tradable symbol catalog, keyed by `BASE/QUOTE` symbol.
pub type MarketMap = HashMap<String, Market>;

/// Ticker snapshots keyed by symbol.
pub type Tickers = HashMap<String, Ticker>;

/// Exchange-agnostic daily candle, passed to filters that inspect history.
#[derive(Debug, Clone)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Errors that can occur loading market data snapshots.
#[derive(Debug, Error)]
pub enum MarketDataError {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only view of exchange market data.
///
/// `markets` returns a point-in-time snapshot; an empty map means the
/// exchange layer has not finished initializing, which filters treat as a
/// fatal precondition failure rather than "no markets exist".
pub trait MarketProvider: Send + Sync {
    /// Snapshot of the tradable symbol catalog.
    fn markets(&self) -> Arc<MarketMap>;

    /// Ticker snapshots. Only fetched by the pipeline when at least one
    /// filter declares it needs them.
    fn tickers(&self) -> Tickers;
}

/// In-memory market data, loaded once from a JSON snapshot or built in code.
/// Backs the CLI and tests; performs no network I/O.
#[derive(Debug, Clone, Default)]
pub struct StaticMarketData {
    markets: Arc<MarketMap>,
    tickers: Tickers,
}

impl StaticMarketData {
    pub fn new(markets: MarketMap) -> Self {
        Self {
            markets: Arc::new(markets),
            tickers: Tickers::default(),
        }
    }

    pub fn with_tickers(mut self, tickers: Tickers) -> Self {
        self.tickers = tickers;
        self
    }

    /// Load a catalog snapshot from a JSON file of the form
    /// `{"BTC/USDT": {"base": "BTC", "quote": "USDT"}, ...}`.
    pub fn from_json_file(path: &Path) -> Result<Self, MarketDataError> {
        let data = fs::read_to_string(path)?;
        let markets: MarketMap = serde_json::from_str(&data)?;
        Ok(Self::new(markets))
    }
}

impl MarketProvider for StaticMarketData {
    fn markets(&self) -> Arc<MarketMap> {
        Arc::clone(&self.markets)
    }

    fn tickers(&self) -> Tickers {
        self.tickers.clone()
    }
}

/// Convenience for tests and demos: build a catalog from symbol strings,
/// deriving base/quote from each symbol.
pub fn market_map_from_symbols<'a, I>(symbols: I) -> MarketMap
where
    I: IntoIterator<Item = &'a str>,
{
    symbols
        .into_iter()
        .filter_map(|symbol| {
            let (base, quote) = symbol.split_once(crate::types::PAIR_SEPARATOR)?;
            Some((
                symbol.to_string(),
                Market {
                    base: base.to_string(),
                    quote: quote.to_string(),
                    active: true,
                },
            ))
        })
        .collect()
}

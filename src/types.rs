//! Common Types Module
//!
//! Shared types used across the codebase to avoid circular dependencies.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator between the base and quote components of a pair symbol.
pub const PAIR_SEPARATOR: char = '/';

/// Errors produced when parsing a `BASE/QUOTE` pair string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PairParseError {
    #[error("Invalid pair '{0}': expected exactly one '/' separating base and quote")]
    MissingSeparator(String),

    #[error("Invalid pair '{0}': base and quote must both be non-empty")]
    EmptyComponent(String),
}

/// A tradable instrument identifier in `BASE/QUOTE` form (e.g. "ETH/USDT").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TradingPair {
    /// The asset being bought or sold.
    pub base: String,
    /// The currency used to price and settle the trade.
    pub quote: String,
}

impl TradingPair {
    /// Build the market symbol for this pair's base against another quote
    /// currency, e.g. base "BTC" with "USD" yields "BTC/USD".
    pub fn base_symbol_for(&self, currency: &str) -> String {
        format!("{}{}{}", self.base, PAIR_SEPARATOR, currency)
    }
}

impl std::fmt::Display for TradingPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.base, PAIR_SEPARATOR, self.quote)
    }
}

impl std::str::FromStr for TradingPair {
    type Err = PairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(PAIR_SEPARATOR);
        let (base, quote) = match (parts.next(), parts.next(), parts.next()) {
            (Some(base), Some(quote), None) => (base, quote),
            _ => return Err(PairParseError::MissingSeparator(s.to_string())),
        };
        if base.is_empty() || quote.is_empty() {
            return Err(PairParseError::EmptyComponent(s.to_string()));
        }
        Ok(Self {
            base: base.to_string(),
            quote: quote.to_string(),
        })
    }
}

/// Last-price snapshot for one symbol, as returned by the exchange ticker
/// endpoint. Filters that do not need tickers receive an empty mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    /// The trading symbol (e.g. "BTC/USDT").
    pub symbol: String,
    /// Last traded price.
    pub last: Decimal,
}

//! Pairlist Filtering Pipeline
//!
//! Interchangeable whitelist filter stages behind the `PairFilter` trait,
//! threaded in order by `PairlistManager`. Each stage narrows the candidate
//! pair list according to one eligibility rule.
//!
//! # Example
//!
//! ```ignore
//! use pairsentry::config::BotConfig;
//! use pairsentry::exchange::StaticMarketData;
//! use pairsentry::pairlist::PairlistManager;
//!
//! let exchange = Arc::new(StaticMarketData::new(markets));
//! let mut manager = PairlistManager::from_config(exchange, &config)?;
//! let whitelist = manager.refresh_pairlist(&config.pair_whitelist)?;
//! ```

pub mod currency_filter;
pub mod error;
pub mod manager;

pub use currency_filter::CurrencyFilter;
pub use error::PairlistError;
pub use manager::PairlistManager;

use crate::exchange::{Candle, Tickers};

/// Capability interface shared by all whitelist filter stages.
pub trait PairFilter: Send {
    /// Whether this stage needs pre-fetched ticker data. When no stage in
    /// the pipeline requires tickers, the manager skips the fetch and passes
    /// an empty mapping.
    fn needs_tickers(&self) -> bool;

    /// One-line description of what the stage rejects, for startup messages.
    fn short_desc(&self) -> String;

    /// Narrow `pairlist` to eligible pairs. The result is a new list, a
    /// subset of the input with relative order preserved.
    fn filter_pairlist(
        &mut self,
        pairlist: &[String],
        tickers: &Tickers,
    ) -> Result<Vec<String>, PairlistError>;

    /// Validate a single pair. `daily_candles` is supplied for stages that
    /// inspect history (age/volume style filters); stages may ignore it.
    /// Returns true if the pair should stay in the whitelist.
    fn validate_pair(
        &mut self,
        pair: &str,
        daily_candles: Option<&[Candle]>,
    ) -> Result<bool, PairlistError>;
}

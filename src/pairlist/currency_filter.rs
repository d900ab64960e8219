//! Quote-currency availability filter
//!
//! Removes pairs whose base asset is not tradable against any of the
//! configured available currencies. Models "is this asset investable in a
//! currency we care about", independent of which quote the candidate pair
//! itself uses: BTC/EUR passes when BTC/USDT exists and USDT is available.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::{BotConfig, CurrencyFilterConfig};
use crate::exchange::{Candle, MarketMap, MarketProvider, Tickers};
use crate::logging::LogOnce;
use crate::types::TradingPair;

use super::error::PairlistError;
use super::PairFilter;

/// Filters pairs by quote-currency availability of their base asset.
pub struct CurrencyFilter {
    exchange: Arc<dyn MarketProvider>,
    available_currencies: Vec<String>,
    /// Pairs validated during this process run, with the time of validation.
    /// Grows monotonically and is never persisted; a cached pair is
    /// re-admitted without re-checking even if the exchange has since
    /// delisted its supporting market. Cleared only by dropping the filter.
    symbols_checked: HashMap<String, DateTime<Utc>>,
    /// Position of this stage in the pipeline, for diagnostics only.
    position: usize,
    log_once: LogOnce,
}

impl CurrencyFilter {
    /// Resolve the available-currency list from stage options, falling back
    /// to the bot's stake currency only when no list is given at all. An
    /// empty resolution (an explicit empty list, or no list and no stake
    /// currency) is a configuration error: a filter with no acceptable
    /// currencies can never pass anything and indicates a setup mistake.
    pub fn new(
        exchange: Arc<dyn MarketProvider>,
        config: &BotConfig,
        filter_config: CurrencyFilterConfig,
        position: usize,
    ) -> Result<Self, PairlistError> {
        let available_currencies = match filter_config.available_currencies {
            Some(currencies) => currencies,
            None if !config.stake_currency.is_empty() => vec![config.stake_currency.clone()],
            None => Vec::new(),
        };
        if available_currencies.is_empty() {
            return Err(PairlistError::Configuration(
                "CurrencyFilter requires at least one available currency".to_string(),
            ));
        }

        Ok(Self {
            exchange,
            available_currencies,
            symbols_checked: HashMap::new(),
            position,
            log_once: LogOnce::new(),
        })
    }

    pub fn name(&self) -> &'static str {
        "CurrencyFilter"
    }

    fn loaded_markets(&self) -> Result<Arc<MarketMap>, PairlistError> {
        let markets = self.exchange.markets();
        if markets.is_empty() {
            return Err(PairlistError::MarketsNotLoaded);
        }
        Ok(markets)
    }

    /// The single eligibility policy, shared by the bulk and per-pair paths:
    /// a pair stays when its base asset has a market against at least one
    /// available currency. Valid pairs are cached; cached pairs short-circuit.
    fn check_pair(&mut self, markets: &MarketMap, pair: &str) -> Result<bool, PairlistError> {
        if self.symbols_checked.contains_key(pair) {
            return Ok(true);
        }

        let parsed: TradingPair = pair.parse()?;
        let eligible = self
            .available_currencies
            .iter()
            .any(|currency| markets.contains_key(&parsed.base_symbol_for(currency)));

        if eligible {
            self.symbols_checked.insert(pair.to_string(), Utc::now());
        } else {
            info!(
                pair,
                base = %parsed.base,
                currencies = ?self.available_currencies,
                "Removed pair from whitelist: base asset has no market in any available currency"
            );
        }
        Ok(eligible)
    }
}

impl PairFilter for CurrencyFilter {
    fn needs_tickers(&self) -> bool {
        false
    }

    fn short_desc(&self) -> String {
        format!(
            "{} - Filtering pairs that don't have {:?} available.",
            self.name(),
            self.available_currencies
        )
    }

    fn filter_pairlist(
        &mut self,
        pairlist: &[String],
        _tickers: &Tickers,
    ) -> Result<Vec<String>, PairlistError> {
        // Every pair already validated this run: skip the market lookup.
        if pairlist
            .iter()
            .all(|pair| self.symbols_checked.contains_key(pair))
        {
            return Ok(pairlist.to_vec());
        }

        let markets = self.loaded_markets()?;

        let mut whitelist = Vec::with_capacity(pairlist.len());
        for pair in pairlist {
            if self.check_pair(&markets, pair)? {
                whitelist.push(pair.clone());
            }
        }

        let message = format!("Validated {} pairs.", whitelist.len());
        if self.log_once.should_log(&message) {
            let suppressed = self.log_once.get_and_reset_suppressed_count();
            info!(
                filter = self.name(),
                position = self.position,
                suppressed,
                "{message}"
            );
        }
        Ok(whitelist)
    }

    fn validate_pair(
        &mut self,
        pair: &str,
        _daily_candles: Option<&[Candle]>,
    ) -> Result<bool, PairlistError> {
        let markets = self.loaded_markets()?;
        self.check_pair(&markets, pair)
    }
}

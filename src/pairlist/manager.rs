//! Pairlist pipeline host
//!
//! Builds the ordered filter pipeline from configuration and threads the
//! candidate pair list through each stage in turn.

use std::sync::Arc;

use tracing::info;

use crate::config::BotConfig;
use crate::exchange::{MarketProvider, Tickers};

use super::currency_filter::CurrencyFilter;
use super::error::PairlistError;
use super::PairFilter;

/// Sequences whitelist filters and supplies their shared inputs.
pub struct PairlistManager {
    exchange: Arc<dyn MarketProvider>,
    filters: Vec<Box<dyn PairFilter>>,
}

impl PairlistManager {
    /// Build the pipeline from the `pairlists` configuration section.
    /// Fails eagerly if any stage rejects its options, so a misconfigured
    /// pipeline aborts startup instead of passing bad whitelists downstream.
    pub fn from_config(
        exchange: Arc<dyn MarketProvider>,
        config: &BotConfig,
    ) -> Result<Self, PairlistError> {
        if config.pairlists.is_empty() {
            return Err(PairlistError::Configuration(
                "at least one pairlist stage is required".to_string(),
            ));
        }

        let mut filters: Vec<Box<dyn PairFilter>> = Vec::with_capacity(config.pairlists.len());
        for (position, entry) in config.pairlists.iter().enumerate() {
            match entry.method.as_str() {
                "CurrencyFilter" => {
                    let options = serde_json::from_value(entry.options.clone())?;
                    filters.push(Box::new(CurrencyFilter::new(
                        exchange.clone(),
                        config,
                        options,
                        position,
                    )?));
                }
                other => return Err(PairlistError::UnknownMethod(other.to_string())),
            }
        }

        Ok(Self { exchange, filters })
    }

    /// True when any stage requires pre-fetched ticker data.
    pub fn needs_tickers(&self) -> bool {
        self.filters.iter().any(|filter| filter.needs_tickers())
    }

    /// One description line per stage, in pipeline order.
    pub fn short_descs(&self) -> Vec<String> {
        self.filters.iter().map(|filter| filter.short_desc()).collect()
    }

    /// Log each stage's description, for startup diagnostics.
    pub fn log_startup_messages(&self) {
        for desc in self.short_descs() {
            info!("{desc}");
        }
    }

    /// Thread the candidate list through every stage in order and return the
    /// resulting whitelist. Tickers are fetched once, and only when some
    /// stage declares a need for them.
    pub fn refresh_pairlist(&mut self, pairlist: &[String]) -> Result<Vec<String>, PairlistError> {
        let tickers = if self.needs_tickers() {
            self.exchange.tickers()
        } else {
            Tickers::default()
        };

        let mut whitelist = pairlist.to_vec();
        for filter in &mut self.filters {
            whitelist = filter.filter_pairlist(&whitelist, &tickers)?;
        }
        Ok(whitelist)
    }
}

//! End-to-end pipeline tests: configuration -> manager -> whitelist.

use std::sync::Arc;

use pairsentry::config::BotConfig;
use pairsentry::exchange::{market_map_from_symbols, StaticMarketData};
use pairsentry::pairlist::{PairlistError, PairlistManager};

fn config(json: serde_json::Value) -> BotConfig {
    let config: BotConfig = serde_json::from_value(json).unwrap();
    config.validate().unwrap();
    config
}

fn exchange(symbols: &[&str]) -> Arc<StaticMarketData> {
    Arc::new(StaticMarketData::new(market_map_from_symbols(
        symbols.iter().copied(),
    )))
}

#[test]
fn filters_whitelist_from_config() {
    let config = config(serde_json::json!({
        "stake_currency": "USDT",
        "pair_whitelist": ["ETH/USDT", "XRP/USDT"],
        "pairlists": [
            {"method": "CurrencyFilter", "available_currencies": ["USDT"]}
        ]
    }));
    let mut manager =
        PairlistManager::from_config(exchange(&["ETH/USDT", "BTC/USDT"]), &config).unwrap();

    let whitelist = manager.refresh_pairlist(&config.pair_whitelist).unwrap();
    assert_eq!(whitelist, vec!["ETH/USDT".to_string()]);
}

#[test]
fn base_asset_eligibility_ignores_the_pair_quote() {
    let config = config(serde_json::json!({
        "stake_currency": "USDT",
        "pair_whitelist": ["BTC/EUR"],
        "pairlists": [
            {"method": "CurrencyFilter", "available_currencies": ["USDT", "USD"]}
        ]
    }));
    let mut manager = PairlistManager::from_config(exchange(&["BTC/USDT"]), &config).unwrap();

    let whitelist = manager.refresh_pairlist(&config.pair_whitelist).unwrap();
    assert_eq!(whitelist, vec!["BTC/EUR".to_string()]);
}

#[test]
fn stake_currency_fallback_applies_when_no_list_given() {
    let config = config(serde_json::json!({
        "stake_currency": "USD",
        "pair_whitelist": ["BTC/USD", "DOGE/USD"],
        "pairlists": [{"method": "CurrencyFilter"}]
    }));
    let mut manager = PairlistManager::from_config(exchange(&["BTC/USD"]), &config).unwrap();

    let whitelist = manager.refresh_pairlist(&config.pair_whitelist).unwrap();
    assert_eq!(whitelist, vec!["BTC/USD".to_string()]);
}

#[test]
fn empty_currency_resolution_aborts_startup() {
    let config: BotConfig = serde_json::from_value(serde_json::json!({
        "stake_currency": "",
        "pairlists": [{"method": "CurrencyFilter"}]
    }))
    .unwrap();
    let result = PairlistManager::from_config(exchange(&["BTC/USDT"]), &config);
    assert!(matches!(result, Err(PairlistError::Configuration(_))));
}

#[test]
fn explicit_empty_currency_list_aborts_startup() {
    // An empty list in the stage options is a setup mistake, not a request
    // for the stake-currency fallback.
    let config = config(serde_json::json!({
        "stake_currency": "USDT",
        "pairlists": [{"method": "CurrencyFilter", "available_currencies": []}]
    }));
    let result = PairlistManager::from_config(exchange(&["BTC/USDT"]), &config);
    assert!(matches!(result, Err(PairlistError::Configuration(_))));
}

#[test]
fn unloaded_markets_abort_the_cycle() {
    let config = config(serde_json::json!({
        "stake_currency": "USDT",
        "pair_whitelist": ["BTC/USDT"],
        "pairlists": [{"method": "CurrencyFilter"}]
    }));
    let mut manager = PairlistManager::from_config(exchange(&[]), &config).unwrap();

    let err = manager.refresh_pairlist(&config.pair_whitelist).unwrap_err();
    assert!(matches!(err, PairlistError::MarketsNotLoaded));
}

#[test]
fn repeated_refresh_is_idempotent() {
    let config = config(serde_json::json!({
        "stake_currency": "USDT",
        "pair_whitelist": ["ETH/USDT", "XRP/USDT", "BTC/USDT"],
        "pairlists": [{"method": "CurrencyFilter"}]
    }));
    let mut manager =
        PairlistManager::from_config(exchange(&["ETH/USDT", "BTC/USDT"]), &config).unwrap();

    let first = manager.refresh_pairlist(&config.pair_whitelist).unwrap();
    let second = manager.refresh_pairlist(&first).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, vec!["ETH/USDT".to_string(), "BTC/USDT".to_string()]);
}

#[test]
fn malformed_pair_surfaces_as_error() {
    let config = config(serde_json::json!({
        "stake_currency": "USDT",
        "pair_whitelist": ["BTCUSDT"],
        "pairlists": [{"method": "CurrencyFilter"}]
    }));
    let mut manager = PairlistManager::from_config(exchange(&["BTC/USDT"]), &config).unwrap();

    let err = manager.refresh_pairlist(&config.pair_whitelist).unwrap_err();
    assert!(matches!(err, PairlistError::InvalidPair(_)));
}

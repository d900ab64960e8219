pub mod config;
pub mod exchange;
pub mod logging;
pub mod pairlist;
pub mod types;

//! Trendscout - technical-indicator stock screener
//!
//! Turns daily price bars into trend (buy / watch / caution) and rising-star
//! recommendations with an ordered list of reasons. Indicator computation and
//! scoring are pure; fetching and caching live in the screener.

pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod types;

// Re-export commonly used types
pub use config::{Config, RsiMode};
pub use error::{Result, ScreenerError};
pub use services::{
    IndicatorEngine, MarketDataProvider, MomentumScorer, ResultCache, ScanReport, Scorer,
    Screener, TrendScorer,
};
pub use types::*;

pub mod cache;
pub mod indicators;
pub mod scoring;
pub mod screener;

pub use cache::ResultCache;
pub use indicators::{IndicatorEngine, NeutralRsi, RollingRsi, RsiProvider};
pub use scoring::{MomentumScorer, Scorer, TrendScorer};
pub use screener::{MarketDataProvider, ScanKey, ScanReport, Screener};

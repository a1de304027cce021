//! Indicator computation over daily price series.

pub mod rsi;
pub mod sma;

pub use rsi::{NeutralRsi, RollingRsi, RsiProvider, LOSS_EPSILON, NEUTRAL_RSI};
pub use sma::Sma;

use crate::config::{Config, RsiMode};
use crate::types::{EnrichedSeries, IndicatorSet, PriceSeries};
use tracing::debug;

/// Bars needed before any indicator is computed.
pub const MIN_HISTORY: usize = 20;

/// Derives moving averages, RSI and the volume average for every bar.
pub struct IndicatorEngine {
    rsi: Box<dyn RsiProvider>,
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new(Box::new(RollingRsi::default()))
    }
}

impl IndicatorEngine {
    pub fn new(rsi: Box<dyn RsiProvider>) -> Self {
        Self { rsi }
    }

    /// Create an engine with the RSI provider selected in configuration.
    pub fn from_config(config: &Config) -> Self {
        match config.rsi_mode {
            RsiMode::Rolling => Self::new(Box::new(RollingRsi::default())),
            RsiMode::Neutral => Self::new(Box::new(NeutralRsi)),
        }
    }

    pub fn rsi_provider_id(&self) -> &str {
        self.rsi.id()
    }

    /// Enrich a copy of `series` with per-bar indicators.
    ///
    /// Series shorter than `MIN_HISTORY` come back without indicators.
    pub fn compute(&self, series: &PriceSeries) -> EnrichedSeries {
        let source = self.rsi.source();
        if series.len() < MIN_HISTORY {
            debug!(
                "Skipping indicators: {} bars, need {}",
                series.len(),
                MIN_HISTORY
            );
            return EnrichedSeries::new(series.clone(), None, source);
        }

        let closes = series.closes();
        let volumes = series.volumes();

        let ma5 = Sma::new(5).series(&closes);
        let ma20 = Sma::new(20).series(&closes);
        let ma60 = Sma::new(60).series(&closes);
        let rsi14 = self.rsi.series(&closes);
        let vol_ma20 = Sma::new(20).series_with_gaps(&volumes);

        let sets = (0..series.len())
            .map(|i| IndicatorSet {
                ma5: ma5[i],
                ma20: ma20[i],
                ma60: ma60[i],
                rsi14: rsi14.get(i).copied().flatten(),
                vol_ma20: vol_ma20[i],
            })
            .collect();

        EnrichedSeries::new(series.clone(), Some(sets), source)
    }
}

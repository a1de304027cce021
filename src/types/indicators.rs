use crate::types::{PriceBar, PriceSeries};
use serde::{Deserialize, Serialize};

/// Indicator values attached to one bar.
///
/// A value is `None` while its trailing window is longer than the available
/// history. Scorers skip factors whose inputs are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSet {
    pub ma5: Option<f64>,
    pub ma20: Option<f64>,
    pub ma60: Option<f64>,
    pub rsi14: Option<f64>,
    pub vol_ma20: Option<f64>,
}

/// Where the RSI column of an enriched series came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiSource {
    /// Computed from simple rolling means of gains and losses.
    Rolling,
    /// Fixed neutral value, used when no RSI calculator is configured.
    NeutralFallback,
}

/// A price series with per-bar indicators.
///
/// `indicators` is `None` when the series was too short to enrich; otherwise
/// it holds exactly one `IndicatorSet` per bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSeries {
    series: PriceSeries,
    indicators: Option<Vec<IndicatorSet>>,
    rsi_source: RsiSource,
}

impl EnrichedSeries {
    pub(crate) fn new(
        series: PriceSeries,
        indicators: Option<Vec<IndicatorSet>>,
        rsi_source: RsiSource,
    ) -> Self {
        debug_assert!(indicators
            .as_ref()
            .map_or(true, |sets| sets.len() == series.len()));
        Self {
            series,
            indicators,
            rsi_source,
        }
    }

    /// The underlying bars, unchanged.
    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn bars(&self) -> &[PriceBar] {
        self.series.bars()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn is_enriched(&self) -> bool {
        self.indicators.is_some()
    }

    pub fn indicators(&self) -> Option<&[IndicatorSet]> {
        self.indicators.as_deref()
    }

    /// Indicators of the bar at `index`.
    pub fn indicators_at(&self, index: usize) -> Option<&IndicatorSet> {
        self.indicators.as_ref()?.get(index)
    }

    /// The last bar together with its indicators.
    pub fn latest(&self) -> Option<(&PriceBar, &IndicatorSet)> {
        let bar = self.series.last()?;
        let set = self.indicators.as_ref()?.last()?;
        Some((bar, set))
    }

    pub fn rsi_source(&self) -> RsiSource {
        self.rsi_source
    }
}

//! Volume-surge and breakout ("rising star") scoring.

use crate::services::indicators::{Sma, MIN_HISTORY};
use crate::services::scoring::{ScoreCard, Scorer};
use crate::types::{EnrichedSeries, PriceBar, Recommendation, RecommendationCategory, TradeSignal};
use tracing::debug;

/// Score at or above which a symbol is a rising star.
pub const RISING_STAR_THRESHOLD: f64 = 4.0;
/// Score at or above which a symbol is worth watching.
pub const WATCH_THRESHOLD: f64 = 3.0;

/// Bars in the breakout lookback.
const HIGH_LOOKBACK: usize = 20;
/// Price within this fraction of the 20-day high counts as a breakout.
const BREAKOUT_TOLERANCE: f64 = 0.998;
/// Bars back for the short momentum window.
const MOMENTUM_LOOKBACK: usize = 5;

/// Rising-star scorer.
///
/// Looks for fresh volume, a push through the recent high and short-term
/// momentum while RSI still leaves room to grow.
#[derive(Debug, Clone, Copy, Default)]
pub struct MomentumScorer;

impl MomentumScorer {
    pub fn new() -> Self {
        Self
    }

    /// Mean volume of the last 5 bars over the 20-bar volume average.
    fn volume_ratio(bars: &[PriceBar], vol_ma20: Option<f64>) -> Option<f64> {
        let vol_ma20 = vol_ma20.filter(|v| *v > 0.0)?;
        let volumes: Vec<Option<f64>> = bars.iter().map(|b| b.volume).collect();
        let vol_ma5 = Sma::new(5)
            .latest_with_gaps(&volumes)
            .filter(|v| *v > 0.0)?;
        Some(vol_ma5 / vol_ma20)
    }

    /// Highest high over the last 20 bars, ignoring bars without a high.
    fn recent_high(bars: &[PriceBar]) -> Option<f64> {
        let start = bars.len().saturating_sub(HIGH_LOOKBACK);
        bars[start..]
            .iter()
            .filter_map(|b| b.high)
            .reduce(f64::max)
    }

    /// Percent change of the close over the last 5 bars.
    fn five_day_change(bars: &[PriceBar], price: f64) -> Option<f64> {
        if bars.len() < MOMENTUM_LOOKBACK + 1 {
            return None;
        }
        let base = bars[bars.len() - MOMENTUM_LOOKBACK - 1].close;
        if base <= 0.0 {
            return None;
        }
        Some((price - base) / base * 100.0)
    }
}

impl Scorer for MomentumScorer {
    fn category(&self) -> RecommendationCategory {
        RecommendationCategory::RisingStar
    }

    fn signal_for(&self, score: f64) -> TradeSignal {
        if score >= RISING_STAR_THRESHOLD {
            TradeSignal::RisingStar
        } else if score >= WATCH_THRESHOLD {
            TradeSignal::Watch
        } else {
            TradeSignal::Caution
        }
    }

    fn evaluate(
        &self,
        series: &EnrichedSeries,
        symbol: &str,
        name: &str,
    ) -> Option<Recommendation> {
        if series.len() < MIN_HISTORY {
            return None;
        }
        let (latest, ind) = series.latest()?;
        let bars = series.bars();
        let price = latest.close;
        let mut card = ScoreCard::default();

        if let Some(ratio) = Self::volume_ratio(bars, ind.vol_ma20) {
            if ratio >= 2.0 {
                card.add(2.5, format!("volume surge (5d/20d avg {:.1}x)", ratio));
            } else if ratio >= 1.5 {
                card.add(1.5, format!("volume increase (5d/20d avg {:.1}x)", ratio));
            } else if ratio >= 1.2 {
                card.add(0.5, format!("slight volume increase ({:.1}x)", ratio));
            }
        }

        if let Some(high20) = Self::recent_high(bars) {
            if price >= high20 * BREAKOUT_TOLERANCE {
                card.add(2.0, "20-day high breakout");
            } else {
                let pct_to_high = (high20 - price) / price * 100.0;
                if pct_to_high < 3.0 {
                    card.add(
                        1.0,
                        format!("near 20-day high (~{:.1}% away)", pct_to_high),
                    );
                }
            }
        }

        if let Some(change) = Self::five_day_change(bars, price) {
            if change >= 10.0 {
                card.add(1.5, format!("5-day +{:.1}% (strong momentum)", change));
            } else if change >= 5.0 {
                card.add(1.0, format!("5-day +{:.1}%", change));
            } else if change >= 0.0 {
                card.note(format!("5-day +{:.1}%", change));
            } else {
                card.note(format!("5-day {:.1}% (flat)", change));
            }
        }

        if let Some(rsi) = ind.rsi14 {
            if (40.0..=65.0).contains(&rsi) {
                card.add(1.0, format!("RSI {:.0} (growth room)", rsi));
            } else if rsi < 40.0 {
                card.add(0.5, format!("RSI {:.0} (undervalued, rebound possible)", rsi));
            } else if rsi > 75.0 {
                card.add(-0.5, format!("RSI {:.0} (overbought, correction risk)", rsi));
            }
        }

        if let (Some(ma5), Some(ma20)) = (ind.ma5, ind.ma20) {
            if ma5 > ma20 {
                card.add(0.5, "short-term uptrend (5 > 20)");
            }
        }

        let (score, reasons) = card.finish();
        let signal = self.signal_for(score);
        debug!("Rising-star score for {}: {} ({})", symbol, score, signal);

        Some(Recommendation::new(
            symbol,
            name,
            price,
            score,
            reasons,
            signal,
            self.category(),
        ))
    }
}

//! Sustained-trend scoring.

use crate::services::indicators::MIN_HISTORY;
use crate::services::scoring::{ScoreCard, Scorer};
use crate::types::{EnrichedSeries, Recommendation, RecommendationCategory, TradeSignal};
use tracing::debug;

/// Score at or above which a trend recommendation is a buy.
pub const BUY_THRESHOLD: f64 = 3.5;
/// Score at or above which a trend recommendation is worth watching.
pub const WATCH_THRESHOLD: f64 = 2.0;

/// Trend scorer.
///
/// Factors, in evaluation order:
/// - MA5 vs MA20 (short-term trend): +2.0 when MA5 is above
/// - MA20 vs MA60 (long-term trend): +1.0 when MA20 is above
/// - RSI zone: oversold +1.5, neutral-low +0.5, overbought -1.0
/// - Price vs MA20: +0.5 inside the fair zone (-3%, +5%)
#[derive(Debug, Clone, Copy, Default)]
pub struct TrendScorer;

impl TrendScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for TrendScorer {
    fn category(&self) -> RecommendationCategory {
        RecommendationCategory::Trend
    }

    fn signal_for(&self, score: f64) -> TradeSignal {
        if score >= BUY_THRESHOLD {
            TradeSignal::Buy
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
        let price = latest.close;
        let mut card = ScoreCard::default();

        if let (Some(ma5), Some(ma20)) = (ind.ma5, ind.ma20) {
            if ma5 > ma20 {
                card.add(2.0, "MA5 > MA20 (short-term uptrend)");
            } else {
                card.note("MA5 <= MA20 (short-term sideways/decline)");
            }
        }

        if let (Some(ma20), Some(ma60)) = (ind.ma20, ind.ma60) {
            if ma20 > ma60 {
                card.add(1.0, "MA20 > MA60 (long-term uptrend)");
            }
        }

        if let Some(rsi) = ind.rsi14 {
            if rsi < 30.0 {
                card.add(1.5, format!("RSI {:.0} (oversold, rebound possible)", rsi));
            } else if rsi < 50.0 {
                card.add(0.5, format!("RSI {:.0} (neutral-low)", rsi));
            } else if rsi > 70.0 {
                card.add(-1.0, format!("RSI {:.0} (overbought, correction risk)", rsi));
            } else {
                card.note(format!("RSI {:.0} (neutral)", rsi));
            }
        }

        if let Some(ma20) = ind.ma20.filter(|v| *v != 0.0) {
            let pct = (price - ma20) / ma20 * 100.0;
            if -3.0 < pct && pct < 5.0 {
                card.add(0.5, format!("{:+.1}% vs MA20 (fair zone)", pct));
            } else if pct < -5.0 {
                card.note(format!("{:+.1}% vs MA20 (undervalued zone)", pct));
            }
        }

        let (score, reasons) = card.finish();
        let signal = self.signal_for(score);
        debug!("Trend score for {}: {} ({})", symbol, score, signal);

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

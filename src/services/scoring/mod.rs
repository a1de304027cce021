//! Multi-factor scoring of enriched price series.
//!
//! Each scorer reads the last bar's indicators (plus a short lookback for
//! momentum), sums factor contributions, and maps the rounded score onto a
//! `TradeSignal`. Scorers hold no state between calls.

pub mod momentum;
pub mod trend;

pub use momentum::MomentumScorer;
pub use trend::TrendScorer;

use crate::types::{EnrichedSeries, Recommendation, RecommendationCategory, TradeSignal};

/// Trait for the heuristics that turn indicators into a recommendation.
pub trait Scorer: Send + Sync {
    /// Category attached to every recommendation this scorer produces.
    fn category(&self) -> RecommendationCategory;

    /// Map a rounded score onto a signal.
    fn signal_for(&self, score: f64) -> TradeSignal;

    /// Evaluate one series.
    /// Returns None if the series has fewer than 20 bars or no indicators.
    fn evaluate(&self, series: &EnrichedSeries, symbol: &str, name: &str)
        -> Option<Recommendation>;
}

/// Round a score to one decimal.
pub fn round_score(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

/// Accumulates factor contributions and their reasons in evaluation order.
#[derive(Debug, Default)]
pub(crate) struct ScoreCard {
    score: f64,
    reasons: Vec<String>,
}

impl ScoreCard {
    pub(crate) fn add(&mut self, delta: f64, reason: impl Into<String>) {
        self.score += delta;
        self.reasons.push(reason.into());
    }

    /// Record a reason without changing the score.
    pub(crate) fn note(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }

    pub(crate) fn finish(self) -> (f64, Vec<String>) {
        (round_score(self.score), self.reasons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_score() {
        assert_eq!(round_score(3.5), 3.5);
        assert_eq!(round_score(3.449), 3.4);
        assert_eq!(round_score(-0.5), -0.5);
        assert_eq!(round_score(2.0 + 1.0 + 1.5 + 0.5), 5.0);
    }

    #[test]
    fn test_score_card_keeps_order() {
        let mut card = ScoreCard::default();
        card.add(2.0, "first");
        card.note("second");
        card.add(-0.5, "third");

        let (score, reasons) = card.finish();
        assert_eq!(score, 1.5);
        assert_eq!(reasons, vec!["first", "second", "third"]);
    }
}

use serde::{Deserialize, Serialize};

/// Reasons shown per trend recommendation by presentation layers.
pub const TREND_REASONS_SHOWN: usize = 3;
/// Reasons shown per rising-star recommendation by presentation layers.
pub const RISING_STAR_REASONS_SHOWN: usize = 4;

/// Discrete trading signal attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSignal {
    Buy,
    Watch,
    Caution,
    RisingStar,
}

impl TradeSignal {
    /// Get display label for this signal.
    pub fn label(&self) -> &'static str {
        match self {
            TradeSignal::Buy => "Buy",
            TradeSignal::Watch => "Watch",
            TradeSignal::Caution => "Caution",
            TradeSignal::RisingStar => "Rising Star",
        }
    }
}

impl std::fmt::Display for TradeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which heuristic produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    /// Sustained-trend scoring (moving averages, RSI zone, price position).
    Trend,
    /// Volume surge and breakout scoring.
    RisingStar,
}

/// Scored output for one symbol from one scorer.
///
/// Built once by a scorer and read-only afterwards. `reasons` keeps the
/// order in which factors were evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    symbol: String,
    name: String,
    current_price: f64,
    score: f64,
    reasons: Vec<String>,
    signal: TradeSignal,
    category: RecommendationCategory,
}

impl Recommendation {
    pub(crate) fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        current_price: f64,
        score: f64,
        reasons: Vec<String>,
        signal: TradeSignal,
        category: RecommendationCategory,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            current_price,
            score,
            reasons,
            signal,
            category,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Score rounded to one decimal.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn reasons(&self) -> &[String] {
        &self.reasons
    }

    /// The first `n` reasons, for display.
    pub fn top_reasons(&self, n: usize) -> &[String] {
        &self.reasons[..n.min(self.reasons.len())]
    }

    pub fn signal(&self) -> TradeSignal {
        self.signal
    }

    pub fn category(&self) -> RecommendationCategory {
        self.category
    }
}

/// Stable sort by score, highest first. Equal scores keep their input order.
pub fn sort_by_score_desc(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
}

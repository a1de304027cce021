//! Relative Strength Index (RSI) providers.

use crate::services::indicators::sma::Sma;
use crate::types::RsiSource;

/// Substituted for an average loss of exactly zero.
pub const LOSS_EPSILON: f64 = 1e-10;

/// RSI value used when no calculator is configured.
pub const NEUTRAL_RSI: f64 = 50.0;

/// Source of the RSI column of an enriched series.
///
/// Selected once at configuration time; scorers read whatever it produced and
/// never check which implementation was used.
pub trait RsiProvider: Send + Sync {
    /// Unique identifier for this provider.
    fn id(&self) -> &str;

    /// Where the values come from.
    fn source(&self) -> RsiSource;

    /// One value per close. `None` while the window is not filled.
    fn series(&self, closes: &[f64]) -> Vec<Option<f64>>;
}

/// RSI from simple trailing means of gains and losses.
///
/// Gains and losses are the positive and negative parts of bar-to-bar close
/// changes. Both are averaged over `period` deltas with a plain rolling mean,
/// not Wilder smoothing. Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
pub struct RollingRsi {
    period: usize,
}

impl Default for RollingRsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl RollingRsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Minimum number of closes before the first value is defined.
    pub fn min_periods(&self) -> usize {
        self.period + 1
    }

    /// Convert average gain and average loss into an RSI value.
    ///
    /// No movement at all is neutral (50). Otherwise a zero average loss is
    /// replaced by `LOSS_EPSILON`, which pushes the value towards 100.
    pub fn from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
        if avg_gain == 0.0 && avg_loss == 0.0 {
            return NEUTRAL_RSI;
        }
        let avg_loss = if avg_loss == 0.0 { LOSS_EPSILON } else { avg_loss };
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

impl RsiProvider for RollingRsi {
    fn id(&self) -> &str {
        "rsi_rolling"
    }

    fn source(&self) -> RsiSource {
        RsiSource::Rolling
    }

    fn series(&self, closes: &[f64]) -> Vec<Option<f64>> {
        let mut out = vec![None; closes.len()];
        if self.period == 0 || closes.len() < self.min_periods() {
            return out;
        }

        let (gains, losses): (Vec<f64>, Vec<f64>) = closes
            .windows(2)
            .map(|w| {
                let change = w[1] - w[0];
                (change.max(0.0), (-change).max(0.0))
            })
            .unzip();

        let sma = Sma::new(self.period);
        let avg_gains = sma.series(&gains);
        let avg_losses = sma.series(&losses);

        // Delta i sits between close i and close i + 1.
        for (i, (gain, loss)) in avg_gains.iter().zip(&avg_losses).enumerate() {
            if let (Some(gain), Some(loss)) = (gain, loss) {
                out[i + 1] = Some(Self::from_averages(*gain, *loss));
            }
        }
        out
    }
}

/// Fixed neutral RSI for every bar.
pub struct NeutralRsi;

impl RsiProvider for NeutralRsi {
    fn id(&self) -> &str {
        "rsi_neutral"
    }

    fn source(&self) -> RsiSource {
        RsiSource::NeutralFallback
    }

    fn series(&self, closes: &[f64]) -> Vec<Option<f64>> {
        vec![Some(NEUTRAL_RSI); closes.len()]
    }
}

//! Simple Moving Average (SMA) over a trailing window.

/// SMA (Simple Moving Average) calculator.
///
/// Each output position holds the mean of the `period` values ending there,
/// or `None` while fewer than `period` values are available.
#[derive(Debug, Clone, Copy)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Trailing means of a complete series.
    pub fn series(&self, values: &[f64]) -> Vec<Option<f64>> {
        let mut out = vec![None; values.len()];
        if self.period == 0 || values.len() < self.period {
            return out;
        }

        for (end, window) in values.windows(self.period).enumerate() {
            out[end + self.period - 1] = Some(window.iter().sum::<f64>() / self.period as f64);
        }
        out
    }

    /// Trailing means of a series with gaps.
    ///
    /// A window containing a missing value has no mean.
    pub fn series_with_gaps(&self, values: &[Option<f64>]) -> Vec<Option<f64>> {
        let mut out = vec![None; values.len()];
        if self.period == 0 || values.len() < self.period {
            return out;
        }

        for (end, window) in values.windows(self.period).enumerate() {
            let sum: Option<f64> = window.iter().copied().sum();
            out[end + self.period - 1] = sum.map(|s| s / self.period as f64);
        }
        out
    }

    /// Mean of the last `period` values, `None` if any of them is missing.
    pub fn latest_with_gaps(&self, values: &[Option<f64>]) -> Option<f64> {
        if self.period == 0 || values.len() < self.period {
            return None;
        }
        let tail = &values[values.len() - self.period..];
        let sum: f64 = tail.iter().copied().sum::<Option<f64>>()?;
        Some(sum / self.period as f64)
    }
}

use crate::error::{Result, ScreenerError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of price data for a symbol.
///
/// Only `date` and `close` are required. A bar without `high` or `volume`
/// simply disables the factors that need them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    pub volume: Option<f64>,
}

impl PriceBar {
    /// Create a fully populated bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open: Some(open),
            high: Some(high),
            low: Some(low),
            close,
            volume: Some(volume),
        }
    }

    /// Create a bar that only carries a closing price.
    pub fn close_only(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close,
            volume: None,
        }
    }
}

/// Daily bars for one symbol, strictly ascending by date.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<PriceBar>", into = "Vec<PriceBar>")]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Build a series, rejecting out-of-order or duplicated dates.
    pub fn new(bars: Vec<PriceBar>) -> Result<Self> {
        for pair in bars.windows(2) {
            if pair[1].date == pair[0].date {
                return Err(ScreenerError::InvalidSeries(format!(
                    "duplicate date {}",
                    pair[1].date
                )));
            }
            if pair[1].date < pair[0].date {
                return Err(ScreenerError::InvalidSeries(format!(
                    "date {} follows {}",
                    pair[1].date, pair[0].date
                )));
            }
        }
        Ok(Self { bars })
    }

    /// Build a series from bars in any order.
    ///
    /// Bars are sorted by date; for a repeated date the bar appearing last in
    /// the input wins.
    pub fn normalized(mut bars: Vec<PriceBar>) -> Self {
        // Stable sort keeps input order within a date, so the later duplicate
        // ends up last and survives the reverse dedup below.
        bars.sort_by_key(|b| b.date);
        bars.reverse();
        bars.dedup_by_key(|b| b.date);
        bars.reverse();
        Self { bars }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// Closing prices in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volumes in date order, `None` where a bar has no volume.
    pub fn volumes(&self) -> Vec<Option<f64>> {
        self.bars.iter().map(|b| b.volume).collect()
    }
}

impl TryFrom<Vec<PriceBar>> for PriceSeries {
    type Error = ScreenerError;

    fn try_from(bars: Vec<PriceBar>) -> Result<Self> {
        Self::new(bars)
    }
}

impl From<PriceSeries> for Vec<PriceBar> {
    fn from(series: PriceSeries) -> Self {
        series.bars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_series_accepts_ascending_dates() {
        let series = PriceSeries::new(vec![
            PriceBar::close_only(day(1), 10.0),
            PriceBar::close_only(day(4), 11.0),
            PriceBar::close_only(day(5), 12.0),
        ])
        .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![10.0, 11.0, 12.0]);
        assert_eq!(series.last().map(|b| b.close), Some(12.0));
    }

    #[test]
    fn test_series_rejects_duplicate_dates() {
        let result = PriceSeries::new(vec![
            PriceBar::close_only(day(1), 10.0),
            PriceBar::close_only(day(1), 11.0),
        ]);
        assert!(matches!(result, Err(ScreenerError::InvalidSeries(_))));
    }

    #[test]
    fn test_series_rejects_descending_dates() {
        let result = PriceSeries::new(vec![
            PriceBar::close_only(day(2), 10.0),
            PriceBar::close_only(day(1), 11.0),
        ]);
        assert!(matches!(result, Err(ScreenerError::InvalidSeries(_))));
    }

    #[test]
    fn test_normalized_sorts_and_keeps_last_duplicate() {
        let series = PriceSeries::normalized(vec![
            PriceBar::close_only(day(3), 30.0),
            PriceBar::close_only(day(1), 10.0),
            PriceBar::close_only(day(3), 31.0),
            PriceBar::close_only(day(2), 20.0),
        ]);

        assert_eq!(series.closes(), vec![10.0, 20.0, 31.0]);
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::default();
        assert!(series.is_empty());
        assert!(series.last().is_none());
    }

    #[test]
    fn test_volumes_preserve_missing_entries() {
        let series = PriceSeries::new(vec![
            PriceBar::new(day(1), 1.0, 1.0, 1.0, 1.0, 500.0),
            PriceBar::close_only(day(2), 1.0),
        ])
        .unwrap();

        assert_eq!(series.volumes(), vec![Some(500.0), None]);
    }
}

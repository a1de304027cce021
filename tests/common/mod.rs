//! Series builders shared by the integration tests.
#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use trendscout::{PriceBar, PriceSeries};

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
}

/// Bars whose open/high/low equal the close, all with the same volume.
pub fn series_from_closes(closes: &[f64], volume: f64) -> PriceSeries {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PriceBar::new(start_date() + Duration::days(i as i64), c, c, c, c, volume))
        .collect();
    PriceSeries::new(bars).unwrap()
}

/// 60 bars closing at 100 with constant volume.
pub fn flat_series() -> PriceSeries {
    series_from_closes(&[100.0; 60], 1000.0)
}

/// 60 bars climbing one point a day from 100.
pub fn rising_series() -> PriceSeries {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    series_from_closes(&closes, 1000.0)
}

/// Quiet base followed by a five-day breakout on heavy volume.
///
/// 20 bars at 89 (high 89.5, volume 1000), then closes 92, 95, 97, 99, 100.2
/// on volume 5000. Volume ratio 2.5, 5-day change +12.6%, MA5 above MA20.
pub fn breakout_series() -> PriceSeries {
    let mut bars: Vec<PriceBar> = (0..20)
        .map(|i| PriceBar::new(start_date() + Duration::days(i), 89.0, 89.5, 88.5, 89.0, 1000.0))
        .collect();
    for (offset, close) in [92.0, 95.0, 97.0, 99.0, 100.2].into_iter().enumerate() {
        let date = start_date() + Duration::days(20 + offset as i64);
        bars.push(PriceBar::new(date, close, close, close, close, 5000.0));
    }
    PriceSeries::new(bars).unwrap()
}

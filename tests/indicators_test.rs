//! Integration tests for the indicator engine

mod common;

use common::{breakout_series, flat_series, rising_series, series_from_closes};
use trendscout::services::indicators::{NeutralRsi, RollingRsi, MIN_HISTORY};
use trendscout::{Config, IndicatorEngine, PriceSeries, RsiMode, RsiSource};

#[test]
fn test_flat_series_indicators() {
    let engine = IndicatorEngine::default();
    let enriched = engine.compute(&flat_series());

    let (bar, latest) = enriched.latest().unwrap();
    assert_eq!(bar.close, 100.0);
    assert_eq!(latest.ma5, Some(100.0));
    assert_eq!(latest.ma20, Some(100.0));
    assert_eq!(latest.ma60, Some(100.0));
    assert_eq!(latest.rsi14, Some(50.0));
    assert_eq!(latest.vol_ma20, Some(1000.0));
    assert_eq!(enriched.rsi_source(), RsiSource::Rolling);
}

#[test]
fn test_short_history_is_not_enriched() {
    let engine = IndicatorEngine::default();
    let series = series_from_closes(&[10.0; MIN_HISTORY - 1], 1.0);
    let enriched = engine.compute(&series);

    assert!(!enriched.is_enriched());
    assert!(enriched.indicators().is_none());
    assert_eq!(enriched.series(), &series);
}

#[test]
fn test_empty_series() {
    let engine = IndicatorEngine::default();
    let enriched = engine.compute(&PriceSeries::default());
    assert!(enriched.is_empty());
    assert!(!enriched.is_enriched());
}

#[test]
fn test_ma60_undefined_below_60_bars() {
    let engine = IndicatorEngine::default();
    let enriched = engine.compute(&breakout_series());

    let (_, latest) = enriched.latest().unwrap();
    assert!(latest.ma60.is_none());
    assert!(latest.ma20.is_some());
    assert!(latest.rsi14.is_some());
}

#[test]
fn test_breakout_volume_average() {
    let engine = IndicatorEngine::default();
    let enriched = engine.compute(&breakout_series());

    let (_, latest) = enriched.latest().unwrap();
    assert_eq!(latest.vol_ma20, Some(2000.0));
    assert!((latest.ma5.unwrap() - 96.64).abs() < 1e-9);
    assert!((latest.ma20.unwrap() - 90.91).abs() < 1e-9);
}

#[test]
fn test_reenriching_keeps_values() {
    let engine = IndicatorEngine::default();
    let once = engine.compute(&rising_series());
    let twice = engine.compute(once.series());

    assert_eq!(once, twice);
}

#[test]
fn test_neutral_fallback_is_distinguishable() {
    // A genuinely neutral market and the fallback give the same numbers...
    let rolling = IndicatorEngine::new(Box::new(RollingRsi::default())).compute(&flat_series());
    let fallback = IndicatorEngine::new(Box::new(NeutralRsi)).compute(&rising_series());

    assert_eq!(rolling.latest().unwrap().1.rsi14, Some(50.0));
    assert_eq!(fallback.latest().unwrap().1.rsi14, Some(50.0));

    // ...but record different sources.
    assert_eq!(rolling.rsi_source(), RsiSource::Rolling);
    assert_eq!(fallback.rsi_source(), RsiSource::NeutralFallback);
}

#[test]
fn test_fallback_covers_every_bar() {
    let engine = IndicatorEngine::new(Box::new(NeutralRsi));
    let enriched = engine.compute(&rising_series());
    assert!(enriched
        .indicators()
        .unwrap()
        .iter()
        .all(|set| set.rsi14 == Some(50.0)));
}

#[test]
fn test_engine_from_config() {
    let config = Config {
        rsi_mode: RsiMode::Neutral,
        ..Config::default()
    };
    let engine = IndicatorEngine::from_config(&config);
    assert_eq!(engine.rsi_provider_id(), "rsi_neutral");

    let engine = IndicatorEngine::from_config(&Config::default());
    assert_eq!(engine.rsi_provider_id(), "rsi_rolling");
}

#[test]
fn test_rising_series_rsi_is_overbought() {
    let engine = IndicatorEngine::default();
    let enriched = engine.compute(&rising_series());
    let rsi = enriched.latest().unwrap().1.rsi14.unwrap();
    assert!(rsi > 99.0, "steady gains should pin RSI near 100, got {}", rsi);
}

//! Screens a universe of symbols with the trend and rising-star scorers.

use crate::config::Config;
use crate::error::Result;
use crate::services::indicators::IndicatorEngine;
use crate::services::scoring::{MomentumScorer, Scorer, TrendScorer};
use crate::services::ResultCache;
use crate::types::{
    sort_by_score_desc, Listing, Market, PriceSeries, Recommendation, TradeSignal, UniverseScope,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::stream::{self, StreamExt};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Market-data collaborator that supplies universes and daily bars.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Symbols to scan for a market and scope, at most `limit` of them.
    async fn universe(
        &self,
        market: Market,
        scope: UniverseScope,
        limit: usize,
    ) -> Result<Vec<Listing>>;

    /// Daily bars covering the last `days` calendar days.
    /// Returns None when the provider has no data for the symbol.
    async fn daily_bars(&self, symbol: &str, days: u32) -> Result<Option<PriceSeries>>;
}

/// Cache key for a scan report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScanKey {
    pub market: Market,
    pub scope: UniverseScope,
    pub fast: bool,
}

/// Trend and rising-star results of one scan, each sorted by score.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub market: Market,
    pub scope: UniverseScope,
    pub fast: bool,
    /// Every trend recommendation, whatever its signal.
    pub trend: Vec<Recommendation>,
    /// Rising-star recommendations only.
    pub rising: Vec<Recommendation>,
    pub generated_at: DateTime<Utc>,
}

impl ScanReport {
    /// Trend recommendations carrying `signal`, in score order.
    pub fn by_signal(&self, signal: TradeSignal) -> Vec<&Recommendation> {
        self.trend.iter().filter(|r| r.signal() == signal).collect()
    }
}

/// Fans scoring out over a universe and memoises scan reports.
pub struct Screener {
    provider: Arc<dyn MarketDataProvider>,
    engine: IndicatorEngine,
    trend: TrendScorer,
    momentum: MomentumScorer,
    cache: ResultCache<ScanKey, ScanReport>,
    config: Config,
}

impl Screener {
    /// Create a screener with the indicator engine selected by `config`.
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: Config) -> Self {
        let engine = IndicatorEngine::from_config(&config);
        Self::with_engine(provider, engine, config)
    }

    pub fn with_engine(
        provider: Arc<dyn MarketDataProvider>,
        engine: IndicatorEngine,
        config: Config,
    ) -> Self {
        Self {
            provider,
            engine,
            trend: TrendScorer::new(),
            momentum: MomentumScorer::new(),
            cache: ResultCache::new(config.scan_cache_ttl),
            config,
        }
    }

    /// Trend recommendations for every symbol with enough history.
    pub async fn run_trend(&self, market: Market, scope: UniverseScope) -> Vec<Recommendation> {
        let limit = self.universe_limit(scope);
        let listings = self.load_universe(market, scope, limit).await;
        let results = self.evaluate_universe(listings, &self.trend).await;
        info!(
            "Trend scan {}/{:?}: {} recommendations",
            market.code(),
            scope,
            results.len()
        );
        results
    }

    /// Rising-star recommendations from at most `limit` symbols.
    ///
    /// Results whose signal is not `RisingStar` are dropped.
    pub async fn run_rising_star(&self, market: Market, limit: usize) -> Vec<Recommendation> {
        let listings = self
            .load_universe(market, UniverseScope::RisingStar, limit)
            .await;
        let mut results = self.evaluate_universe(listings, &self.momentum).await;
        results.retain(|r| r.signal() == TradeSignal::RisingStar);
        info!(
            "Rising-star scan {}: {} rising stars",
            market.code(),
            results.len()
        );
        results
    }

    /// Full scan, reusing a report computed within the cache window.
    ///
    /// Fast mode screens fewer symbols for rising stars.
    pub async fn scan(&self, market: Market, scope: UniverseScope, fast: bool) -> ScanReport {
        let key = ScanKey {
            market,
            scope,
            fast,
        };
        if let Some((report, true)) = self.cache.get(&key) {
            debug!("Reusing cached scan for {:?}", key);
            return report;
        }

        let rising_limit = if fast {
            self.config.limits.fast_rising_star
        } else {
            self.config.limits.rising_star
        };
        let trend = self.run_trend(market, scope).await;
        let rising = self.run_rising_star(market, rising_limit).await;

        let generated_at = Utc::now();
        let report = ScanReport {
            market,
            scope,
            fast,
            trend,
            rising,
            generated_at,
        };
        self.cache.put(key, report.clone(), generated_at);
        report
    }

    fn universe_limit(&self, scope: UniverseScope) -> usize {
        match scope {
            UniverseScope::Watchlist => usize::MAX,
            UniverseScope::Market => self.config.limits.market_scan,
            UniverseScope::RisingStar => self.config.limits.rising_star,
        }
    }

    /// Fetch the universe, dropping repeated symbols and anything past `limit`.
    async fn load_universe(
        &self,
        market: Market,
        scope: UniverseScope,
        limit: usize,
    ) -> Vec<Listing> {
        let listings = match self.provider.universe(market, scope, limit).await {
            Ok(listings) => listings,
            Err(e) => {
                warn!(
                    "Universe lookup failed for {}/{:?}: {}",
                    market.code(),
                    scope,
                    e
                );
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        let mut unique: Vec<Listing> = listings
            .into_iter()
            .filter(|l| seen.insert(l.symbol.clone()))
            .collect();
        unique.truncate(limit);
        unique
    }

    /// Score every listing, keeping universe order for equal scores.
    async fn evaluate_universe(
        &self,
        listings: Vec<Listing>,
        scorer: &dyn Scorer,
    ) -> Vec<Recommendation> {
        let mut results: Vec<Recommendation> = stream::iter(listings)
            .map(|listing| async move {
                let series = self.fetch(&listing.symbol).await?;
                let enriched = self.engine.compute(&series);
                scorer.evaluate(&enriched, &listing.symbol, &listing.name)
            })
            .buffered(self.config.max_concurrent_fetches.max(1))
            .filter_map(|rec| async move { rec })
            .collect()
            .await;

        sort_by_score_desc(&mut results);
        results
    }

    /// Bars for one symbol; any failure is treated as no data.
    async fn fetch(&self, symbol: &str) -> Option<PriceSeries> {
        let request = self.provider.daily_bars(symbol, self.config.history_days);
        match tokio::time::timeout(self.config.fetch_timeout, request).await {
            Ok(Ok(Some(series))) => Some(series),
            Ok(Ok(None)) => {
                debug!("No data for {}", symbol);
                None
            }
            Ok(Err(e)) => {
                warn!("Failed to fetch bars for {}: {}", symbol, e);
                None
            }
            Err(_) => {
                warn!(
                    "Fetching bars for {} timed out after {:?}",
                    symbol, self.config.fetch_timeout
                );
                None
            }
        }
    }
}

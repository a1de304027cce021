use crate::error::{Result, ScreenerError};
use std::env;
use std::time::Duration;

/// Which RSI provider the indicator engine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RsiMode {
    /// Simple rolling-mean RSI.
    #[default]
    Rolling,
    /// Fixed neutral value of 50 for every bar.
    Neutral,
}

impl RsiMode {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rolling" | "simple" => Some(Self::Rolling),
            "neutral" | "none" | "off" => Some(Self::Neutral),
            _ => None,
        }
    }
}

/// Universe caps for a scan.
#[derive(Debug, Clone)]
pub struct UniverseLimits {
    /// Symbols taken from a broad market listing.
    pub market_scan: usize,
    /// Symbols screened for rising stars in a full scan.
    pub rising_star: usize,
    /// Symbols screened for rising stars in a fast scan.
    pub fast_rising_star: usize,
}

impl Default for UniverseLimits {
    fn default() -> Self {
        Self {
            market_scan: 25,
            rising_star: 80,
            fast_rising_star: 8,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// RSI provider selection.
    pub rsi_mode: RsiMode,
    /// How long a cached scan report stays fresh.
    pub scan_cache_ttl: Duration,
    /// Calendar days of history requested per symbol.
    pub history_days: u32,
    /// Universe caps.
    pub limits: UniverseLimits,
    /// Concurrent market-data fetches during a scan.
    pub max_concurrent_fetches: usize,
    /// Deadline for a single symbol's fetch.
    pub fetch_timeout: Duration,
    /// Default tracing filter when RUST_LOG is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rsi_mode: RsiMode::default(),
            scan_cache_ttl: Duration::from_secs(300),
            history_days: 120,
            limits: UniverseLimits::default(),
            max_concurrent_fetches: 8,
            fetch_timeout: Duration::from_secs(20),
            log_filter: "trendscout=info".to_string(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read configuration from the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Unparseable numbers fall back to their defaults; an unknown RSI
    /// provider is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let secs = |key: &str| lookup(key).and_then(|v| v.trim().parse::<u64>().ok());
        let count = |key: &str| lookup(key).and_then(|v| v.trim().parse::<usize>().ok());

        let rsi_mode = match lookup("RSI_PROVIDER") {
            Some(value) => RsiMode::from_str(&value).ok_or_else(|| {
                ScreenerError::Config(format!("unknown RSI_PROVIDER '{}'", value))
            })?,
            None => defaults.rsi_mode,
        };

        Ok(Self {
            rsi_mode,
            scan_cache_ttl: secs("SCAN_CACHE_TTL_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.scan_cache_ttl),
            history_days: lookup("HISTORY_DAYS")
                .and_then(|v| v.trim().parse::<u32>().ok())
                .unwrap_or(defaults.history_days),
            limits: UniverseLimits {
                market_scan: count("MARKET_SCAN_LIMIT").unwrap_or(defaults.limits.market_scan),
                rising_star: count("RISING_STAR_LIMIT").unwrap_or(defaults.limits.rising_star),
                fast_rising_star: count("FAST_RISING_STAR_LIMIT")
                    .unwrap_or(defaults.limits.fast_rising_star),
            },
            max_concurrent_fetches: count("MAX_CONCURRENT_FETCHES")
                .map(|v| v.max(1))
                .unwrap_or(defaults.max_concurrent_fetches),
            fetch_timeout: secs("FETCH_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
            log_filter: lookup("LOG_FILTER").unwrap_or(defaults.log_filter),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_default_values() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.rsi_mode, RsiMode::Rolling);
        assert_eq!(config.scan_cache_ttl, Duration::from_secs(300));
        assert_eq!(config.history_days, 120);
        assert_eq!(config.limits.market_scan, 25);
        assert_eq!(config.limits.rising_star, 80);
        assert_eq!(config.limits.fast_rising_star, 8);
        assert_eq!(config.max_concurrent_fetches, 8);
        assert_eq!(config.fetch_timeout, Duration::from_secs(20));
        assert_eq!(config.log_filter, "trendscout=info");
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("RSI_PROVIDER", "neutral"),
            ("SCAN_CACHE_TTL_SECS", "60"),
            ("HISTORY_DAYS", "200"),
            ("MARKET_SCAN_LIMIT", "50"),
            ("MAX_CONCURRENT_FETCHES", "0"),
            ("LOG_FILTER", "trendscout=debug"),
        ]))
        .unwrap();

        assert_eq!(config.rsi_mode, RsiMode::Neutral);
        assert_eq!(config.scan_cache_ttl, Duration::from_secs(60));
        assert_eq!(config.history_days, 200);
        assert_eq!(config.limits.market_scan, 50);
        assert_eq!(config.max_concurrent_fetches, 1);
        assert_eq!(config.log_filter, "trendscout=debug");
    }

    #[test]
    fn test_config_invalid_number_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("HISTORY_DAYS", "lots")])).unwrap();
        assert_eq!(config.history_days, 120);

        // out of range for the target type, not truncated
        let config = Config::from_lookup(lookup_from(&[
            ("HISTORY_DAYS", "4294967297"),
            ("MARKET_SCAN_LIMIT", "-3"),
            ("MAX_CONCURRENT_FETCHES", "99999999999999999999999"),
            ("SCAN_CACHE_TTL_SECS", "99999999999999999999999"),
        ]))
        .unwrap();
        assert_eq!(config.history_days, 120);
        assert_eq!(config.limits.market_scan, 25);
        assert_eq!(config.max_concurrent_fetches, 8);
        assert_eq!(config.scan_cache_ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_config_unknown_rsi_provider() {
        let result = Config::from_lookup(lookup_from(&[("RSI_PROVIDER", "wilder")]));
        assert!(matches!(result, Err(ScreenerError::Config(_))));
    }

    #[test]
    fn test_rsi_mode_from_str() {
        assert_eq!(RsiMode::from_str("Rolling"), Some(RsiMode::Rolling));
        assert_eq!(RsiMode::from_str(" neutral "), Some(RsiMode::Neutral));
        assert_eq!(RsiMode::from_str("ema"), None);
    }
}

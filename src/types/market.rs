use serde::{Deserialize, Serialize};

/// Market a universe of symbols is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Market {
    /// Korean exchanges (KOSPI, KOSDAQ).
    #[default]
    Kr,
    /// US exchanges.
    Us,
}

impl Market {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "kr" | "krx" | "korea" => Some(Self::Kr),
            "us" | "usa" => Some(Self::Us),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Kr => "kr",
            Self::Us => "us",
        }
    }
}

/// Which symbols of a market to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UniverseScope {
    /// Curated list of actively traded symbols.
    #[default]
    Watchlist,
    /// Broad market listing, capped by configuration.
    Market,
    /// Small and mid caps screened for rising stars.
    RisingStar,
}

impl UniverseScope {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "watchlist" | "watch" => Some(Self::Watchlist),
            "market" | "all" => Some(Self::Market),
            "rising_star" | "rising" => Some(Self::RisingStar),
            _ => None,
        }
    }
}

/// A symbol in a universe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Listing {
    pub symbol: String,
    pub name: String,
}

impl Listing {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

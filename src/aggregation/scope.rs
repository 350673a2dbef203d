use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse reporting window.
///
/// Records carry no timestamps, so a scope rescales cumulative totals by a
/// fixed multiplier instead of filtering. Variants are ordered from the
/// narrowest window to the widest.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TimeScope {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl TimeScope {
    /// Every scope, narrowest first.
    pub const WIDENING: [TimeScope; 4] = [
        TimeScope::Today,
        TimeScope::Week,
        TimeScope::Month,
        TimeScope::All,
    ];

    /// Fraction of the all-time total attributed to this window.
    pub fn multiplier(self) -> f64 {
        match self {
            TimeScope::Today => 0.05,
            TimeScope::Week => 0.25,
            TimeScope::Month => 0.8,
            TimeScope::All => 1.0,
        }
    }

    /// Price drift applied to the regional spice price comparison.
    pub fn price_fluctuation(self) -> f64 {
        match self {
            TimeScope::Today => 0.95,
            TimeScope::Week => 1.02,
            TimeScope::Month | TimeScope::All => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeScope::Today => "today",
            TimeScope::Week => "week",
            TimeScope::Month => "month",
            TimeScope::All => "all",
        }
    }

    /// Human readable window name for report headers.
    pub fn label(self) -> &'static str {
        match self {
            TimeScope::Today => "Hari Ini",
            TimeScope::Week => "1 Minggu",
            TimeScope::Month => "1 Bulan",
            TimeScope::All => "Semua Data",
        }
    }
}

impl fmt::Display for TimeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(TimeScope::Today),
            "week" => Ok(TimeScope::Week),
            "month" => Ok(TimeScope::Month),
            "all" => Ok(TimeScope::All),
            other => Err(format!("unknown time scope: {other}")),
        }
    }
}

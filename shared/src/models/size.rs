//! Size Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumerated kebab sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeKey {
    Small,
    Medium,
    Large,
    Family,
}

impl SizeKey {
    pub const ALL: [SizeKey; 4] = [Self::Small, Self::Medium, Self::Large, Self::Family];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Family => "family",
        }
    }

    /// Capitalized label ("Medium")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Family => "Family",
        }
    }
}

impl fmt::Display for SizeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid size: {0}")]
pub struct ParseSizeError(pub String);

impl FromStr for SizeKey {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "family" => Ok(Self::Family),
            _ => Err(ParseSizeError(s.to_string())),
        }
    }
}

/// Base size specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeSpec {
    pub key: SizeKey,
    /// Base price in dollars
    pub price: f64,
    /// Length in cm
    pub length: f64,
    /// Diameter in cm
    pub diameter: f64,
    /// Nominal weight in grams
    pub weight: f64,
    /// Serves descriptor ("1-2")
    pub serves: String,
    pub description: String,
}

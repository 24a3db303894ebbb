//! Route restriction options

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Road kinds the route search should avoid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvoidOption {
    /// Ferry routes
    Ferries,
    /// Toll roads
    Toll,
    /// Motor-vehicle-only roads
    Motorway,
    /// School zones
    Schoolzone,
    /// U-turns
    Uturn,
}

impl AvoidOption {
    /// Separator the provider expects between tokens in a query string
    pub const QUERY_SEPARATOR: char = '|';

    /// Wire token sent to the provider
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ferries => "ferries",
            Self::Toll => "toll",
            Self::Motorway => "motorway",
            Self::Schoolzone => "schoolzone",
            Self::Uturn => "uturn",
        }
    }

    /// Join a list of options into a single query value, e.g. `toll|uturn`
    #[must_use]
    pub fn join(options: &[Self]) -> String {
        options
            .iter()
            .map(Self::as_str)
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl fmt::Display for AvoidOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AvoidOption {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ferries" => Ok(Self::Ferries),
            "toll" => Ok(Self::Toll),
            "motorway" => Ok(Self::Motorway),
            "schoolzone" => Ok(Self::Schoolzone),
            "uturn" => Ok(Self::Uturn),
            _ => Err(DomainError::unknown_token("avoid", s)),
        }
    }
}

//! Route search priority value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// What the route search optimizes for
///
/// Serialized as the provider's uppercase token (`RECOMMEND`, `TIME`, `DISTANCE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoutePriority {
    /// Provider-recommended route
    #[default]
    Recommend,
    /// Fastest route
    Time,
    /// Shortest route
    Distance,
}

impl RoutePriority {
    /// Wire token sent to the provider
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recommend => "RECOMMEND",
            Self::Time => "TIME",
            Self::Distance => "DISTANCE",
        }
    }

    /// Whether the multi-origin endpoint accepts this priority
    ///
    /// That endpoint rejects `Recommend`.
    #[must_use]
    pub const fn allowed_for_origins(&self) -> bool {
        !matches!(self, Self::Recommend)
    }

    /// All priorities
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Recommend, Self::Time, Self::Distance]
    }
}

impl fmt::Display for RoutePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoutePriority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RECOMMEND" => Ok(Self::Recommend),
            "TIME" => Ok(Self::Time),
            "DISTANCE" => Ok(Self::Distance),
            _ => Err(DomainError::unknown_token("priority", s)),
        }
    }
}

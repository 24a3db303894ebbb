//! Road closure policy

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Whether full road closures reported by the provider are honored
///
/// Serialized as its integer code (`0`, `1`, `2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum RoadEventOption {
    /// Honor all closures
    #[default]
    ApplyAll,
    /// Ignore closures near the origin and destination
    SkipNearEndpoints,
    /// Ignore all closures
    SkipAll,
}

impl RoadEventOption {
    /// Integer code sent to the provider
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::ApplyAll => 0,
            Self::SkipNearEndpoints => 1,
            Self::SkipAll => 2,
        }
    }
}

impl fmt::Display for RoadEventOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u8> for RoadEventOption {
    type Error = DomainError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::ApplyAll),
            1 => Ok(Self::SkipNearEndpoints),
            2 => Ok(Self::SkipAll),
            _ => Err(DomainError::unknown_code("road event", code)),
        }
    }
}

impl From<RoadEventOption> for u8 {
    fn from(option: RoadEventOption) -> Self {
        option.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(RoadEventOption::ApplyAll.code(), 0);
        assert_eq!(RoadEventOption::SkipNearEndpoints.code(), 1);
        assert_eq!(RoadEventOption::SkipAll.code(), 2);
    }

    #[test]
    fn test_try_from_rejects_unknown() {
        assert_eq!(RoadEventOption::try_from(1).unwrap(), RoadEventOption::SkipNearEndpoints);
        assert!(RoadEventOption::try_from(3).is_err());
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&RoadEventOption::SkipAll).unwrap(), "2");
        let parsed: RoadEventOption = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, RoadEventOption::ApplyAll);
        assert!(serde_json::from_str::<RoadEventOption>("7").is_err());
    }
}

//! Vehicle options: car type and fuel

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Vehicle class, used by the provider for tolls and road restrictions
///
/// Serialized as its integer code (`1`..=`7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum CarType {
    /// Small passenger car
    #[default]
    Small,
    /// Medium vehicle
    Medium,
    /// Large vehicle
    Large,
    /// Large cargo truck
    LargeCargo,
    /// Special cargo vehicle
    SpecialCargo,
    /// Compact car
    Compact,
    /// Two-wheeled vehicle
    TwoWheel,
}

impl CarType {
    /// Integer code sent to the provider
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
            Self::LargeCargo => 4,
            Self::SpecialCargo => 5,
            Self::Compact => 6,
            Self::TwoWheel => 7,
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u8> for CarType {
    type Error = DomainError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Small),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Large),
            4 => Ok(Self::LargeCargo),
            5 => Ok(Self::SpecialCargo),
            6 => Ok(Self::Compact),
            7 => Ok(Self::TwoWheel),
            _ => Err(DomainError::unknown_code("car type", code)),
        }
    }
}

impl From<CarType> for u8 {
    fn from(car_type: CarType) -> Self {
        car_type.code()
    }
}

/// Vehicle fuel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CarFuel {
    /// Gasoline
    #[default]
    Gasoline,
    /// Diesel
    Diesel,
    /// Liquefied petroleum gas
    Lpg,
}

impl CarFuel {
    /// Wire token sent to the provider
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Gasoline => "GASOLINE",
            Self::Diesel => "DIESEL",
            Self::Lpg => "LPG",
        }
    }
}

impl fmt::Display for CarFuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarFuel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GASOLINE" => Ok(Self::Gasoline),
            "DIESEL" => Ok(Self::Diesel),
            "LPG" => Ok(Self::Lpg),
            _ => Err(DomainError::unknown_token("car fuel", s)),
        }
    }
}

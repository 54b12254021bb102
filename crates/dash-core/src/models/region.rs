use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Geographic tag attached to a user, used only for aggregate reporting.
///
/// Serialized as its two-letter code; `Unset` travels as the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    NorthAmerica,
    SouthAmerica,
    Europe,
    Asia,
    Africa,
    Oceania,
    #[default]
    Unset,
}

impl Region {
    /// Every assignable region, in reporting order.
    pub const ALL: [Region; 6] = [
        Region::NorthAmerica,
        Region::SouthAmerica,
        Region::Europe,
        Region::Asia,
        Region::Africa,
        Region::Oceania,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::NorthAmerica => "NA",
            Self::SouthAmerica => "SA",
            Self::Europe => "EU",
            Self::Asia => "AS",
            Self::Africa => "AF",
            Self::Oceania => "OC",
            Self::Unset => "",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Europe => "Europe",
            Self::Asia => "Asia",
            Self::Africa => "Africa",
            Self::Oceania => "Oceania",
            Self::Unset => "Unset",
        }
    }

    /// Chart colour for the region, `None` when unset.
    pub fn color(&self) -> Option<&'static str> {
        match self {
            Self::NorthAmerica => Some("#FF6384"),
            Self::SouthAmerica => Some("#36A2EB"),
            Self::Europe => Some("#FFCE56"),
            Self::Asia => Some("#4BC0C0"),
            Self::Africa => Some("#9966FF"),
            Self::Oceania => Some("#FF9F40"),
            Self::Unset => None,
        }
    }

    pub fn is_set(&self) -> bool {
        *self != Self::Unset
    }
}

impl FromStr for Region {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_uppercase().as_str() {
            "NA" => Ok(Self::NorthAmerica),
            "SA" => Ok(Self::SouthAmerica),
            "EU" => Ok(Self::Europe),
            "AS" => Ok(Self::Asia),
            "AF" => Ok(Self::Africa),
            "OC" => Ok(Self::Oceania),
            "" => Ok(Self::Unset),
            _ => Err(CoreError::InvalidRegion {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Region {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Unknown codes degrade to Unset so one odd record never makes the
        // whole user list unreadable.
        let s = Option::<String>::deserialize(deserializer)?.unwrap_or_default();

        Ok(Region::from_str(&s).unwrap_or(Region::Unset))
    }
}

//! Directions mode value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Travel mode requested from a native maps launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DirectionsMode {
    /// Turn-by-turn driving directions
    #[default]
    Driving,
    /// Walking directions
    Walking,
    /// Public transit directions
    Transit,
}

impl DirectionsMode {
    /// Get the lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Transit => "transit",
        }
    }
}

impl fmt::Display for DirectionsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DirectionsMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            "transit" => Ok(Self::Transit),
            _ => Err(DomainError::UnknownDirectionsMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_driving() {
        assert_eq!(DirectionsMode::default(), DirectionsMode::Driving);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "Walking".parse::<DirectionsMode>().expect("valid"),
            DirectionsMode::Walking
        );
        assert!("flying".parse::<DirectionsMode>().is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&DirectionsMode::Transit).expect("serialize");
        assert_eq!(json, "\"transit\"");
    }
}

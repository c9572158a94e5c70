//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates could not be parsed or are out of range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Unknown map application identifier
    #[error("Unknown map app: {0}")]
    UnknownMapApp(String),

    /// Unknown directions mode
    #[error("Unknown directions mode: {0}")]
    UnknownDirectionsMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_error_message() {
        let err = DomainError::InvalidCoordinates("91,0".to_string());
        assert_eq!(err.to_string(), "Invalid coordinates: 91,0");
    }

    #[test]
    fn unknown_map_app_error_message() {
        let err = DomainError::UnknownMapApp("mapquest".to_string());
        assert_eq!(err.to_string(), "Unknown map app: mapquest");
    }

    #[test]
    fn unknown_directions_mode_error_message() {
        let err = DomainError::UnknownDirectionsMode("flying".to_string());
        assert_eq!(err.to_string(), "Unknown directions mode: flying");
    }
}

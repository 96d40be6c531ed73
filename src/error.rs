//! Error types and handling
//!
//! This module contains the error types shared across the campus simulation.
//! Conditions the buildings can hit during normal use (full rosters, missing
//! elevators, exhausted inventory) are recoverable results, not aborts.

use crate::types::{ConfigValidationError, StudentId};
use thiserror::Error;

/// Errors that can occur during campus operations
#[derive(Debug, Error)]
pub enum CampusError {
    /// A floor outside the valid range was requested
    #[error("Floor {requested} is out of range; valid floors are 1 through {floors}")]
    OutOfRange {
        /// The floor that was requested
        requested: u32,
        /// The number of floors the building has
        floors: u32,
    },

    /// A multi-floor move was requested in a house without an elevator
    #[error("{house} has no elevator; floors must be traversed one at a time")]
    NoElevator {
        /// Name of the house
        house: String,
    },

    /// A student attempted to move into a house they already live in
    #[error("Student {student} is already a resident of this house")]
    AlreadyResident {
        /// The duplicate student's id
        student: StudentId,
    },

    /// A student attempted to move out of a house they do not live in
    #[error("Student {student} is not a resident of this house")]
    NotResident {
        /// The absent student's id
        student: StudentId,
    },

    /// A cafe sale could not be satisfied within the restock round cap
    #[error("Sale abandoned after {rounds} restock rounds; requested amounts exceed what restocking can supply")]
    RestockLimitReached {
        /// Restock rounds attempted before giving up
        rounds: u32,
    },

    /// Configuration was invalid or could not be loaded
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// I/O error during activity-log export or config loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigValidationError> for CampusError {
    fn from(e: ConfigValidationError) -> Self {
        CampusError::ConfigurationError(e.to_string())
    }
}

impl From<String> for CampusError {
    fn from(s: String) -> Self {
        CampusError::ConfigurationError(s)
    }
}

impl From<&str> for CampusError {
    fn from(s: &str) -> Self {
        CampusError::ConfigurationError(s.to_string())
    }
}

impl From<anyhow::Error> for CampusError {
    fn from(error: anyhow::Error) -> Self {
        CampusError::ConfigurationError(error.to_string())
    }
}

impl CampusError {
    /// Check if this is a recoverable error
    ///
    /// Every domain condition is recoverable; callers can pick a different
    /// floor, house, title, or order. Only a broken configuration stops a run.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CampusError::OutOfRange { .. } => true,
            CampusError::NoElevator { .. } => true,
            CampusError::AlreadyResident { .. } => true,
            CampusError::NotResident { .. } => true,
            CampusError::RestockLimitReached { .. } => true,
            CampusError::ConfigurationError(_) => false,
            CampusError::IoError(_) => true,
            CampusError::SerializationError(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            CampusError::OutOfRange { .. } => "Navigation",
            CampusError::NoElevator { .. } => "Navigation",
            CampusError::AlreadyResident { .. } => "Roster",
            CampusError::NotResident { .. } => "Roster",
            CampusError::RestockLimitReached { .. } => "Inventory",
            CampusError::ConfigurationError(_) => "Configuration",
            CampusError::IoError(_) => "IO",
            CampusError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for campus operations
pub type CampusResult<T> = Result<T, CampusError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_messages() {
        let err = CampusError::OutOfRange { requested: 9, floors: 4 };
        assert_eq!(err.to_string(), "Floor 9 is out of range; valid floors are 1 through 4");

        let err = CampusError::NoElevator { house: "Morrow House".to_string() };
        assert!(err.to_string().contains("Morrow House"));

        let err = CampusError::AlreadyResident { student: StudentId::new("S1234") };
        assert!(err.to_string().contains("S1234"));

        let err = CampusError::NotResident { student: StudentId::new("S9999") };
        assert!(err.to_string().contains("S9999"));

        let err = CampusError::RestockLimitReached { rounds: 10 };
        assert!(err.to_string().contains("10 restock rounds"));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(CampusError::OutOfRange { requested: 2, floors: 1 }.category(), "Navigation");
        assert_eq!(
            CampusError::NoElevator { house: "x".to_string() }.category(),
            "Navigation"
        );
        assert_eq!(
            CampusError::AlreadyResident { student: StudentId::new("S1") }.category(),
            "Roster"
        );
        assert_eq!(CampusError::RestockLimitReached { rounds: 3 }.category(), "Inventory");
        assert_eq!(
            CampusError::ConfigurationError("bad".to_string()).category(),
            "Configuration"
        );
    }

    #[test]
    fn test_error_recoverability() {
        assert!(CampusError::OutOfRange { requested: 2, floors: 1 }.is_recoverable());
        assert!(CampusError::NotResident { student: StudentId::new("S1") }.is_recoverable());
        assert!(CampusError::RestockLimitReached { rounds: 3 }.is_recoverable());
        assert!(!CampusError::ConfigurationError("bad".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: CampusError = io_error.into();
        assert!(matches!(err, CampusError::IoError(_)));
        assert_eq!(err.category(), "IO");
    }

    #[test]
    fn test_error_from_string() {
        let err: CampusError = "bad flag".to_string().into();
        assert!(matches!(err, CampusError::ConfigurationError(_)));
    }
}

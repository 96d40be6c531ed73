//! Core types and identifiers for the campus simulation
//!
//! This module contains fundamental types, identifiers, and configuration
//! structures used throughout the simulation.
//!
//! # Overview
//!
//! - **Identifiers**: UUID-based identifiers for buildings and events, plus
//!   the value-string student identifier
//! - **Enums**: Type-safe enumerations for building kinds, activity kinds,
//!   and output formats
//! - **Configuration**: Campus configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use campus_sim::types::*;
//!
//! let building_id = BuildingId::new();
//! let student_id = StudentId::new("S1234");
//!
//! let kind = BuildingKind::Library;
//!
//! let config = CampusConfig {
//!     house_count: 4,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;

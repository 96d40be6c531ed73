//! Campus Simulation
//!
//! A small campus simulation: buildings, houses, libraries, and cafes
//! aggregated by a campus-map registry, with a seedable generator and an
//! exportable activity log.
//!
//! # Overview
//!
//! Every building kind embeds the shared [`campus::Building`] record by
//! composition and adds its own domain state: houses track a resident
//! roster, libraries a title catalog, cafes a beverage inventory. The
//! [`campus::CampusMap`] holds them all behind the
//! [`campus::CampusBuilding`] tagged union and renders a numbered directory.
//!
//! Conditions the buildings can hit in normal use (a floor out of range, a
//! duplicate resident, a sold-out cafe) are explicit [`CampusResult`]
//! values, never panics, so callers branch instead of unwinding.
//!
//! # Quick Start
//!
//! ```rust
//! use campus_sim::campus::{Cafe, CampusMap, CoffeeOrder, House};
//! use campus_sim::student::Student;
//!
//! let mut map = CampusMap::new();
//!
//! let mut house = House::new("Ziskind House", "100 Elm St", 3, true, true);
//! house.move_in(Student::new("Tabz", "S1234", 20))?;
//! map.add_building(house);
//!
//! let mut cafe = Cafe::with_default_stock("Campus Cafe", "123 Campus Road", 1);
//! cafe.sell_coffee(CoffeeOrder::new(12, 2, 1))?;
//! map.add_building(cafe);
//!
//! println!("{}", map.directory());
//! # Ok::<(), campus_sim::CampusError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`types`]: Identifiers, enums, and configuration
//! - [`campus`]: Building kinds, the campus map, and the generator
//! - [`student`]: Student records referenced by house rosters
//! - [`activity`]: Activity-log recording and export
//! - [`error`]: The shared error type
//! - [`logging`]: Tracing subscriber setup for the demo binary
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod activity;
pub mod campus;
pub mod error;
pub mod logging;
pub mod student;
pub mod types;

// Core types and identifiers
pub use types::{
    ActivityKind,
    BuildingId,
    // Enums
    BuildingKind,
    // Configuration
    CampusConfig,
    ConfigValidationError,
    EventId,
    OutputFormat,
    // Identifiers
    StudentId,
};

// Campus buildings and the map
pub use campus::{
    Building, Cafe, CampusBuilding, CampusGenerator, CampusMap, CampusStats, CoffeeOrder, House,
    Inventory, Library, SaleReceipt,
};

// Students
pub use student::Student;

// Activity recording
pub use activity::{ActivityEvent, ActivityLog};

// Errors and logging
pub use error::{CampusError, CampusResult};
pub use logging::LoggingConfig;

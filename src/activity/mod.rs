//! Activity recording and export
//!
//! This module records what a simulation run did as timestamped events and
//! exports the resulting log as JSON Lines or CSV.
//!
//! # Usage Example
//!
//! ```rust
//! use campus_sim::activity::{ActivityEvent, ActivityLog};
//! use campus_sim::campus::Building;
//! use campus_sim::types::ActivityKind;
//!
//! let hall = Building::new("Ford Hall", "100 Green Street", 4);
//!
//! let mut log = ActivityLog::new();
//! log.record(ActivityEvent::success(&hall, ActivityKind::Enter, "entered Ford Hall"));
//! assert_eq!(log.len(), 1);
//! ```

pub mod event;
pub mod log;

pub use event::ActivityEvent;
pub use log::ActivityLog;

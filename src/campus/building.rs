//! Core building record and floor navigation
//!
//! This module contains the Building struct shared by every campus building
//! kind. Specialized buildings embed a Building by composition rather than
//! inheriting from it.

use crate::error::{CampusError, CampusResult};
use crate::types::{BuildingId, BuildingKind};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A building on the campus
///
/// Tracks name, address, floor count, and the floor a visitor is currently
/// on. The current floor is always within `[1, floors]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Building {
    /// Unique identifier for the building
    pub id: BuildingId,
    /// What kind of building this record belongs to
    pub kind: BuildingKind,
    /// Human-readable name of the building
    pub name: String,
    /// Street address of the building
    pub address: String,
    /// Number of floors, at least 1
    floors: u32,
    /// The floor a visitor is currently on
    current_floor: u32,
}

impl Building {
    /// Create a new generic building
    ///
    /// A floor count of 0 is bumped to 1; every building has a ground floor.
    pub fn new(name: impl Into<String>, address: impl Into<String>, floors: u32) -> Self {
        Self::with_kind(BuildingKind::Generic, name, address, floors)
    }

    /// Create a building record for a specific kind
    pub fn with_kind(
        kind: BuildingKind,
        name: impl Into<String>,
        address: impl Into<String>,
        floors: u32,
    ) -> Self {
        Self {
            id: BuildingId::new(),
            kind,
            name: name.into(),
            address: address.into(),
            floors: floors.max(1),
            current_floor: 1,
        }
    }

    /// Number of floors in the building
    pub fn floors(&self) -> u32 {
        self.floors
    }

    /// The floor a visitor is currently on
    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    /// Enter the building at the ground floor
    pub fn enter(&mut self) {
        self.current_floor = 1;
        info!(building = %self.name, "Entered {}", self.name);
    }

    /// Leave the building
    pub fn exit(&mut self) {
        info!(building = %self.name, "Left {}", self.name);
    }

    /// Move to a specific floor
    ///
    /// Fails with OutOfRange when the target is outside `[1, floors]`.
    pub fn go_to_floor(&mut self, floor: u32) -> CampusResult<()> {
        if floor < 1 || floor > self.floors {
            return Err(CampusError::OutOfRange { requested: floor, floors: self.floors });
        }
        self.current_floor = floor;
        info!(building = %self.name, floor, "Now on floor {} of {}", floor, self.name);
        Ok(())
    }

    /// Move up a single floor
    pub fn go_up(&mut self) -> CampusResult<()> {
        self.go_to_floor(self.current_floor + 1)
    }

    /// Move down a single floor
    pub fn go_down(&mut self) -> CampusResult<()> {
        if self.current_floor == 1 {
            return Err(CampusError::OutOfRange { requested: 0, floors: self.floors });
        }
        self.go_to_floor(self.current_floor - 1)
    }

    /// The capability list for a plain building
    pub fn options(&self) -> Vec<&'static str> {
        vec!["enter", "exit", "go_to_floor", "go_up", "go_down"]
    }

    /// Narrate the capability list
    pub fn show_options(&self) {
        info!(building = %self.name, "Available options at {}: {}", self.name, self.options().join(", "));
    }

    /// Directory entry in "name (address)" form
    pub fn directory_entry(&self) -> String {
        format!("{} ({})", self.name, self.address)
    }
}

//! Activity event records

use crate::campus::Building;
use crate::types::{ActivityKind, BuildingId, EventId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded campus activity
///
/// Events are append-only records of what a demonstration run did: who
/// entered where, which sales went through, which roster moves were refused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEvent {
    /// Unique identifier for the event
    pub id: EventId,
    /// When the activity happened
    pub timestamp: DateTime<Utc>,
    /// The building the activity happened at
    pub building_id: BuildingId,
    /// The building's name at recording time
    pub building_name: String,
    /// What kind of activity this was
    pub kind: ActivityKind,
    /// Human-readable detail line
    pub detail: String,
    /// Whether the operation succeeded
    pub success: bool,
}

impl ActivityEvent {
    /// Record an activity against a building
    pub fn new(
        building: &Building,
        kind: ActivityKind,
        detail: impl Into<String>,
        success: bool,
    ) -> Self {
        Self {
            id: EventId::new(),
            timestamp: Utc::now(),
            building_id: building.id,
            building_name: building.name.clone(),
            kind,
            detail: detail.into(),
            success,
        }
    }

    /// Record a successful activity
    pub fn success(building: &Building, kind: ActivityKind, detail: impl Into<String>) -> Self {
        Self::new(building, kind, detail, true)
    }

    /// Record a failed activity
    pub fn failure(building: &Building, kind: ActivityKind, detail: impl Into<String>) -> Self {
        Self::new(building, kind, detail, false)
    }

    /// The CSV header row matching `csv_row`
    pub fn csv_header() -> &'static str {
        "id,timestamp,building_id,building_name,kind,detail,success"
    }

    /// Render the event as a CSV row
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{:?},{},{:?},{}",
            self.id,
            self.timestamp.to_rfc3339(),
            self.building_id,
            self.building_name,
            self.kind,
            self.detail,
            self.success
        )
    }
}

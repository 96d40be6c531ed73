//! Unique identifier types for the campus simulation
//!
//! This module contains the UUID-based identifier types for buildings and
//! activity events, plus the value-string student identifier used by houses.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a building on the campus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildingId(pub Uuid);

impl BuildingId {
    /// Create a new random building ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BuildingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BLD_{}", self.0.simple())
    }
}

impl Serialize for BuildingId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("BLD_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for BuildingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Some(uuid_str) = s.strip_prefix("BLD_") {
            let uuid = Uuid::parse_str(uuid_str).map_err(serde::de::Error::custom)?;
            Ok(BuildingId(uuid))
        } else {
            // Fallback: accept a raw UUID as well
            let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
            Ok(BuildingId(uuid))
        }
    }
}

/// Unique identifier for a recorded activity event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(pub Uuid);

impl EventId {
    /// Create a new random event ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EVT_{}", self.0.simple())
    }
}

impl Serialize for EventId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("EVT_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for EventId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Some(uuid_str) = s.strip_prefix("EVT_") {
            let uuid = Uuid::parse_str(uuid_str).map_err(serde::de::Error::custom)?;
            Ok(EventId(uuid))
        } else {
            // Fallback: accept a raw UUID as well
            let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
            Ok(EventId(uuid))
        }
    }
}

/// Registrar-issued identifier for a student (e.g. "S1234")
///
/// Unlike the UUID identifiers, a student id is an opaque value string:
/// two student records with the same id refer to the same student.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl StudentId {
    /// Create a student ID from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StudentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StudentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_id_creation() {
        let id1 = BuildingId::new();
        let id2 = BuildingId::new();

        // IDs should be unique
        assert_ne!(id1, id2);

        // Default should create a new ID
        let id3 = BuildingId::default();
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_building_id_display() {
        let id = BuildingId::new();
        let display_str = format!("{}", id);

        // Should start with BLD_ prefix
        assert!(display_str.starts_with("BLD_"));

        // Should be 36 characters total (BLD_ + 32 hex chars)
        assert_eq!(display_str.len(), 36);
    }

    #[test]
    fn test_event_id_display() {
        let id = EventId::new();
        let display_str = format!("{}", id);

        assert!(display_str.starts_with("EVT_"));
        assert_eq!(display_str.len(), 36);
    }

    #[test]
    fn test_id_serialization() {
        let building_id = BuildingId::new();
        let event_id = EventId::new();

        let building_json = serde_json::to_string(&building_id).unwrap();
        assert!(building_json.contains("BLD_"));
        let deserialized_building: BuildingId = serde_json::from_str(&building_json).unwrap();
        assert_eq!(building_id, deserialized_building);

        let event_json = serde_json::to_string(&event_id).unwrap();
        assert!(event_json.contains("EVT_"));
        let deserialized_event: EventId = serde_json::from_str(&event_json).unwrap();
        assert_eq!(event_id, deserialized_event);
    }

    #[test]
    fn test_id_deserialization_raw_uuid_fallback() {
        let raw_uuid = Uuid::new_v4();
        let raw_uuid_str = format!("\"{}\"", raw_uuid);

        let building_id: BuildingId = serde_json::from_str(&raw_uuid_str).unwrap();
        assert_eq!(building_id.0, raw_uuid);

        let event_id: EventId = serde_json::from_str(&raw_uuid_str).unwrap();
        assert_eq!(event_id.0, raw_uuid);
    }

    #[test]
    fn test_student_id_value_equality() {
        let a = StudentId::new("S1234");
        let b = StudentId::from("S1234");
        let c = StudentId::new("S9999");

        // Same value means the same student
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str(), "S1234");
        assert_eq!(a.to_string(), "S1234");
    }

    #[test]
    fn test_id_hash_and_equality() {
        use std::collections::HashSet;

        let id1 = BuildingId::new();
        let id2 = BuildingId::new();
        let id1_copy = BuildingId(id1.0);

        assert_eq!(id1, id1_copy);
        assert_ne!(id1, id2);

        let mut set = HashSet::new();
        set.insert(id1);
        set.insert(id2);
        set.insert(id1_copy); // Should not increase size

        assert_eq!(set.len(), 2);
        assert!(set.contains(&id1));
        assert!(set.contains(&id2));
    }
}

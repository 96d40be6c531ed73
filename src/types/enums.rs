//! Enumeration types for the campus simulation
//!
//! This module contains the enumeration types used throughout the simulation,
//! including building kinds, activity kinds, and output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kinds of buildings that can appear on a campus map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    /// A plain building with no specialized state
    Generic,
    /// A residential house with a student roster
    House,
    /// A library with a title catalog
    Library,
    /// A cafe with a beverage inventory
    Cafe,
}

impl fmt::Display for BuildingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildingKind::Generic => write!(f, "Building"),
            BuildingKind::House => write!(f, "House"),
            BuildingKind::Library => write!(f, "Library"),
            BuildingKind::Cafe => write!(f, "Cafe"),
        }
    }
}

impl FromStr for BuildingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "building" | "generic" => Ok(BuildingKind::Generic),
            "house" => Ok(BuildingKind::House),
            "library" => Ok(BuildingKind::Library),
            "cafe" => Ok(BuildingKind::Cafe),
            _ => Err(format!("Unknown building kind: {}", s)),
        }
    }
}

/// Kinds of activities that can be recorded against a building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    /// Someone entered a building
    Enter,
    /// Someone left a building
    Exit,
    /// A floor change inside a building
    FloorChange,
    /// A student moved into a house
    MoveIn,
    /// A student moved out of a house
    MoveOut,
    /// A title was added to a library catalog
    AddTitle,
    /// A title was removed from a library catalog
    RemoveTitle,
    /// A title was checked out of a library
    CheckOut,
    /// A title was returned to a library
    ReturnBook,
    /// A cafe sold a coffee
    CoffeeSale,
    /// A cafe replenished inventory
    Restock,
    /// A building was added to the campus map
    BuildingAdded,
    /// A building was removed from the campus map
    BuildingRemoved,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Enter => write!(f, "Enter"),
            ActivityKind::Exit => write!(f, "Exit"),
            ActivityKind::FloorChange => write!(f, "Floor Change"),
            ActivityKind::MoveIn => write!(f, "Move In"),
            ActivityKind::MoveOut => write!(f, "Move Out"),
            ActivityKind::AddTitle => write!(f, "Add Title"),
            ActivityKind::RemoveTitle => write!(f, "Remove Title"),
            ActivityKind::CheckOut => write!(f, "Check Out"),
            ActivityKind::ReturnBook => write!(f, "Return Book"),
            ActivityKind::CoffeeSale => write!(f, "Coffee Sale"),
            ActivityKind::Restock => write!(f, "Restock"),
            ActivityKind::BuildingAdded => write!(f, "Building Added"),
            ActivityKind::BuildingRemoved => write!(f, "Building Removed"),
        }
    }
}

impl FromStr for ActivityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enter" => Ok(ActivityKind::Enter),
            "exit" => Ok(ActivityKind::Exit),
            "floor change" | "floorchange" => Ok(ActivityKind::FloorChange),
            "move in" | "movein" => Ok(ActivityKind::MoveIn),
            "move out" | "moveout" => Ok(ActivityKind::MoveOut),
            "add title" | "addtitle" => Ok(ActivityKind::AddTitle),
            "remove title" | "removetitle" => Ok(ActivityKind::RemoveTitle),
            "check out" | "checkout" => Ok(ActivityKind::CheckOut),
            "return book" | "returnbook" | "return" => Ok(ActivityKind::ReturnBook),
            "coffee sale" | "coffeesale" | "sale" => Ok(ActivityKind::CoffeeSale),
            "restock" => Ok(ActivityKind::Restock),
            "building added" | "buildingadded" => Ok(ActivityKind::BuildingAdded),
            "building removed" | "buildingremoved" => Ok(ActivityKind::BuildingRemoved),
            _ => Err(format!("Unknown activity kind: {}", s)),
        }
    }
}

/// Output format options for activity-log export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// JSON Lines, one event per line
    Json,
    /// CSV with a header row
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" | "jsonl" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_kind_display() {
        assert_eq!(format!("{}", BuildingKind::Generic), "Building");
        assert_eq!(format!("{}", BuildingKind::House), "House");
        assert_eq!(format!("{}", BuildingKind::Library), "Library");
        assert_eq!(format!("{}", BuildingKind::Cafe), "Cafe");
    }

    #[test]
    fn test_building_kind_from_str() {
        assert_eq!("house".parse::<BuildingKind>().unwrap(), BuildingKind::House);
        assert_eq!("Library".parse::<BuildingKind>().unwrap(), BuildingKind::Library);
        assert_eq!("cafe".parse::<BuildingKind>().unwrap(), BuildingKind::Cafe);
        assert_eq!("generic".parse::<BuildingKind>().unwrap(), BuildingKind::Generic);
        assert_eq!("building".parse::<BuildingKind>().unwrap(), BuildingKind::Generic);

        // Test error case
        assert!("dormitory".parse::<BuildingKind>().is_err());
    }

    #[test]
    fn test_activity_kind_display() {
        assert_eq!(format!("{}", ActivityKind::MoveIn), "Move In");
        assert_eq!(format!("{}", ActivityKind::CoffeeSale), "Coffee Sale");
        assert_eq!(format!("{}", ActivityKind::FloorChange), "Floor Change");
        assert_eq!(format!("{}", ActivityKind::BuildingRemoved), "Building Removed");
    }

    #[test]
    fn test_activity_kind_from_str() {
        assert_eq!("move in".parse::<ActivityKind>().unwrap(), ActivityKind::MoveIn);
        assert_eq!("movein".parse::<ActivityKind>().unwrap(), ActivityKind::MoveIn);
        assert_eq!("checkout".parse::<ActivityKind>().unwrap(), ActivityKind::CheckOut);
        assert_eq!("coffee sale".parse::<ActivityKind>().unwrap(), ActivityKind::CoffeeSale);
        assert_eq!("sale".parse::<ActivityKind>().unwrap(), ActivityKind::CoffeeSale);
        assert_eq!("restock".parse::<ActivityKind>().unwrap(), ActivityKind::Restock);

        // Test error case
        assert!("loiter".parse::<ActivityKind>().is_err());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_enum_serialization() {
        let kind = BuildingKind::Cafe;
        let json = serde_json::to_string(&kind).unwrap();
        let deserialized: BuildingKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, deserialized);

        let activity = ActivityKind::ReturnBook;
        let json = serde_json::to_string(&activity).unwrap();
        let deserialized: ActivityKind = serde_json::from_str(&json).unwrap();
        assert_eq!(activity, deserialized);

        let format = OutputFormat::Csv;
        let json = serde_json::to_string(&format).unwrap();
        let deserialized: OutputFormat = serde_json::from_str(&json).unwrap();
        assert_eq!(format, deserialized);
    }
}

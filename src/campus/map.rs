//! The campus map registry
//!
//! This module contains the CampusBuilding tagged union over the concrete
//! building kinds and the CampusMap, an ordered registry that renders the
//! campus directory.

use crate::campus::{building::Building, cafe::Cafe, house::House, library::Library};
use crate::types::{BuildingId, BuildingKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, warn};

/// Any building that can appear on the campus map
///
/// Specialized kinds embed the shared Building record, so the map can treat
/// every entry uniformly through the `building()` accessor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CampusBuilding {
    /// A plain building
    Generic(Building),
    /// A residential house
    House(House),
    /// A library
    Library(Library),
    /// A cafe
    Cafe(Cafe),
}

impl CampusBuilding {
    /// The shared building record
    pub fn building(&self) -> &Building {
        match self {
            CampusBuilding::Generic(b) => b,
            CampusBuilding::House(h) => &h.building,
            CampusBuilding::Library(l) => &l.building,
            CampusBuilding::Cafe(c) => &c.building,
        }
    }

    /// Mutable access to the shared building record
    pub fn building_mut(&mut self) -> &mut Building {
        match self {
            CampusBuilding::Generic(b) => b,
            CampusBuilding::House(h) => &mut h.building,
            CampusBuilding::Library(l) => &mut l.building,
            CampusBuilding::Cafe(c) => &mut c.building,
        }
    }

    /// The building's unique id
    pub fn id(&self) -> BuildingId {
        self.building().id
    }

    /// The building's name
    pub fn name(&self) -> &str {
        &self.building().name
    }

    /// What kind of building this is
    pub fn kind(&self) -> BuildingKind {
        self.building().kind
    }

    /// The capability list for this building
    pub fn options(&self) -> Vec<&'static str> {
        match self {
            CampusBuilding::Generic(b) => b.options(),
            CampusBuilding::House(h) => h.options(),
            CampusBuilding::Library(l) => l.options(),
            CampusBuilding::Cafe(c) => c.options(),
        }
    }
}

impl From<Building> for CampusBuilding {
    fn from(b: Building) -> Self {
        CampusBuilding::Generic(b)
    }
}

impl From<House> for CampusBuilding {
    fn from(h: House) -> Self {
        CampusBuilding::House(h)
    }
}

impl From<Library> for CampusBuilding {
    fn from(l: Library) -> Self {
        CampusBuilding::Library(l)
    }
}

impl From<Cafe> for CampusBuilding {
    fn from(c: Cafe) -> Self {
        CampusBuilding::Cafe(c)
    }
}

/// An ordered registry of campus buildings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CampusMap {
    /// Registered buildings, in insertion order
    buildings: Vec<CampusBuilding>,
}

impl CampusMap {
    /// Create a new empty campus map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a building to the map
    pub fn add_building(&mut self, building: impl Into<CampusBuilding>) {
        let building = building.into();
        info!(
            building = %building.name(),
            kind = %building.kind(),
            "Successfully added {} to the map",
            building.name()
        );
        self.buildings.push(building);
    }

    /// Remove the first building with the given id
    ///
    /// Returns the removed entry, or None when no building matches. Absence
    /// is tolerated silently aside from a warning; the map is unchanged.
    pub fn remove_building(&mut self, id: BuildingId) -> Option<CampusBuilding> {
        match self.buildings.iter().position(|b| b.id() == id) {
            Some(pos) => {
                let removed = self.buildings.remove(pos);
                info!(
                    building = %removed.name(),
                    "Successfully removed {} from the map",
                    removed.name()
                );
                Some(removed)
            }
            None => {
                warn!(%id, "No building with id {} on the map; nothing removed", id);
                None
            }
        }
    }

    /// Number of buildings on the map
    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    /// Look up a building by id
    pub fn get(&self, id: BuildingId) -> Option<&CampusBuilding> {
        self.buildings.iter().find(|b| b.id() == id)
    }

    /// Look up a building by id, mutably
    pub fn get_mut(&mut self, id: BuildingId) -> Option<&mut CampusBuilding> {
        self.buildings.iter_mut().find(|b| b.id() == id)
    }

    /// Iterate over the buildings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CampusBuilding> {
        self.buildings.iter()
    }

    /// Iterate mutably over the buildings in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CampusBuilding> {
        self.buildings.iter_mut()
    }

    /// All buildings of a given kind, in insertion order
    pub fn buildings_of_kind(&self, kind: BuildingKind) -> Vec<&CampusBuilding> {
        self.buildings.iter().filter(|b| b.kind() == kind).collect()
    }

    /// Number of buildings of a given kind
    pub fn count_of_kind(&self, kind: BuildingKind) -> usize {
        self.buildings.iter().filter(|b| b.kind() == kind).count()
    }

    /// Render the numbered campus directory
    pub fn directory(&self) -> String {
        let mut directory = String::from("DIRECTORY of BUILDINGS");
        for (i, building) in self.buildings.iter().enumerate() {
            directory.push_str(&format!("\n  {}. {}", i + 1, building.building().directory_entry()));
        }
        directory
    }
}

impl fmt::Display for CampusMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.directory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> CampusMap {
        let mut map = CampusMap::new();
        map.add_building(Building::new("Ford Hall", "100 Green Street", 4));
        map.add_building(House::new("Ziskind House", "100 Elm St", 3, true, true));
        map.add_building(Library::new("Neilson Library", "10 Elm St", 4));
        map.add_building(Cafe::with_default_stock("Campus Cafe", "123 Campus Road", 1));
        map
    }

    #[test]
    fn test_add_building_preserves_order() {
        let map = sample_map();
        assert_eq!(map.building_count(), 4);

        let names: Vec<&str> = map.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["Ford Hall", "Ziskind House", "Neilson Library", "Campus Cafe"]);
    }

    #[test]
    fn test_remove_building_by_id() {
        let mut map = sample_map();
        let house_id = map.buildings_of_kind(BuildingKind::House)[0].id();

        let removed = map.remove_building(house_id).unwrap();
        assert_eq!(removed.name(), "Ziskind House");
        assert_eq!(map.building_count(), 3);
        assert!(map.get(house_id).is_none());
    }

    #[test]
    fn test_remove_absent_building_is_a_noop() {
        let mut map = sample_map();
        let before = map.clone();

        assert!(map.remove_building(BuildingId::new()).is_none());
        assert_eq!(map, before);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut map = sample_map();
        let cafe_id = map.buildings_of_kind(BuildingKind::Cafe)[0].id();

        assert_eq!(map.get(cafe_id).unwrap().name(), "Campus Cafe");

        // Mutable lookup reaches the concrete building
        if let Some(CampusBuilding::Cafe(cafe)) = map.get_mut(cafe_id) {
            cafe.sell_coffee_black(12).unwrap();
            assert_eq!(cafe.inventory().cups, 49);
        } else {
            panic!("expected a cafe");
        }
    }

    #[test]
    fn test_counts_by_kind() {
        let map = sample_map();
        assert_eq!(map.count_of_kind(BuildingKind::Generic), 1);
        assert_eq!(map.count_of_kind(BuildingKind::House), 1);
        assert_eq!(map.count_of_kind(BuildingKind::Library), 1);
        assert_eq!(map.count_of_kind(BuildingKind::Cafe), 1);
    }

    #[test]
    fn test_directory_rendering() {
        let map = sample_map();
        let directory = map.directory();

        assert!(directory.starts_with("DIRECTORY of BUILDINGS"));
        assert!(directory.contains("\n  1. Ford Hall (100 Green Street)"));
        assert!(directory.contains("\n  4. Campus Cafe (123 Campus Road)"));
        assert_eq!(directory, map.to_string());
    }

    #[test]
    fn test_empty_map_directory() {
        let map = CampusMap::new();
        assert!(map.is_empty());
        assert_eq!(map.directory(), "DIRECTORY of BUILDINGS");
    }

    #[test]
    fn test_campus_building_accessors() {
        let house: CampusBuilding = House::new("Lawrence House", "15 Lawrence Street", 3, true, false).into();
        assert_eq!(house.kind(), BuildingKind::House);
        assert_eq!(house.name(), "Lawrence House");
        assert!(house.options().contains(&"move_in"));
        assert!(!house.options().contains(&"go_to_floor"));
    }
}

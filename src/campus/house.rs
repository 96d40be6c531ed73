//! Residential houses and roster management
//!
//! A House embeds a Building and adds a student roster plus two amenity
//! flags. Roster operations return explicit results so callers can branch on
//! AlreadyResident / NotResident instead of unwinding.

use crate::campus::building::Building;
use crate::error::{CampusError, CampusResult};
use crate::student::Student;
use crate::types::{house_defaults, BuildingKind, StudentId};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A campus house with a resident roster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct House {
    /// The shared building record
    pub building: Building,
    /// Current residents, in move-in order; ids are unique
    residents: Vec<Student>,
    /// Whether the house has a dining room
    pub has_dining_room: bool,
    /// Whether the house has an elevator
    pub has_elevator: bool,
}

impl House {
    /// Create a new house
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        floors: u32,
        has_dining_room: bool,
        has_elevator: bool,
    ) -> Self {
        Self {
            building: Building::with_kind(BuildingKind::House, name, address, floors),
            residents: Vec::new(),
            has_dining_room,
            has_elevator,
        }
    }

    /// Create a single-floor house with the default amenities
    pub fn with_defaults(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(
            name,
            address,
            house_defaults::FLOORS,
            house_defaults::HAS_DINING_ROOM,
            house_defaults::HAS_ELEVATOR,
        )
    }

    /// Number of current residents
    pub fn resident_count(&self) -> usize {
        self.residents.len()
    }

    /// Whether a student currently lives here
    pub fn is_resident(&self, student: &Student) -> bool {
        self.is_resident_id(&student.id)
    }

    /// Whether the student with the given id currently lives here
    pub fn is_resident_id(&self, id: &StudentId) -> bool {
        self.residents.iter().any(|r| &r.id == id)
    }

    /// The current residents, in move-in order
    pub fn residents(&self) -> &[Student] {
        &self.residents
    }

    /// Move a student into the house
    ///
    /// Fails with AlreadyResident when a student with the same id already
    /// lives here; the roster is unchanged in that case.
    pub fn move_in(&mut self, student: Student) -> CampusResult<()> {
        if self.is_resident(&student) {
            warn!(
                house = %self.building.name,
                student = %student.id,
                "{} is already a resident of {}",
                student.name,
                self.building.name
            );
            return Err(CampusError::AlreadyResident { student: student.id });
        }

        info!(
            house = %self.building.name,
            student = %student.id,
            "{} has moved into {}",
            student.name,
            self.building.name
        );
        self.residents.push(student);
        Ok(())
    }

    /// Move in a student known only by name
    pub fn move_in_by_name(&mut self, name: impl Into<String>) -> CampusResult<()> {
        self.move_in(Student::with_name_only(name))
    }

    /// Move a student out of the house, returning their record
    ///
    /// Fails with NotResident when no student with that id lives here.
    pub fn move_out(&mut self, id: &StudentId) -> CampusResult<Student> {
        match self.residents.iter().position(|r| &r.id == id) {
            Some(pos) => {
                let student = self.residents.remove(pos);
                info!(
                    house = %self.building.name,
                    student = %student.id,
                    "{} has moved out of {}",
                    student.name,
                    self.building.name
                );
                Ok(student)
            }
            None => {
                warn!(
                    house = %self.building.name,
                    student = %id,
                    "Student {} is not a resident of {}",
                    id,
                    self.building.name
                );
                Err(CampusError::NotResident { student: id.clone() })
            }
        }
    }

    /// Move to a specific floor
    ///
    /// Houses without an elevator reject multi-floor moves outright; the
    /// target floor is not even range-checked in that case. Use `go_up` /
    /// `go_down` to traverse one floor at a time.
    pub fn go_to_floor(&mut self, floor: u32) -> CampusResult<()> {
        if !self.has_elevator {
            return Err(CampusError::NoElevator { house: self.building.name.clone() });
        }
        self.building.go_to_floor(floor)
    }

    /// The capability list, which varies with the elevator flag
    pub fn options(&self) -> Vec<&'static str> {
        if self.has_elevator {
            let mut options = self.building.options();
            options.push("move_in");
            options.push("move_out");
            options
        } else {
            vec!["enter", "exit", "go_up", "go_down", "move_in", "move_out"]
        }
    }

    /// Narrate the capability list
    pub fn show_options(&self) {
        info!(
            house = %self.building.name,
            "Available options at {}: {}",
            self.building.name,
            self.options().join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_house() -> House {
        House::new("Ziskind House", "100 Elm St", 3, true, true)
    }

    #[test]
    fn test_house_creation() {
        let house = sample_house();
        assert_eq!(house.building.kind, BuildingKind::House);
        assert_eq!(house.resident_count(), 0);
        assert!(house.has_dining_room);
        assert!(house.has_elevator);
    }

    #[test]
    fn test_default_house_is_single_floor_without_amenities() {
        let house = House::with_defaults("Gilette House", "25 College Lane");
        assert_eq!(house.building.floors(), 1);
        assert!(!house.has_dining_room);
        assert!(!house.has_elevator);
    }

    #[test]
    fn test_move_in_grows_roster_by_one() {
        let mut house = sample_house();
        house.move_in(Student::new("Tabz", "S1234", 20)).unwrap();
        assert_eq!(house.resident_count(), 1);

        house.move_in(Student::new("Clare", "S1235", 21)).unwrap();
        assert_eq!(house.resident_count(), 2);
    }

    #[test]
    fn test_move_in_rejects_duplicate_id() {
        let mut house = sample_house();
        let tabz = Student::new("Tabz", "S1234", 20);
        house.move_in(tabz.clone()).unwrap();

        // A record with the same id is the same student, even renamed
        let duplicate = Student::new("Tabitha", "S1234", 20);
        let err = house.move_in(duplicate).unwrap_err();
        assert!(matches!(err, CampusError::AlreadyResident { .. }));
        assert_eq!(house.resident_count(), 1);
    }

    #[test]
    fn test_move_out_returns_the_student() {
        let mut house = sample_house();
        let tabz = Student::new("Tabz", "S1234", 20);
        house.move_in(tabz.clone()).unwrap();

        let moved_out = house.move_out(&tabz.id).unwrap();
        assert_eq!(moved_out, tabz);
        assert_eq!(house.resident_count(), 0);
        assert!(!house.is_resident(&tabz));
    }

    #[test]
    fn test_move_out_of_non_resident_fails() {
        let mut house = sample_house();
        let err = house.move_out(&StudentId::new("S9999")).unwrap_err();
        assert!(matches!(err, CampusError::NotResident { .. }));
        assert_eq!(house.resident_count(), 0);
    }

    #[test]
    fn test_move_in_by_name() {
        let mut house = sample_house();
        house.move_in_by_name("Clare").unwrap();
        assert_eq!(house.resident_count(), 1);

        // Same name resolves to the same placeholder identity
        let err = house.move_in_by_name("Clare").unwrap_err();
        assert!(matches!(err, CampusError::AlreadyResident { .. }));
    }

    #[test]
    fn test_go_to_floor_requires_elevator() {
        let mut walkup = House::new("Morrow House", "25 Morrow Lane", 3, false, false);
        let err = walkup.go_to_floor(2).unwrap_err();
        assert!(matches!(err, CampusError::NoElevator { .. }));

        // Even an in-range floor is rejected without an elevator
        let err = walkup.go_to_floor(1).unwrap_err();
        assert!(matches!(err, CampusError::NoElevator { .. }));

        // Single-floor moves still work
        assert!(walkup.building.go_up().is_ok());
        assert_eq!(walkup.building.current_floor(), 2);
    }

    #[test]
    fn test_go_to_floor_with_elevator_bounds_checked() {
        let mut house = sample_house();
        assert!(house.go_to_floor(3).is_ok());
        assert_eq!(house.building.current_floor(), 3);

        let err = house.go_to_floor(7).unwrap_err();
        assert!(matches!(err, CampusError::OutOfRange { requested: 7, floors: 3 }));
    }

    #[test]
    fn test_options_vary_with_elevator() {
        let elevator_house = sample_house();
        assert!(elevator_house.options().contains(&"go_to_floor"));

        let walkup = House::new("Cutter House", "7 Cutter Road", 2, false, false);
        let options = walkup.options();
        assert!(!options.contains(&"go_to_floor"));
        assert!(options.contains(&"go_up"));
        assert!(options.contains(&"move_in"));
    }
}

//! Campus buildings and the campus map
//!
//! This module contains the building kinds and the registry that aggregates
//! them.
//!
//! # Overview
//!
//! - **Building**: the shared record (name, address, floors, current floor)
//!   with bounds-checked floor navigation
//! - **House**: a Building plus a student roster and amenity flags
//! - **Library**: a Building plus a title → availability catalog
//! - **Cafe**: a Building plus inventory counters and the restock-and-retry
//!   sale protocol
//! - **CampusMap**: an ordered registry of buildings with a numbered
//!   directory rendering
//! - **CampusGenerator**: seedable random campus construction
//!
//! # Usage Example
//!
//! ```rust
//! use campus_sim::campus::*;
//! use campus_sim::student::Student;
//!
//! let mut map = CampusMap::new();
//!
//! let mut house = House::new("Ziskind House", "100 Elm St", 3, true, true);
//! house.move_in(Student::new("Tabz", "S1234", 20)).unwrap();
//! map.add_building(house);
//!
//! let mut cafe = Cafe::with_default_stock("Campus Cafe", "123 Campus Road", 1);
//! cafe.sell_coffee(CoffeeOrder::new(12, 2, 1)).unwrap();
//! map.add_building(cafe);
//!
//! println!("{}", map.directory());
//! ```

pub mod building;
pub mod cafe;
pub mod generator;
pub mod house;
pub mod library;
pub mod map;

// Re-export all public types for convenience
pub use building::Building;
pub use cafe::{Cafe, CoffeeOrder, Inventory, SaleReceipt};
pub use generator::{CampusGenerator, CampusStats};
pub use house::House;
pub use library::Library;
pub use map::{CampusBuilding, CampusMap};

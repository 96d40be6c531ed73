//! Campus generation
//!
//! This module contains the CampusGenerator, which builds a whole campus map
//! from name and address pools, plus summary statistics over a generated
//! campus. Generation is seedable for reproducible campuses.

use crate::campus::{building::Building, cafe::Cafe, house::House, library::Library, map::CampusMap};
use crate::error::CampusResult;
use crate::types::{BuildingKind, CampusConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Name pool for generic halls
const HALL_NAMES: &[&str] = &[
    "Ford Hall", "Bass Hall", "Wright Hall", "Seelye Hall", "Burton Hall", "McConnell Hall",
    "Sage Hall", "Hatfield Hall",
];

/// Name pool for houses
const HOUSE_NAMES: &[&str] = &[
    "Ziskind House", "Gilette House", "Northrop House", "Morrow House", "Cutter House",
    "Lawrence House", "Chapin House", "Talbot House",
];

/// Name pool for libraries
const LIBRARY_NAMES: &[&str] =
    &["Neilson Library", "Hilyer Art Library", "Josten Library", "Young Science Library"];

/// Name pool for cafes
const CAFE_NAMES: &[&str] = &["Campus Cafe", "Java Cafe", "Compass Cafe", "Bookend Cafe"];

/// Street pool for addresses
const STREETS: &[&str] = &[
    "Green Street", "Elm St", "College Lane", "Campus Road", "Seelye Ave", "Morrow Lane",
    "Wright Street", "Tyler Court",
];

/// Title pool for pre-stocking library catalogs
const TITLES: &[&str] = &[
    "Wild Toyota", "Modern Dive", "The Great Gatsby", "1984", "A Field Guide to Campus Birds",
    "Introductory Cartography", "Collected Letters", "The Annotated Almanac",
];

/// Generates campus maps from name pools
#[derive(Debug)]
pub struct CampusGenerator {
    rng: StdRng,
}

impl CampusGenerator {
    /// Create a generator with an entropy-seeded RNG
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Create a generator with a fixed seed for reproducible campuses
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Create a generator from a configuration, honoring its seed if set
    pub fn from_config(config: &CampusConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Generate a campus map per the configuration
    pub fn generate(&mut self, config: &CampusConfig) -> CampusResult<CampusMap> {
        config.validate()?;

        let mut map = CampusMap::new();

        for i in 0..config.hall_count {
            let name = self.pooled_name(HALL_NAMES, i);
            let address = self.address();
            let floors = self.floors(config);
            map.add_building(Building::new(name, address, floors));
        }

        for i in 0..config.house_count {
            let name = self.pooled_name(HOUSE_NAMES, i);
            let address = self.address();
            let floors = self.floors(config);
            let has_dining_room = self.rng.gen_bool(0.5);
            // A single-floor house never needs an elevator
            let has_elevator = floors > 1 && self.rng.gen_bool(0.5);
            map.add_building(House::new(name, address, floors, has_dining_room, has_elevator));
        }

        for i in 0..config.library_count {
            let name = self.pooled_name(LIBRARY_NAMES, i);
            let address = self.address();
            let floors = self.floors(config);
            let mut library = Library::new(name, address, floors);

            let title_count = self.rng.gen_range(2..=4);
            for j in 0..title_count {
                library.add_title(self.pooled_name(TITLES, j));
            }
            map.add_building(library);
        }

        for i in 0..config.cafe_count {
            let name = self.pooled_name(CAFE_NAMES, i);
            let address = self.address();
            let cafe = Cafe::with_default_stock(name, address, self.floors(config))
                .with_restock_limit(config.max_restock_rounds);
            map.add_building(cafe);
        }

        info!(
            buildings = map.building_count(),
            halls = map.count_of_kind(BuildingKind::Generic),
            houses = map.count_of_kind(BuildingKind::House),
            libraries = map.count_of_kind(BuildingKind::Library),
            cafes = map.count_of_kind(BuildingKind::Cafe),
            "Campus generated"
        );

        Ok(map)
    }

    /// Pick the i-th pool name, numbering repeats past the pool size
    fn pooled_name(&mut self, pool: &[&str], index: usize) -> String {
        let base = pool[index % pool.len()];
        let round = index / pool.len();
        if round == 0 {
            base.to_string()
        } else {
            format!("{} {}", base, round + 1)
        }
    }

    /// Generate a street address from the pool
    fn address(&mut self) -> String {
        let number = self.rng.gen_range(1..=250);
        let street = STREETS[self.rng.gen_range(0..STREETS.len())];
        format!("{} {}, Northampton, MA", number, street)
    }

    /// Pick a floor count within the configured range
    fn floors(&mut self, config: &CampusConfig) -> u32 {
        self.rng.gen_range(config.min_floors..=config.max_floors)
    }
}

impl Default for CampusGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics over a campus map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CampusStats {
    /// Total number of buildings
    pub total_buildings: usize,
    /// Number of generic halls
    pub halls: usize,
    /// Number of houses
    pub houses: usize,
    /// Number of libraries
    pub libraries: usize,
    /// Number of cafes
    pub cafes: usize,
    /// Residents across all houses
    pub total_residents: usize,
    /// Titles across all library catalogs
    pub total_titles: usize,
}

impl CampusStats {
    /// Compute statistics over a campus map
    pub fn from_map(map: &CampusMap) -> Self {
        use crate::campus::map::CampusBuilding;

        let mut total_residents = 0;
        let mut total_titles = 0;
        for building in map.iter() {
            match building {
                CampusBuilding::House(house) => total_residents += house.resident_count(),
                CampusBuilding::Library(library) => total_titles += library.title_count(),
                _ => {}
            }
        }

        Self {
            total_buildings: map.building_count(),
            halls: map.count_of_kind(BuildingKind::Generic),
            houses: map.count_of_kind(BuildingKind::House),
            libraries: map.count_of_kind(BuildingKind::Library),
            cafes: map.count_of_kind(BuildingKind::Cafe),
            total_residents,
            total_titles,
        }
    }
}

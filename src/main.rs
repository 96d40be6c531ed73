// Campus Simulation - Demo Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/campus-sim
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/campus-sim --house-count 4 --cafe-count 2 --seed 42 --verbose
// ```

use campus_sim::activity::{ActivityEvent, ActivityLog};
use campus_sim::campus::{CampusBuilding, CampusGenerator, CampusMap, CampusStats, CoffeeOrder};
use campus_sim::logging::LoggingConfig;
use campus_sim::student::Student;
use campus_sim::types::config::CliArgs;
use campus_sim::types::{ActivityKind, BuildingKind, CampusConfig};
use campus_sim::CampusError;
use clap::Parser;
use std::process;
use tracing::{error, info, Level};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = CampusConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: warnings only for normal runs
        LoggingConfig::new().with_level(Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting campus simulation");

    // Load configuration from CLI arguments and optional config file
    let config = match CampusConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - the demonstration will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    print_startup_banner(&config);

    if let Err(e) = run_demonstration(&config) {
        error!("Demonstration failed: {}", e);
        process::exit(1);
    }

    info!("Campus simulation completed successfully");
}

/// Generate the campus and run the full demonstration tour
fn run_demonstration(config: &CampusConfig) -> Result<(), CampusError> {
    eprintln!("Generating campus...");
    let mut generator = CampusGenerator::from_config(config);
    let mut map = generator.generate(config)?;

    let stats = CampusStats::from_map(&map);
    info!(
        "Generated {} buildings ({} halls, {} houses, {} libraries, {} cafes)",
        stats.total_buildings, stats.halls, stats.houses, stats.libraries, stats.cafes
    );

    let mut log = ActivityLog::new();

    tour_hall(&mut map, &mut log);
    tour_house(&mut map, &mut log);
    tour_library(&mut map, &mut log);
    tour_cafe(&mut map, &mut log);

    // Print the full directory, then remove a building and print it again
    println!("{}", map.directory());

    if let Some(last_id) = map.iter().last().map(|b| b.id()) {
        if let Some(removed) = map.remove_building(last_id) {
            log.record(ActivityEvent::success(
                removed.building(),
                ActivityKind::BuildingRemoved,
                format!("removed {} from the map", removed.name()),
            ));
            println!("\nAfter removing a building:");
            println!("{}", map.directory());
        }
    }

    // Final summary
    let stats = CampusStats::from_map(&map);
    eprintln!();
    eprintln!("Campus Summary:");
    eprintln!("  Buildings: {}", stats.total_buildings);
    eprintln!("  Residents: {}", stats.total_residents);
    eprintln!("  Catalog Titles: {}", stats.total_titles);
    eprintln!("  {}", log.summary());

    if let Some(path) = &config.activity_output {
        log.export(path, config.output_format)?;
        eprintln!("Activity log written to: {}", path);
    }

    Ok(())
}

/// Walk a generic hall through its floors
fn tour_hall(map: &mut CampusMap, log: &mut ActivityLog) {
    let Some(id) = map.buildings_of_kind(BuildingKind::Generic).first().map(|b| b.id()) else {
        return;
    };
    if let Some(CampusBuilding::Generic(hall)) = map.get_mut(id) {
        hall.enter();
        log.record(ActivityEvent::success(hall, ActivityKind::Enter, "entered"));

        let top = hall.floors();
        match hall.go_to_floor(top) {
            Ok(()) => log.record(ActivityEvent::success(
                hall,
                ActivityKind::FloorChange,
                format!("rode to floor {}", top),
            )),
            Err(e) => log.record(ActivityEvent::failure(hall, ActivityKind::FloorChange, e.to_string())),
        }

        // One past the top floor is always out of range
        if let Err(e) = hall.go_to_floor(top + 1) {
            log.record(ActivityEvent::failure(hall, ActivityKind::FloorChange, e.to_string()));
        }

        hall.exit();
        log.record(ActivityEvent::success(hall, ActivityKind::Exit, "left"));
        hall.show_options();
    }
}

/// Move students through the first house
fn tour_house(map: &mut CampusMap, log: &mut ActivityLog) {
    let Some(id) = map.buildings_of_kind(BuildingKind::House).first().map(|b| b.id()) else {
        return;
    };
    if let Some(CampusBuilding::House(house)) = map.get_mut(id) {
        let tabz = Student::new("Tabz", "S1234", 20);
        let clare = Student::new("Clare", "S1235", 21);

        for student in [tabz.clone(), clare] {
            let detail = format!("{} moved in", student.name);
            match house.move_in(student) {
                Ok(()) => {
                    log.record(ActivityEvent::success(&house.building, ActivityKind::MoveIn, detail))
                }
                Err(e) => log.record(ActivityEvent::failure(
                    &house.building,
                    ActivityKind::MoveIn,
                    e.to_string(),
                )),
            }
        }

        // A second move-in for the same student must be refused
        if let Err(e) = house.move_in(tabz.clone()) {
            log.record(ActivityEvent::failure(&house.building, ActivityKind::MoveIn, e.to_string()));
        }

        match house.move_out(&tabz.id) {
            Ok(student) => log.record(ActivityEvent::success(
                &house.building,
                ActivityKind::MoveOut,
                format!("{} moved out", student.name),
            )),
            Err(e) => log.record(ActivityEvent::failure(
                &house.building,
                ActivityKind::MoveOut,
                e.to_string(),
            )),
        }

        info!("Residents in {}: {}", house.building.name, house.resident_count());
        house.show_options();
    }
}

/// Exercise the first library's catalog
fn tour_library(map: &mut CampusMap, log: &mut ActivityLog) {
    let Some(id) = map.buildings_of_kind(BuildingKind::Library).first().map(|b| b.id()) else {
        return;
    };
    if let Some(CampusBuilding::Library(library)) = map.get_mut(id) {
        for title in ["Wild Toyota", "Modern Dive"] {
            let added = library.add_title(title);
            log.record(ActivityEvent::new(
                &library.building,
                ActivityKind::AddTitle,
                title,
                added,
            ));
        }

        let checked_out = library.check_out("Wild Toyota");
        log.record(ActivityEvent::new(
            &library.building,
            ActivityKind::CheckOut,
            "Wild Toyota",
            checked_out,
        ));

        let returned = library.return_book("Wild Toyota");
        log.record(ActivityEvent::new(
            &library.building,
            ActivityKind::ReturnBook,
            "Wild Toyota",
            returned,
        ));

        library.print_collection();
        library.show_options();
    }
}

/// Sell coffee at the first cafe, including a restock-triggering order
fn tour_cafe(map: &mut CampusMap, log: &mut ActivityLog) {
    let Some(id) = map.buildings_of_kind(BuildingKind::Cafe).first().map(|b| b.id()) else {
        return;
    };
    if let Some(CampusBuilding::Cafe(cafe)) = map.get_mut(id) {
        for order in [CoffeeOrder::new(12, 2, 1), CoffeeOrder::new(600, 5, 3)] {
            match cafe.sell_coffee(order) {
                Ok(receipt) => {
                    log.record(ActivityEvent::success(
                        &cafe.building,
                        ActivityKind::CoffeeSale,
                        format!(
                            "{}oz, {} sugar, {} cream ({} restock rounds)",
                            order.size, order.sugar_packets, order.cream_packets,
                            receipt.restock_rounds
                        ),
                    ));
                    if receipt.restock_rounds > 0 {
                        log.record(ActivityEvent::success(
                            &cafe.building,
                            ActivityKind::Restock,
                            format!("{} rounds", receipt.restock_rounds),
                        ));
                    }
                }
                Err(e) => log.record(ActivityEvent::failure(
                    &cafe.building,
                    ActivityKind::CoffeeSale,
                    e.to_string(),
                )),
            }
        }
        cafe.show_options();
    }
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &CampusConfig) {
    eprintln!("Campus Simulation");
    eprintln!("=================");
    eprintln!("A campus of buildings, houses, libraries, and cafes");
    eprintln!();
    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &CampusConfig) {
    eprintln!("Configuration:");
    eprintln!("  Halls: {}", config.hall_count);
    eprintln!("  Houses: {}", config.house_count);
    eprintln!("  Libraries: {}", config.library_count);
    eprintln!("  Cafes: {}", config.cafe_count);
    eprintln!("  Floors per Building: {} - {}", config.min_floors, config.max_floors);
    eprintln!("  Restock Round Cap: {}", config.max_restock_rounds);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    if let Some(path) = &config.activity_output {
        eprintln!("  Activity Output: {}", path);
    }
    eprintln!();
}

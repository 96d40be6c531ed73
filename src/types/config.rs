//! Configuration structures for the campus simulation
//!
//! This module contains the campus configuration structure and validation
//! logic, the CLI argument definitions for the demo binary, and the named
//! default constants for cafe stock, restock increments, and house features.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default cafe stock constants
pub mod cafe_stock {
    /// Default coffee on hand, in ounces
    pub const COFFEE_OUNCES: u32 = 500;

    /// Default sugar packets on hand
    pub const SUGAR_PACKETS: u32 = 100;

    /// Default cream packets on hand
    pub const CREAM_PACKETS: u32 = 100;

    /// Default cups on hand
    pub const CUPS: u32 = 50;
}

/// Fixed restock increment constants
pub mod restock {
    /// Coffee added per restock, in ounces
    pub const COFFEE_OUNCES: u32 = 100;

    /// Sugar packets added per restock
    pub const SUGAR_PACKETS: u32 = 50;

    /// Cream packets added per restock
    pub const CREAM_PACKETS: u32 = 50;

    /// Cups added per restock
    pub const CUPS: u32 = 30;

    /// Default cap on restock-and-retry rounds for a single sale
    pub const MAX_ROUNDS: u32 = 10;
}

/// Default house feature constants
pub mod house_defaults {
    /// Default floor count for a house
    pub const FLOORS: u32 = 1;

    /// Whether a house has a dining room by default
    pub const HAS_DINING_ROOM: bool = false;

    /// Whether a house has an elevator by default
    pub const HAS_ELEVATOR: bool = false;
}

/// Errors produced by configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// A count or range field holds an unusable value
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// The offending configuration field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

/// Command line arguments for the campus simulation demo binary
#[derive(Debug, Clone, Parser)]
#[command(
    name = "campus-sim",
    version,
    about = "Campus Simulation - generates a campus of buildings and runs a demonstration tour",
    long_about = "Generates a campus map populated with halls, houses, libraries, and cafes, \
then runs a demonstration tour exercising floor navigation, house rosters, library catalogs, \
and cafe sales with automatic restocking.

EXAMPLES:
    # Run with default settings
    campus-sim

    # Use a configuration file
    campus-sim --config campus.json

    # Override specific settings
    campus-sim --house-count 4 --cafe-count 2 --seed 42

    # Generate a configuration template
    campus-sim --print-config > campus.json

    # Validate configuration without running
    campus-sim --config campus.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of generic halls to generate
    #[arg(long, help = "Number of generic halls to generate")]
    pub hall_count: Option<usize>,

    /// Number of houses to generate
    #[arg(long, help = "Number of houses to generate")]
    pub house_count: Option<usize>,

    /// Number of libraries to generate
    #[arg(long, help = "Number of libraries to generate")]
    pub library_count: Option<usize>,

    /// Number of cafes to generate
    #[arg(long, help = "Number of cafes to generate")]
    pub cafe_count: Option<usize>,

    /// Minimum floors per generated building
    #[arg(long, help = "Minimum floors per generated building")]
    pub min_floors: Option<u32>,

    /// Maximum floors per generated building
    #[arg(long, help = "Maximum floors per generated building")]
    pub max_floors: Option<u32>,

    /// Cap on restock-and-retry rounds for a single cafe sale
    #[arg(
        long,
        help = "Cap on restock rounds per sale",
        long_help = "Maximum number of restock-and-retry rounds a cafe will attempt for a single \
sale before reporting failure. Must be greater than 0. Default: 10"
    )]
    pub max_restock_rounds: Option<u32>,

    /// Random seed for reproducible campus generation
    #[arg(long, help = "Random seed for reproducible campus generation")]
    pub seed: Option<u64>,

    /// Output path for the activity log
    #[arg(long, help = "Output path for the activity log file")]
    pub activity_output: Option<String>,

    /// Output format for the activity log
    #[arg(long, help = "Activity log format (json or csv)")]
    pub output_format: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running the tour
    #[arg(long, help = "Validate configuration without running the demonstration")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of generic halls to generate
    pub hall_count: Option<usize>,

    /// Number of houses to generate
    pub house_count: Option<usize>,

    /// Number of libraries to generate
    pub library_count: Option<usize>,

    /// Number of cafes to generate
    pub cafe_count: Option<usize>,

    /// Minimum floors per generated building
    pub min_floors: Option<u32>,

    /// Maximum floors per generated building
    pub max_floors: Option<u32>,

    /// Cap on restock-and-retry rounds for a single cafe sale
    pub max_restock_rounds: Option<u32>,

    /// Random seed for reproducible campus generation
    pub seed: Option<u64>,

    /// Output path for the activity log
    pub activity_output: Option<String>,

    /// Output format for the activity log
    pub output_format: Option<OutputFormat>,
}

impl ConfigFile {
    /// Load a partial configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))
    }
}

/// Complete configuration for campus generation and the demo tour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampusConfig {
    /// Number of generic halls to generate
    pub hall_count: usize,

    /// Number of houses to generate
    pub house_count: usize,

    /// Number of libraries to generate
    pub library_count: usize,

    /// Number of cafes to generate
    pub cafe_count: usize,

    /// Minimum floors per generated building
    pub min_floors: u32,

    /// Maximum floors per generated building
    pub max_floors: u32,

    /// Cap on restock-and-retry rounds for a single cafe sale
    pub max_restock_rounds: u32,

    /// Random seed for reproducible campus generation
    pub seed: Option<u64>,

    /// Output path for the activity log, if export is requested
    pub activity_output: Option<String>,

    /// Output format for the activity log
    pub output_format: OutputFormat,
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            hall_count: 6,
            house_count: 3,
            library_count: 2,
            cafe_count: 2,
            min_floors: 1,
            max_floors: 5,
            max_restock_rounds: restock::MAX_ROUNDS,
            seed: None,
            activity_output: None,
            output_format: OutputFormat::Json,
        }
    }
}

impl CampusConfig {
    /// Build a configuration from CLI arguments, merging an optional config
    /// file underneath them (CLI > file > defaults)
    pub fn from_cli_args(args: CliArgs) -> Result<Self, String> {
        let file = match &args.config {
            Some(path) => ConfigFile::load(path)?,
            None => ConfigFile::default(),
        };

        let defaults = Self::default();

        let output_format = match &args.output_format {
            Some(s) => Some(s.parse::<OutputFormat>()?),
            None => file.output_format,
        };

        Ok(Self {
            hall_count: args.hall_count.or(file.hall_count).unwrap_or(defaults.hall_count),
            house_count: args.house_count.or(file.house_count).unwrap_or(defaults.house_count),
            library_count: args
                .library_count
                .or(file.library_count)
                .unwrap_or(defaults.library_count),
            cafe_count: args.cafe_count.or(file.cafe_count).unwrap_or(defaults.cafe_count),
            min_floors: args.min_floors.or(file.min_floors).unwrap_or(defaults.min_floors),
            max_floors: args.max_floors.or(file.max_floors).unwrap_or(defaults.max_floors),
            max_restock_rounds: args
                .max_restock_rounds
                .or(file.max_restock_rounds)
                .unwrap_or(defaults.max_restock_rounds),
            seed: args.seed.or(file.seed),
            activity_output: args.activity_output.or(file.activity_output),
            output_format: output_format.unwrap_or(defaults.output_format),
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let total = self.hall_count + self.house_count + self.library_count + self.cafe_count;
        if total == 0 {
            return Err(ConfigValidationError::InvalidValue {
                field: "hall_count",
                reason: "at least one building must be generated".to_string(),
            });
        }

        if self.min_floors < 1 {
            return Err(ConfigValidationError::InvalidValue {
                field: "min_floors",
                reason: "buildings must have at least one floor".to_string(),
            });
        }

        if self.max_floors < self.min_floors {
            return Err(ConfigValidationError::InvalidValue {
                field: "max_floors",
                reason: format!(
                    "max_floors ({}) must be >= min_floors ({})",
                    self.max_floors, self.min_floors
                ),
            });
        }

        if self.max_restock_rounds == 0 {
            return Err(ConfigValidationError::InvalidValue {
                field: "max_restock_rounds",
                reason: "at least one restock round must be allowed".to_string(),
            });
        }

        Ok(())
    }

    /// Total number of buildings the generator will create
    pub fn total_building_count(&self) -> usize {
        self.hall_count + self.house_count + self.library_count + self.cafe_count
    }

    /// Serialize the configuration to pretty JSON
    pub fn print_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

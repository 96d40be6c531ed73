//! Library catalogs
//!
//! A Library embeds a Building and adds a title → availability catalog.
//! Catalog operations never hard-fail; missing or unavailable titles are
//! reported and leave the catalog unchanged.

use crate::campus::building::Building;
use crate::types::BuildingKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

/// A campus library with a title catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Library {
    /// The shared building record
    pub building: Building,
    /// Catalog mapping each title to its availability
    collection: HashMap<String, bool>,
}

impl Library {
    /// Create a new library with an empty catalog
    pub fn new(name: impl Into<String>, address: impl Into<String>, floors: u32) -> Self {
        Self {
            building: Building::with_kind(BuildingKind::Library, name, address, floors),
            collection: HashMap::new(),
        }
    }

    /// Create a single-floor library
    pub fn single_floor(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(name, address, 1)
    }

    /// Add a title to the catalog, marked available
    ///
    /// Returns false (and reports) when the title is already present; the
    /// existing availability state is untouched.
    pub fn add_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if self.collection.contains_key(&title) {
            warn!(library = %self.building.name, %title, "Title already exists: {}", title);
            return false;
        }
        info!(library = %self.building.name, %title, "Title added: {}", title);
        self.collection.insert(title, true);
        true
    }

    /// Remove a title from the catalog
    ///
    /// Returns the removed title, or None (reported) when absent.
    pub fn remove_title(&mut self, title: &str) -> Option<String> {
        match self.collection.remove_entry(title) {
            Some((removed, _)) => {
                info!(library = %self.building.name, title = %removed, "Title removed: {}", removed);
                Some(removed)
            }
            None => {
                warn!(library = %self.building.name, %title, "Title not found: {}", title);
                None
            }
        }
    }

    /// Check out a title
    ///
    /// Succeeds only when the title exists and is available; returns false
    /// (reported, no state change) otherwise.
    pub fn check_out(&mut self, title: &str) -> bool {
        match self.collection.get_mut(title) {
            Some(available) if *available => {
                *available = false;
                info!(library = %self.building.name, %title, "Checked out: {}", title);
                true
            }
            _ => {
                warn!(
                    library = %self.building.name,
                    %title,
                    "Cannot check out: {} (not available or doesn't exist)",
                    title
                );
                false
            }
        }
    }

    /// Return a title
    ///
    /// Any present title becomes available, whatever its prior state; an
    /// absent title is reported and the catalog is unchanged.
    pub fn return_book(&mut self, title: &str) -> bool {
        match self.collection.get_mut(title) {
            Some(available) => {
                *available = true;
                info!(library = %self.building.name, %title, "Returned: {}", title);
                true
            }
            None => {
                warn!(
                    library = %self.building.name,
                    %title,
                    "Cannot return: {} (not found in collection)",
                    title
                );
                false
            }
        }
    }

    /// Whether the catalog holds the title, in any state
    pub fn contains_title(&self, title: &str) -> bool {
        self.collection.contains_key(title)
    }

    /// Whether the title is present and available
    pub fn is_available(&self, title: &str) -> bool {
        self.collection.get(title).copied().unwrap_or(false)
    }

    /// Number of titles in the catalog
    pub fn title_count(&self) -> usize {
        self.collection.len()
    }

    /// Titles in sorted order
    pub fn titles(&self) -> Vec<&str> {
        let mut titles: Vec<&str> = self.collection.keys().map(String::as_str).collect();
        titles.sort_unstable();
        titles
    }

    /// Render the catalog as a sorted availability listing
    pub fn collection_report(&self) -> String {
        let mut report = String::from("Library Collection:");
        for title in self.titles() {
            let status = if self.is_available(title) { "Available" } else { "Checked Out" };
            report.push_str(&format!("\n  {} - {}", title, status));
        }
        report
    }

    /// Narrate the catalog listing
    pub fn print_collection(&self) {
        info!(library = %self.building.name, "{}", self.collection_report());
    }

    /// The capability list for a library
    pub fn options(&self) -> Vec<&'static str> {
        let mut options = self.building.options();
        options.extend(["add_title", "remove_title", "check_out", "return_book", "print_collection"]);
        options
    }

    /// Narrate the capability list
    pub fn show_options(&self) {
        info!(
            library = %self.building.name,
            "Available options at {}: {}",
            self.building.name,
            self.options().join(", ")
        );
    }
}

//! Cafes and beverage inventory
//!
//! A Cafe embeds a Building and adds four inventory counters. A sale that
//! cannot be covered triggers fixed-increment restocks of the insufficient
//! counters and retries the identical order, bounded by a restock-round cap
//! so an oversized order fails cleanly instead of restocking forever.

use crate::campus::building::Building;
use crate::error::{CampusError, CampusResult};
use crate::types::{cafe_stock, restock, BuildingKind};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Cafe inventory counters
///
/// Counters are unsigned, so the never-negative invariant holds by type;
/// debits only happen after the availability check passes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inventory {
    /// Coffee on hand, in ounces
    pub coffee_ounces: u32,
    /// Sugar packets on hand
    pub sugar_packets: u32,
    /// Cream packets on hand
    pub cream_packets: u32,
    /// Cups on hand
    pub cups: u32,
}

impl Inventory {
    /// The default starting stock
    pub fn default_stock() -> Self {
        Self {
            coffee_ounces: cafe_stock::COFFEE_OUNCES,
            sugar_packets: cafe_stock::SUGAR_PACKETS,
            cream_packets: cafe_stock::CREAM_PACKETS,
            cups: cafe_stock::CUPS,
        }
    }

    /// Whether the inventory covers an order
    pub fn covers(&self, order: &CoffeeOrder) -> bool {
        self.coffee_ounces >= order.size
            && self.sugar_packets >= order.sugar_packets
            && self.cream_packets >= order.cream_packets
            && self.cups > 0
    }
}

/// A single coffee order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoffeeOrder {
    /// Drink size in ounces
    pub size: u32,
    /// Sugar packets requested
    pub sugar_packets: u32,
    /// Cream packets requested
    pub cream_packets: u32,
}

impl CoffeeOrder {
    /// A coffee with sugar and cream
    pub fn new(size: u32, sugar_packets: u32, cream_packets: u32) -> Self {
        Self { size, sugar_packets, cream_packets }
    }

    /// A plain coffee with no sugar or cream
    pub fn black(size: u32) -> Self {
        Self { size, sugar_packets: 0, cream_packets: 0 }
    }
}

/// Receipt for a completed sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaleReceipt {
    /// The order that was fulfilled
    pub order: CoffeeOrder,
    /// Restock rounds needed before the sale went through
    pub restock_rounds: u32,
}

/// A campus cafe with a beverage inventory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cafe {
    /// The shared building record
    pub building: Building,
    /// Current inventory
    inventory: Inventory,
    /// Cap on restock-and-retry rounds for a single sale
    max_restock_rounds: u32,
}

impl Cafe {
    /// Create a new cafe with explicit starting stock
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        floors: u32,
        inventory: Inventory,
    ) -> Self {
        Self {
            building: Building::with_kind(BuildingKind::Cafe, name, address, floors),
            inventory,
            max_restock_rounds: restock::MAX_ROUNDS,
        }
    }

    /// Create a cafe with the default starting stock
    pub fn with_default_stock(
        name: impl Into<String>,
        address: impl Into<String>,
        floors: u32,
    ) -> Self {
        Self::new(name, address, floors, Inventory::default_stock())
    }

    /// Override the restock-round cap
    pub fn with_restock_limit(mut self, max_restock_rounds: u32) -> Self {
        self.max_restock_rounds = max_restock_rounds.max(1);
        self
    }

    /// Current inventory counters
    pub fn inventory(&self) -> Inventory {
        self.inventory
    }

    /// Sell a coffee, restocking and retrying as needed
    ///
    /// When the inventory covers the order, all four counters are debited
    /// (cups by exactly 1 regardless of size). On a shortfall, each
    /// insufficient counter is restocked by its fixed increment, then the
    /// identical order is retried. After `max_restock_rounds` rounds the
    /// sale fails with RestockLimitReached; restocks already applied are
    /// kept but the order's debit never lands.
    pub fn sell_coffee(&mut self, order: CoffeeOrder) -> CampusResult<SaleReceipt> {
        let mut rounds = 0;

        loop {
            if self.inventory.covers(&order) {
                self.inventory.coffee_ounces -= order.size;
                self.inventory.sugar_packets -= order.sugar_packets;
                self.inventory.cream_packets -= order.cream_packets;
                self.inventory.cups -= 1;

                info!(
                    cafe = %self.building.name,
                    size = order.size,
                    sugar = order.sugar_packets,
                    cream = order.cream_packets,
                    restock_rounds = rounds,
                    "Coffee sold! Size: {} ounces, Sugar: {} packets, Cream: {} packets",
                    order.size,
                    order.sugar_packets,
                    order.cream_packets
                );
                return Ok(SaleReceipt { order, restock_rounds: rounds });
            }

            warn!(cafe = %self.building.name, "Unable to sell coffee. Not enough inventory.");

            if rounds >= self.max_restock_rounds {
                warn!(
                    cafe = %self.building.name,
                    rounds,
                    "Sale abandoned; order exceeds what restocking can supply"
                );
                return Err(CampusError::RestockLimitReached { rounds });
            }

            // Restock only the counters that fell short, each by its fixed
            // increment, then retry the same order.
            if self.inventory.coffee_ounces < order.size {
                warn!(cafe = %self.building.name, "Not enough coffee. Restocking...");
                self.restock(restock::COFFEE_OUNCES, 0, 0, 0);
            }
            if self.inventory.sugar_packets < order.sugar_packets {
                warn!(cafe = %self.building.name, "Not enough sugar packets. Restocking...");
                self.restock(0, restock::SUGAR_PACKETS, 0, 0);
            }
            if self.inventory.cream_packets < order.cream_packets {
                warn!(cafe = %self.building.name, "Not enough cream packets. Restocking...");
                self.restock(0, 0, restock::CREAM_PACKETS, 0);
            }
            if self.inventory.cups == 0 {
                warn!(cafe = %self.building.name, "Not enough cups. Restocking...");
                self.restock(0, 0, 0, restock::CUPS);
            }

            rounds += 1;
        }
    }

    /// Sell a plain coffee with no sugar or cream
    pub fn sell_coffee_black(&mut self, size: u32) -> CampusResult<SaleReceipt> {
        self.sell_coffee(CoffeeOrder::black(size))
    }

    /// Add stock to the inventory counters
    ///
    /// Not public; the sale loop is the sole caller.
    fn restock(&mut self, coffee_ounces: u32, sugar_packets: u32, cream_packets: u32, cups: u32) {
        self.inventory.coffee_ounces += coffee_ounces;
        self.inventory.sugar_packets += sugar_packets;
        self.inventory.cream_packets += cream_packets;
        self.inventory.cups += cups;
        info!(
            cafe = %self.building.name,
            coffee_ounces,
            sugar_packets,
            cream_packets,
            cups,
            "Inventory restocked"
        );
    }

    /// The capability list for a cafe
    pub fn options(&self) -> Vec<&'static str> {
        let mut options = self.building.options();
        options.push("sell_coffee");
        options
    }

    /// Narrate the capability list
    pub fn show_options(&self) {
        info!(
            cafe = %self.building.name,
            "Available options at {}: {}",
            self.building.name,
            self.options().join(", ")
        );
    }
}

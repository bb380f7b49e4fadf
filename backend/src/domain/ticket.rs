//! Ticket listing record.

use serde::{Deserialize, Serialize};

/// A ticket listing as returned by the catalogue port.
///
/// The marketplace core treats tickets as opaque listing data; pricing,
/// ownership, and trading rules live behind the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// Event or listing name.
    pub name: String,
    /// Asking price in whole currency units.
    pub price: u32,
    /// Number of seats offered.
    pub quantity: u32,
}

impl Ticket {
    /// Construct a listing.
    pub fn new(name: impl Into<String>, price: u32, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

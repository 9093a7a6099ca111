// Supermarket model representing one geocoded retail location

use crate::models::{Location, OpaqueId};
use serde::{Deserialize, Serialize};

/// Name used when a chain record carries no retailer name
pub const UNKNOWN_RETAILER: &str = "Unknown";

/// A supermarket location loaded from a chain file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupermarketLocation {
    pub id: OpaqueId,

    /// Retailer display name
    pub name: String,

    pub address: String,

    /// Coordinates, always finite once loaded
    #[serde(flatten)]
    pub location: Location,

    pub city: String,
    pub province: String,
}

impl SupermarketLocation {
    /// Creates a supermarket with empty address fields
    pub fn new<S: Into<String>>(id: impl Into<OpaqueId>, name: S, location: Location) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            location,
            city: String::new(),
            province: String::new(),
        }
    }

    /// Sets the street address, city and province
    pub fn with_address<S: Into<String>>(mut self, address: S, city: S, province: S) -> Self {
        self.address = address.into();
        self.city = city.into();
        self.province = province.into();
        self
    }
}

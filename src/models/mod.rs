// Models module - exports all model types

mod distance_result;
mod id;
mod location;
mod shop;
mod supermarket;

// Re-export model types
pub use self::distance_result::DistanceResult;
pub use self::id::OpaqueId;
pub use self::location::Location;
pub use self::shop::ShopRecord;
pub use self::supermarket::{SupermarketLocation, UNKNOWN_RETAILER};

// Common type aliases for improved code readability
pub type Kilometers = f64;
pub type OrderCount = u64;

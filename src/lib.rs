// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod utils;

// Re-exports for convenience
pub use algorithms::linear_scan::LinearScan;
pub use algorithms::{resolve_all, Nearest, NearestResolver};
pub use config::Config;
pub use error::{AnalysisError, RecordError, SourceFault};
pub use models::{DistanceResult, Location, OpaqueId, ShopRecord, SupermarketLocation};
pub use report::Statistics;

// Report assembly, statistics and output artifacts

pub mod assemble;
pub mod statistics;
pub mod writer;

pub use self::assemble::assemble;
pub use self::statistics::{Bucket, DistanceSummary, Statistics};
pub use self::writer::{write_reports, ReportFile, ReportFiles, CSV_REPORT, JSON_REPORT};

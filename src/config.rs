// Run configuration

use std::path::{Path, PathBuf};

/// Locations of the inputs and outputs of a batch run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding one `.json` file per supermarket chain
    pub data_dir: PathBuf,

    /// JSON array of shop records
    pub shops_file: PathBuf,

    /// Directory the JSON and CSV reports are written to
    pub output_dir: PathBuf,

    /// Emit a progress event every this many resolved shops; 0 disables them
    pub progress_interval: usize,

    /// Worker threads for resolution; `None` uses one per core
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            shops_file: PathBuf::from("./shops.json"),
            output_dir: PathBuf::from("./outputs/distances"),
            progress_interval: 100,
            threads: None,
        }
    }
}

impl Config {
    /// Default layout rooted at `base` instead of the working directory
    pub fn rooted_at(base: &Path) -> Self {
        Self {
            data_dir: base.join("data"),
            shops_file: base.join("shops.json"),
            output_dir: base.join("outputs").join("distances"),
            ..Self::default()
        }
    }
}

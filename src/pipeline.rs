// Batch run: load, resolve, assemble, write

use crate::algorithms::linear_scan::LinearScan;
use crate::algorithms::resolve_all;
use crate::config::Config;
use crate::error::AnalysisError;
use crate::report::{assemble, write_reports, ReportFiles, Statistics};
use crate::utils::loader::{load_shops, load_supermarkets, ChainFileSummary};

/// What a completed run loaded and produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub chain_files: Vec<ChainFileSummary>,
    pub supermarkets_loaded: usize,
    pub shops_loaded: usize,
    pub shops_rejected: usize,
    pub statistics: Statistics,
    pub reports: ReportFiles,
}

/// Progress callback that logs every `interval` resolved shops
pub fn log_progress(interval: usize) -> impl Fn(usize, usize) + Sync {
    move |done, total| {
        if interval > 0 && (done % interval == 0 || done == total) {
            log::info!("Resolved {} of {} shops", done, total);
        }
    }
}

/// Runs the whole batch with progress logged every `config.progress_interval` shops
pub fn run(config: &Config) -> Result<RunSummary, AnalysisError> {
    run_with_progress(config, &log_progress(config.progress_interval))
}

/// Runs the whole batch.
///
/// Everything is loaded before resolution starts and nothing is written until
/// every shop is resolved; any error aborts before the reports are replaced.
pub fn run_with_progress(
    config: &Config,
    progress: &(dyn Fn(usize, usize) + Sync),
) -> Result<RunSummary, AnalysisError> {
    log::info!("Loading supermarkets from {}...", config.data_dir.display());
    let supermarkets = load_supermarkets(&config.data_dir)?;
    log::info!(
        "Loaded {} supermarkets from {} of {} chain files ({} records rejected)",
        supermarkets.supermarkets.len(),
        supermarkets.files_loaded(),
        supermarkets.files.len(),
        supermarkets.rejected()
    );

    log::info!("Loading shops from {}...", config.shops_file.display());
    let shops = load_shops(&config.shops_file)?;
    log::info!(
        "Loaded {} shops ({} rejected)",
        shops.shops.len(),
        shops.rejected
    );

    let chain_files = supermarkets.files;
    let resolver = LinearScan::new(supermarkets.supermarkets);

    log::info!(
        "Resolving nearest supermarket for {} shops against {} candidates...",
        shops.shops.len(),
        resolver.len()
    );
    let resolved = resolve_all(&resolver, &shops.shops, progress)?;
    let results = assemble(&shops.shops, &resolved);
    let statistics = Statistics::compute(&results);

    let reports = write_reports(&config.output_dir, &results)?;

    Ok(RunSummary {
        chain_files,
        supermarkets_loaded: resolver.len(),
        shops_loaded: shops.shops.len(),
        shops_rejected: shops.rejected,
        statistics,
        reports,
    })
}


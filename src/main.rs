use clap::Parser;
use nearest_supermarket::config::Config;
use nearest_supermarket::pipeline;
use nearest_supermarket::report::ReportFile;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "nearest_supermarket",
    about = "Nearest supermarket distance analysis for every shop"
)]
struct Cli {
    /// Directory with one JSON file per supermarket chain
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    /// JSON file with the shop records
    #[arg(long, default_value = "./shops.json")]
    shops: PathBuf,

    /// Directory the JSON and CSV reports are written to
    #[arg(long, default_value = "./outputs/distances")]
    output_dir: PathBuf,

    /// Log progress every N resolved shops (0 disables)
    #[arg(long, default_value = "100")]
    progress_every: usize,

    /// Worker threads for distance resolution (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            data_dir: cli.data_dir,
            shops_file: cli.shops,
            output_dir: cli.output_dir,
            progress_interval: cli.progress_every,
            threads: cli.threads,
        }
    }
}

fn print_artifact(label: &str, file: &ReportFile) {
    println!(
        "- {}: {} ({:.1} KB)",
        label,
        file.path.display(),
        file.bytes as f64 / 1024.0
    );
}

fn main() -> ExitCode {
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let config = Config::from(Cli::parse());

    if let Some(threads) = config.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            log::warn!("Could not configure {} worker threads: {}", threads, e);
        }
    }

    let start_time = std::time::Instant::now();
    let summary = match pipeline::run(&config) {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("Distance analysis failed: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let elapsed = start_time.elapsed();

    println!("\nDISTANCE ANALYSIS RESULTS (completed in {:.2?})", elapsed);
    println!("=======================================");
    println!(
        "Chain files: {} ({} skipped), supermarkets loaded: {}",
        summary.chain_files.len(),
        summary
            .chain_files
            .iter()
            .filter(|f| f.is_skipped())
            .count(),
        summary.supermarkets_loaded
    );
    println!(
        "Shops loaded: {} ({} rejected)",
        summary.shops_loaded, summary.shops_rejected
    );
    println!("Results saved to:");
    print_artifact("JSON", &summary.reports.json);
    print_artifact("CSV", &summary.reports.csv);
    println!();
    print!("{}", summary.statistics);

    ExitCode::SUCCESS
}

// JSON and CSV report output
//
// Both artifacts are rendered in memory and staged as temporary files next to
// their targets before either is renamed into place, so a failed run never
// leaves a truncated report behind. The two renames are not atomic as a pair:
// if the second fails, the CSV is already new while the JSON is still the
// previous run's.

use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::AnalysisError;
use crate::models::{DistanceResult, OrderCount};

pub const JSON_REPORT: &str = "all_shops_distances.json";
pub const CSV_REPORT: &str = "all_shops_distances.csv";

/// A written artifact
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Paths of both artifacts after a successful write
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFiles {
    pub json: ReportFile,
    pub csv: ReportFile,
}

// Flat CSV row; field order is the column order
#[derive(Serialize)]
struct CsvRow<'a> {
    community_leader_id: String,
    shop_name: &'a str,
    shop_address: &'a str,
    shop_lat: f64,
    shop_lng: f64,
    nearest_supermarket_id: String,
    nearest_supermarket_name: &'a str,
    nearest_supermarket_address: &'a str,
    nearest_supermarket_lat: f64,
    nearest_supermarket_lng: f64,
    nearest_supermarket_city: &'a str,
    nearest_supermarket_province: &'a str,
    distance_km: String,
    pedidos_en_direccion: OrderCount,
    total_pedidos_lider: OrderCount,
}

impl<'a> From<&'a DistanceResult> for CsvRow<'a> {
    fn from(result: &'a DistanceResult) -> Self {
        let nearest = &result.nearest_supermarket;
        Self {
            community_leader_id: result.community_leader_id.to_string(),
            shop_name: &result.shop_name,
            shop_address: &result.shop_address,
            shop_lat: result.shop_lat,
            shop_lng: result.shop_lng,
            nearest_supermarket_id: nearest.id.to_string(),
            nearest_supermarket_name: &nearest.name,
            nearest_supermarket_address: &nearest.address,
            nearest_supermarket_lat: nearest.location.lat,
            nearest_supermarket_lng: nearest.location.lng,
            nearest_supermarket_city: &nearest.city,
            nearest_supermarket_province: &nearest.province,
            distance_km: format!("{:.3}", result.distance_km),
            pedidos_en_direccion: result.pedidos_en_direccion,
            total_pedidos_lider: result.total_pedidos_lider,
        }
    }
}

/// Pretty-printed JSON array, distances at full precision
pub fn render_json(results: &[DistanceResult]) -> io::Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(results)?)
}

/// CSV with a header row; `distance_km` is rounded to 3 decimals and text
/// fields are quoted only when they contain a delimiter, quote or newline
pub fn render_csv(results: &[DistanceResult]) -> io::Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    for result in results {
        writer.serialize(CsvRow::from(result))?;
    }

    // serialize() only emits the header alongside the first row
    if results.is_empty() {
        writer.write_record(CSV_HEADER)?;
    }

    writer.into_inner().map_err(|e| e.into_error())
}

/// Column order of the CSV report
pub const CSV_HEADER: [&str; 15] = [
    "community_leader_id",
    "shop_name",
    "shop_address",
    "shop_lat",
    "shop_lng",
    "nearest_supermarket_id",
    "nearest_supermarket_name",
    "nearest_supermarket_address",
    "nearest_supermarket_lat",
    "nearest_supermarket_lng",
    "nearest_supermarket_city",
    "nearest_supermarket_province",
    "distance_km",
    "pedidos_en_direccion",
    "total_pedidos_lider",
];

fn stage(dir: &Path, target: &Path, bytes: &[u8]) -> Result<NamedTempFile, AnalysisError> {
    let mut staged =
        NamedTempFile::new_in(dir).map_err(|e| AnalysisError::write_failure(target, e))?;
    staged
        .write_all(bytes)
        .and_then(|_| staged.as_file().sync_all())
        .map_err(|e| AnalysisError::write_failure(target, e))?;
    Ok(staged)
}

/// Writes both reports into `output_dir`, creating it if needed and
/// replacing any previous reports.
pub fn write_reports(
    output_dir: &Path,
    results: &[DistanceResult],
) -> Result<ReportFiles, AnalysisError> {
    fs::create_dir_all(output_dir).map_err(|e| AnalysisError::write_failure(output_dir, e))?;

    let json_path = output_dir.join(JSON_REPORT);
    let csv_path = output_dir.join(CSV_REPORT);

    let json = render_json(results).map_err(|e| AnalysisError::write_failure(&json_path, e))?;
    let csv = render_csv(results).map_err(|e| AnalysisError::write_failure(&csv_path, e))?;

    let staged_json = stage(output_dir, &json_path, &json)?;
    let staged_csv = stage(output_dir, &csv_path, &csv)?;

    staged_csv
        .persist(&csv_path)
        .map_err(|e| AnalysisError::write_failure(&csv_path, e))?;
    staged_json
        .persist(&json_path)
        .map_err(|e| AnalysisError::write_failure(&json_path, e))?;

    log::info!(
        "Wrote {} results to {} and {}",
        results.len(),
        json_path.display(),
        csv_path.display()
    );

    Ok(ReportFiles {
        json: ReportFile {
            path: json_path,
            bytes: json.len() as u64,
        },
        csv: ReportFile {
            path: csv_path,
            bytes: csv.len() as u64,
        },
    })
}

// Loading and normalizing chain and shop datasets

use rayon::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AnalysisError, RecordError, SourceFault};
use crate::models::{Location, OpaqueId, ShopRecord, SupermarketLocation, UNKNOWN_RETAILER};

use super::coerce;

/// Outcome of loading one chain file
#[derive(Debug, Clone, PartialEq)]
pub struct ChainFileSummary {
    pub file_name: String,

    /// Records that passed validation
    pub loaded: usize,

    /// Records excluded for missing or invalid coordinates
    pub rejected: usize,

    /// Set when the whole file was skipped
    pub error: Option<String>,
}

impl ChainFileSummary {
    pub fn is_skipped(&self) -> bool {
        self.error.is_some()
    }
}

/// Every supermarket from every readable chain file, in file order
#[derive(Debug, Clone, Default)]
pub struct SupermarketDataset {
    pub supermarkets: Vec<SupermarketLocation>,
    pub files: Vec<ChainFileSummary>,
}

impl SupermarketDataset {
    /// Number of chain files that were read successfully
    pub fn files_loaded(&self) -> usize {
        self.files.iter().filter(|f| !f.is_skipped()).count()
    }

    pub fn rejected(&self) -> usize {
        self.files.iter().map(|f| f.rejected).sum()
    }
}

/// Shops from the shop file, in file order
#[derive(Debug, Clone, Default)]
pub struct ShopDataset {
    pub shops: Vec<ShopRecord>,
    pub rejected: usize,
}

/// Validates one chain record
pub fn parse_supermarket(record: &Value) -> Result<SupermarketLocation, RecordError> {
    let fields = record.as_object().ok_or(RecordError::NotAnObject)?;

    let lat = coerce::coordinate(fields.get("lat"), "lat")?;
    let lng = coerce::coordinate(fields.get("lng"), "lng")?;

    let name = fields
        .get("retailer")
        .and_then(|retailer| retailer.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_RETAILER);

    Ok(SupermarketLocation {
        id: OpaqueId::new(fields.get("id").cloned().unwrap_or(Value::Null)),
        name: name.to_string(),
        address: coerce::text(fields.get("address")),
        location: Location::new(lat, lng),
        city: coerce::text(fields.get("city")),
        province: coerce::text(fields.get("province")),
    })
}

/// Validates one shop record
pub fn parse_shop(record: &Value) -> Result<ShopRecord, RecordError> {
    let fields = record.as_object().ok_or(RecordError::NotAnObject)?;

    let lat = coerce::coordinate(
        fields.get("delivery_address_latitude"),
        "delivery_address_latitude",
    )?;
    let lng = coerce::coordinate(
        fields.get("delivery_address_longitude"),
        "delivery_address_longitude",
    )?;

    Ok(ShopRecord {
        community_leader_id: OpaqueId::new(
            fields
                .get("community_leader_id")
                .cloned()
                .unwrap_or(Value::Null),
        ),
        delivery_main_line: coerce::text(fields.get("delivery_address_main_line")),
        location: Location::new(lat, lng),
        pedidos_en_direccion: coerce::order_count(fields.get("pedidos_en_direccion")),
        total_pedidos_lider: coerce::order_count(fields.get("total_pedidos_lider")),
    })
}

/// Keeps the records that parse, counting the rest.
fn collect_valid<T>(
    source: &str,
    records: &[Value],
    parse: impl Fn(&Value) -> Result<T, RecordError>,
) -> (Vec<T>, usize) {
    let mut valid = Vec::with_capacity(records.len());
    let mut rejected = 0;

    for (index, record) in records.iter().enumerate() {
        match parse(record) {
            Ok(item) => valid.push(item),
            Err(e) => {
                log::debug!("{}: skipping record {}: {}", source, index, e);
                rejected += 1;
            }
        }
    }

    (valid, rejected)
}

/// Parses supermarkets from an in-memory list of records
pub fn parse_supermarkets(source: &str, records: &[Value]) -> (Vec<SupermarketLocation>, usize) {
    collect_valid(source, records, parse_supermarket)
}

/// Parses shops from an in-memory list of records
pub fn parse_shops(source: &str, records: &[Value]) -> ShopDataset {
    let (shops, rejected) = collect_valid(source, records, parse_shop);
    ShopDataset { shops, rejected }
}

// Read a file that must hold a top-level JSON array
fn read_records(path: &Path) -> Result<Vec<Value>, SourceFault> {
    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Array(records) => Ok(records),
        _ => Err(SourceFault::NotAnArray),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Lists the `.json` chain files of a directory, sorted by file name so the
/// concatenation order is the same on every run.
pub fn list_chain_files(dir: &Path) -> Result<Vec<PathBuf>, AnalysisError> {
    let entries = fs::read_dir(dir).map_err(|e| AnalysisError::unreadable(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| AnalysisError::unreadable(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort_by_key(|path| file_name(path));

    Ok(files)
}

/// Loads one chain file
pub fn load_chain_file(path: &Path) -> Result<(Vec<SupermarketLocation>, usize), AnalysisError> {
    let records = read_records(path).map_err(|fault| AnalysisError::unreadable(path, fault))?;
    Ok(parse_supermarkets(&file_name(path), &records))
}

/// Loads every chain file in `dir`.
///
/// Files are parsed in parallel and concatenated once, in sorted file order.
/// A file that cannot be read is logged and skipped; only an unreadable
/// directory fails the load.
pub fn load_supermarkets(dir: &Path) -> Result<SupermarketDataset, AnalysisError> {
    let paths = list_chain_files(dir)?;
    log::info!(
        "Found {} chain file(s) in {}: {:?}",
        paths.len(),
        dir.display(),
        paths.iter().map(|p| file_name(p)).collect::<Vec<_>>()
    );

    let loaded: Vec<(String, Result<(Vec<SupermarketLocation>, usize), AnalysisError>)> = paths
        .par_iter()
        .map(|path| (file_name(path), load_chain_file(path)))
        .collect();

    let dataset = loaded.into_iter().fold(
        SupermarketDataset::default(),
        |mut dataset, (file_name, result)| {
            let summary = match result {
                Ok((mut supermarkets, rejected)) => {
                    log::info!(
                        "{}: loaded {} supermarkets ({} rejected)",
                        file_name,
                        supermarkets.len(),
                        rejected
                    );
                    if rejected > 0 {
                        log::warn!(
                            "{}: {} record(s) without valid coordinates were skipped",
                            file_name,
                            rejected
                        );
                    }
                    let loaded = supermarkets.len();
                    dataset.supermarkets.append(&mut supermarkets);
                    ChainFileSummary {
                        file_name,
                        loaded,
                        rejected,
                        error: None,
                    }
                }
                Err(e) => {
                    log::warn!("Error reading {}: {}", file_name, e);
                    ChainFileSummary {
                        file_name,
                        loaded: 0,
                        rejected: 0,
                        error: Some(e.to_string()),
                    }
                }
            };
            dataset.files.push(summary);
            dataset
        },
    );

    Ok(dataset)
}

/// Loads the shop file. Unlike chain files, an unreadable shop file fails
/// the whole run.
pub fn load_shops(path: &Path) -> Result<ShopDataset, AnalysisError> {
    let records = read_records(path).map_err(|fault| AnalysisError::unreadable(path, fault))?;
    let dataset = parse_shops(&file_name(path), &records);

    if dataset.rejected > 0 {
        log::warn!(
            "{}: {} shop(s) without valid delivery coordinates were skipped",
            path.display(),
            dataset.rejected
        );
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_supermarket_full_record() {
        let record = json!({
            "id": 1001,
            "retailer": { "name": "Carrefour" },
            "address": "Av. Cabildo 2280",
            "city": "CABA",
            "province": "Buenos Aires",
            "zip": "1428",
            "phone": "0800-444-8484",
            "lat": "-34.5627",
            "lng": -58.4565
        });

        let supermarket = parse_supermarket(&record).unwrap();

        assert_eq!(supermarket.id, OpaqueId::from(1001u64));
        assert_eq!(supermarket.name, "Carrefour");
        assert_eq!(supermarket.address, "Av. Cabildo 2280");
        assert_eq!(supermarket.location, Location::new(-34.5627, -58.4565));
        assert_eq!(supermarket.city, "CABA");
        assert_eq!(supermarket.province, "Buenos Aires");
    }

    #[test]
    fn test_parse_supermarket_defaults() {
        let record = json!({ "lat": 1.0, "lng": 2.0 });

        let supermarket = parse_supermarket(&record).unwrap();

        assert!(supermarket.id.is_missing());
        assert_eq!(supermarket.name, UNKNOWN_RETAILER);
        assert_eq!(supermarket.address, "");
        assert_eq!(supermarket.city, "");
    }

    #[test]
    fn test_parse_supermarket_requires_coordinates() {
        assert_eq!(
            parse_supermarket(&json!({ "lat": 1.0 })),
            Err(RecordError::MissingField("lng"))
        );
        assert!(parse_supermarket(&json!({ "lat": "x", "lng": 2.0 })).is_err());
        assert_eq!(
            parse_supermarket(&json!("not a record")),
            Err(RecordError::NotAnObject)
        );
    }

    #[test]
    fn test_parse_shop_keeps_bad_order_counts() {
        let record = json!({
            "community_leader_id": "CL-1",
            "delivery_address_main_line": "Calle 5 123",
            "delivery_address_latitude": "-34.9",
            "delivery_address_longitude": "-57.95",
            "pedidos_en_direccion": "n/a",
            "total_pedidos_lider": "44"
        });

        let shop = parse_shop(&record).unwrap();

        assert_eq!(shop.community_leader_id, OpaqueId::from("CL-1"));
        assert_eq!(shop.delivery_main_line, "Calle 5 123");
        assert_eq!(shop.location, Location::new(-34.9, -57.95));
        assert_eq!(shop.pedidos_en_direccion, 0);
        assert_eq!(shop.total_pedidos_lider, 44);
    }

    #[test]
    fn test_invalid_latitude_excludes_exactly_one_shop() {
        let shop = |id: &str, lat: Value| {
            json!({
                "community_leader_id": id,
                "delivery_address_main_line": "x",
                "delivery_address_latitude": lat,
                "delivery_address_longitude": "-58.4",
                "pedidos_en_direccion": 1,
                "total_pedidos_lider": 2
            })
        };
        let good = vec![
            shop("a", json!("-34.6")),
            shop("b", json!("-34.7")),
            shop("c", json!("-34.8")),
        ];
        let mut with_bad = good.clone();
        with_bad[1] = shop("b", json!("not-a-number"));

        let baseline = parse_shops("shops.json", &good);
        let filtered = parse_shops("shops.json", &with_bad);

        assert_eq!(filtered.shops.len(), baseline.shops.len() - 1);
        assert_eq!(filtered.rejected, 1);
        let ids: Vec<String> = filtered.shops.iter().map(|s| s.display_name()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_parse_preserves_source_order() {
        let records = vec![
            json!({ "id": 3, "lat": 1, "lng": 1 }),
            json!({ "id": 1, "lat": 2, "lng": 2 }),
            json!({ "id": 2, "lat": 3, "lng": 3 }),
        ];

        let (supermarkets, rejected) = parse_supermarkets("chain.json", &records);

        assert_eq!(rejected, 0);
        let ids: Vec<String> = supermarkets.iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}

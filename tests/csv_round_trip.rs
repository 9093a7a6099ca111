// Reading the CSV report back reconstructs what was written
use nearest_supermarket::report::writer::{render_csv, CSV_HEADER};
use nearest_supermarket::{DistanceResult, Location, ShopRecord, SupermarketLocation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct Row {
    community_leader_id: String,
    shop_name: String,
    shop_address: String,
    shop_lat: f64,
    shop_lng: f64,
    nearest_supermarket_id: String,
    nearest_supermarket_name: String,
    nearest_supermarket_address: String,
    nearest_supermarket_lat: f64,
    nearest_supermarket_lng: f64,
    nearest_supermarket_city: String,
    nearest_supermarket_province: String,
    distance_km: String,
    pedidos_en_direccion: u64,
    total_pedidos_lider: u64,
}

const AWKWARD_TEXT: [&str; 6] = [
    "plain",
    "Calle 9, depto \"B\"",
    "coma, coma",
    "\"quoted\"",
    "",
    "línea\nnueva",
];

fn sample_results(count: usize) -> Vec<DistanceResult> {
    let mut rng = StdRng::seed_from_u64(2024);

    (0..count)
        .map(|i| {
            let text = |offset: usize| AWKWARD_TEXT[(i + offset) % AWKWARD_TEXT.len()];
            let shop = ShopRecord::new(
                format!("CL-{}", i).as_str(),
                Location::new(rng.gen_range(-55.0..-22.0), rng.gen_range(-73.0..-53.0)),
            )
            .with_address(text(0))
            .with_orders(rng.gen_range(0..50), rng.gen_range(0..500));
            let market = SupermarketLocation::new(
                i as u64,
                text(1),
                Location::new(rng.gen_range(-55.0..-22.0), rng.gen_range(-73.0..-53.0)),
            )
            .with_address(text(2), text(3), text(4));
            let distance = shop.location.distance_to(&market.location);
            DistanceResult::new(&shop, &market, distance)
        })
        .collect()
}

#[test]
fn test_csv_round_trip() -> Result<(), Box<dyn Error>> {
    let results = sample_results(60);
    let bytes = render_csv(&results)?;

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let header: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    assert_eq!(header, CSV_HEADER);

    let rows: Vec<Row> = reader.deserialize().collect::<Result<_, _>>()?;
    assert_eq!(rows.len(), results.len());

    for (row, result) in rows.iter().zip(&results) {
        let market = &result.nearest_supermarket;

        assert_eq!(row.community_leader_id, result.community_leader_id.to_string());
        assert_eq!(row.shop_name, result.shop_name);
        assert_eq!(row.shop_address, result.shop_address);
        assert_eq!(row.shop_lat, result.shop_lat);
        assert_eq!(row.shop_lng, result.shop_lng);
        assert_eq!(row.nearest_supermarket_id, market.id.to_string());
        assert_eq!(row.nearest_supermarket_name, market.name);
        assert_eq!(row.nearest_supermarket_address, market.address);
        assert_eq!(row.nearest_supermarket_lat, market.location.lat);
        assert_eq!(row.nearest_supermarket_lng, market.location.lng);
        assert_eq!(row.nearest_supermarket_city, market.city);
        assert_eq!(row.nearest_supermarket_province, market.province);
        assert_eq!(row.pedidos_en_direccion, result.pedidos_en_direccion);
        assert_eq!(row.total_pedidos_lider, result.total_pedidos_lider);

        // Exactly three decimals, and the same value at that precision
        let (_, decimals) = row.distance_km.split_once('.').expect("decimal point");
        assert_eq!(decimals.len(), 3);
        let parsed: f64 = row.distance_km.parse()?;
        assert!((parsed - result.distance_km).abs() <= 0.0005 + 1e-12);
    }
    Ok(())
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nearest_supermarket::{
    algorithms::resolve_all, report::assemble, report::Statistics, LinearScan, Location,
    NearestResolver, ShopRecord, SupermarketLocation,
};

fn benchmark_nearest(c: &mut Criterion) {
    // Create benchmark data
    let (supermarkets, shops) = create_benchmark_data();
    let resolver = LinearScan::new(supermarkets);

    // Benchmark a single nearest-neighbor query
    c.bench_function("linear_scan_nearest", |b| {
        b.iter(|| resolver.nearest(black_box(&shops[0].location)))
    });

    // Benchmark the full resolve + assemble + statistics pass
    c.bench_function("resolve_all_shops", |b| {
        b.iter(|| {
            let resolved = resolve_all(&resolver, black_box(&shops), &|_, _| {}).unwrap();
            let results = assemble(&shops, &resolved);
            Statistics::compute(&results)
        })
    });
}

// Supermarkets on a grid over Greater Buenos Aires, shops scattered between them
fn create_benchmark_data() -> (Vec<SupermarketLocation>, Vec<ShopRecord>) {
    let mut supermarkets = Vec::new();
    for i in 0..40 {
        for j in 0..50 {
            let location = Location::new(-35.0 + i as f64 * 0.02, -58.9 + j as f64 * 0.02);
            let id = (i * 50 + j) as u64;
            supermarkets.push(SupermarketLocation::new(
                id,
                format!("Store {}", id),
                location,
            ));
        }
    }

    let shops = (0..500u64)
        .map(|k| {
            let lat = -35.0 + (k % 37) as f64 * 0.021;
            let lng = -58.9 + (k % 43) as f64 * 0.023;
            ShopRecord::new(k, Location::new(lat, lng)).with_orders(k % 30, k % 90)
        })
        .collect();

    (supermarkets, shops)
}

criterion_group!(benches, benchmark_nearest);
criterion_main!(benches);

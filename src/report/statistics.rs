// Summary statistics over a distance report

use crate::models::{DistanceResult, Kilometers, OrderCount};
use std::fmt;

/// Count of shops in one band, with its share of all resolved shops
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub label: &'static str,
    pub count: usize,
    pub percent: f64,
}

impl Bucket {
    fn new(label: &'static str, count: usize, total: usize) -> Self {
        Self {
            label,
            count,
            percent: percent_of(count, total),
        }
    }
}

/// Extremes and mean of the nearest-supermarket distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSummary {
    pub min_km: Kilometers,
    pub max_km: Kilometers,
    pub mean_km: Kilometers,
}

/// Statistics computed over the full result set
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Number of resolved shops; every percentage is relative to this
    pub total_shops: usize,

    /// `None` when the report is empty
    pub distance: Option<DistanceSummary>,

    /// ≤1 km, >1–5 km, >5 km
    pub distance_buckets: [Bucket; 3],

    pub orders_at_address_total: OrderCount,
    pub orders_by_leader_total: OrderCount,
    pub orders_at_address_mean: f64,
    pub orders_by_leader_mean: f64,

    /// By `pedidos_en_direccion`: ≤5, 6–20, >20
    pub activity_buckets: [Bucket; 3],
}

fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

fn mean_of(sum: f64, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        sum / total as f64
    }
}

impl Statistics {
    pub fn compute(results: &[DistanceResult]) -> Self {
        let total = results.len();

        let distance = if results.is_empty() {
            None
        } else {
            let mut min_km = f64::INFINITY;
            let mut max_km = f64::NEG_INFINITY;
            let mut sum_km = 0.0;
            for result in results {
                min_km = min_km.min(result.distance_km);
                max_km = max_km.max(result.distance_km);
                sum_km += result.distance_km;
            }
            Some(DistanceSummary {
                min_km,
                max_km,
                mean_km: mean_of(sum_km, total),
            })
        };

        let (mut close, mut medium, mut far) = (0, 0, 0);
        let (mut low, mut moderate, mut high) = (0, 0, 0);
        let mut orders_at_address_total: OrderCount = 0;
        let mut orders_by_leader_total: OrderCount = 0;

        for result in results {
            match result.distance_km {
                d if d <= 1.0 => close += 1,
                d if d <= 5.0 => medium += 1,
                _ => far += 1,
            }

            match result.pedidos_en_direccion {
                0..=5 => low += 1,
                6..=20 => moderate += 1,
                _ => high += 1,
            }

            orders_at_address_total =
                orders_at_address_total.saturating_add(result.pedidos_en_direccion);
            orders_by_leader_total =
                orders_by_leader_total.saturating_add(result.total_pedidos_lider);
        }

        Self {
            total_shops: total,
            distance,
            distance_buckets: [
                Bucket::new("≤1km", close, total),
                Bucket::new("1-5km", medium, total),
                Bucket::new(">5km", far, total),
            ],
            orders_at_address_total,
            orders_by_leader_total,
            orders_at_address_mean: mean_of(orders_at_address_total as f64, total),
            orders_by_leader_mean: mean_of(orders_by_leader_total as f64, total),
            activity_buckets: [
                Bucket::new("≤5 orders", low, total),
                Bucket::new("6-20 orders", moderate, total),
                Bucket::new(">20 orders", high, total),
            ],
        }
    }
}

fn write_buckets(f: &mut fmt::Formatter<'_>, buckets: &[Bucket]) -> fmt::Result {
    for bucket in buckets {
        writeln!(
            f,
            "- {}: {} shops ({:.1}%)",
            bucket.label, bucket.count, bucket.percent
        )?;
    }
    Ok(())
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Shops processed: {}", self.total_shops)?;

        writeln!(f, "\nDISTANCE STATISTICS:")?;
        writeln!(f, "=============================")?;
        match &self.distance {
            Some(summary) => {
                writeln!(f, "- Minimum distance: {:.3}km", summary.min_km)?;
                writeln!(f, "- Maximum distance: {:.3}km", summary.max_km)?;
                writeln!(f, "- Average distance: {:.3}km", summary.mean_km)?;
            }
            None => writeln!(f, "- No shops were resolved")?,
        }

        writeln!(f, "\nDISTANCE DISTRIBUTION:")?;
        writeln!(f, "=============================")?;
        write_buckets(f, &self.distance_buckets)?;

        writeln!(f, "\nORDER STATISTICS:")?;
        writeln!(f, "=============================")?;
        writeln!(
            f,
            "- Total orders at address: {}",
            self.orders_at_address_total
        )?;
        writeln!(f, "- Total orders by leader: {}", self.orders_by_leader_total)?;
        writeln!(
            f,
            "- Average orders at address: {:.1}",
            self.orders_at_address_mean
        )?;
        writeln!(
            f,
            "- Average orders by leader: {:.1}",
            self.orders_by_leader_mean
        )?;

        writeln!(f, "\nACTIVITY DISTRIBUTION:")?;
        writeln!(f, "=============================")?;
        write_buckets(f, &self.activity_buckets)
    }
}

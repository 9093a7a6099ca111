// Joins shops with their resolved supermarkets and orders the report

use crate::algorithms::Nearest;
use crate::models::{DistanceResult, ShopRecord};
use std::cmp::Ordering;

/// Builds one result per shop, sorted by ascending distance.
///
/// `resolved[i]` must belong to `shops[i]`. The sort is stable, so shops at
/// equal distance stay in input order.
pub fn assemble(shops: &[ShopRecord], resolved: &[Nearest<'_>]) -> Vec<DistanceResult> {
    debug_assert_eq!(shops.len(), resolved.len());

    let mut results: Vec<DistanceResult> = shops
        .iter()
        .zip(resolved)
        .map(|(shop, nearest)| DistanceResult::new(shop, nearest.supermarket, nearest.distance_km))
        .collect();

    results.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });

    results
}

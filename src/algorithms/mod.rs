pub mod linear_scan;

use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::AnalysisError;
use crate::models::{Kilometers, Location, ShopRecord, SupermarketLocation};

/// A resolved nearest supermarket
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a> {
    pub supermarket: &'a SupermarketLocation,
    pub distance_km: Kilometers,
}

/// Trait for nearest-supermarket resolvers
///
/// Implementations must return the first candidate, in candidate order, among
/// those at the minimum distance, so that every resolver yields the same report.
pub trait NearestResolver: Sync {
    /// Find the supermarket closest to `from`
    fn nearest(&self, from: &Location) -> Result<Nearest<'_>, AnalysisError>;

    /// The candidate collection, in canonical order
    fn candidates(&self) -> &[SupermarketLocation];
}

/// Resolve every shop in parallel.
///
/// Output order matches `shops`. `progress` is called once per resolved shop
/// with `(resolved_so_far, total)`; calls may arrive from any worker thread.
pub fn resolve_all<'a, R>(
    resolver: &'a R,
    shops: &[ShopRecord],
    progress: &(dyn Fn(usize, usize) + Sync),
) -> Result<Vec<Nearest<'a>>, AnalysisError>
where
    R: NearestResolver + ?Sized,
{
    if !shops.is_empty() && resolver.candidates().is_empty() {
        return Err(AnalysisError::NoCandidates { shops: shops.len() });
    }

    let total = shops.len();
    let done = AtomicUsize::new(0);

    shops
        .par_iter()
        .map(|shop| -> Result<Nearest<'a>, AnalysisError> {
            let nearest = resolver.nearest(&shop.location)?;
            progress(done.fetch_add(1, Ordering::Relaxed) + 1, total);
            Ok(nearest)
        })
        .collect()
}

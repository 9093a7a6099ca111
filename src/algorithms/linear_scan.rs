// Exhaustive nearest-neighbor search over all supermarkets

use crate::algorithms::{Nearest, NearestResolver};
use crate::error::AnalysisError;
use crate::models::{Location, SupermarketLocation};

/// Brute-force resolver: O(supermarkets) per query.
///
/// Holds the supermarket collection read-only, so one instance can be shared
/// by every worker thread.
#[derive(Debug, Clone, Default)]
pub struct LinearScan {
    supermarkets: Vec<SupermarketLocation>,
}

impl LinearScan {
    /// Creates a resolver over the given candidates, keeping their order
    pub fn new(supermarkets: Vec<SupermarketLocation>) -> Self {
        Self { supermarkets }
    }

    pub fn len(&self) -> usize {
        self.supermarkets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supermarkets.is_empty()
    }
}

impl NearestResolver for LinearScan {
    fn nearest(&self, from: &Location) -> Result<Nearest<'_>, AnalysisError> {
        let mut best: Option<Nearest<'_>> = None;

        for supermarket in &self.supermarkets {
            let distance_km = from.distance_to(&supermarket.location);

            // Strict improvement only: ties keep the earlier candidate, and a
            // NaN distance never becomes or replaces the minimum
            let improves = match &best {
                Some(current) => distance_km < current.distance_km,
                None => !distance_km.is_nan(),
            };
            if improves {
                best = Some(Nearest {
                    supermarket,
                    distance_km,
                });
            }
        }

        best.ok_or(AnalysisError::NoCandidates { shops: 1 })
    }

    fn candidates(&self) -> &[SupermarketLocation] {
        &self.supermarkets
    }
}

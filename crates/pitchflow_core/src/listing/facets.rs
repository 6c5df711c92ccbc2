//! Per-value counts used by stat cards and filter chips.

use crate::listing::criteria::Listable;
use std::collections::{BTreeMap, BTreeSet};

/// Counts records per value of `dimension` over the unfiltered source.
///
/// A record with several values counts once for each distinct value.
pub fn facet_counts<R: Listable>(source: &[R], dimension: R::Dimension) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in source {
        let distinct = record
            .dimension_values(dimension)
            .into_iter()
            .collect::<BTreeSet<_>>();
        for value in distinct {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

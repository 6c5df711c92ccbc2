//! Pure filter/sort/paginate pipeline.

use crate::listing::criteria::{Listable, ListingCriteria, SortDirection, SortKey, SortValue};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// One derived page of a listing.
#[derive(Debug)]
pub struct ListingPage<'a, R> {
    /// Revealed records, at most `cursor` of them.
    pub items: Vec<&'a R>,
    /// Records passing the predicate before pagination.
    pub filtered_count: usize,
    pub has_more: bool,
}

impl<R> ListingPage<'_, R> {
    pub fn revealed(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Lower-cases the query; whitespace-only input means "no text filter".
pub fn normalize_query(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    Some(text.to_lowercase())
}

/// Returns whether `record` passes the text and category predicate.
pub fn matches<R: Listable>(
    record: &R,
    criteria: &ListingCriteria<R::Dimension, R::SortField>,
) -> bool {
    let needle = normalize_query(&criteria.text);
    matches_normalized(record, needle.as_deref(), &criteria.filters)
}

/// Applies the predicate in source order.
pub fn filter_records<'a, R: Listable>(
    source: &'a [R],
    criteria: &ListingCriteria<R::Dimension, R::SortField>,
) -> Vec<&'a R> {
    let needle = normalize_query(&criteria.text);
    source
        .iter()
        .filter(|record| matches_normalized(*record, needle.as_deref(), &criteria.filters))
        .collect()
}

/// Stable sort on one field.
pub fn sort_records<R: Listable>(records: &mut [&R], key: SortKey<R::SortField>) {
    records.sort_by(|left, right| {
        compare_values(
            left.sort_value(key.field),
            right.sort_value(key.field),
            key.direction,
        )
    });
}

/// Filters, sorts and reveals the first `cursor` records.
pub fn query<'a, R: Listable>(
    source: &'a [R],
    criteria: &ListingCriteria<R::Dimension, R::SortField>,
    cursor: usize,
) -> ListingPage<'a, R> {
    let mut items = filter_records(source, criteria);
    if let Some(key) = criteria.sort {
        sort_records(&mut items, key);
    }

    let filtered_count = items.len();
    items.truncate(cursor);

    ListingPage {
        items,
        filtered_count,
        has_more: cursor < filtered_count,
    }
}

fn matches_normalized<R: Listable>(
    record: &R,
    needle: Option<&str>,
    filters: &BTreeMap<R::Dimension, BTreeSet<String>>,
) -> bool {
    if let Some(needle) = needle {
        let text_hit = record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle));
        if !text_hit {
            return false;
        }
    }

    filters.iter().all(|(dimension, accepted)| {
        accepted.is_empty()
            || record
                .dimension_values(*dimension)
                .iter()
                .any(|value| accepted.contains(*value))
    })
}

fn compare_values(left: SortValue<'_>, right: SortValue<'_>, direction: SortDirection) -> Ordering {
    // Missing values stay at the end regardless of direction.
    match (left, right) {
        (SortValue::Missing, SortValue::Missing) => Ordering::Equal,
        (SortValue::Missing, _) => Ordering::Greater,
        (_, SortValue::Missing) => Ordering::Less,
        (left, right) => {
            let ordering = compare_present(left, right);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

fn compare_present(left: SortValue<'_>, right: SortValue<'_>) -> Ordering {
    match (left, right) {
        (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(&b),
        (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
        (SortValue::Number(_), SortValue::Text(_)) => Ordering::Less,
        (SortValue::Text(_), SortValue::Number(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

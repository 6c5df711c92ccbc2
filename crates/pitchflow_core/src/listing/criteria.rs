//! Query criteria and the record contract the engine reads through.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// Value a record exposes for one sort field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
    /// Field not set on this record; always ordered last.
    Missing,
}

impl<'a> From<Option<&'a str>> for SortValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(SortValue::Missing, SortValue::Text)
    }
}

impl From<Option<f64>> for SortValue<'_> {
    fn from(value: Option<f64>) -> Self {
        value.map_or(SortValue::Missing, SortValue::Number)
    }
}

/// Record shape consumed by the listing engine.
///
/// Implementations only project fields; they never decide matching rules.
pub trait Listable {
    /// Categorical filter axes (domain, stage, status, ...).
    type Dimension: Copy + Ord + Debug;
    /// Fields a page can sort by.
    type SortField: Copy + Eq + Debug;

    /// Opaque id, unique within the collection.
    fn listing_id(&self) -> &str;
    /// Text fields searched by the free-text query (OR across fields).
    fn search_fields(&self) -> Vec<&str>;
    /// Values of one dimension. Multi-valued dimensions return several;
    /// unset dimensions return none.
    fn dimension_values(&self, dimension: Self::Dimension) -> Vec<&str>;
    fn sort_value(&self, field: Self::SortField) -> SortValue<'_>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> SortKey<F> {
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// User-entered listing state.
///
/// An empty accepted-value set for a dimension means "accept all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCriteria<D: Ord, F> {
    pub text: String,
    pub filters: BTreeMap<D, BTreeSet<String>>,
    pub sort: Option<SortKey<F>>,
}

impl<D: Ord, F> Default for ListingCriteria<D, F> {
    fn default() -> Self {
        Self {
            text: String::new(),
            filters: BTreeMap::new(),
            sort: None,
        }
    }
}

impl<D: Ord, F> ListingCriteria<D, F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_filter<I, V>(mut self, dimension: D, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.filters
            .insert(dimension, values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_sort(mut self, sort: SortKey<F>) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Accepted values for one dimension, if any are selected.
    pub fn accepted(&self, dimension: &D) -> Option<&BTreeSet<String>> {
        self.filters.get(dimension).filter(|values| !values.is_empty())
    }
}

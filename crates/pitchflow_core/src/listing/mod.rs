//! In-memory listing query engine.
//!
//! # Responsibility
//! - Derive the visible page of a listing (marketplace, inbox, tasks,
//!   investments, ...) from a full collection plus live search, filter and
//!   sort state.
//! - Keep every derivation pure; the only state lives in [`view::ListingView`].
//!
//! # Invariants
//! - The derived page is always a subset of the source, by identity.
//! - Without a sort key, source order is preserved.
//! - Sorting is stable; equal keys keep source order in both directions.
//! - `has_more` holds exactly when `cursor < filtered_count`.
//! - Any change to search/filter/sort input resets the cursor to the
//!   page's initial size.

pub mod criteria;
pub mod engine;
pub mod facets;
pub mod records;
pub mod view;

pub use criteria::{Listable, ListingCriteria, SortDirection, SortKey, SortValue};
pub use engine::{filter_records, matches, normalize_query, query, sort_records, ListingPage};
pub use facets::facet_counts;
pub use view::{ListingView, PagePreset, PagingPolicy};

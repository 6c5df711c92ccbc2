//! Per-page listing controller.
//!
//! # Responsibility
//! - Own one page's source collection, criteria and reveal cursor.
//! - Route every input change through a cursor reset.
//!
//! # Invariants
//! - `cursor` starts at `policy.initial` and is reset to it by every setter.
//! - `load_more` never moves the cursor past the filtered count.

use crate::listing::criteria::{Listable, ListingCriteria, SortKey};
use crate::listing::engine::{filter_records, query, ListingPage};
use log::debug;
use std::collections::BTreeSet;

/// Reveal policy for one page type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingPolicy {
    pub initial: usize,
    pub increment: usize,
}

impl PagingPolicy {
    /// Both sizes are clamped to at least one record.
    pub fn new(initial: usize, increment: usize) -> Self {
        Self {
            initial: initial.max(1),
            increment: increment.max(1),
        }
    }
}

/// Listing pages with their fixed reveal sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagePreset {
    Marketplace,
    PitchInbox,
    Tasks,
    Investments,
    Milestones,
    TeamMembers,
    InvestorDirectory,
}

impl PagePreset {
    pub fn policy(self) -> PagingPolicy {
        match self {
            Self::Marketplace => PagingPolicy::new(8, 4),
            Self::PitchInbox => PagingPolicy::new(10, 5),
            Self::Tasks => PagingPolicy::new(10, 10),
            Self::Investments => PagingPolicy::new(12, 6),
            Self::Milestones => PagingPolicy::new(10, 5),
            Self::TeamMembers => PagingPolicy::new(12, 6),
            Self::InvestorDirectory => PagingPolicy::new(6, 6),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Marketplace => "marketplace",
            Self::PitchInbox => "pitch_inbox",
            Self::Tasks => "tasks",
            Self::Investments => "investments",
            Self::Milestones => "milestones",
            Self::TeamMembers => "team_members",
            Self::InvestorDirectory => "investor_directory",
        }
    }
}

/// Stateful listing for one page.
pub struct ListingView<R: Listable> {
    source: Vec<R>,
    criteria: ListingCriteria<R::Dimension, R::SortField>,
    policy: PagingPolicy,
    cursor: usize,
}

impl<R: Listable> ListingView<R> {
    pub fn new(source: Vec<R>, policy: PagingPolicy) -> Self {
        Self {
            source,
            criteria: ListingCriteria::default(),
            policy,
            cursor: policy.initial,
        }
    }

    pub fn for_preset(source: Vec<R>, preset: PagePreset) -> Self {
        Self::new(source, preset.policy())
    }

    pub fn source(&self) -> &[R] {
        &self.source
    }

    pub fn criteria(&self) -> &ListingCriteria<R::Dimension, R::SortField> {
        &self.criteria
    }

    pub fn policy(&self) -> PagingPolicy {
        self.policy
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.criteria.text = text.into();
        self.reset_cursor();
    }

    /// Replaces the accepted values of one dimension. An empty set clears it.
    pub fn set_filter<I, V>(&mut self, dimension: R::Dimension, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect::<BTreeSet<_>>();
        if values.is_empty() {
            self.criteria.filters.remove(&dimension);
        } else {
            self.criteria.filters.insert(dimension, values);
        }
        self.reset_cursor();
    }

    /// Single-select chip semantics: `Some` selects exactly one value,
    /// `None` accepts all.
    pub fn select_only(&mut self, dimension: R::Dimension, value: Option<&str>) {
        match value {
            Some(value) => self.set_filter(dimension, [value]),
            None => self.set_filter(dimension, Vec::<String>::new()),
        }
    }

    /// Multi-select checkbox semantics.
    pub fn toggle_filter_value(&mut self, dimension: R::Dimension, value: &str) {
        let values = self.criteria.filters.entry(dimension).or_default();
        if !values.remove(value) {
            values.insert(value.to_string());
        }
        if values.is_empty() {
            self.criteria.filters.remove(&dimension);
        }
        self.reset_cursor();
    }

    /// Drops every category filter; the text query is kept.
    pub fn clear_filters(&mut self) {
        self.criteria.filters.clear();
        self.reset_cursor();
    }

    pub fn set_sort(&mut self, sort: Option<SortKey<R::SortField>>) {
        self.criteria.sort = sort;
        self.reset_cursor();
    }

    /// Swaps in a freshly loaded collection, keeping criteria.
    pub fn replace_source(&mut self, source: Vec<R>) {
        self.source = source;
        self.reset_cursor();
    }

    /// Reveals the next increment; returns the new cursor.
    pub fn load_more(&mut self) -> usize {
        let filtered_count = self.filtered_count();
        self.cursor = (self.cursor + self.policy.increment).min(filtered_count);
        self.cursor
    }

    pub fn filtered_count(&self) -> usize {
        filter_records(&self.source, &self.criteria).len()
    }

    /// Recomputes the visible page from scratch.
    pub fn page(&self) -> ListingPage<'_, R> {
        let page = query(&self.source, &self.criteria, self.cursor);
        debug!(
            "event=listing_page module=listing status=ok source={} filtered={} revealed={} query_len={} filters={}",
            self.source.len(),
            page.filtered_count,
            page.revealed(),
            self.criteria.text.chars().count(),
            self.criteria.filters.len()
        );
        page
    }

    fn reset_cursor(&mut self) {
        self.cursor = self.policy.initial;
    }
}

#[cfg(test)]
mod tests {
    use super::{PagePreset, PagingPolicy};

    #[test]
    fn policy_never_allows_zero_sizes() {
        let policy = PagingPolicy::new(0, 0);
        assert_eq!(policy, PagingPolicy::new(1, 1));
    }

    #[test]
    fn marketplace_reveals_eight_then_four() {
        assert_eq!(PagePreset::Marketplace.policy(), PagingPolicy::new(8, 4));
    }
}

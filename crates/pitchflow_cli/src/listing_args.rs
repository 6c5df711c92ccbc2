//! Search, filter, sort and "load more" flags shared by listing commands.

use anyhow::{anyhow, Result};
use clap::Args;
use pitchflow_core::listing::records::{
    InvestmentDimension, InvestmentSort, InvestorDimension, InvestorSort, MemberDimension,
    MemberSort, MilestoneDimension, MilestoneSort, PitchDimension, PitchSort, StartupDimension,
    StartupSort, TaskDimension, TaskSort,
};
use pitchflow_core::listing::Listable;
use pitchflow_core::model::investment::Investment;
use pitchflow_core::model::investor::InvestorProfile;
use pitchflow_core::model::milestone::Milestone;
use pitchflow_core::model::pitch::PitchRequest;
use pitchflow_core::model::startup::Startup;
use pitchflow_core::model::task::Task;
use pitchflow_core::model::team::TeamMember;
use pitchflow_core::{ListingView, PagePreset, SortKey};
use std::collections::BTreeMap;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Free-text search, case-insensitive
    #[arg(long, short = 's', default_value = "")]
    pub search: String,

    /// Category filter as `dimension=value`; repeat to accept several values
    #[arg(long = "filter", short = 'f', value_name = "DIMENSION=VALUE")]
    pub filters: Vec<String>,

    /// Sort field
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Number of "load more" steps after the first page
    #[arg(long, default_value_t = 0)]
    pub more: usize,
}

/// Command-line names of a record's filter dimensions and sort fields.
pub trait CliListing: Listable {
    fn parse_dimension(name: &str) -> Option<Self::Dimension>;
    fn parse_sort(name: &str) -> Option<Self::SortField>;
}

impl ListArgs {
    pub fn apply<R: CliListing>(&self, view: &mut ListingView<R>) -> Result<()> {
        view.set_text(self.search.as_str());

        let mut grouped: BTreeMap<R::Dimension, Vec<String>> = BTreeMap::new();
        for raw in &self.filters {
            let (name, value) = raw
                .split_once('=')
                .ok_or_else(|| anyhow!("filter `{raw}` must look like dimension=value"))?;
            let dimension = R::parse_dimension(name.trim())
                .ok_or_else(|| anyhow!("unknown filter dimension `{}`", name.trim()))?;
            grouped
                .entry(dimension)
                .or_default()
                .push(value.trim().to_string());
        }
        for (dimension, values) in grouped {
            view.set_filter(dimension, values);
        }

        if let Some(name) = &self.sort {
            let field =
                R::parse_sort(name.trim()).ok_or_else(|| anyhow!("unknown sort field `{name}`"))?;
            let key = if self.desc {
                SortKey::descending(field)
            } else {
                SortKey::ascending(field)
            };
            view.set_sort(Some(key));
        }

        for _ in 0..self.more {
            view.load_more();
        }
        Ok(())
    }
}

/// Task board ordered by due date, earliest first, until `--sort` says
/// otherwise.
pub fn task_board(tasks: Vec<Task>) -> ListingView<Task> {
    let mut view = ListingView::for_preset(tasks, PagePreset::Tasks);
    view.set_sort(Some(SortKey::ascending(TaskSort::DueDate)));
    view
}

impl CliListing for Startup {
    fn parse_dimension(name: &str) -> Option<StartupDimension> {
        match name {
            "domain" => Some(StartupDimension::Domain),
            "stage" => Some(StartupDimension::Stage),
            _ => None,
        }
    }

    fn parse_sort(name: &str) -> Option<StartupSort> {
        match name {
            "name" => Some(StartupSort::Name),
            "execution" => Some(StartupSort::ExecutionScore),
            "validation" => Some(StartupSort::ValidationScore),
            "team-size" => Some(StartupSort::TeamSize),
            "funding" => Some(StartupSort::Funding),
            _ => None,
        }
    }
}

impl CliListing for PitchRequest {
    fn parse_dimension(name: &str) -> Option<PitchDimension> {
        match name {
            "status" => Some(PitchDimension::Status),
            "domain" => Some(PitchDimension::Domain),
            "stage" => Some(PitchDimension::Stage),
            _ => None,
        }
    }

    fn parse_sort(name: &str) -> Option<PitchSort> {
        match name {
            "name" => Some(PitchSort::StartupName),
            "execution" => Some(PitchSort::ExecutionScore),
            _ => None,
        }
    }
}

impl CliListing for Task {
    fn parse_dimension(name: &str) -> Option<TaskDimension> {
        match name {
            "status" => Some(TaskDimension::Status),
            "priority" => Some(TaskDimension::Priority),
            "milestone" => Some(TaskDimension::Milestone),
            _ => None,
        }
    }

    fn parse_sort(name: &str) -> Option<TaskSort> {
        match name {
            "due" => Some(TaskSort::DueDate),
            "priority" => Some(TaskSort::Priority),
            "status" => Some(TaskSort::Status),
            _ => None,
        }
    }
}

impl CliListing for Investment {
    fn parse_dimension(name: &str) -> Option<InvestmentDimension> {
        match name {
            "status" => Some(InvestmentDimension::Status),
            "domain" => Some(InvestmentDimension::Domain),
            "stage" => Some(InvestmentDimension::Stage),
            _ => None,
        }
    }

    fn parse_sort(name: &str) -> Option<InvestmentSort> {
        match name {
            "execution" => Some(InvestmentSort::ExecutionScore),
            "validation" => Some(InvestmentSort::ValidationScore),
            "amount" => Some(InvestmentSort::Amount),
            _ => None,
        }
    }
}

impl CliListing for Milestone {
    fn parse_dimension(name: &str) -> Option<MilestoneDimension> {
        match name {
            "status" => Some(MilestoneDimension::Status),
            "priority" => Some(MilestoneDimension::Priority),
            _ => None,
        }
    }

    fn parse_sort(name: &str) -> Option<MilestoneSort> {
        match name {
            "due" => Some(MilestoneSort::DueDate),
            "progress" => Some(MilestoneSort::Progress),
            _ => None,
        }
    }
}

impl CliListing for TeamMember {
    fn parse_dimension(name: &str) -> Option<MemberDimension> {
        match name {
            "role" => Some(MemberDimension::Role),
            "status" => Some(MemberDimension::Status),
            "department" => Some(MemberDimension::Department),
            _ => None,
        }
    }

    fn parse_sort(name: &str) -> Option<MemberSort> {
        match name {
            "name" => Some(MemberSort::Name),
            "performance" => Some(MemberSort::PerformanceScore),
            _ => None,
        }
    }
}

impl CliListing for InvestorProfile {
    fn parse_dimension(name: &str) -> Option<InvestorDimension> {
        match name {
            "kind" => Some(InvestorDimension::Kind),
            "stage" => Some(InvestorDimension::Stage),
            "domain" => Some(InvestorDimension::Domain),
            _ => None,
        }
    }

    fn parse_sort(name: &str) -> Option<InvestorSort> {
        match name {
            "name" => Some(InvestorSort::Name),
            "portfolio" => Some(InvestorSort::PortfolioSize),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{task_board, ListArgs};
    use pitchflow_core::fixtures;
    use pitchflow_core::listing::facet_counts;
    use pitchflow_core::listing::records::StartupDimension;
    use pitchflow_core::{ListingView, PagePreset};

    fn args(filters: &[&str], sort: Option<&str>, more: usize) -> ListArgs {
        ListArgs {
            search: String::new(),
            filters: filters.iter().map(|raw| raw.to_string()).collect(),
            sort: sort.map(str::to_string),
            desc: false,
            more,
        }
    }

    #[test]
    fn repeated_dimension_accepts_several_values() {
        let mut view =
            ListingView::for_preset(fixtures::marketplace_startups(), PagePreset::Marketplace);
        args(&["domain=saas", "domain=fintech"], Some("name"), 0)
            .apply(&mut view)
            .unwrap();

        let domains = facet_counts(view.source(), StartupDimension::Domain);
        let expected = domains.get("saas").copied().unwrap_or(0)
            + domains.get("fintech").copied().unwrap_or(0);
        assert_eq!(expected, 3);
        assert_eq!(view.page().filtered_count, expected);
    }

    #[test]
    fn unknown_names_are_rejected() {
        let mut view =
            ListingView::for_preset(fixtures::marketplace_startups(), PagePreset::Marketplace);
        assert!(args(&["colour=red"], None, 0).apply(&mut view).is_err());
        assert!(args(&["domain"], None, 0).apply(&mut view).is_err());
        assert!(args(&[], Some("age"), 0).apply(&mut view).is_err());
    }

    #[test]
    fn load_more_steps_reveal_everything() {
        let mut view =
            ListingView::for_preset(fixtures::marketplace_startups(), PagePreset::Marketplace);
        args(&[], None, 1).apply(&mut view).unwrap();
        let page = view.page();
        assert_eq!(page.revealed(), 12);
        assert!(!page.has_more);
    }

    #[test]
    fn task_board_defaults_to_earliest_due_date() {
        let mut view = task_board(fixtures::team_tasks());
        let earliest = view
            .source()
            .iter()
            .filter_map(|task| task.due_date.clone())
            .min();
        assert_eq!(view.page().items[0].due_date, earliest);

        args(&[], Some("priority"), 0).apply(&mut view).unwrap();
        assert!(view
            .page()
            .items
            .windows(2)
            .all(|pair| pair[0].priority.rank() <= pair[1].priority.rank()));
    }
}

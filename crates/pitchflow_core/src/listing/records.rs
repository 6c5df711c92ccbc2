//! `Listable` projections for every listed entity.
//!
//! Search fields follow what each page searches: marketplace cards match
//! name, description and domain; the pitch inbox matches startup name and
//! summary; the task board matches title, description and tags.

use crate::listing::criteria::{Listable, SortValue};
use crate::model::investment::Investment;
use crate::model::investor::InvestorProfile;
use crate::model::milestone::Milestone;
use crate::model::pitch::PitchRequest;
use crate::model::startup::Startup;
use crate::model::task::Task;
use crate::model::team::TeamMember;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StartupDimension {
    Domain,
    Stage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupSort {
    Name,
    ExecutionScore,
    ValidationScore,
    TeamSize,
    Funding,
}

impl Listable for Startup {
    type Dimension = StartupDimension;
    type SortField = StartupSort;

    fn listing_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str(), self.domain.as_str()]
    }

    fn dimension_values(&self, dimension: StartupDimension) -> Vec<&str> {
        match dimension {
            StartupDimension::Domain => vec![self.domain.as_str()],
            StartupDimension::Stage => vec![self.stage.as_str()],
        }
    }

    fn sort_value(&self, field: StartupSort) -> SortValue<'_> {
        match field {
            StartupSort::Name => SortValue::Text(self.name.as_str()),
            StartupSort::ExecutionScore => SortValue::Number(f64::from(self.execution_score)),
            StartupSort::ValidationScore => SortValue::Number(f64::from(self.validation_score)),
            StartupSort::TeamSize => SortValue::Number(f64::from(self.team_size)),
            StartupSort::Funding => self.funding_in_lakhs().into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PitchDimension {
    Status,
    Domain,
    Stage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchSort {
    StartupName,
    ExecutionScore,
}

impl Listable for PitchRequest {
    type Dimension = PitchDimension;
    type SortField = PitchSort;

    fn listing_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.startup_name.as_str(), self.pitch_summary.as_str()]
    }

    fn dimension_values(&self, dimension: PitchDimension) -> Vec<&str> {
        match dimension {
            PitchDimension::Status => vec![self.status.as_str()],
            PitchDimension::Domain => vec![self.domain.as_str()],
            PitchDimension::Stage => vec![self.stage.as_str()],
        }
    }

    fn sort_value(&self, field: PitchSort) -> SortValue<'_> {
        match field {
            PitchSort::StartupName => SortValue::Text(self.startup_name.as_str()),
            PitchSort::ExecutionScore => self.execution_score.map(f64::from).into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskDimension {
    Status,
    Priority,
    Milestone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSort {
    DueDate,
    Priority,
    Status,
}

impl Listable for Task {
    type Dimension = TaskDimension;
    type SortField = TaskSort;

    fn listing_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn dimension_values(&self, dimension: TaskDimension) -> Vec<&str> {
        match dimension {
            TaskDimension::Status => vec![self.status.as_str()],
            TaskDimension::Priority => vec![self.priority.as_str()],
            TaskDimension::Milestone => self.milestone.as_deref().into_iter().collect(),
        }
    }

    fn sort_value(&self, field: TaskSort) -> SortValue<'_> {
        match field {
            TaskSort::DueDate => self.due_date.as_deref().into(),
            TaskSort::Priority => SortValue::Number(f64::from(self.priority.rank())),
            TaskSort::Status => SortValue::Number(f64::from(self.status.rank())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InvestmentDimension {
    Status,
    Domain,
    Stage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentSort {
    ExecutionScore,
    ValidationScore,
    Amount,
}

impl Listable for Investment {
    type Dimension = InvestmentDimension;
    type SortField = InvestmentSort;

    fn listing_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.domain.as_str()]
    }

    fn dimension_values(&self, dimension: InvestmentDimension) -> Vec<&str> {
        match dimension {
            InvestmentDimension::Status => vec![self.status.as_str()],
            InvestmentDimension::Domain => vec![self.domain.as_str()],
            InvestmentDimension::Stage => vec![self.stage.as_str()],
        }
    }

    fn sort_value(&self, field: InvestmentSort) -> SortValue<'_> {
        match field {
            InvestmentSort::ExecutionScore => SortValue::Number(f64::from(self.execution_score)),
            InvestmentSort::ValidationScore => {
                SortValue::Number(f64::from(self.validation_score))
            }
            InvestmentSort::Amount => self.amount_in_lakhs().into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MilestoneDimension {
    Status,
    Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneSort {
    DueDate,
    Progress,
}

impl Listable for Milestone {
    type Dimension = MilestoneDimension;
    type SortField = MilestoneSort;

    fn listing_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn dimension_values(&self, dimension: MilestoneDimension) -> Vec<&str> {
        match dimension {
            MilestoneDimension::Status => vec![self.status.as_str()],
            MilestoneDimension::Priority => vec![self.priority.as_str()],
        }
    }

    fn sort_value(&self, field: MilestoneSort) -> SortValue<'_> {
        match field {
            MilestoneSort::DueDate => self.due_date.as_deref().into(),
            MilestoneSort::Progress => SortValue::Number(f64::from(self.progress)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MemberDimension {
    Role,
    Status,
    Department,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberSort {
    Name,
    PerformanceScore,
}

impl Listable for TeamMember {
    type Dimension = MemberDimension;
    type SortField = MemberSort;

    fn listing_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn dimension_values(&self, dimension: MemberDimension) -> Vec<&str> {
        match dimension {
            MemberDimension::Role => vec![self.role.as_str()],
            MemberDimension::Status => vec![self.status.as_str()],
            MemberDimension::Department => vec![self.department.as_str()],
        }
    }

    fn sort_value(&self, field: MemberSort) -> SortValue<'_> {
        match field {
            MemberSort::Name => SortValue::Text(self.name.as_str()),
            MemberSort::PerformanceScore => SortValue::Number(f64::from(self.performance_score)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InvestorDimension {
    Kind,
    Stage,
    /// Multi-valued: matches when any preferred domain is accepted.
    Domain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestorSort {
    Name,
    PortfolioSize,
}

impl Listable for InvestorProfile {
    type Dimension = InvestorDimension;
    type SortField = InvestorSort;

    fn listing_id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn dimension_values(&self, dimension: InvestorDimension) -> Vec<&str> {
        match dimension {
            InvestorDimension::Kind => vec![self.kind.as_str()],
            InvestorDimension::Stage => vec![self.preferred_stage.as_str()],
            InvestorDimension::Domain => {
                self.preferred_domains.iter().map(String::as_str).collect()
            }
        }
    }

    fn sort_value(&self, field: InvestorSort) -> SortValue<'_> {
        match field {
            InvestorSort::Name => SortValue::Text(self.name.as_str()),
            InvestorSort::PortfolioSize => SortValue::Number(f64::from(self.portfolio_size)),
        }
    }
}

//! Startup profile model.
//!
//! # Responsibility
//! - Define the canonical startup record shown on the marketplace and the
//!   founder profile pages.
//! - Provide partial-update semantics via [`StartupPatch`].
//!
//! # Invariants
//! - `id` and `name` are non-empty.
//! - `execution_score` and `validation_score` are percentages.

use crate::model::catalog::Stage;
use crate::model::money::parse_lakhs;
use crate::model::validation::{require_percent, require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Canonical startup record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Startup {
    pub id: String,
    /// Owner user id; one startup per founder.
    pub founder_id: String,
    pub founder_name: Option<String>,
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Domain id such as `saas` or `fintech`.
    pub domain: String,
    pub stage: Stage,
    /// ISO date (`YYYY-MM-DD`) or year.
    pub founded_date: Option<String>,
    pub location: String,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub team_size: u32,
    pub looking_for: Vec<String>,
    /// Join code handed to team members (`TF-XXXXXX`).
    pub team_id: String,
    pub execution_score: u8,
    pub validation_score: u8,
    pub milestones_completed: u32,
    pub total_milestones: u32,
    /// Display amount, e.g. `₹2.5Cr`.
    pub funding_raised: Option<String>,
    pub investor_count: u32,
}

impl Startup {
    /// Creates a startup with onboarding defaults.
    pub fn new(
        id: impl Into<String>,
        founder_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            founder_id: founder_id.into(),
            founder_name: None,
            name: name.into(),
            tagline: String::new(),
            description: String::new(),
            domain: String::new(),
            stage: Stage::Idea,
            founded_date: None,
            location: String::new(),
            website: None,
            linkedin: None,
            team_size: 1,
            looking_for: Vec::new(),
            team_id: String::new(),
            execution_score: 50,
            validation_score: 50,
            milestones_completed: 0,
            total_milestones: 0,
            funding_raised: None,
            investor_count: 0,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("name", &self.name)?;
        require_percent("execution_score", self.execution_score)?;
        require_percent("validation_score", self.validation_score)?;
        Ok(())
    }

    /// Funding raised normalized to lakhs.
    pub fn funding_in_lakhs(&self) -> Option<f64> {
        self.funding_raised.as_deref().and_then(parse_lakhs)
    }

    /// Milestone completion ratio in `0.0..=1.0`.
    pub fn milestone_completion(&self) -> f64 {
        if self.total_milestones == 0 {
            return 0.0;
        }
        f64::from(self.milestones_completed.min(self.total_milestones))
            / f64::from(self.total_milestones)
    }
}

/// Partial update for a startup profile. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupPatch {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub domain: Option<String>,
    pub stage: Option<Stage>,
    pub founded_date: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub team_size: Option<u32>,
    pub looking_for: Option<Vec<String>>,
    pub execution_score: Option<u8>,
    pub validation_score: Option<u8>,
}

impl StartupPatch {
    pub fn apply_to(&self, startup: &mut Startup) {
        if let Some(value) = &self.name {
            startup.name = value.clone();
        }
        if let Some(value) = &self.tagline {
            startup.tagline = value.clone();
        }
        if let Some(value) = &self.description {
            startup.description = value.clone();
        }
        if let Some(value) = &self.domain {
            startup.domain = value.clone();
        }
        if let Some(value) = self.stage {
            startup.stage = value;
        }
        if let Some(value) = &self.founded_date {
            startup.founded_date = Some(value.clone());
        }
        if let Some(value) = &self.location {
            startup.location = value.clone();
        }
        if let Some(value) = &self.website {
            startup.website = Some(value.clone());
        }
        if let Some(value) = &self.linkedin {
            startup.linkedin = Some(value.clone());
        }
        if let Some(value) = self.team_size {
            startup.team_size = value;
        }
        if let Some(value) = &self.looking_for {
            startup.looking_for = value.clone();
        }
        if let Some(value) = self.execution_score {
            startup.execution_score = value;
        }
        if let Some(value) = self.validation_score {
            startup.validation_score = value;
        }
    }
}

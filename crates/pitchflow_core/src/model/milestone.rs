//! Founder milestone model.

use crate::model::catalog::Priority;
use crate::model::validation::{
    require_iso_date, require_progress, require_text, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Milestone lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    /// Planned, not yet started.
    Pending,
    /// Created from the dashboard quick-add; accepted for work.
    Active,
    InProgress,
    Completed,
}

impl MilestoneStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "active" => Some(Self::Active),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Canonical milestone record owned by one startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub startup_id: String,
    pub title: String,
    pub description: String,
    pub status: MilestoneStatus,
    pub priority: Priority,
    /// Percent complete.
    pub progress: u8,
    pub due_date: Option<String>,
    pub tasks_total: u32,
    pub tasks_completed: u32,
}

impl Milestone {
    pub fn new(
        id: impl Into<String>,
        startup_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            startup_id: startup_id.into(),
            title: title.into(),
            description: String::new(),
            status: MilestoneStatus::Active,
            priority: Priority::Medium,
            progress: 0,
            due_date: None,
            tasks_total: 0,
            tasks_completed: 0,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("title", &self.title)?;
        require_progress(self.progress)?;
        require_iso_date("due_date", self.due_date.as_deref())?;
        Ok(())
    }
}

/// Partial update for a milestone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestonePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<MilestoneStatus>,
    pub priority: Option<Priority>,
    pub progress: Option<u8>,
    pub due_date: Option<String>,
    pub tasks_total: Option<u32>,
    pub tasks_completed: Option<u32>,
}

impl MilestonePatch {
    pub fn apply_to(&self, milestone: &mut Milestone) {
        if let Some(value) = &self.title {
            milestone.title = value.clone();
        }
        if let Some(value) = &self.description {
            milestone.description = value.clone();
        }
        if let Some(value) = self.status {
            milestone.status = value;
        }
        if let Some(value) = self.priority {
            milestone.priority = value;
        }
        if let Some(value) = self.progress {
            milestone.progress = value;
        }
        if let Some(value) = &self.due_date {
            milestone.due_date = Some(value.clone());
        }
        if let Some(value) = self.tasks_total {
            milestone.tasks_total = value;
        }
        if let Some(value) = self.tasks_completed {
            milestone.tasks_completed = value;
        }
    }
}

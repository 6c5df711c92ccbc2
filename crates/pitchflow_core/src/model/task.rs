//! Team task model.
//!
//! # Invariants
//! - `done` (dashboard quick action) and `completed` (task board) are the
//!   same state; only `completed` is ever written.
//! - `title` is non-empty and `progress` is a percentage.

use crate::model::catalog::Priority;
use crate::model::validation::{
    require_iso_date, require_progress, require_text, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Overdue,
    #[serde(alias = "done")]
    Completed,
}

impl TaskStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Overdue => "overdue",
            Self::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "todo" => Some(Self::Todo),
            "in_progress" => Some(Self::InProgress),
            "overdue" => Some(Self::Overdue),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Board ordering: most pressing first.
    pub fn rank(self) -> u8 {
        match self {
            Self::Overdue => 0,
            Self::InProgress => 1,
            Self::Todo => 2,
            Self::Completed => 3,
        }
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    /// Title of the milestone this task rolls up into.
    pub milestone: Option<String>,
    /// ISO date (`YYYY-MM-DD`); lexicographic order is chronological.
    pub due_date: Option<String>,
    pub assigned_to: Option<String>,
    pub project_id: Option<String>,
    pub tags: Vec<String>,
    pub progress: u8,
    pub estimated_hours: u32,
    pub logged_hours: u32,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            priority: Priority::Medium,
            status: TaskStatus::Todo,
            milestone: None,
            due_date: None,
            assigned_to: None,
            project_id: None,
            tags: Vec::new(),
            progress: 0,
            estimated_hours: 0,
            logged_hours: 0,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("title", &self.title)?;
        require_progress(self.progress)?;
        require_iso_date("due_date", self.due_date.as_deref())?;
        Ok(())
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// Partial update for a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
    pub milestone: Option<String>,
    pub due_date: Option<String>,
    pub assigned_to: Option<String>,
    pub tags: Option<Vec<String>>,
    pub progress: Option<u8>,
    pub logged_hours: Option<u32>,
}

impl TaskPatch {
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(value) = &self.title {
            task.title = value.clone();
        }
        if let Some(value) = &self.description {
            task.description = value.clone();
        }
        if let Some(value) = self.priority {
            task.priority = value;
        }
        if let Some(value) = self.status {
            task.status = value;
        }
        if let Some(value) = &self.milestone {
            task.milestone = Some(value.clone());
        }
        if let Some(value) = &self.due_date {
            task.due_date = Some(value.clone());
        }
        if let Some(value) = &self.assigned_to {
            task.assigned_to = Some(value.clone());
        }
        if let Some(value) = &self.tags {
            task.tags = value.clone();
        }
        if let Some(value) = self.progress {
            task.progress = value;
        }
        if let Some(value) = self.logged_hours {
            task.logged_hours = value;
        }
    }
}

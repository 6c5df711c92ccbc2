//! Task board use-cases for founders and team members.
//!
//! # Invariants
//! - `mark_done` writes `completed` with progress 100.
//! - New tasks start `todo` with zero progress.

use crate::model::catalog::Priority;
use crate::model::task::{Task, TaskPatch, TaskStatus};
use crate::model::validation::ValidationError;
use crate::repo::task_repo::TaskRepository;
use crate::repo::{new_record_id, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum TaskServiceError {
    Invalid(ValidationError),
    TaskNotFound(String),
    Repo(RepoError),
    InconsistentState(&'static str),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent task state: {details}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { id, .. } => Self::TaskNotFound(id),
            RepoError::Validation(err) => Self::Invalid(err),
            other => Self::Repo(other),
        }
    }
}

/// Input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub milestone: Option<String>,
    pub due_date: Option<String>,
    pub assigned_to: Option<String>,
    pub project_id: Option<String>,
    pub tags: Vec<String>,
    pub estimated_hours: u32,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority: Priority::Medium,
            milestone: None,
            due_date: None,
            assigned_to: None,
            project_id: None,
            tags: Vec::new(),
            estimated_hours: 0,
        }
    }
}

pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn my_tasks(&self, user_id: &str) -> Result<Vec<Task>, TaskServiceError> {
        Ok(self.repo.list_assigned_to(user_id)?)
    }

    pub fn project_tasks(&self, project_id: &str) -> Result<Vec<Task>, TaskServiceError> {
        Ok(self.repo.list_by_project(project_id)?)
    }

    pub fn create_task(&self, input: NewTask) -> Result<Task, TaskServiceError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(TaskServiceError::Invalid(ValidationError::EmptyField(
                "title",
            )));
        }

        let mut task = Task::new(new_record_id(), title);
        task.description = input.description;
        task.priority = input.priority;
        task.milestone = input.milestone;
        task.due_date = input.due_date;
        task.assigned_to = input.assigned_to;
        task.project_id = input.project_id;
        task.tags = input.tags;
        task.estimated_hours = input.estimated_hours;

        let id = self.repo.create_task(&task)?;
        log::info!("event=task.create module=service status=ok");
        self.repo
            .get_task(&id)?
            .ok_or(TaskServiceError::InconsistentState(
                "created task not found in read-back",
            ))
    }

    /// Dashboard quick action.
    pub fn mark_done(&self, id: &str) -> Result<Task, TaskServiceError> {
        let patch = TaskPatch {
            status: Some(TaskStatus::Completed),
            progress: Some(100),
            ..TaskPatch::default()
        };
        let task = self.repo.update_task(id, &patch)?;
        log::info!("event=task.mark_done module=service status=ok");
        Ok(task)
    }

    pub fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task, TaskServiceError> {
        Ok(self.repo.update_task(id, patch)?)
    }

    pub fn delete(&self, id: &str) -> Result<bool, TaskServiceError> {
        Ok(self.repo.delete_task(id)?)
    }
}

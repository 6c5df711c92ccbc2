//! Milestone use-cases for the founder dashboard.

use crate::model::milestone::{Milestone, MilestonePatch, MilestoneStatus};
use crate::model::validation::ValidationError;
use crate::repo::milestone_repo::MilestoneRepository;
use crate::repo::{new_record_id, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum MilestoneServiceError {
    Invalid(ValidationError),
    MilestoneNotFound(String),
    Repo(RepoError),
    InconsistentState(&'static str),
}

impl Display for MilestoneServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::MilestoneNotFound(id) => write!(f, "milestone not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent milestone state: {details}")
            }
        }
    }
}

impl Error for MilestoneServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for MilestoneServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { id, .. } => Self::MilestoneNotFound(id),
            RepoError::Validation(err) => Self::Invalid(err),
            other => Self::Repo(other),
        }
    }
}

pub struct MilestoneService<R: MilestoneRepository> {
    repo: R,
}

impl<R: MilestoneRepository> MilestoneService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Quick-add from the dashboard. The title is trimmed and must not be
    /// empty; the milestone starts `active`.
    pub fn add_milestone(
        &self,
        startup_id: &str,
        title: &str,
    ) -> Result<Milestone, MilestoneServiceError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(MilestoneServiceError::Invalid(ValidationError::EmptyField(
                "title",
            )));
        }

        let milestone = Milestone::new(new_record_id(), startup_id, title);
        let id = self.repo.create_milestone(&milestone)?;
        log::info!("event=milestone.add module=service status=ok");
        self.repo
            .get_milestone(&id)?
            .ok_or(MilestoneServiceError::InconsistentState(
                "created milestone not found in read-back",
            ))
    }

    /// Moves a milestone to `status`. Completing also pins progress at 100.
    pub fn set_status(
        &self,
        id: &str,
        status: MilestoneStatus,
    ) -> Result<Milestone, MilestoneServiceError> {
        let patch = MilestonePatch {
            status: Some(status),
            progress: (status == MilestoneStatus::Completed).then_some(100),
            ..MilestonePatch::default()
        };
        Ok(self.repo.update_milestone(id, &patch)?)
    }

    pub fn update(
        &self,
        id: &str,
        patch: &MilestonePatch,
    ) -> Result<Milestone, MilestoneServiceError> {
        Ok(self.repo.update_milestone(id, patch)?)
    }

    /// Milestones of one startup, newest first.
    pub fn list(&self, startup_id: &str) -> Result<Vec<Milestone>, MilestoneServiceError> {
        Ok(self.repo.list_by_startup(startup_id)?)
    }

    pub fn delete(&self, id: &str) -> Result<bool, MilestoneServiceError> {
        Ok(self.repo.delete_milestone(id)?)
    }
}

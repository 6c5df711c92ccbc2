//! Team roster use-cases: invitations, approvals and removal.

use crate::model::team::{MemberStatus, TeamMember};
use crate::model::validation::ValidationError;
use crate::repo::team_repo::TeamMemberRepository;
use crate::repo::{new_record_id, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum TeamServiceError {
    Invalid(ValidationError),
    MemberNotFound(String),
    /// Only pending members can be approved.
    NotPending(String),
    Repo(RepoError),
    InconsistentState(&'static str),
}

impl Display for TeamServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::MemberNotFound(id) => write!(f, "team member not found: {id}"),
            Self::NotPending(id) => write!(f, "team member {id} is not pending approval"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent team state: {details}"),
        }
    }
}

impl Error for TeamServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TeamServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { id, .. } => Self::MemberNotFound(id),
            RepoError::Validation(err) => Self::Invalid(err),
            other => Self::Repo(other),
        }
    }
}

/// Invitation details for a new member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invitation {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub user_id: Option<String>,
}

pub struct TeamService<R: TeamMemberRepository> {
    repo: R,
}

impl<R: TeamMemberRepository> TeamService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Members that have been approved into the team.
    pub fn approved_members(&self, startup_id: &str) -> Result<Vec<TeamMember>, TeamServiceError> {
        Ok(self
            .repo
            .list_by_startup(startup_id, Some(MemberStatus::Active))?)
    }

    pub fn all_members(&self, startup_id: &str) -> Result<Vec<TeamMember>, TeamServiceError> {
        Ok(self.repo.list_by_startup(startup_id, None)?)
    }

    /// Adds a member awaiting approval.
    pub fn invite(
        &self,
        startup_id: &str,
        invitation: Invitation,
    ) -> Result<TeamMember, TeamServiceError> {
        let mut member = TeamMember::new(
            new_record_id(),
            startup_id,
            invitation.name.trim(),
            invitation.email.trim(),
        );
        member.role = invitation.role;
        member.department = invitation.department;
        member.user_id = invitation.user_id;

        let id = self.repo.create_member(&member)?;
        log::info!("event=team.invite module=service status=ok");
        self.repo
            .get_member(&id)?
            .ok_or(TeamServiceError::InconsistentState(
                "invited member not found in read-back",
            ))
    }

    pub fn approve(&self, id: &str) -> Result<TeamMember, TeamServiceError> {
        let member = self
            .repo
            .get_member(id)?
            .ok_or_else(|| TeamServiceError::MemberNotFound(id.to_string()))?;
        if member.status != MemberStatus::Pending {
            return Err(TeamServiceError::NotPending(id.to_string()));
        }
        let approved = self.repo.update_member_status(id, MemberStatus::Active)?;
        log::info!("event=team.approve module=service status=ok");
        Ok(approved)
    }

    pub fn remove(&self, id: &str) -> Result<bool, TeamServiceError> {
        Ok(self.repo.delete_member(id)?)
    }
}

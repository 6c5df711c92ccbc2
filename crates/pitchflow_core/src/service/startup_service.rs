//! Startup onboarding and profile service.
//!
//! # Responsibility
//! - Onboard a founder's startup with sane defaults and a team join code.
//! - Update the profile through partial patches.
//! - Serve the marketplace listing source.
//!
//! # Invariants
//! - A founder owns at most one startup.
//! - Team codes have the shape `TF-XXXXXX` (uppercase alphanumerics).

use crate::model::catalog::Stage;
use crate::model::identity::DemoUser;
use crate::model::startup::{Startup, StartupPatch};
use crate::model::validation::ValidationError;
use crate::repo::startup_repo::StartupRepository;
use crate::repo::{new_record_id, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const TEAM_CODE_PREFIX: &str = "TF-";
const TEAM_CODE_LEN: usize = 6;

#[derive(Debug)]
pub enum StartupServiceError {
    /// The founder already owns the contained startup id.
    AlreadyOnboarded(String),
    Invalid(ValidationError),
    StartupNotFound(String),
    Repo(RepoError),
    InconsistentState(&'static str),
}

impl Display for StartupServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyOnboarded(id) => write!(f, "founder already owns startup {id}"),
            Self::Invalid(err) => write!(f, "{err}"),
            Self::StartupNotFound(id) => write!(f, "startup not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent startup state: {details}"),
        }
    }
}

impl Error for StartupServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for StartupServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { id, .. } => Self::StartupNotFound(id),
            RepoError::Validation(err) => Self::Invalid(err),
            other => Self::Repo(other),
        }
    }
}

/// Input of the onboarding flow. Unset optional fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingForm {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub domain: String,
    pub stage: Option<Stage>,
    pub founded_date: Option<String>,
    pub location: String,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub team_size: Option<u32>,
    pub looking_for: Vec<String>,
}

pub struct StartupService<R: StartupRepository> {
    repo: R,
}

impl<R: StartupRepository> StartupService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates the founder's startup.
    pub fn onboard(
        &self,
        founder: &DemoUser,
        form: OnboardingForm,
    ) -> Result<Startup, StartupServiceError> {
        if let Some(existing) = self.repo.find_by_founder(&founder.id)? {
            log::warn!(
                "event=startup.onboard module=service status=error reason=already_onboarded"
            );
            return Err(StartupServiceError::AlreadyOnboarded(existing.id));
        }

        let name = form.name.trim();
        if name.is_empty() {
            return Err(StartupServiceError::Invalid(ValidationError::EmptyField(
                "name",
            )));
        }

        let mut startup = Startup::new(new_record_id(), founder.id.clone(), name);
        startup.founder_name = Some(founder.name.clone());
        startup.tagline = form.tagline.trim().to_string();
        startup.description = form.description.trim().to_string();
        startup.domain = form.domain.trim().to_string();
        startup.stage = form.stage.unwrap_or(Stage::Idea);
        startup.founded_date = form.founded_date;
        startup.location = form.location.trim().to_string();
        startup.website = form.website;
        startup.linkedin = form.linkedin;
        startup.team_size = form.team_size.unwrap_or(1).max(1);
        startup.looking_for = form.looking_for;
        startup.team_id = generate_team_code();

        let id = self.repo.create_startup(&startup)?;
        log::info!("event=startup.onboard module=service status=ok");
        self.repo
            .get_startup(&id)?
            .ok_or(StartupServiceError::InconsistentState(
                "created startup not found in read-back",
            ))
    }

    pub fn update_profile(
        &self,
        id: &str,
        patch: &StartupPatch,
    ) -> Result<Startup, StartupServiceError> {
        let updated = self.repo.update_startup(id, patch)?;
        log::info!("event=startup.update module=service status=ok");
        Ok(updated)
    }

    pub fn get_for_founder(&self, founder_id: &str) -> Result<Option<Startup>, StartupServiceError> {
        Ok(self.repo.find_by_founder(founder_id)?)
    }

    /// All persisted startups, newest first.
    pub fn marketplace(&self) -> Result<Vec<Startup>, StartupServiceError> {
        Ok(self.repo.list_startups()?)
    }
}

/// Generates a join code such as `TF-3FA9C1`.
pub fn generate_team_code() -> String {
    let raw = Uuid::new_v4().simple().to_string().to_ascii_uppercase();
    format!("{TEAM_CODE_PREFIX}{}", &raw[..TEAM_CODE_LEN])
}

#[cfg(test)]
mod tests {
    use super::generate_team_code;

    #[test]
    fn team_code_has_expected_shape() {
        let code = generate_team_code();
        assert_eq!(code.len(), 9);
        assert!(code.starts_with("TF-"));
        assert!(code[3..]
            .chars()
            .all(|ch| ch.is_ascii_digit() || ch.is_ascii_uppercase()));
    }
}

//! Pitch workflow: founders send pitches, investors respond.
//!
//! # Invariants
//! - Sending requires at least one investor; duplicate ids are collapsed and
//!   each remaining investor receives exactly one `pending` request.
//! - One send writes all of its requests or none of them.
//! - Only a `pending` request can be accepted or rejected, and only once.
//! - Pitch text is never written to logs.

use crate::model::pitch::{PitchRequest, PitchStatus};
use crate::model::startup::Startup;
use crate::model::validation::ValidationError;
use crate::repo::pitch_repo::PitchRepository;
use crate::repo::{new_record_id, RepoError};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum PitchServiceError {
    NoInvestorsSelected,
    Invalid(ValidationError),
    PitchNotFound(String),
    InvalidTransition { from: PitchStatus, to: PitchStatus },
    Repo(RepoError),
}

impl Display for PitchServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoInvestorsSelected => write!(f, "select at least one investor"),
            Self::Invalid(err) => write!(f, "{err}"),
            Self::PitchNotFound(id) => write!(f, "pitch request not found: {id}"),
            Self::InvalidTransition { from, to } => write!(
                f,
                "pitch request cannot move from {} to {}",
                from.as_str(),
                to.as_str()
            ),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PitchServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for PitchServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { id, .. } => Self::PitchNotFound(id),
            RepoError::Validation(err) => Self::Invalid(err),
            other => Self::Repo(other),
        }
    }
}

/// Founder-provided pitch content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PitchDraft {
    pub summary: String,
    pub ask_amount: String,
    pub equity: String,
}

pub struct PitchService<R: PitchRepository> {
    repo: R,
}

impl<R: PitchRepository> PitchService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Sends `draft` to every selected investor.
    pub fn send_pitch(
        &self,
        startup: &Startup,
        investor_ids: &[String],
        draft: &PitchDraft,
    ) -> Result<Vec<PitchRequest>, PitchServiceError> {
        let recipients = unique_recipients(investor_ids);
        if recipients.is_empty() {
            return Err(PitchServiceError::NoInvestorsSelected);
        }
        if draft.summary.trim().is_empty() {
            return Err(PitchServiceError::Invalid(ValidationError::EmptyField(
                "pitch_summary",
            )));
        }

        let requests = recipients
            .into_iter()
            .map(|investor_id| PitchRequest {
                id: new_record_id(),
                startup_id: Some(startup.id.clone()),
                startup_name: startup.name.clone(),
                founder_name: startup.founder_name.clone().unwrap_or_default(),
                investor_id: Some(investor_id.to_string()),
                domain: startup.domain.clone(),
                stage: startup.stage,
                pitch_summary: draft.summary.trim().to_string(),
                ask_amount: draft.ask_amount.trim().to_string(),
                equity: draft.equity.trim().to_string(),
                status: PitchStatus::Pending,
                execution_score: Some(startup.execution_score),
                validation_score: Some(startup.validation_score),
            })
            .collect::<Vec<_>>();
        self.repo.create_pitches(&requests)?;

        log::info!(
            "event=pitch.send module=service status=ok recipients={}",
            requests.len()
        );
        Ok(requests)
    }

    /// Accepts or rejects a pending request.
    pub fn respond(
        &self,
        pitch_id: &str,
        decision: PitchStatus,
    ) -> Result<PitchRequest, PitchServiceError> {
        let current = self
            .repo
            .get_pitch(pitch_id)?
            .ok_or_else(|| PitchServiceError::PitchNotFound(pitch_id.to_string()))?;
        if !current.status.can_move_to(decision) {
            log::warn!(
                "event=pitch.respond module=service status=error from={} to={}",
                current.status.as_str(),
                decision.as_str()
            );
            return Err(PitchServiceError::InvalidTransition {
                from: current.status,
                to: decision,
            });
        }

        let updated = self.repo.update_pitch_status(pitch_id, decision)?;
        log::info!(
            "event=pitch.respond module=service status=ok decision={}",
            decision.as_str()
        );
        Ok(updated)
    }

    /// Requests addressed to one investor, newest first.
    pub fn inbox(&self, investor_id: &str) -> Result<Vec<PitchRequest>, PitchServiceError> {
        Ok(self.repo.list_for_investor(investor_id)?)
    }

    pub fn sent_by(&self, startup_id: &str) -> Result<Vec<PitchRequest>, PitchServiceError> {
        Ok(self.repo.list_by_startup(startup_id)?)
    }
}

/// Trims ids, drops blanks and keeps the first occurrence of each.
fn unique_recipients(investor_ids: &[String]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    investor_ids
        .iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty() && seen.insert(*id))
        .collect()
}

/// Renders a markdown pitch deck outline from the startup profile.
pub fn generate_pitch_draft(startup: &Startup) -> String {
    let domain = if startup.domain.is_empty() {
        "its"
    } else {
        startup.domain.as_str()
    };
    let location = if startup.location.is_empty() {
        "India"
    } else {
        startup.location.as_str()
    };
    let launched = startup.founded_date.as_deref().unwrap_or("recently");
    let summary = [startup.tagline.as_str(), startup.description.as_str()]
        .into_iter()
        .find(|text| !text.is_empty())
        .unwrap_or("an early-stage startup");

    let mut draft = String::new();
    draft.push_str(&format!("# {} - Pitch Deck\n\n", startup.name));
    draft.push_str("## The Problem\n");
    draft.push_str(
        "Startups struggle with operational inefficiencies, spending most of their time on manual workflows instead of growth.\n\n",
    );
    draft.push_str("## Our Solution\n");
    draft.push_str(&format!("{} is {}\n", startup.name, summary));
    if !startup.description.is_empty() && startup.description != summary {
        draft.push_str(&format!("- {}\n", startup.description));
    }
    draft.push('\n');
    draft.push_str("## Traction\n");
    draft.push_str(&format!(
        "- {} stage, founded {}\n",
        startup.stage.as_str().to_uppercase(),
        launched
    ));
    draft.push_str(&format!(
        "- {}/{} milestones completed\n",
        startup.milestones_completed, startup.total_milestones
    ));
    draft.push_str(&format!("- {} team members\n", startup.team_size));
    draft.push_str(&format!("- {}% execution score\n", startup.execution_score));
    draft.push_str(&format!("- {}% validation score\n\n", startup.validation_score));
    draft.push_str("## Ask\n");
    draft.push_str(&format!(
        "We're raising capital to accelerate product development and expand our reach in the {domain} space.\n\n"
    ));
    draft.push_str("## Team\n");
    draft.push_str(&format!(
        "Our team of {} members is based in {location}.",
        startup.team_size
    ));
    draft
}

#[cfg(test)]
mod tests {
    use super::{generate_pitch_draft, unique_recipients};
    use crate::model::startup::Startup;

    #[test]
    fn duplicate_and_blank_recipients_are_collapsed() {
        let ids = vec![
            "inv-1".to_string(),
            " inv-2 ".to_string(),
            "inv-1".to_string(),
            "  ".to_string(),
        ];
        assert_eq!(unique_recipients(&ids), vec!["inv-1", "inv-2"]);
    }

    #[test]
    fn draft_contains_every_section() {
        let mut startup = Startup::new("s-1", "f-1", "TechFlow AI");
        startup.tagline = "AI-powered workflow automation for startups".to_string();
        startup.milestones_completed = 6;
        startup.total_milestones = 10;
        let draft = generate_pitch_draft(&startup);

        assert!(draft.starts_with("# TechFlow AI - Pitch Deck"));
        for heading in [
            "## The Problem",
            "## Our Solution",
            "## Traction",
            "## Ask",
            "## Team",
        ] {
            assert!(draft.contains(heading), "missing {heading}");
        }
        assert!(draft.contains("6/10 milestones completed"));
    }
}

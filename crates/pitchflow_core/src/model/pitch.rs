//! Pitch request model.
//!
//! # Invariants
//! - A request starts `pending` and may move once to `accepted` or `rejected`.

use crate::model::catalog::Stage;
use crate::model::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Investor response state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PitchStatus {
    Pending,
    Accepted,
    Rejected,
}

impl PitchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns whether `next` is a legal transition from `self`.
    pub fn can_move_to(self, next: PitchStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Accepted) | (Self::Pending, Self::Rejected)
        )
    }
}

/// Canonical pitch request from a founder to one investor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchRequest {
    pub id: String,
    pub startup_id: Option<String>,
    pub startup_name: String,
    pub founder_name: String,
    pub investor_id: Option<String>,
    /// Display domain label such as `Fintech`.
    pub domain: String,
    pub stage: Stage,
    pub pitch_summary: String,
    /// Display amount, e.g. `₹25L`.
    pub ask_amount: String,
    pub equity: String,
    pub status: PitchStatus,
    pub execution_score: Option<u8>,
    pub validation_score: Option<u8>,
}

impl PitchRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("startup_name", &self.startup_name)?;
        require_text("pitch_summary", &self.pitch_summary)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::PitchStatus;

    #[test]
    fn only_pending_can_transition() {
        assert!(PitchStatus::Pending.can_move_to(PitchStatus::Accepted));
        assert!(PitchStatus::Pending.can_move_to(PitchStatus::Rejected));
        assert!(!PitchStatus::Accepted.can_move_to(PitchStatus::Rejected));
        assert!(!PitchStatus::Rejected.can_move_to(PitchStatus::Pending));
        assert!(!PitchStatus::Pending.can_move_to(PitchStatus::Pending));
    }
}

//! Team membership model.

use crate::model::validation::{require_percent, require_text, ValidationError};
use serde::{Deserialize, Serialize};

/// Membership state of a person on a startup team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Invited or requested, not yet approved by the founder.
    Pending,
    #[serde(alias = "approved")]
    Active,
    Away,
}

impl MemberStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Away => "away",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "active" | "approved" => Some(Self::Active),
            "away" => Some(Self::Away),
            _ => None,
        }
    }

    /// Approved members are the ones shown on the founder dashboard.
    pub fn is_approved(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Canonical team member record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub startup_id: String,
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    /// Job title such as `CTO`; free text.
    pub role: String,
    pub department: String,
    pub status: MemberStatus,
    pub performance_score: u8,
    pub tasks_completed: u32,
    pub tasks_assigned: u32,
}

impl TeamMember {
    pub fn new(
        id: impl Into<String>,
        startup_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            startup_id: startup_id.into(),
            user_id: None,
            name: name.into(),
            email: email.into(),
            role: String::new(),
            department: String::new(),
            status: MemberStatus::Pending,
            performance_score: 0,
            tasks_completed: 0,
            tasks_assigned: 0,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("id", &self.id)?;
        require_text("name", &self.name)?;
        require_text("email", &self.email)?;
        require_percent("performance_score", self.performance_score)?;
        Ok(())
    }
}

//! Demo identity model.
//!
//! # Responsibility
//! - Define the three application roles.
//! - Map every role to its fixed demo identity.
//!
//! # Invariants
//! - `DemoUser::for_role` is deterministic; the same role always yields the
//!   same id, email and name.
//! - Persisted identities use the wire fields `id`, `email`, `name`, `role`.

use serde::{Deserialize, Serialize};

/// Application role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Founder,
    Investor,
    Team,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Founder, Role::Investor, Role::Team];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Founder => "founder",
            Self::Investor => "investor",
            Self::Team => "team",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "founder" => Some(Self::Founder),
            "investor" => Some(Self::Investor),
            "team" => Some(Self::Team),
            _ => None,
        }
    }
}

/// Locally fabricated identity standing in for a real auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoUser {
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl DemoUser {
    /// Returns the fixed demo identity for `role`.
    pub fn for_role(role: Role) -> Self {
        let (id, email, name) = match role {
            Role::Founder => ("demo-founder-001", "founder@techflow.ai", "Demo Founder"),
            Role::Investor => ("demo-investor-001", "investor@venture.cap", "Demo Investor"),
            Role::Team => ("demo-team-001", "dev@techflow.ai", "Demo Team Member"),
        };

        Self {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            role,
            avatar: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DemoUser, Role};

    #[test]
    fn each_role_maps_to_distinct_identity() {
        let ids = Role::ALL
            .iter()
            .map(|role| DemoUser::for_role(*role).id)
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn role_parse_accepts_any_case() {
        assert_eq!(Role::parse("Investor"), Some(Role::Investor));
        assert_eq!(Role::parse("admin"), None);
    }
}

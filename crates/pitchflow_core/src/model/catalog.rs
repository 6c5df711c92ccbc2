//! Small enumerations shared across startups, tasks and milestones.

use serde::{Deserialize, Serialize};

/// Company maturity stage used by startups, pitches and investor preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idea,
    Mvp,
    Growth,
    Scale,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Idea, Stage::Mvp, Stage::Growth, Stage::Scale];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Mvp => "mvp",
            Self::Growth => "growth",
            Self::Scale => "scale",
        }
    }

    /// Parses stage labels case-insensitively (`MVP`, `mvp`, ...).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "idea" => Some(Self::Idea),
            "mvp" => Some(Self::Mvp),
            "growth" => Some(Self::Growth),
            "scale" => Some(Self::Scale),
            _ => None,
        }
    }
}

/// Work priority for tasks and milestones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Sort rank; most urgent first.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Priority, Stage};

    #[test]
    fn stage_parse_is_case_insensitive() {
        assert_eq!(Stage::parse("MVP"), Some(Stage::Mvp));
        assert_eq!(Stage::parse(" Growth "), Some(Stage::Growth));
        assert_eq!(Stage::parse("Series A"), None);
    }

    #[test]
    fn stage_labels_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::parse(stage.as_str()), Some(stage));
        }
    }

    #[test]
    fn priority_rank_orders_high_first() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }
}

//! Investor portfolio entry model.

use crate::model::catalog::Stage;
use crate::model::money::parse_lakhs;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentStatus {
    Invested,
    Watching,
}

impl InvestmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invested => "invested",
            Self::Watching => "watching",
        }
    }
}

/// One startup in an investor's portfolio or watch list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Investment {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub stage: Stage,
    pub status: InvestmentStatus,
    /// Display amount; `None` while only watching.
    pub amount: Option<String>,
    pub execution_score: u8,
    pub validation_score: u8,
    pub milestones_completed: u32,
    pub total_milestones: u32,
    pub last_activity: String,
}

impl Investment {
    /// Invested amount normalized to lakhs.
    pub fn amount_in_lakhs(&self) -> Option<f64> {
        self.amount.as_deref().and_then(parse_lakhs)
    }
}

/// Sums invested amounts in lakhs, skipping watch-list entries.
pub fn total_invested_lakhs(investments: &[Investment]) -> f64 {
    investments
        .iter()
        .filter(|item| item.status == InvestmentStatus::Invested)
        .filter_map(Investment::amount_in_lakhs)
        .sum()
}

//! Investor directory entry used when a founder picks pitch recipients.

use crate::model::catalog::Stage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestorProfile {
    pub id: String,
    pub name: String,
    /// `VC`, `Angel`, `Mentor` or `Accelerator`.
    pub kind: String,
    pub preferred_stage: Stage,
    /// Display domain labels, e.g. `SaaS`, `AI/ML`.
    pub preferred_domains: Vec<String>,
    pub ticket_size: String,
    pub location: String,
    pub portfolio_size: u32,
}

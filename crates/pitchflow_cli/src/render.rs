//! Plain-text and JSON output.

use anyhow::Result;
use pitchflow_core::model::investment::Investment;
use pitchflow_core::model::investor::InvestorProfile;
use pitchflow_core::model::milestone::Milestone;
use pitchflow_core::model::pitch::PitchRequest;
use pitchflow_core::model::startup::Startup;
use pitchflow_core::model::task::Task;
use pitchflow_core::model::team::TeamMember;
use pitchflow_core::ListingPage;
use serde::Serialize;

/// One line per record in text mode.
pub trait Row {
    fn row(&self) -> String;
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_page<R: Row + Serialize>(page: &ListingPage<'_, R>, json: bool) -> Result<()> {
    if json {
        return print_json(&serde_json::json!({
            "items": page.items,
            "filteredCount": page.filtered_count,
            "hasMore": page.has_more,
        }));
    }

    if page.is_empty() {
        println!("no matching records");
        return Ok(());
    }
    for item in &page.items {
        println!("{}", item.row());
    }
    println!(
        "-- showing {} of {}{}",
        page.revealed(),
        page.filtered_count,
        if page.has_more {
            " (use --more to reveal more)"
        } else {
            ""
        }
    );
    Ok(())
}

impl Row for Startup {
    fn row(&self) -> String {
        format!(
            "{}\t{}\t{}/{}\texec {}\tval {}\tteam {}\t{}",
            self.id,
            self.name,
            self.domain,
            self.stage.as_str(),
            self.execution_score,
            self.validation_score,
            self.team_size,
            self.funding_raised.as_deref().unwrap_or("-")
        )
    }
}

impl Row for PitchRequest {
    fn row(&self) -> String {
        let score = self
            .execution_score
            .map_or_else(|| "-".to_string(), |score| score.to_string());
        format!(
            "{}\t{}\t{}\t{}\task {} for {}\texec {}",
            self.id,
            self.status.as_str(),
            self.startup_name,
            self.domain,
            self.ask_amount,
            self.equity,
            score
        )
    }
}

impl Row for Task {
    fn row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\tdue {}\t{}%",
            self.id,
            self.status.as_str(),
            self.priority.as_str(),
            self.title,
            self.due_date.as_deref().unwrap_or("-"),
            self.progress
        )
    }
}

impl Row for Investment {
    fn row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}/{}\t{}",
            self.id,
            self.status.as_str(),
            self.name,
            self.domain,
            self.stage.as_str(),
            self.amount.as_deref().unwrap_or("-")
        )
    }
}

impl Row for Milestone {
    fn row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}%\tdue {}",
            self.id,
            self.status.as_str(),
            self.title,
            self.progress,
            self.due_date.as_deref().unwrap_or("-")
        )
    }
}

impl Row for TeamMember {
    fn row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            self.id,
            self.status.as_str(),
            self.name,
            self.role,
            self.email
        )
    }
}

impl Row for InvestorProfile {
    fn row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\tportfolio {}",
            self.id,
            self.name,
            self.kind,
            self.preferred_domains.join(", "),
            self.ticket_size,
            self.portfolio_size
        )
    }
}

//! Milestone repository.

use crate::model::catalog::Priority;
use crate::model::milestone::{Milestone, MilestonePatch, MilestoneStatus};
use crate::repo::{ensure_tables, not_found, parse_column, RepoResult};
use rusqlite::{params, Connection, Row};

const MILESTONE_SELECT_SQL: &str = "SELECT
    id,
    startup_id,
    title,
    description,
    status,
    priority,
    progress,
    due_date,
    tasks_total,
    tasks_completed
 FROM milestones";

pub trait MilestoneRepository {
    fn create_milestone(&self, milestone: &Milestone) -> RepoResult<String>;
    fn get_milestone(&self, id: &str) -> RepoResult<Option<Milestone>>;
    /// Lists one startup's milestones, newest first.
    fn list_by_startup(&self, startup_id: &str) -> RepoResult<Vec<Milestone>>;
    fn update_milestone(&self, id: &str, patch: &MilestonePatch) -> RepoResult<Milestone>;
    fn delete_milestone(&self, id: &str) -> RepoResult<bool>;
}

pub struct SqliteMilestoneRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMilestoneRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["milestones"])?;
        Ok(Self { conn })
    }
}

impl MilestoneRepository for SqliteMilestoneRepository<'_> {
    fn create_milestone(&self, milestone: &Milestone) -> RepoResult<String> {
        milestone.validate()?;
        self.conn.execute(
            "INSERT INTO milestones (
                id,
                startup_id,
                title,
                description,
                status,
                priority,
                progress,
                due_date,
                tasks_total,
                tasks_completed
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10);",
            params![
                milestone.id,
                milestone.startup_id,
                milestone.title,
                milestone.description,
                milestone.status.as_str(),
                milestone.priority.as_str(),
                milestone.progress,
                milestone.due_date,
                milestone.tasks_total,
                milestone.tasks_completed,
            ],
        )?;
        Ok(milestone.id.clone())
    }

    fn get_milestone(&self, id: &str) -> RepoResult<Option<Milestone>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MILESTONE_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_milestone_row(row)?)),
            None => Ok(None),
        }
    }

    fn list_by_startup(&self, startup_id: &str) -> RepoResult<Vec<Milestone>> {
        let mut stmt = self.conn.prepare(&format!(
            "{MILESTONE_SELECT_SQL} WHERE startup_id = ?1 ORDER BY created_at DESC, rowid DESC;"
        ))?;
        let mut rows = stmt.query([startup_id])?;
        let mut milestones = Vec::new();
        while let Some(row) = rows.next()? {
            milestones.push(parse_milestone_row(row)?);
        }
        Ok(milestones)
    }

    fn update_milestone(&self, id: &str, patch: &MilestonePatch) -> RepoResult<Milestone> {
        let mut milestone = self
            .get_milestone(id)?
            .ok_or_else(|| not_found("milestones", id))?;
        patch.apply_to(&mut milestone);
        milestone.validate()?;

        let changed = self.conn.execute(
            "UPDATE milestones
             SET
                title = ?2,
                description = ?3,
                status = ?4,
                priority = ?5,
                progress = ?6,
                due_date = ?7,
                tasks_total = ?8,
                tasks_completed = ?9,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![
                milestone.id,
                milestone.title,
                milestone.description,
                milestone.status.as_str(),
                milestone.priority.as_str(),
                milestone.progress,
                milestone.due_date,
                milestone.tasks_total,
                milestone.tasks_completed,
            ],
        )?;
        if changed == 0 {
            return Err(not_found("milestones", id));
        }
        Ok(milestone)
    }

    fn delete_milestone(&self, id: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM milestones WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_milestone_row(row: &Row<'_>) -> RepoResult<Milestone> {
    let status: String = row.get("status")?;
    let priority: String = row.get("priority")?;

    Ok(Milestone {
        id: row.get("id")?,
        startup_id: row.get("startup_id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        status: parse_column(&status, "milestones.status", MilestoneStatus::parse)?,
        priority: parse_column(&priority, "milestones.priority", Priority::parse)?,
        progress: row.get("progress")?,
        due_date: row.get("due_date")?,
        tasks_total: row.get("tasks_total")?,
        tasks_completed: row.get("tasks_completed")?,
    })
}

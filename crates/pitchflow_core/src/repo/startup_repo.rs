//! Startup profile repository.
//!
//! # Invariants
//! - At most one startup per founder is expected; `find_by_founder` returns
//!   the newest when legacy data holds more.
//! - `looking_for` is persisted as a JSON array.

use crate::model::catalog::Stage;
use crate::model::startup::{Startup, StartupPatch};
use crate::repo::{
    decode_list, encode_list, ensure_tables, not_found, parse_column, RepoResult,
};
use rusqlite::{params, Connection, Row};

const STARTUP_SELECT_SQL: &str = "SELECT
    id,
    founder_id,
    founder_name,
    name,
    tagline,
    description,
    domain,
    stage,
    founded_date,
    location,
    website,
    linkedin,
    team_size,
    looking_for,
    team_id,
    execution_score,
    validation_score,
    milestones_completed,
    total_milestones,
    funding_raised,
    investor_count
 FROM startups";

/// Repository interface for startup profiles.
pub trait StartupRepository {
    /// Inserts one startup and returns its id.
    fn create_startup(&self, startup: &Startup) -> RepoResult<String>;
    fn get_startup(&self, id: &str) -> RepoResult<Option<Startup>>;
    /// Looks up the startup owned by `founder_id`.
    fn find_by_founder(&self, founder_id: &str) -> RepoResult<Option<Startup>>;
    /// Lists every startup, newest first.
    fn list_startups(&self) -> RepoResult<Vec<Startup>>;
    /// Applies `patch` onto the stored record and returns the updated row.
    fn update_startup(&self, id: &str, patch: &StartupPatch) -> RepoResult<Startup>;
    /// Deletes one startup. Returns `false` when nothing matched.
    fn delete_startup(&self, id: &str) -> RepoResult<bool>;
}

/// SQLite-backed startup repository.
pub struct SqliteStartupRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStartupRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["startups"])?;
        Ok(Self { conn })
    }

    fn query_one(&self, sql: &str, key: &str) -> RepoResult<Option<Startup>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_startup_row(row)?)),
            None => Ok(None),
        }
    }

    fn write_full(&self, startup: &Startup) -> RepoResult<usize> {
        let looking_for = encode_list(&startup.looking_for)?;
        let changed = self.conn.execute(
            "UPDATE startups
             SET
                founder_name = ?2,
                name = ?3,
                tagline = ?4,
                description = ?5,
                domain = ?6,
                stage = ?7,
                founded_date = ?8,
                location = ?9,
                website = ?10,
                linkedin = ?11,
                team_size = ?12,
                looking_for = ?13,
                team_id = ?14,
                execution_score = ?15,
                validation_score = ?16,
                milestones_completed = ?17,
                total_milestones = ?18,
                funding_raised = ?19,
                investor_count = ?20,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![
                startup.id,
                startup.founder_name,
                startup.name,
                startup.tagline,
                startup.description,
                startup.domain,
                startup.stage.as_str(),
                startup.founded_date,
                startup.location,
                startup.website,
                startup.linkedin,
                startup.team_size,
                looking_for,
                startup.team_id,
                startup.execution_score,
                startup.validation_score,
                startup.milestones_completed,
                startup.total_milestones,
                startup.funding_raised,
                startup.investor_count,
            ],
        )?;
        Ok(changed)
    }
}

impl StartupRepository for SqliteStartupRepository<'_> {
    fn create_startup(&self, startup: &Startup) -> RepoResult<String> {
        startup.validate()?;
        let looking_for = encode_list(&startup.looking_for)?;

        self.conn.execute(
            "INSERT INTO startups (
                id,
                founder_id,
                founder_name,
                name,
                tagline,
                description,
                domain,
                stage,
                founded_date,
                location,
                website,
                linkedin,
                team_size,
                looking_for,
                team_id,
                execution_score,
                validation_score,
                milestones_completed,
                total_milestones,
                funding_raised,
                investor_count
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11,
                ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21
            );",
            params![
                startup.id,
                startup.founder_id,
                startup.founder_name,
                startup.name,
                startup.tagline,
                startup.description,
                startup.domain,
                startup.stage.as_str(),
                startup.founded_date,
                startup.location,
                startup.website,
                startup.linkedin,
                startup.team_size,
                looking_for,
                startup.team_id,
                startup.execution_score,
                startup.validation_score,
                startup.milestones_completed,
                startup.total_milestones,
                startup.funding_raised,
                startup.investor_count,
            ],
        )?;

        Ok(startup.id.clone())
    }

    fn get_startup(&self, id: &str) -> RepoResult<Option<Startup>> {
        self.query_one(&format!("{STARTUP_SELECT_SQL} WHERE id = ?1;"), id)
    }

    fn find_by_founder(&self, founder_id: &str) -> RepoResult<Option<Startup>> {
        self.query_one(
            &format!(
                "{STARTUP_SELECT_SQL} WHERE founder_id = ?1 ORDER BY created_at DESC, rowid DESC LIMIT 1;"
            ),
            founder_id,
        )
    }

    fn list_startups(&self) -> RepoResult<Vec<Startup>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STARTUP_SELECT_SQL} ORDER BY created_at DESC, rowid DESC;"))?;
        let mut rows = stmt.query([])?;
        let mut startups = Vec::new();
        while let Some(row) = rows.next()? {
            startups.push(parse_startup_row(row)?);
        }
        Ok(startups)
    }

    fn update_startup(&self, id: &str, patch: &StartupPatch) -> RepoResult<Startup> {
        let mut startup = self
            .get_startup(id)?
            .ok_or_else(|| not_found("startups", id))?;
        patch.apply_to(&mut startup);
        startup.validate()?;

        if self.write_full(&startup)? == 0 {
            return Err(not_found("startups", id));
        }
        Ok(startup)
    }

    fn delete_startup(&self, id: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM startups WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_startup_row(row: &Row<'_>) -> RepoResult<Startup> {
    let stage: String = row.get("stage")?;
    let looking_for: String = row.get("looking_for")?;

    Ok(Startup {
        id: row.get("id")?,
        founder_id: row.get("founder_id")?,
        founder_name: row.get("founder_name")?,
        name: row.get("name")?,
        tagline: row.get("tagline")?,
        description: row.get("description")?,
        domain: row.get("domain")?,
        stage: parse_column(&stage, "startups.stage", Stage::parse)?,
        founded_date: row.get("founded_date")?,
        location: row.get("location")?,
        website: row.get("website")?,
        linkedin: row.get("linkedin")?,
        team_size: row.get("team_size")?,
        looking_for: decode_list(&looking_for, "startups.looking_for")?,
        team_id: row.get("team_id")?,
        execution_score: row.get("execution_score")?,
        validation_score: row.get("validation_score")?,
        milestones_completed: row.get("milestones_completed")?,
        total_milestones: row.get("total_milestones")?,
        funding_raised: row.get("funding_raised")?,
        investor_count: row.get("investor_count")?,
    })
}

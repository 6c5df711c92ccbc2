//! Pitch request repository.
//!
//! Status transitions are checked by the pitch service; this layer writes
//! whatever status it is given.

use crate::model::catalog::Stage;
use crate::model::pitch::{PitchRequest, PitchStatus};
use crate::repo::{ensure_tables, not_found, parse_column, RepoResult};
use rusqlite::{params, Connection, Row, Transaction, TransactionBehavior};

const PITCH_SELECT_SQL: &str = "SELECT
    id,
    startup_id,
    startup_name,
    founder_name,
    investor_id,
    domain,
    stage,
    pitch_summary,
    ask_amount,
    equity,
    status,
    execution_score,
    validation_score
 FROM pitch_requests";

pub trait PitchRepository {
    fn create_pitch(&self, pitch: &PitchRequest) -> RepoResult<String>;
    /// Inserts every request or none of them.
    fn create_pitches(&self, pitches: &[PitchRequest]) -> RepoResult<Vec<String>>;
    fn get_pitch(&self, id: &str) -> RepoResult<Option<PitchRequest>>;
    /// Requests addressed to one investor, newest first.
    fn list_for_investor(&self, investor_id: &str) -> RepoResult<Vec<PitchRequest>>;
    /// Requests sent by one startup, newest first.
    fn list_by_startup(&self, startup_id: &str) -> RepoResult<Vec<PitchRequest>>;
    fn update_pitch_status(&self, id: &str, status: PitchStatus) -> RepoResult<PitchRequest>;
    fn delete_pitch(&self, id: &str) -> RepoResult<bool>;
}

pub struct SqlitePitchRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePitchRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["pitch_requests"])?;
        Ok(Self { conn })
    }

    fn list_where(&self, column: &str, value: &str) -> RepoResult<Vec<PitchRequest>> {
        let mut stmt = self.conn.prepare(&format!(
            "{PITCH_SELECT_SQL} WHERE {column} = ?1 ORDER BY created_at DESC, rowid DESC;"
        ))?;
        let mut rows = stmt.query([value])?;
        let mut pitches = Vec::new();
        while let Some(row) = rows.next()? {
            pitches.push(parse_pitch_row(row)?);
        }
        Ok(pitches)
    }
}

impl PitchRepository for SqlitePitchRepository<'_> {
    fn create_pitch(&self, pitch: &PitchRequest) -> RepoResult<String> {
        pitch.validate()?;
        insert_pitch(self.conn, pitch)?;
        Ok(pitch.id.clone())
    }

    fn create_pitches(&self, pitches: &[PitchRequest]) -> RepoResult<Vec<String>> {
        for pitch in pitches {
            pitch.validate()?;
        }

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        for pitch in pitches {
            insert_pitch(&tx, pitch)?;
        }
        tx.commit()?;

        Ok(pitches.iter().map(|pitch| pitch.id.clone()).collect())
    }

    fn get_pitch(&self, id: &str) -> RepoResult<Option<PitchRequest>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PITCH_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_pitch_row(row)?)),
            None => Ok(None),
        }
    }

    fn list_for_investor(&self, investor_id: &str) -> RepoResult<Vec<PitchRequest>> {
        self.list_where("investor_id", investor_id)
    }

    fn list_by_startup(&self, startup_id: &str) -> RepoResult<Vec<PitchRequest>> {
        self.list_where("startup_id", startup_id)
    }

    fn update_pitch_status(&self, id: &str, status: PitchStatus) -> RepoResult<PitchRequest> {
        let changed = self.conn.execute(
            "UPDATE pitch_requests
             SET
                status = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![id, status.as_str()],
        )?;
        if changed == 0 {
            return Err(not_found("pitch_requests", id));
        }
        self.get_pitch(id)?
            .ok_or_else(|| not_found("pitch_requests", id))
    }

    fn delete_pitch(&self, id: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM pitch_requests WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn insert_pitch(conn: &Connection, pitch: &PitchRequest) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO pitch_requests (
            id,
            startup_id,
            startup_name,
            founder_name,
            investor_id,
            domain,
            stage,
            pitch_summary,
            ask_amount,
            equity,
            status,
            execution_score,
            validation_score
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13);",
        params![
            pitch.id,
            pitch.startup_id,
            pitch.startup_name,
            pitch.founder_name,
            pitch.investor_id,
            pitch.domain,
            pitch.stage.as_str(),
            pitch.pitch_summary,
            pitch.ask_amount,
            pitch.equity,
            pitch.status.as_str(),
            pitch.execution_score,
            pitch.validation_score,
        ],
    )?;
    Ok(())
}

fn parse_pitch_row(row: &Row<'_>) -> RepoResult<PitchRequest> {
    let stage: String = row.get("stage")?;
    let status: String = row.get("status")?;

    Ok(PitchRequest {
        id: row.get("id")?,
        startup_id: row.get("startup_id")?,
        startup_name: row.get("startup_name")?,
        founder_name: row.get("founder_name")?,
        investor_id: row.get("investor_id")?,
        domain: row.get("domain")?,
        stage: parse_column(&stage, "pitch_requests.stage", Stage::parse)?,
        pitch_summary: row.get("pitch_summary")?,
        ask_amount: row.get("ask_amount")?,
        equity: row.get("equity")?,
        status: parse_column(&status, "pitch_requests.status", PitchStatus::parse)?,
        execution_score: row.get("execution_score")?,
        validation_score: row.get("validation_score")?,
    })
}

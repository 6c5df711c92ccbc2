//! Team membership repository.

use crate::model::team::{MemberStatus, TeamMember};
use crate::repo::{ensure_tables, not_found, parse_column, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const MEMBER_SELECT_SQL: &str = "SELECT
    id,
    startup_id,
    user_id,
    name,
    email,
    role,
    department,
    status,
    performance_score,
    tasks_completed,
    tasks_assigned
 FROM team_members";

pub trait TeamMemberRepository {
    fn create_member(&self, member: &TeamMember) -> RepoResult<String>;
    fn get_member(&self, id: &str) -> RepoResult<Option<TeamMember>>;
    /// Lists members of one startup, optionally narrowed to one status.
    fn list_by_startup(
        &self,
        startup_id: &str,
        status: Option<MemberStatus>,
    ) -> RepoResult<Vec<TeamMember>>;
    fn update_member_status(&self, id: &str, status: MemberStatus) -> RepoResult<TeamMember>;
    fn delete_member(&self, id: &str) -> RepoResult<bool>;
}

pub struct SqliteTeamMemberRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTeamMemberRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["team_members"])?;
        Ok(Self { conn })
    }
}

impl TeamMemberRepository for SqliteTeamMemberRepository<'_> {
    fn create_member(&self, member: &TeamMember) -> RepoResult<String> {
        member.validate()?;
        self.conn.execute(
            "INSERT INTO team_members (
                id,
                startup_id,
                user_id,
                name,
                email,
                role,
                department,
                status,
                performance_score,
                tasks_completed,
                tasks_assigned
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11);",
            params![
                member.id,
                member.startup_id,
                member.user_id,
                member.name,
                member.email,
                member.role,
                member.department,
                member.status.as_str(),
                member.performance_score,
                member.tasks_completed,
                member.tasks_assigned,
            ],
        )?;
        Ok(member.id.clone())
    }

    fn get_member(&self, id: &str) -> RepoResult<Option<TeamMember>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEMBER_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_member_row(row)?)),
            None => Ok(None),
        }
    }

    fn list_by_startup(
        &self,
        startup_id: &str,
        status: Option<MemberStatus>,
    ) -> RepoResult<Vec<TeamMember>> {
        let mut sql = format!("{MEMBER_SELECT_SQL} WHERE startup_id = ?");
        let mut bind_values = vec![Value::Text(startup_id.to_string())];
        if let Some(status) = status {
            sql.push_str(" AND status = ?");
            bind_values.push(Value::Text(status.as_str().to_string()));
        }
        sql.push_str(" ORDER BY created_at DESC, rowid DESC;");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut members = Vec::new();
        while let Some(row) = rows.next()? {
            members.push(parse_member_row(row)?);
        }
        Ok(members)
    }

    fn update_member_status(&self, id: &str, status: MemberStatus) -> RepoResult<TeamMember> {
        let changed = self.conn.execute(
            "UPDATE team_members
             SET
                status = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![id, status.as_str()],
        )?;
        if changed == 0 {
            return Err(not_found("team_members", id));
        }
        self.get_member(id)?
            .ok_or_else(|| not_found("team_members", id))
    }

    fn delete_member(&self, id: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM team_members WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_member_row(row: &Row<'_>) -> RepoResult<TeamMember> {
    let status: String = row.get("status")?;

    Ok(TeamMember {
        id: row.get("id")?,
        startup_id: row.get("startup_id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        email: row.get("email")?,
        role: row.get("role")?,
        department: row.get("department")?,
        status: parse_column(&status, "team_members.status", MemberStatus::parse)?,
        performance_score: row.get("performance_score")?,
        tasks_completed: row.get("tasks_completed")?,
        tasks_assigned: row.get("tasks_assigned")?,
    })
}

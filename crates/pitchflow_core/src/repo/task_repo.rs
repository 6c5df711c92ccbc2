//! Task repository.
//!
//! # Invariants
//! - Completed tasks are always written as `completed`, never `done`.
//! - `tags` is persisted as a JSON array.

use crate::model::catalog::Priority;
use crate::model::task::{Task, TaskPatch, TaskStatus};
use crate::repo::{
    decode_list, encode_list, ensure_tables, not_found, parse_column, RepoResult,
};
use rusqlite::{params, Connection, Row};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    priority,
    status,
    milestone,
    due_date,
    assigned_to,
    project_id,
    tags,
    progress,
    estimated_hours,
    logged_hours
 FROM tasks";

pub trait TaskRepository {
    fn create_task(&self, task: &Task) -> RepoResult<String>;
    fn get_task(&self, id: &str) -> RepoResult<Option<Task>>;
    /// Tasks assigned to one user, newest first.
    fn list_assigned_to(&self, user_id: &str) -> RepoResult<Vec<Task>>;
    /// Tasks belonging to one project (startup), newest first.
    fn list_by_project(&self, project_id: &str) -> RepoResult<Vec<Task>>;
    fn update_task(&self, id: &str, patch: &TaskPatch) -> RepoResult<Task>;
    fn delete_task(&self, id: &str) -> RepoResult<bool>;
}

pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["tasks"])?;
        Ok(Self { conn })
    }

    fn list_where(&self, column: &str, value: &str) -> RepoResult<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!(
            "{TASK_SELECT_SQL} WHERE {column} = ?1 ORDER BY created_at DESC, rowid DESC;"
        ))?;
        let mut rows = stmt.query([value])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }
        Ok(tasks)
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create_task(&self, task: &Task) -> RepoResult<String> {
        task.validate()?;
        let tags = encode_list(&task.tags)?;
        self.conn.execute(
            "INSERT INTO tasks (
                id,
                title,
                description,
                priority,
                status,
                milestone,
                due_date,
                assigned_to,
                project_id,
                tags,
                progress,
                estimated_hours,
                logged_hours
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13);",
            params![
                task.id,
                task.title,
                task.description,
                task.priority.as_str(),
                task.status.as_str(),
                task.milestone,
                task.due_date,
                task.assigned_to,
                task.project_id,
                tags,
                task.progress,
                task.estimated_hours,
                task.logged_hours,
            ],
        )?;
        Ok(task.id.clone())
    }

    fn get_task(&self, id: &str) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_task_row(row)?)),
            None => Ok(None),
        }
    }

    fn list_assigned_to(&self, user_id: &str) -> RepoResult<Vec<Task>> {
        self.list_where("assigned_to", user_id)
    }

    fn list_by_project(&self, project_id: &str) -> RepoResult<Vec<Task>> {
        self.list_where("project_id", project_id)
    }

    fn update_task(&self, id: &str, patch: &TaskPatch) -> RepoResult<Task> {
        let mut task = self.get_task(id)?.ok_or_else(|| not_found("tasks", id))?;
        patch.apply_to(&mut task);
        task.validate()?;
        let tags = encode_list(&task.tags)?;

        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                title = ?2,
                description = ?3,
                priority = ?4,
                status = ?5,
                milestone = ?6,
                due_date = ?7,
                assigned_to = ?8,
                tags = ?9,
                progress = ?10,
                logged_hours = ?11,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![
                task.id,
                task.title,
                task.description,
                task.priority.as_str(),
                task.status.as_str(),
                task.milestone,
                task.due_date,
                task.assigned_to,
                tags,
                task.progress,
                task.logged_hours,
            ],
        )?;
        if changed == 0 {
            return Err(not_found("tasks", id));
        }
        Ok(task)
    }

    fn delete_task(&self, id: &str) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM tasks WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let priority: String = row.get("priority")?;
    let status: String = row.get("status")?;
    let tags: String = row.get("tags")?;

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        priority: parse_column(&priority, "tasks.priority", Priority::parse)?,
        status: parse_column(&status, "tasks.status", TaskStatus::parse)?,
        milestone: row.get("milestone")?,
        due_date: row.get("due_date")?,
        assigned_to: row.get("assigned_to")?,
        project_id: row.get("project_id")?,
        tags: decode_list(&tags, "tasks.tags")?,
        progress: row.get("progress")?,
        estimated_hours: row.get("estimated_hours")?,
        logged_hours: row.get("logged_hours")?,
    })
}

use pitchflow_core::db::open_db_in_memory;
use pitchflow_core::fixtures;
use pitchflow_core::model::catalog::{Priority, Stage};
use pitchflow_core::model::milestone::{Milestone, MilestonePatch, MilestoneStatus};
use pitchflow_core::model::pitch::PitchStatus;
use pitchflow_core::model::startup::{Startup, StartupPatch};
use pitchflow_core::model::task::{Task, TaskPatch, TaskStatus};
use pitchflow_core::model::team::MemberStatus;
use pitchflow_core::model::validation::ValidationError;
use pitchflow_core::repo::milestone_repo::{MilestoneRepository, SqliteMilestoneRepository};
use pitchflow_core::repo::pitch_repo::{PitchRepository, SqlitePitchRepository};
use pitchflow_core::repo::startup_repo::{SqliteStartupRepository, StartupRepository};
use pitchflow_core::repo::task_repo::{SqliteTaskRepository, TaskRepository};
use pitchflow_core::repo::team_repo::{SqliteTeamMemberRepository, TeamMemberRepository};
use pitchflow_core::RepoError;
use rusqlite::Connection;

fn seed_startup(conn: &Connection) -> Startup {
    let repo = SqliteStartupRepository::try_new(conn).unwrap();
    let startup = fixtures::demo_startup();
    repo.create_startup(&startup).unwrap();
    startup
}

#[test]
fn startup_round_trip_preserves_every_field() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStartupRepository::try_new(&conn).unwrap();

    let mut startup = fixtures::marketplace_startups().remove(0);
    startup.looking_for = vec!["CTO".to_string(), "Designer".to_string()];
    startup.team_id = "TF-ABC123".to_string();
    repo.create_startup(&startup).unwrap();

    let loaded = repo.get_startup(&startup.id).unwrap().unwrap();
    assert_eq!(loaded, startup);
    assert_eq!(
        repo.find_by_founder(&startup.founder_id).unwrap(),
        Some(startup)
    );
}

#[test]
fn startup_patch_updates_only_given_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStartupRepository::try_new(&conn).unwrap();
    let startup = seed_startup(&conn);

    let patch = StartupPatch {
        stage: Some(Stage::Growth),
        team_size: Some(9),
        ..StartupPatch::default()
    };
    let updated = repo.update_startup(&startup.id, &patch).unwrap();

    assert_eq!(updated.stage, Stage::Growth);
    assert_eq!(updated.team_size, 9);
    assert_eq!(updated.name, startup.name);
    assert_eq!(repo.get_startup(&startup.id).unwrap(), Some(updated));
}

#[test]
fn startup_patch_is_validated_before_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStartupRepository::try_new(&conn).unwrap();
    let startup = seed_startup(&conn);

    let patch = StartupPatch {
        execution_score: Some(140),
        ..StartupPatch::default()
    };
    let err = repo.update_startup(&startup.id, &patch).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::ScoreOutOfRange { .. })
    ));
    assert_eq!(repo.get_startup(&startup.id).unwrap(), Some(startup));
}

#[test]
fn updating_missing_records_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let startups = SqliteStartupRepository::try_new(&conn).unwrap();
    let tasks = SqliteTaskRepository::try_new(&conn).unwrap();
    let pitches = SqlitePitchRepository::try_new(&conn).unwrap();

    assert!(startups
        .update_startup("missing", &StartupPatch::default())
        .unwrap_err()
        .is_not_found());
    assert!(tasks
        .update_task("missing", &TaskPatch::default())
        .unwrap_err()
        .is_not_found());
    assert!(pitches
        .update_pitch_status("missing", PitchStatus::Accepted)
        .unwrap_err()
        .is_not_found());
}

#[test]
fn delete_reports_whether_a_row_matched() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStartupRepository::try_new(&conn).unwrap();
    let startup = seed_startup(&conn);

    assert!(repo.delete_startup(&startup.id).unwrap());
    assert!(!repo.delete_startup(&startup.id).unwrap());
    assert_eq!(repo.get_startup(&startup.id).unwrap(), None);
}

#[test]
fn milestones_list_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let startup = seed_startup(&conn);
    let repo = SqliteMilestoneRepository::try_new(&conn).unwrap();

    for title in ["first", "second", "third"] {
        let milestone = Milestone::new(format!("m-{title}"), &startup.id, title);
        repo.create_milestone(&milestone).unwrap();
    }

    let titles: Vec<_> = repo
        .list_by_startup(&startup.id)
        .unwrap()
        .into_iter()
        .map(|milestone| milestone.title)
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[test]
fn milestone_patch_and_delete() {
    let conn = open_db_in_memory().unwrap();
    let startup = seed_startup(&conn);
    let repo = SqliteMilestoneRepository::try_new(&conn).unwrap();
    let milestone = Milestone::new("m-1", &startup.id, "Beta Release");
    repo.create_milestone(&milestone).unwrap();

    let patch = MilestonePatch {
        status: Some(MilestoneStatus::InProgress),
        priority: Some(Priority::High),
        progress: Some(40),
        ..MilestonePatch::default()
    };
    let updated = repo.update_milestone("m-1", &patch).unwrap();
    assert_eq!(updated.status, MilestoneStatus::InProgress);
    assert_eq!(updated.progress, 40);

    assert!(repo.delete_milestone("m-1").unwrap());
    assert!(repo.list_by_startup(&startup.id).unwrap().is_empty());
}

#[test]
fn tasks_filter_by_assignee_and_project() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    for task in fixtures::team_tasks() {
        repo.create_task(&task).unwrap();
    }
    let mut other = Task::new("other", "Unrelated");
    other.assigned_to = Some("someone-else".to_string());
    repo.create_task(&other).unwrap();

    let mine = repo.list_assigned_to(fixtures::DEMO_TEAM_USER_ID).unwrap();
    assert_eq!(mine.len(), 8);
    assert_eq!(mine[0].id, "8");
    assert_eq!(mine[0].tags, vec!["backend", "database", "performance"]);

    let project = repo.list_by_project(fixtures::DEMO_STARTUP_ID).unwrap();
    assert_eq!(project.len(), 8);
}

#[test]
fn task_status_is_written_as_completed() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    repo.create_task(&Task::new("t-1", "Ship it")).unwrap();

    let patch = TaskPatch {
        status: TaskStatus::parse("done"),
        ..TaskPatch::default()
    };
    repo.update_task("t-1", &patch).unwrap();

    let raw: String = conn
        .query_row("SELECT status FROM tasks WHERE id = 't-1';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(raw, "completed");
}

#[test]
fn corrupt_enum_text_is_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::try_new(&conn).unwrap();
    repo.create_task(&Task::new("t-1", "x")).unwrap();
    conn.execute_batch(
        "PRAGMA ignore_check_constraints = ON;
         UPDATE tasks SET priority = 'urgent' WHERE id = 't-1';",
    )
    .unwrap();

    assert!(matches!(
        repo.get_task("t-1").unwrap_err(),
        RepoError::InvalidData(_)
    ));
}

#[test]
fn team_members_filter_by_status() {
    let conn = open_db_in_memory().unwrap();
    seed_startup(&conn);
    let repo = SqliteTeamMemberRepository::try_new(&conn).unwrap();
    for member in fixtures::team_members() {
        repo.create_member(&member).unwrap();
    }

    let active = repo
        .list_by_startup(fixtures::DEMO_STARTUP_ID, Some(MemberStatus::Active))
        .unwrap();
    assert_eq!(active.len(), 3);
    let all = repo.list_by_startup(fixtures::DEMO_STARTUP_ID, None).unwrap();
    assert_eq!(all.len(), 5);

    let approved = repo.update_member_status("5", MemberStatus::Active).unwrap();
    assert_eq!(approved.status, MemberStatus::Active);
    assert!(repo.delete_member("4").unwrap());
    assert!(!repo.delete_member("4").unwrap());
}

#[test]
fn pitches_list_per_investor_and_startup() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePitchRepository::try_new(&conn).unwrap();
    for pitch in fixtures::inbox_pitches() {
        repo.create_pitch(&pitch).unwrap();
    }

    let inbox = repo.list_for_investor(fixtures::DEMO_INVESTOR_ID).unwrap();
    assert_eq!(inbox.len(), 6);
    assert_eq!(inbox[0].startup_name, "FoodieFast");
    assert_eq!(inbox[5].execution_score, None);
    assert!(repo.list_by_startup("nothing").unwrap().is_empty());

    let accepted = repo.update_pitch_status("1", PitchStatus::Accepted).unwrap();
    assert_eq!(accepted.status, PitchStatus::Accepted);
}

#[test]
fn pitch_batch_is_all_or_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePitchRepository::try_new(&conn).unwrap();

    let mut conflicting = fixtures::inbox_pitches();
    conflicting[5].id = conflicting[0].id.clone();
    assert!(matches!(
        repo.create_pitches(&conflicting),
        Err(RepoError::Db(_))
    ));
    assert!(repo
        .list_for_investor(fixtures::DEMO_INVESTOR_ID)
        .unwrap()
        .is_empty());

    let pitches = fixtures::inbox_pitches();
    let ids = repo.create_pitches(&pitches).unwrap();
    assert_eq!(
        ids,
        pitches.iter().map(|pitch| pitch.id.clone()).collect::<Vec<_>>()
    );
    assert_eq!(
        repo.list_for_investor(fixtures::DEMO_INVESTOR_ID)
            .unwrap()
            .len(),
        6
    );
}

#[test]
fn repositories_reject_unmigrated_connections() {
    let conn = Connection::open_in_memory().unwrap();
    assert!(matches!(
        SqliteStartupRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("startups"))
    ));
}

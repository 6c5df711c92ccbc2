//! Dashboard read models for founders and team members.
//!
//! # Invariants
//! - Dashboards never fail: every repository error degrades through
//!   [`or_fallback`] to the bundled demo data (demo mode) or to empty values.
//! - A founder without a persisted startup sees the demo startup only in
//!   demo mode.

use crate::fallback::or_fallback;
use crate::fixtures;
use crate::model::identity::DemoUser;
use crate::model::milestone::Milestone;
use crate::model::startup::Startup;
use crate::model::task::{Task, TaskStatus};
use crate::model::team::{MemberStatus, TeamMember};
use crate::repo::milestone_repo::MilestoneRepository;
use crate::repo::startup_repo::StartupRepository;
use crate::repo::task_repo::TaskRepository;
use crate::repo::team_repo::TeamMemberRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FounderOverview {
    pub startup: Option<Startup>,
    /// Newest first.
    pub milestones: Vec<Milestone>,
    pub approved_members: Vec<TeamMember>,
    /// True when the data comes from the bundled demo fixtures.
    pub from_fixtures: bool,
}

/// Per-status task counts for the team dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub overdue: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            match task.status {
                TaskStatus::Todo => counts.todo += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Overdue => counts.overdue += 1,
                TaskStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.overdue + self.completed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamOverview {
    pub tasks: Vec<Task>,
    pub counts: TaskCounts,
}

pub struct DashboardService<S, M, T, K>
where
    S: StartupRepository,
    M: MilestoneRepository,
    T: TeamMemberRepository,
    K: TaskRepository,
{
    startups: S,
    milestones: M,
    members: T,
    tasks: K,
    demo_mode: bool,
}

impl<S, M, T, K> DashboardService<S, M, T, K>
where
    S: StartupRepository,
    M: MilestoneRepository,
    T: TeamMemberRepository,
    K: TaskRepository,
{
    pub fn new(startups: S, milestones: M, members: T, tasks: K, demo_mode: bool) -> Self {
        Self {
            startups,
            milestones,
            members,
            tasks,
            demo_mode,
        }
    }

    pub fn founder_overview(&self, founder: &DemoUser) -> FounderOverview {
        let demo_mode = self.demo_mode;
        let persisted = or_fallback(
            self.startups.find_by_founder(&founder.id),
            "dashboard.founder.startup",
            || None,
        );

        let Some(startup) = persisted else {
            if !demo_mode {
                return FounderOverview {
                    startup: None,
                    milestones: Vec::new(),
                    approved_members: Vec::new(),
                    from_fixtures: false,
                };
            }
            log::info!("event=dashboard.founder module=service status=fallback source=fixtures");
            return FounderOverview {
                startup: Some(fixtures::demo_startup()),
                milestones: fixtures::milestones(),
                approved_members: fixtures::team_members()
                    .into_iter()
                    .filter(|member| member.status == MemberStatus::Active)
                    .collect(),
                from_fixtures: true,
            };
        };

        let milestones = or_fallback(
            self.milestones.list_by_startup(&startup.id),
            "dashboard.founder.milestones",
            Vec::new,
        );
        let approved_members = or_fallback(
            self.members
                .list_by_startup(&startup.id, Some(MemberStatus::Active)),
            "dashboard.founder.members",
            Vec::new,
        );

        FounderOverview {
            startup: Some(startup),
            milestones,
            approved_members,
            from_fixtures: false,
        }
    }

    pub fn team_overview(&self, user: &DemoUser) -> TeamOverview {
        let tasks = or_fallback(
            self.tasks.list_assigned_to(&user.id),
            "dashboard.team.tasks",
            Vec::new,
        );
        let counts = TaskCounts::from_tasks(&tasks);
        TeamOverview { tasks, counts }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskCounts;
    use crate::fixtures;

    #[test]
    fn counts_cover_every_fixture_task() {
        let tasks = fixtures::team_tasks();
        let counts = TaskCounts::from_tasks(&tasks);
        assert_eq!(counts.total(), tasks.len());
        assert_eq!(counts.completed, 2);
        assert_eq!(counts.overdue, 1);
        assert_eq!(counts.in_progress, 2);
        assert_eq!(counts.todo, 3);
    }
}

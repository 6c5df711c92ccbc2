//! PitchFlow command-line entry point.
//!
//! # Responsibility
//! - Map subcommands onto `pitchflow_core` services and listing views.
//! - Gate role-scoped commands through the same route guard the pages use.

mod context;
mod listing_args;
mod render;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use context::AppContext;
use listing_args::{task_board, ListArgs};
use pitchflow_core::fixtures;
use pitchflow_core::model::catalog::{Priority, Stage};
use pitchflow_core::model::investment::total_invested_lakhs;
use pitchflow_core::model::milestone::MilestoneStatus;
use pitchflow_core::model::pitch::PitchStatus;
use pitchflow_core::repo::milestone_repo::{MilestoneRepository, SqliteMilestoneRepository};
use pitchflow_core::repo::pitch_repo::{PitchRepository, SqlitePitchRepository};
use pitchflow_core::repo::startup_repo::StartupRepository;
use pitchflow_core::repo::task_repo::{SqliteTaskRepository, TaskRepository};
use pitchflow_core::repo::team_repo::{SqliteTeamMemberRepository, TeamMemberRepository};
use pitchflow_core::service::dashboard_service::DashboardService;
use pitchflow_core::service::milestone_service::MilestoneService;
use pitchflow_core::service::pitch_service::{generate_pitch_draft, PitchDraft, PitchService};
use pitchflow_core::service::startup_service::{OnboardingForm, StartupService};
use pitchflow_core::service::task_service::{NewTask, TaskService};
use pitchflow_core::service::team_service::{Invitation, TeamService};
use pitchflow_core::session::route::{FounderPage, InvestorPage, TeamPage};
use pitchflow_core::{
    guard, landing_after_sign_in, ListingView, PagePreset, Role, Route, RouteDecision,
};
use render::{print_json, print_page};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pitchflow")]
#[command(about = "Founder, investor and team workflows for PitchFlow")]
#[command(version)]
struct Cli {
    /// Path to JSON config file (dataDir, logLevel, logDir, dbFileName, demoMode)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in as the demo identity of a role
    SignIn {
        /// founder, investor or team
        #[arg(value_parser = parse_role)]
        role: Role,
    },

    /// Clear the current session
    SignOut,

    /// Show the signed-in identity
    Whoami,

    /// Ask the route guard whether a path renders for this session
    Route {
        /// Path such as /founder/dashboard
        path: String,
    },

    /// Dashboard summary for the signed-in role
    Dashboard,

    /// Browse startups
    Marketplace(ListArgs),

    /// Browse the investor directory
    Investors(ListArgs),

    /// Investor pitch inbox
    Inbox(ListArgs),

    /// Accept or reject a pending pitch
    Respond {
        pitch_id: String,
        /// accepted or rejected
        #[arg(value_parser = parse_decision)]
        decision: PitchStatus,
    },

    /// Investor portfolio
    Investments(ListArgs),

    /// Tasks assigned to the signed-in team member
    Tasks(ListArgs),

    /// Mark a task completed
    TaskDone { task_id: String },

    /// Create a task for the founder's startup
    TaskAdd {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// high, medium or low
        #[arg(long, value_parser = parse_priority, default_value = "medium")]
        priority: Priority,
        /// Due date as YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
        /// Milestone title the task rolls up into
        #[arg(long)]
        milestone: Option<String>,
        /// User id of the assignee
        #[arg(long)]
        assignee: Option<String>,
        /// Tags (can be specified multiple times)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Create the founder's startup
    Onboard {
        name: String,
        #[arg(long, default_value = "")]
        tagline: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        domain: String,
        /// idea, mvp, growth or scale
        #[arg(long, value_parser = parse_stage)]
        stage: Option<Stage>,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        team_size: Option<u32>,
        /// What the startup is looking for (can be specified multiple times)
        #[arg(long = "looking-for")]
        looking_for: Vec<String>,
    },

    /// Founder milestones
    Milestones(ListArgs),

    /// Quick-add a milestone
    MilestoneAdd { title: String },

    /// Move a milestone to another status
    MilestoneStatus {
        milestone_id: String,
        /// pending, active, in_progress or completed
        #[arg(value_parser = parse_milestone_status)]
        status: MilestoneStatus,
    },

    /// Founder team roster
    Team(ListArgs),

    /// Invite a team member (starts pending)
    TeamInvite {
        name: String,
        email: String,
        #[arg(long, default_value = "")]
        role: String,
        #[arg(long, default_value = "")]
        department: String,
    },

    /// Approve a pending team member
    TeamApprove { member_id: String },

    /// Remove a team member
    TeamRemove { member_id: String },

    /// Print a generated pitch deck outline
    PitchDraft,

    /// Send a pitch to one or more investors
    SendPitch {
        /// Investor id (can be specified multiple times)
        #[arg(long = "investor", required = true)]
        investors: Vec<String>,
        /// Pitch text; defaults to the generated draft
        #[arg(long)]
        summary: Option<String>,
        #[arg(long, default_value = "")]
        ask: String,
        #[arg(long, default_value = "")]
        equity: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        log::error!("event=cli_command module=cli status=error");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = AppContext::open(cli.config.as_deref())?;
    let json = cli.json;

    match cli.command {
        Commands::SignIn { role } => {
            let user = ctx.session.sign_in(role);
            println!(
                "signed in as {} ({}); landing on {}",
                user.name,
                user.role.as_str(),
                landing_after_sign_in(role).path()
            );
        }
        Commands::SignOut => {
            ctx.session.sign_out();
            println!("signed out");
        }
        Commands::Whoami => match ctx.session.current() {
            Some(user) if json => print_json(user)?,
            Some(user) => println!("{} <{}> role={}", user.name, user.email, user.role.as_str()),
            None => println!("anonymous"),
        },
        Commands::Route { path } => match guard(ctx.session.current(), Route::parse(&path)) {
            RouteDecision::Render(route) => println!("render {}", route.path()),
            RouteDecision::Redirect(route) => println!("redirect {}", route.path()),
        },
        Commands::Dashboard => dashboard(&ctx, json)?,
        Commands::Marketplace(args) => {
            let source = ctx.with_demo_fallback(
                ctx.startups().and_then(|repo| repo.list_startups()),
                "cli.marketplace",
                fixtures::marketplace_startups,
            );
            let mut view = ListingView::for_preset(source, PagePreset::Marketplace);
            args.apply(&mut view)?;
            print_page(&view.page(), json)?;
        }
        Commands::Investors(args) => {
            let mut view =
                ListingView::for_preset(fixtures::investor_directory(), PagePreset::InvestorDirectory);
            args.apply(&mut view)?;
            print_page(&view.page(), json)?;
        }
        Commands::Inbox(args) => {
            let investor = ctx.authorize(Route::Investor(InvestorPage::Inbox))?;
            let source = ctx.with_demo_fallback(
                SqlitePitchRepository::try_new(&ctx.conn)
                    .and_then(|repo| repo.list_for_investor(&investor.id)),
                "cli.inbox",
                fixtures::inbox_pitches,
            );
            let mut view = ListingView::for_preset(source, PagePreset::PitchInbox);
            args.apply(&mut view)?;
            print_page(&view.page(), json)?;
        }
        Commands::Respond { pitch_id, decision } => {
            ctx.authorize(Route::Investor(InvestorPage::Inbox))?;
            let service = PitchService::new(SqlitePitchRepository::try_new(&ctx.conn)?);
            let pitch = service.respond(&pitch_id, decision)?;
            println!("{} is now {}", pitch.startup_name, pitch.status.as_str());
        }
        Commands::Investments(args) => {
            ctx.authorize(Route::Investor(InvestorPage::Investments))?;
            let mut view =
                ListingView::for_preset(fixtures::investments(), PagePreset::Investments);
            args.apply(&mut view)?;
            print_page(&view.page(), json)?;
        }
        Commands::Tasks(args) => {
            let member = ctx.authorize(Route::Team(TeamPage::Tasks))?;
            let source = ctx.with_demo_fallback(
                SqliteTaskRepository::try_new(&ctx.conn)
                    .and_then(|repo| repo.list_assigned_to(&member.id)),
                "cli.tasks",
                fixtures::team_tasks,
            );
            let mut view = task_board(source);
            args.apply(&mut view)?;
            print_page(&view.page(), json)?;
        }
        Commands::TaskDone { task_id } => {
            ctx.authorize(Route::Team(TeamPage::Tasks))?;
            let service = TaskService::new(SqliteTaskRepository::try_new(&ctx.conn)?);
            let task = service.mark_done(&task_id)?;
            println!("completed: {}", task.title);
        }
        Commands::TaskAdd {
            title,
            description,
            priority,
            due,
            milestone,
            assignee,
            tags,
        } => {
            let founder = ctx.authorize(Route::Founder(FounderPage::Team))?;
            let startup = ctx.persisted_startup(&founder)?;
            let mut input = NewTask::titled(title);
            input.description = description;
            input.priority = priority;
            input.due_date = due;
            input.milestone = milestone;
            input.assigned_to = assignee;
            input.project_id = Some(startup.id);
            input.tags = tags;
            let service = TaskService::new(SqliteTaskRepository::try_new(&ctx.conn)?);
            let task = service.create_task(input)?;
            println!("created task {}", task.id);
        }
        Commands::Onboard {
            name,
            tagline,
            description,
            domain,
            stage,
            location,
            website,
            team_size,
            looking_for,
        } => {
            let founder = ctx.authorize(Route::Founder(FounderPage::Onboarding))?;
            let form = OnboardingForm {
                name,
                tagline,
                description,
                domain,
                stage,
                location,
                website,
                team_size,
                looking_for,
                ..OnboardingForm::default()
            };
            let service = StartupService::new(ctx.startups()?);
            let startup = service.onboard(&founder, form)?;
            println!("created {} (team code {})", startup.name, startup.team_id);
        }
        Commands::Milestones(args) => {
            let founder = ctx.authorize(Route::Founder(FounderPage::Milestones))?;
            let startup = ctx.startup_for_display(&founder)?;
            let source = ctx.with_demo_fallback(
                SqliteMilestoneRepository::try_new(&ctx.conn)
                    .and_then(|repo| repo.list_by_startup(&startup.id)),
                "cli.milestones",
                fixtures::milestones,
            );
            let mut view = ListingView::for_preset(source, PagePreset::Milestones);
            args.apply(&mut view)?;
            print_page(&view.page(), json)?;
        }
        Commands::MilestoneAdd { title } => {
            let founder = ctx.authorize(Route::Founder(FounderPage::Milestones))?;
            let startup = ctx.persisted_startup(&founder)?;
            let service = MilestoneService::new(SqliteMilestoneRepository::try_new(&ctx.conn)?);
            let milestone = service.add_milestone(&startup.id, &title)?;
            println!("added milestone {}", milestone.id);
        }
        Commands::MilestoneStatus {
            milestone_id,
            status,
        } => {
            ctx.authorize(Route::Founder(FounderPage::Milestones))?;
            let service = MilestoneService::new(SqliteMilestoneRepository::try_new(&ctx.conn)?);
            let milestone = service.set_status(&milestone_id, status)?;
            println!(
                "{} is now {} ({}%)",
                milestone.title,
                milestone.status.as_str(),
                milestone.progress
            );
        }
        Commands::Team(args) => {
            let founder = ctx.authorize(Route::Founder(FounderPage::Team))?;
            let startup = ctx.startup_for_display(&founder)?;
            let source = ctx.with_demo_fallback(
                SqliteTeamMemberRepository::try_new(&ctx.conn)
                    .and_then(|repo| repo.list_by_startup(&startup.id, None)),
                "cli.team",
                fixtures::team_members,
            );
            let mut view = ListingView::for_preset(source, PagePreset::TeamMembers);
            args.apply(&mut view)?;
            print_page(&view.page(), json)?;
        }
        Commands::TeamInvite {
            name,
            email,
            role,
            department,
        } => {
            let founder = ctx.authorize(Route::Founder(FounderPage::Team))?;
            let startup = ctx.persisted_startup(&founder)?;
            let service = TeamService::new(SqliteTeamMemberRepository::try_new(&ctx.conn)?);
            let member = service.invite(
                &startup.id,
                Invitation {
                    name,
                    email,
                    role,
                    department,
                    user_id: None,
                },
            )?;
            println!("invited {} ({})", member.name, member.id);
        }
        Commands::TeamApprove { member_id } => {
            ctx.authorize(Route::Founder(FounderPage::Team))?;
            let service = TeamService::new(SqliteTeamMemberRepository::try_new(&ctx.conn)?);
            let member = service.approve(&member_id)?;
            println!("approved {}", member.name);
        }
        Commands::TeamRemove { member_id } => {
            ctx.authorize(Route::Founder(FounderPage::Team))?;
            let service = TeamService::new(SqliteTeamMemberRepository::try_new(&ctx.conn)?);
            if !service.remove(&member_id)? {
                bail!("team member not found: {member_id}");
            }
            println!("removed {member_id}");
        }
        Commands::PitchDraft => {
            let founder = ctx.authorize(Route::Founder(FounderPage::Pitch))?;
            let startup = ctx.startup_for_display(&founder)?;
            println!("{}", generate_pitch_draft(&startup));
        }
        Commands::SendPitch {
            investors,
            summary,
            ask,
            equity,
        } => {
            let founder = ctx.authorize(Route::Founder(FounderPage::Pitch))?;
            let startup = ctx.persisted_startup(&founder)?;
            let draft = PitchDraft {
                summary: summary.unwrap_or_else(|| generate_pitch_draft(&startup)),
                ask_amount: ask,
                equity,
            };
            let service = PitchService::new(SqlitePitchRepository::try_new(&ctx.conn)?);
            let sent = service.send_pitch(&startup, &investors, &draft)?;
            println!("pitch sent to {} investor(s)", sent.len());
        }
    }
    Ok(())
}

fn dashboard(ctx: &AppContext, json: bool) -> Result<()> {
    let Some(role) = ctx.session.current().map(|user| user.role) else {
        bail!("sign in first");
    };
    let user = ctx.authorize(Route::dashboard(role))?;

    match role {
        Role::Founder | Role::Team => {
            let service = DashboardService::new(
                ctx.startups()?,
                SqliteMilestoneRepository::try_new(&ctx.conn)?,
                SqliteTeamMemberRepository::try_new(&ctx.conn)?,
                SqliteTaskRepository::try_new(&ctx.conn)?,
                ctx.config.demo_mode,
            );
            if role == Role::Founder {
                founder_dashboard(&service.founder_overview(&user), json)
            } else {
                let overview = service.team_overview(&user);
                let counts = overview.counts;
                if json {
                    return print_json(&serde_json::json!({
                        "todo": counts.todo,
                        "inProgress": counts.in_progress,
                        "overdue": counts.overdue,
                        "completed": counts.completed,
                    }));
                }
                println!(
                    "tasks: {} total, {} todo, {} in progress, {} overdue, {} completed",
                    counts.total(),
                    counts.todo,
                    counts.in_progress,
                    counts.overdue,
                    counts.completed
                );
                Ok(())
            }
        }
        Role::Investor => {
            let investments = fixtures::investments();
            let total = total_invested_lakhs(&investments);
            if json {
                return print_json(&serde_json::json!({
                    "portfolio": investments.len(),
                    "totalInvestedLakhs": total,
                }));
            }
            println!(
                "portfolio: {} companies, ₹{total:.1}L invested",
                investments.len()
            );
            Ok(())
        }
    }
}

fn founder_dashboard(
    overview: &pitchflow_core::service::dashboard_service::FounderOverview,
    json: bool,
) -> Result<()> {
    if json {
        return print_json(&serde_json::json!({
            "startup": overview.startup,
            "milestones": overview.milestones,
            "approvedMembers": overview.approved_members,
            "fromFixtures": overview.from_fixtures,
        }));
    }
    let Some(startup) = &overview.startup else {
        println!("no startup yet; run `pitchflow onboard <name>`");
        return Ok(());
    };
    println!(
        "{} ({}){}",
        startup.name,
        startup.stage.as_str(),
        if overview.from_fixtures { " [demo data]" } else { "" }
    );
    println!(
        "scores: execution {} validation {}",
        startup.execution_score, startup.validation_score
    );
    println!(
        "milestones: {}, team: {} approved",
        overview.milestones.len(),
        overview.approved_members.len()
    );
    Ok(())
}

fn parse_role(raw: &str) -> Result<Role, String> {
    Role::parse(raw).ok_or_else(|| format!("unknown role `{raw}`"))
}

fn parse_stage(raw: &str) -> Result<Stage, String> {
    Stage::parse(raw).ok_or_else(|| format!("unknown stage `{raw}`"))
}

fn parse_priority(raw: &str) -> Result<Priority, String> {
    Priority::parse(raw).ok_or_else(|| format!("unknown priority `{raw}`"))
}

fn parse_milestone_status(raw: &str) -> Result<MilestoneStatus, String> {
    MilestoneStatus::parse(raw).ok_or_else(|| format!("unknown milestone status `{raw}`"))
}

fn parse_decision(raw: &str) -> Result<PitchStatus, String> {
    match PitchStatus::parse(raw) {
        Some(status @ (PitchStatus::Accepted | PitchStatus::Rejected)) => Ok(status),
        _ => Err(format!("decision must be `accepted` or `rejected`, got `{raw}`")),
    }
}

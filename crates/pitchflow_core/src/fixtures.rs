//! Bundled demo data.
//!
//! These collections back the listing pages when no persisted data exists
//! and the dashboards when demo mode is on. Every record passes its own
//! `validate()`.

use crate::model::catalog::{Priority, Stage};
use crate::model::investment::{Investment, InvestmentStatus};
use crate::model::investor::InvestorProfile;
use crate::model::milestone::{Milestone, MilestoneStatus};
use crate::model::pitch::{PitchRequest, PitchStatus};
use crate::model::startup::Startup;
use crate::model::task::{Task, TaskStatus};
use crate::model::team::{MemberStatus, TeamMember};

pub const DEMO_STARTUP_ID: &str = "demo-startup-001";
pub const DEMO_FOUNDER_ID: &str = "demo-founder-001";
pub const DEMO_INVESTOR_ID: &str = "demo-investor-001";
pub const DEMO_TEAM_USER_ID: &str = "demo-team-001";

/// The founder's own startup in demo mode.
pub fn demo_startup() -> Startup {
    let mut startup = Startup::new(DEMO_STARTUP_ID, DEMO_FOUNDER_ID, "TechFlow AI");
    startup.founder_name = Some("Demo Founder".to_string());
    startup.tagline = "AI-powered workflow automation for startups".to_string();
    startup.description = "TechFlow AI is an intelligent workflow automation platform that helps startups streamline their operations using advanced AI. We reduce operational costs by 60% on average.".to_string();
    startup.domain = "saas".to_string();
    startup.stage = Stage::Mvp;
    startup.founded_date = Some("2024-01-15".to_string());
    startup.location = "Bangalore, India".to_string();
    startup.website = Some("https://techflow.ai".to_string());
    startup.team_size = 5;
    startup.looking_for = vec!["Frontend Developer".to_string(), "DevOps Engineer".to_string()];
    startup.team_id = "TF-DEMO01".to_string();
    startup.execution_score = 78;
    startup.validation_score = 85;
    startup.milestones_completed = 6;
    startup.total_milestones = 10;
    startup
}

#[allow(clippy::too_many_arguments)]
fn listed_startup(
    id: &str,
    name: &str,
    description: &str,
    domain: &str,
    stage: Stage,
    scores: (u8, u8),
    team_size: u32,
    milestones: (u32, u32),
    location: &str,
    founded: &str,
    funding: &str,
    investor_count: u32,
) -> Startup {
    let mut startup = Startup::new(id, format!("founder-{id}"), name);
    startup.description = description.to_string();
    startup.domain = domain.to_string();
    startup.stage = stage;
    startup.execution_score = scores.0;
    startup.validation_score = scores.1;
    startup.team_size = team_size;
    startup.milestones_completed = milestones.0;
    startup.total_milestones = milestones.1;
    startup.location = location.to_string();
    startup.founded_date = Some(founded.to_string());
    startup.funding_raised = Some(funding.to_string());
    startup.investor_count = investor_count;
    startup
}

/// Marketplace listing source.
pub fn marketplace_startups() -> Vec<Startup> {
    vec![
        listed_startup("1", "TechFlow AI", "AI-powered workflow automation for modern teams. Streamline your operations with intelligent task management.", "saas", Stage::Growth, (92, 88), 12, (15, 18), "Bangalore, India", "2022", "₹2.5Cr", 4),
        listed_startup("2", "EduSpark", "Personalized learning platform using AI to adapt to each student's unique learning style and pace.", "edtech", Stage::Growth, (88, 85), 18, (12, 15), "Mumbai, India", "2021", "₹4Cr", 6),
        listed_startup("3", "HealthBridge", "Telemedicine platform connecting patients with specialists across India. 24/7 healthcare access.", "health", Stage::Mvp, (78, 82), 8, (6, 12), "Delhi, India", "2023", "₹1.2Cr", 3),
        listed_startup("4", "FinanceHub", "AI-powered personal finance assistant for millennials. Budget, invest, and save smarter.", "fintech", Stage::Mvp, (85, 79), 6, (5, 10), "Hyderabad, India", "2023", "₹80L", 2),
        listed_startup("5", "GreenLogistics", "Sustainable last-mile delivery platform using electric vehicles and optimized routing.", "logistics", Stage::Growth, (90, 87), 25, (20, 25), "Pune, India", "2020", "₹6Cr", 5),
        listed_startup("6", "DataMind", "No-code AI platform for businesses to build and deploy machine learning models.", "ai", Stage::Scale, (94, 91), 32, (28, 30), "Bangalore, India", "2019", "₹12Cr", 8),
        listed_startup("7", "ShopEase", "Social commerce platform enabling small businesses to sell through WhatsApp and Instagram.", "ecommerce", Stage::Growth, (86, 84), 15, (14, 18), "Chennai, India", "2021", "₹3.5Cr", 4),
        listed_startup("8", "GameVerse", "Cloud gaming platform bringing high-end gaming to low-end devices across India.", "gaming", Stage::Mvp, (81, 77), 10, (4, 12), "Mumbai, India", "2023", "₹1.5Cr", 3),
        listed_startup("9", "SolarGrid", "Smart solar energy management system for residential and commercial buildings.", "cleantech", Stage::Growth, (89, 86), 14, (16, 20), "Ahmedabad, India", "2020", "₹5Cr", 5),
        listed_startup("10", "MelodyBox", "AI music composition tool for content creators and independent artists.", "entertainment", Stage::Idea, (72, 68), 4, (2, 8), "Kolkata, India", "2024", "₹30L", 1),
        listed_startup("11", "WorkFlow Pro", "Enterprise project management suite with advanced analytics and team collaboration.", "enterprise", Stage::Scale, (93, 89), 45, (35, 40), "Bangalore, India", "2018", "₹18Cr", 10),
        listed_startup("12", "PaySmart", "UPI-based payment solution for rural India with voice-enabled transactions.", "fintech", Stage::Growth, (87, 83), 22, (18, 22), "Jaipur, India", "2021", "₹7Cr", 6),
    ]
}

#[allow(clippy::too_many_arguments)]
fn investor(
    id: &str,
    name: &str,
    kind: &str,
    stage: Stage,
    domains: &[&str],
    ticket_size: &str,
    location: &str,
    portfolio_size: u32,
) -> InvestorProfile {
    InvestorProfile {
        id: id.to_string(),
        name: name.to_string(),
        kind: kind.to_string(),
        preferred_stage: stage,
        preferred_domains: domains.iter().map(|domain| domain.to_string()).collect(),
        ticket_size: ticket_size.to_string(),
        location: location.to_string(),
        portfolio_size,
    }
}

/// Investors a founder can pitch to.
pub fn investor_directory() -> Vec<InvestorProfile> {
    vec![
        investor("1", "Acme Ventures", "VC", Stage::Mvp, &["SaaS", "Fintech"], "₹25L - ₹1Cr", "Mumbai", 24),
        investor("2", "Angel Network India", "Angel", Stage::Idea, &["Edtech", "Health"], "₹5L - ₹25L", "Bangalore", 45),
        investor("3", "Growth Capital Partners", "VC", Stage::Growth, &["SaaS", "E-commerce"], "₹1Cr+", "Delhi", 18),
        investor("4", "TechStart Accelerator", "Accelerator", Stage::Idea, &["SaaS", "AI/ML"], "₹10L - ₹50L", "Hyderabad", 60),
        investor("5", "HealthTech Angels", "Angel", Stage::Mvp, &["Health", "Biotech"], "₹10L - ₹50L", "Chennai", 15),
        investor("6", "EduFund Partners", "VC", Stage::Growth, &["Edtech"], "₹50L - ₹2Cr", "Pune", 12),
    ]
}

#[allow(clippy::too_many_arguments)]
fn inbox_pitch(
    id: &str,
    startup_name: &str,
    domain: &str,
    stage: Stage,
    founder_name: &str,
    summary: &str,
    ask_amount: &str,
    equity: &str,
    status: PitchStatus,
    scores: Option<(u8, u8)>,
) -> PitchRequest {
    PitchRequest {
        id: id.to_string(),
        startup_id: None,
        startup_name: startup_name.to_string(),
        founder_name: founder_name.to_string(),
        investor_id: Some(DEMO_INVESTOR_ID.to_string()),
        domain: domain.to_string(),
        stage,
        pitch_summary: summary.to_string(),
        ask_amount: ask_amount.to_string(),
        equity: equity.to_string(),
        status,
        execution_score: scores.map(|(execution, _)| execution),
        validation_score: scores.map(|(_, validation)| validation),
    }
}

/// Demo investor's inbox.
pub fn inbox_pitches() -> Vec<PitchRequest> {
    vec![
        inbox_pitch("1", "FinanceHub", "Fintech", Stage::Idea, "Amit Patel", "AI-powered personal finance assistant for millennials. Uses machine learning to categorize expenses, suggest savings strategies, and predict cash flow gaps. We have 5,000+ waitlist signups and a working MVP.", "₹25L", "10%", PitchStatus::Pending, None),
        inbox_pitch("2", "GreenLogistics", "Logistics", Stage::Mvp, "Sanjay Kumar", "Sustainable last-mile delivery platform using electric vehicles and route optimization. Currently serving 50 merchants in Bangalore with 30% cost reduction compared to traditional methods.", "₹40L", "12%", PitchStatus::Pending, Some((72, 68))),
        inbox_pitch("3", "EduVerse", "Edtech", Stage::Mvp, "Priya Sharma", "VR-based immersive learning experiences for K-12 students. Partnership with 5 schools for pilot program. 40% improvement in retention rates in initial testing.", "₹30L", "15%", PitchStatus::Pending, Some((78, 82))),
        inbox_pitch("4", "MediQuick", "Health", Stage::Idea, "Rajesh Gupta", "AI-powered diagnostic assistant for primary healthcare in rural areas. Can identify 50+ common conditions with 90% accuracy. Seeking funding for clinical trials.", "₹50L", "8%", PitchStatus::Accepted, Some((65, 75))),
        inbox_pitch("5", "AgriSmart", "Agriculture", Stage::Growth, "Vikram Singh", "IoT-based smart farming solutions with real-time soil monitoring and automated irrigation. Serving 200+ farmers across 3 states with 30% yield improvement.", "₹60L", "10%", PitchStatus::Rejected, Some((85, 70))),
        inbox_pitch("6", "FoodieFast", "Food", Stage::Mvp, "Anita Desai", "Cloud kitchen focused on healthy meal delivery with AI-based personalization. 1,000+ monthly orders with 4.5 star rating on food delivery apps.", "₹20L", "12%", PitchStatus::Pending, Some((68, 72))),
    ]
}

#[allow(clippy::too_many_arguments)]
fn team_task(
    id: &str,
    title: &str,
    description: &str,
    priority: Priority,
    status: TaskStatus,
    milestone: &str,
    due_date: &str,
    tags: &[&str],
    progress: u8,
    hours: (u32, u32),
) -> Task {
    let mut task = Task::new(id, title);
    task.description = description.to_string();
    task.priority = priority;
    task.status = status;
    task.milestone = Some(milestone.to_string());
    task.due_date = Some(due_date.to_string());
    task.assigned_to = Some(DEMO_TEAM_USER_ID.to_string());
    task.project_id = Some(DEMO_STARTUP_ID.to_string());
    task.tags = tags.iter().map(|tag| tag.to_string()).collect();
    task.progress = progress;
    task.estimated_hours = hours.0;
    task.logged_hours = hours.1;
    task
}

/// Tasks assigned to the demo team member.
pub fn team_tasks() -> Vec<Task> {
    vec![
        team_task("1", "Implement user authentication API", "Create JWT-based auth system with login/signup endpoints", Priority::High, TaskStatus::InProgress, "MVP Launch", "2024-01-15", &["backend", "api", "auth"], 60, (16, 10)),
        team_task("2", "Design dashboard UI mockups", "Create Figma mockups for the main dashboard interface", Priority::Medium, TaskStatus::Todo, "MVP Launch", "2024-01-16", &["design", "ui", "figma"], 0, (12, 0)),
        team_task("3", "Write API documentation", "Document all REST API endpoints with examples", Priority::Low, TaskStatus::Todo, "Beta Release", "2024-01-20", &["documentation", "api"], 0, (8, 0)),
        team_task("4", "Fix navigation bug on mobile", "Responsive menu not closing on mobile devices", Priority::High, TaskStatus::Overdue, "MVP Launch", "2024-01-12", &["bug", "mobile", "ui"], 30, (4, 2)),
        team_task("5", "Setup CI/CD pipeline", "Configure GitHub Actions for automated testing and deployment", Priority::Medium, TaskStatus::Completed, "Infrastructure", "2024-01-14", &["devops", "ci/cd", "automation"], 100, (10, 10)),
        team_task("6", "Implement payment gateway integration", "Integrate Razorpay for payment processing", Priority::High, TaskStatus::InProgress, "Beta Release", "2024-01-18", &["backend", "payment", "integration"], 40, (20, 8)),
        team_task("7", "Create onboarding tutorial", "Design interactive onboarding flow for new users", Priority::Low, TaskStatus::Todo, "User Experience", "2024-01-22", &["ux", "design", "onboarding"], 0, (14, 0)),
        team_task("8", "Optimize database queries", "Add indexes and optimize slow queries", Priority::Medium, TaskStatus::Completed, "Performance", "2024-01-13", &["backend", "database", "performance"], 100, (8, 8)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn investment(
    id: &str,
    name: &str,
    domain: &str,
    stage: Stage,
    amount: Option<&str>,
    scores: (u8, u8),
    milestones: (u32, u32),
    last_activity: &str,
) -> Investment {
    Investment {
        id: id.to_string(),
        name: name.to_string(),
        domain: domain.to_string(),
        stage,
        status: if amount.is_some() {
            InvestmentStatus::Invested
        } else {
            InvestmentStatus::Watching
        },
        amount: amount.map(str::to_string),
        execution_score: scores.0,
        validation_score: scores.1,
        milestones_completed: milestones.0,
        total_milestones: milestones.1,
        last_activity: last_activity.to_string(),
    }
}

/// Demo investor's portfolio and watch list.
pub fn investments() -> Vec<Investment> {
    vec![
        investment("1", "TechFlow AI", "SaaS", Stage::Mvp, Some("₹10L"), (85, 78), (6, 8), "Updated task: Fix authentication bug"),
        investment("2", "EduSpark", "Edtech", Stage::Growth, Some("₹15L"), (92, 88), (12, 12), "Completed milestone: Scale to 10K users"),
        investment("3", "HealthBridge", "Health", Stage::Mvp, None, (72, 68), (4, 10), "Added new task: User onboarding flow"),
        investment("4", "AgriSmart", "Agriculture", Stage::Growth, Some("₹12L"), (65, 70), (8, 12), "Updated milestone: IoT sensor integration"),
        investment("5", "GreenLogistics", "Logistics", Stage::Mvp, None, (78, 75), (2, 6), "Created startup profile"),
        investment("6", "FoodieFast", "Food", Stage::Mvp, Some("₹8L"), (68, 72), (5, 8), "Updated task: Kitchen workflow automation"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn milestone(
    id: &str,
    title: &str,
    description: &str,
    status: MilestoneStatus,
    priority: Priority,
    progress: u8,
    due_date: &str,
    tasks: (u32, u32),
) -> Milestone {
    let mut milestone = Milestone::new(id, DEMO_STARTUP_ID, title);
    milestone.description = description.to_string();
    milestone.status = status;
    milestone.priority = priority;
    milestone.progress = progress;
    milestone.due_date = Some(due_date.to_string());
    milestone.tasks_completed = tasks.0;
    milestone.tasks_total = tasks.1;
    milestone
}

/// Demo startup roadmap.
pub fn milestones() -> Vec<Milestone> {
    vec![
        milestone("1", "MVP Launch", "Launch minimum viable product with core features", MilestoneStatus::Completed, Priority::High, 100, "2023-12-01", (8, 8)),
        milestone("2", "User Testing Phase", "Conduct user testing with 50 beta users and gather feedback", MilestoneStatus::InProgress, Priority::High, 60, "2024-01-15", (3, 5)),
        milestone("3", "Beta Release", "Public beta release with advanced features and improvements", MilestoneStatus::InProgress, Priority::Medium, 30, "2024-02-15", (2, 6)),
        milestone("4", "Mobile App Development", "Develop iOS and Android applications", MilestoneStatus::Pending, Priority::Medium, 0, "2024-04-30", (0, 12)),
        milestone("5", "Enterprise Features", "Add SSO, audit logs, admin controls for enterprise clients", MilestoneStatus::Pending, Priority::Low, 0, "2024-05-15", (0, 8)),
    ]
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: &str,
    name: &str,
    email: &str,
    role: &str,
    department: &str,
    status: MemberStatus,
    performance_score: u8,
    tasks: (u32, u32),
) -> TeamMember {
    let mut member = TeamMember::new(id, DEMO_STARTUP_ID, name, email);
    member.role = role.to_string();
    member.department = department.to_string();
    member.status = status;
    member.performance_score = performance_score;
    member.tasks_completed = tasks.0;
    member.tasks_assigned = tasks.1;
    member
}

/// Demo startup roster, including one pending join request.
pub fn team_members() -> Vec<TeamMember> {
    vec![
        member("1", "Priya Sharma", "priya@techflow.ai", "CTO", "Engineering", MemberStatus::Active, 92, (45, 52)),
        member("2", "Rahul Kumar", "rahul@techflow.ai", "Senior Developer", "Engineering", MemberStatus::Active, 88, (38, 42)),
        member("3", "Anjali Rao", "anjali@techflow.ai", "Lead Designer", "Design", MemberStatus::Active, 90, (32, 35)),
        member("4", "Vikram Mehta", "vikram@techflow.ai", "Backend Developer", "Engineering", MemberStatus::Away, 85, (28, 30)),
        member("5", "Divya Krishnan", "divya@email.com", "Product Manager", "Product", MemberStatus::Pending, 0, (0, 0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_have_expected_sizes() {
        assert_eq!(marketplace_startups().len(), 12);
        assert_eq!(investor_directory().len(), 6);
        assert_eq!(inbox_pitches().len(), 6);
        assert_eq!(team_tasks().len(), 8);
        assert_eq!(investments().len(), 6);
        assert_eq!(milestones().len(), 5);
        assert_eq!(team_members().len(), 5);
    }

    #[test]
    fn every_fixture_record_validates() {
        assert!(demo_startup().validate().is_ok());
        assert!(marketplace_startups().iter().all(|item| item.validate().is_ok()));
        assert!(inbox_pitches().iter().all(|item| item.validate().is_ok()));
        assert!(team_tasks().iter().all(|item| item.validate().is_ok()));
        assert!(milestones().iter().all(|item| item.validate().is_ok()));
        assert!(team_members().iter().all(|item| item.validate().is_ok()));
    }

    #[test]
    fn fixture_funding_parses_to_lakhs() {
        let startups = marketplace_startups();
        assert!(startups.iter().all(|item| item.funding_in_lakhs().is_some()));
        assert_eq!(startups[3].funding_in_lakhs(), Some(80.0));
        assert_eq!(startups[0].funding_in_lakhs(), Some(250.0));
    }
}

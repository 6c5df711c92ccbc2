//! Route table and session-based guard decisions.
//!
//! # Invariants
//! - `guard` is a pure function of session identity and requested route.
//! - Public routes never redirect.
//! - Anonymous access to a role-scoped route redirects to `/auth`.

use crate::model::identity::{DemoUser, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FounderPage {
    Dashboard,
    Onboarding,
    Pitch,
    Startup,
    Milestones,
    Team,
    Analytics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestorPage {
    Dashboard,
    Inbox,
    Investments,
    Analytics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamPage {
    Dashboard,
    Tasks,
    Overview,
    Performance,
    Notifications,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Auth,
    Login,
    Marketplace,
    Founder(FounderPage),
    Investor(InvestorPage),
    Team(TeamPage),
    /// Quick-access dashboards that render without signing in.
    Demo(Role),
    NotFound,
}

impl Route {
    /// Parses a request path. Query strings, fragments and trailing slashes
    /// are ignored; unknown paths map to `NotFound`.
    pub fn parse(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();

        match segments.as_slice() {
            [] => Self::Landing,
            ["auth"] => Self::Auth,
            ["login"] => Self::Login,
            ["marketplace"] => Self::Marketplace,
            ["founder", page] => founder_page(page).map_or(Self::NotFound, Self::Founder),
            ["investor", page] => investor_page(page).map_or(Self::NotFound, Self::Investor),
            ["team", page] => team_page(page).map_or(Self::NotFound, Self::Team),
            ["demo", role] => Role::parse(role)
                .filter(|parsed| parsed.as_str() == *role)
                .map_or(Self::NotFound, Self::Demo),
            _ => Self::NotFound,
        }
    }

    /// Canonical path for this route. `NotFound` renders as `/404`.
    pub fn path(&self) -> String {
        match self {
            Self::Landing => "/".to_string(),
            Self::Auth => "/auth".to_string(),
            Self::Login => "/login".to_string(),
            Self::Marketplace => "/marketplace".to_string(),
            Self::Founder(page) => format!("/founder/{}", founder_segment(*page)),
            Self::Investor(page) => format!("/investor/{}", investor_segment(*page)),
            Self::Team(page) => format!("/team/{}", team_segment(*page)),
            Self::Demo(role) => format!("/demo/{}", role.as_str()),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Role owning a role-scoped route; `None` for public routes.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Self::Founder(_) => Some(Role::Founder),
            Self::Investor(_) => Some(Role::Investor),
            Self::Team(_) => Some(Role::Team),
            _ => None,
        }
    }

    pub fn dashboard(role: Role) -> Self {
        match role {
            Role::Founder => Self::Founder(FounderPage::Dashboard),
            Role::Investor => Self::Investor(InvestorPage::Dashboard),
            Role::Team => Self::Team(TeamPage::Dashboard),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Route),
    Redirect(Route),
}

/// Decides whether `route` renders for the current identity.
///
/// A signed-in user asking for another role's page is sent to their own
/// dashboard.
pub fn guard(session: Option<&DemoUser>, route: Route) -> RouteDecision {
    let Some(required) = route.required_role() else {
        return RouteDecision::Render(route);
    };

    match session {
        None => RouteDecision::Redirect(Route::Auth),
        Some(user) if user.role != required => RouteDecision::Redirect(Route::dashboard(user.role)),
        Some(_) => RouteDecision::Render(route),
    }
}

/// Where the sign-in screen navigates after choosing `role`.
pub fn landing_after_sign_in(role: Role) -> Route {
    Route::dashboard(role)
}

fn founder_page(segment: &str) -> Option<FounderPage> {
    match segment {
        "dashboard" => Some(FounderPage::Dashboard),
        "onboarding" => Some(FounderPage::Onboarding),
        "pitch" => Some(FounderPage::Pitch),
        "startup" => Some(FounderPage::Startup),
        "milestones" => Some(FounderPage::Milestones),
        "team" => Some(FounderPage::Team),
        "analytics" => Some(FounderPage::Analytics),
        _ => None,
    }
}

fn founder_segment(page: FounderPage) -> &'static str {
    match page {
        FounderPage::Dashboard => "dashboard",
        FounderPage::Onboarding => "onboarding",
        FounderPage::Pitch => "pitch",
        FounderPage::Startup => "startup",
        FounderPage::Milestones => "milestones",
        FounderPage::Team => "team",
        FounderPage::Analytics => "analytics",
    }
}

fn investor_page(segment: &str) -> Option<InvestorPage> {
    match segment {
        "dashboard" => Some(InvestorPage::Dashboard),
        "inbox" => Some(InvestorPage::Inbox),
        "investments" => Some(InvestorPage::Investments),
        "analytics" => Some(InvestorPage::Analytics),
        _ => None,
    }
}

fn investor_segment(page: InvestorPage) -> &'static str {
    match page {
        InvestorPage::Dashboard => "dashboard",
        InvestorPage::Inbox => "inbox",
        InvestorPage::Investments => "investments",
        InvestorPage::Analytics => "analytics",
    }
}

fn team_page(segment: &str) -> Option<TeamPage> {
    match segment {
        "dashboard" => Some(TeamPage::Dashboard),
        "tasks" => Some(TeamPage::Tasks),
        "overview" => Some(TeamPage::Overview),
        "performance" => Some(TeamPage::Performance),
        "notifications" => Some(TeamPage::Notifications),
        "profile" => Some(TeamPage::Profile),
        _ => None,
    }
}

fn team_segment(page: TeamPage) -> &'static str {
    match page {
        TeamPage::Dashboard => "dashboard",
        TeamPage::Tasks => "tasks",
        TeamPage::Overview => "overview",
        TeamPage::Performance => "performance",
        TeamPage::Notifications => "notifications",
        TeamPage::Profile => "profile",
    }
}

#[cfg(test)]
mod tests {
    use super::{FounderPage, Route, TeamPage};
    use crate::model::identity::Role;

    #[test]
    fn parse_ignores_query_and_trailing_slash() {
        assert_eq!(
            Route::parse("/founder/milestones/?tab=open"),
            Route::Founder(FounderPage::Milestones)
        );
        assert_eq!(Route::parse("/marketplace?role=investor"), Route::Marketplace);
        assert_eq!(Route::parse(""), Route::Landing);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/founder/settings"), Route::NotFound);
        assert_eq!(Route::parse("/admin"), Route::NotFound);
        assert_eq!(Route::parse("/demo/Founder"), Route::NotFound);
    }

    #[test]
    fn path_round_trips_through_parse() {
        let routes = [
            Route::Landing,
            Route::Auth,
            Route::Marketplace,
            Route::Team(TeamPage::Notifications),
            Route::Demo(Role::Investor),
            Route::dashboard(Role::Founder),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}

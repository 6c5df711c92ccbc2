use pitchflow_core::session::route::{FounderPage, InvestorPage, TeamPage};
use pitchflow_core::{guard, landing_after_sign_in, DemoUser, Role, Route, RouteDecision};

#[test]
fn anonymous_users_are_sent_to_auth_for_role_pages() {
    for path in ["/founder/dashboard", "/investor/inbox", "/team/tasks"] {
        let route = Route::parse(path);
        assert_eq!(guard(None, route), RouteDecision::Redirect(Route::Auth), "{path}");
    }
}

#[test]
fn public_and_demo_routes_render_without_a_session() {
    for path in ["/", "/auth", "/login", "/marketplace", "/demo/founder", "/nowhere"] {
        let route = Route::parse(path);
        assert_eq!(guard(None, route), RouteDecision::Render(route), "{path}");
    }
}

#[test]
fn role_mismatch_redirects_to_own_dashboard() {
    let investor = DemoUser::for_role(Role::Investor);
    let decision = guard(Some(&investor), Route::Founder(FounderPage::Milestones));
    assert_eq!(
        decision,
        RouteDecision::Redirect(Route::Investor(InvestorPage::Dashboard))
    );

    let team = DemoUser::for_role(Role::Team);
    assert_eq!(
        guard(Some(&team), Route::parse("/investor/dashboard")),
        RouteDecision::Redirect(Route::Team(TeamPage::Dashboard))
    );
}

#[test]
fn owner_role_renders_its_pages() {
    let founder = DemoUser::for_role(Role::Founder);
    let route = Route::parse("/founder/pitch/");
    assert_eq!(route, Route::Founder(FounderPage::Pitch));
    assert_eq!(guard(Some(&founder), route), RouteDecision::Render(route));
}

#[test]
fn sign_in_lands_on_role_dashboard() {
    assert_eq!(landing_after_sign_in(Role::Founder).path(), "/founder/dashboard");
    assert_eq!(landing_after_sign_in(Role::Investor).path(), "/investor/dashboard");
    assert_eq!(landing_after_sign_in(Role::Team).path(), "/team/dashboard");
}

#[test]
fn only_role_scoped_routes_require_a_role() {
    assert_eq!(Route::parse("/team/profile").required_role(), Some(Role::Team));
    assert_eq!(Route::parse("/demo/team").required_role(), None);
    assert_eq!(Route::parse("/marketplace").required_role(), None);
    assert_eq!(Route::parse("/founder/unknown").required_role(), None);
}

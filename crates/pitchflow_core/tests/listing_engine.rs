use pitchflow_core::fixtures;
use pitchflow_core::listing::records::{
    InvestorDimension, PitchDimension, StartupDimension, StartupSort, TaskDimension, TaskSort,
};
use pitchflow_core::listing::{
    facet_counts, filter_records, query, ListingCriteria, ListingView, PagePreset, PagingPolicy,
    SortKey,
};
use pitchflow_core::model::startup::Startup;

fn startup(id: &str, name: &str, domain: &str, execution_score: u8) -> Startup {
    let mut startup = Startup::new(id, format!("founder-{id}"), name);
    startup.domain = domain.to_string();
    startup.execution_score = execution_score;
    startup
}

/// 12 records: saas x5, fintech x3, health x4, interleaved.
fn twelve_startups() -> Vec<Startup> {
    let domains = [
        "saas", "fintech", "health", "saas", "health", "saas", "fintech", "health", "saas",
        "fintech", "health", "saas",
    ];
    domains
        .iter()
        .enumerate()
        .map(|(index, domain)| {
            startup(
                &format!("s-{index}"),
                &format!("Startup {index}"),
                domain,
                (index as u8) * 5,
            )
        })
        .collect()
}

fn ids<'a>(items: &[&'a Startup]) -> Vec<&'a str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

#[test]
fn domain_filter_pages_and_load_more_reveals_rest() {
    let mut view = ListingView::new(twelve_startups(), PagingPolicy::new(4, 4));
    view.set_filter(StartupDimension::Domain, ["saas"]);

    let page = view.page();
    assert_eq!(page.items.len(), 4);
    assert!(page.items.iter().all(|item| item.domain == "saas"));
    assert_eq!(page.filtered_count, 5);
    assert!(page.has_more);

    assert_eq!(view.load_more(), 5);
    let page = view.page();
    assert_eq!(page.items.len(), 5);
    assert!(!page.has_more);
}

#[test]
fn filtering_is_idempotent_and_yields_a_subset() {
    let source = twelve_startups();
    let criteria = ListingCriteria::new()
        .with_text("startup 1")
        .with_filter(StartupDimension::Domain, ["fintech", "health"]);

    let first = filter_records(&source, &criteria);
    let second = filter_records(&source, &criteria);
    assert_eq!(ids(&first), ids(&second));
    assert!(first
        .iter()
        .all(|item| source.iter().any(|candidate| std::ptr::eq(candidate, *item))));
    assert_eq!(ids(&first), vec!["s-1", "s-10"]);
}

#[test]
fn has_more_tracks_cursor_against_filtered_count() {
    let source = twelve_startups();
    let criteria = ListingCriteria::new();
    for cursor in 0..=14 {
        let page = query(&source, &criteria, cursor);
        assert_eq!(page.has_more, cursor < page.filtered_count);
        assert!(page.items.len() <= page.filtered_count);
    }
}

#[test]
fn equal_sort_keys_keep_source_order_in_both_directions() {
    let source = vec![
        startup("a", "Alpha", "saas", 80),
        startup("b", "Beta", "saas", 70),
        startup("c", "Gamma", "saas", 80),
        startup("d", "Delta", "saas", 70),
    ];

    let descending = ListingCriteria::new()
        .with_sort(SortKey::descending(StartupSort::ExecutionScore));
    let page = query(&source, &descending, source.len());
    assert_eq!(ids(&page.items), vec!["a", "c", "b", "d"]);

    let ascending =
        ListingCriteria::new().with_sort(SortKey::ascending(StartupSort::ExecutionScore));
    let page = query(&source, &ascending, source.len());
    assert_eq!(ids(&page.items), vec!["b", "d", "a", "c"]);
}

#[test]
fn records_without_funding_sort_last() {
    let mut source = twelve_startups();
    source[0].funding_raised = Some("₹2.5Cr".to_string());
    source[1].funding_raised = Some("₹80L".to_string());
    source[2].funding_raised = Some("-".to_string());

    let criteria = ListingCriteria::new().with_sort(SortKey::descending(StartupSort::Funding));
    let page = query(&source, &criteria, 3);
    assert_eq!(ids(&page.items), vec!["s-0", "s-1", "s-2"]);
}

#[test]
fn every_input_change_resets_cursor() {
    let mut view = ListingView::for_preset(fixtures::marketplace_startups(), PagePreset::Marketplace);
    assert_eq!(view.cursor(), 8);

    view.load_more();
    assert_eq!(view.cursor(), 12);
    view.set_text("ai");
    assert_eq!(view.cursor(), 8);

    view.load_more();
    view.toggle_filter_value(StartupDimension::Stage, "growth");
    assert_eq!(view.cursor(), 8);

    view.load_more();
    view.set_sort(Some(SortKey::descending(StartupSort::ValidationScore)));
    assert_eq!(view.cursor(), 8);

    view.load_more();
    view.clear_filters();
    assert_eq!(view.cursor(), 8);
    assert_eq!(view.criteria().text, "ai");
}

#[test]
fn toggling_a_value_twice_removes_the_filter() {
    let mut view = ListingView::for_preset(fixtures::marketplace_startups(), PagePreset::Marketplace);
    view.toggle_filter_value(StartupDimension::Domain, "fintech");
    assert_eq!(view.filtered_count(), 2);

    view.toggle_filter_value(StartupDimension::Domain, "fintech");
    assert!(view.criteria().filters.is_empty());
    assert_eq!(view.filtered_count(), 12);
}

#[test]
fn whitespace_query_matches_everything_and_other_queries_are_not_trimmed() {
    let source = fixtures::marketplace_startups();
    let blank = ListingCriteria::<StartupDimension, StartupSort>::new().with_text("   ");
    assert_eq!(filter_records(&source, &blank).len(), source.len());

    let bare = ListingCriteria::<StartupDimension, StartupSort>::new().with_text("SMART");
    assert_eq!(filter_records(&source, &bare).len(), 3);

    let padded = ListingCriteria::<StartupDimension, StartupSort>::new().with_text("smart ");
    let names: Vec<_> = filter_records(&source, &padded)
        .into_iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["SolarGrid"]);
}

#[test]
fn inbox_status_chip_and_search() {
    let mut view = ListingView::for_preset(fixtures::inbox_pitches(), PagePreset::PitchInbox);
    view.select_only(PitchDimension::Status, Some("pending"));
    assert_eq!(view.filtered_count(), 4);

    view.set_text("FOOD");
    let page = view.page();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].startup_name, "FoodieFast");

    view.select_only(PitchDimension::Status, None);
    view.set_text("");
    assert_eq!(view.filtered_count(), 6);
}

#[test]
fn task_board_sorts_overdue_first() {
    let tasks = fixtures::team_tasks();
    let criteria = ListingCriteria::new()
        .with_filter(TaskDimension::Milestone, ["MVP Launch"])
        .with_sort(SortKey::ascending(TaskSort::Status));
    let page = query(&tasks, &criteria, 10);

    assert_eq!(page.filtered_count, 3);
    assert_eq!(page.items[0].title, "Fix navigation bug on mobile");
    assert!(!page.has_more);
}

#[test]
fn investor_directory_matches_any_preferred_domain() {
    let investors = fixtures::investor_directory();
    let criteria = ListingCriteria::new().with_filter(InvestorDimension::Domain, ["SaaS"]);
    let names: Vec<_> = filter_records(&investors, &criteria)
        .into_iter()
        .map(|investor| investor.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Acme Ventures", "Growth Capital Partners", "TechStart Accelerator"]
    );
}

#[test]
fn facet_counts_follow_domains() {
    let counts = facet_counts(&twelve_startups(), StartupDimension::Domain);
    assert_eq!(counts.get("saas"), Some(&5));
    assert_eq!(counts.get("fintech"), Some(&3));
    assert_eq!(counts.get("health"), Some(&4));
}

//! Properties of the application's route table, checked without a browser.

use proptest::prelude::*;
use rift_rewind_frontend::constants::{
    PARAM_REGION, PARAM_RIOT_ID, ROUTE_ABOUT, ROUTE_CALENDAR, ROUTE_HOME, ROUTE_INFOGRAPHIC,
    ROUTE_MASTERY, ROUTE_REWIND,
};
use rift_rewind_frontend::pages::{Page, Section};
use rift_rewind_frontend::router::{path_from_hash, HashHistory, Params};
use rift_rewind_frontend::routes::app_routes;
use std::collections::HashSet;

#[test]
fn declared_paths_resolve_to_their_routes() {
    let table = app_routes().expect("route table builds");
    let cases = [
        ("/", ROUTE_HOME, Some(Page::Home)),
        ("/rewind/abc123/NA", ROUTE_REWIND, Some(Page::Rewind(Section::Summary))),
        ("/rewind/abc123/NA/calendar", ROUTE_CALENDAR, Some(Page::Rewind(Section::Calendar))),
        (
            "/rewind/abc123/NA/infographic",
            ROUTE_INFOGRAPHIC,
            Some(Page::Rewind(Section::Infographic)),
        ),
        ("/rewind/abc123/NA/mastery", ROUTE_MASTERY, Some(Page::Rewind(Section::Mastery))),
        // Deferred: nothing to render until the first load finishes.
        ("/about", ROUTE_ABOUT, None),
    ];

    for (path, name, component) in cases {
        let matched = table
            .resolve(path)
            .unwrap_or_else(|| panic!("{} should match", path));
        assert_eq!(matched.name(), name, "route for {}", path);
        assert_eq!(matched.component(), component, "component for {}", path);
    }
}

#[test]
fn rewind_captures_riot_id_and_region() {
    let table = app_routes().unwrap();
    let matched = table.resolve("/rewind/abc123/NA").unwrap();
    assert_eq!(matched.name(), ROUTE_REWIND);
    assert_eq!(
        matched.params(),
        &Params::new().with(PARAM_RIOT_ID, "abc123").with(PARAM_REGION, "NA")
    );
}

#[test]
fn calendar_is_not_swallowed_by_rewind() {
    let table = app_routes().unwrap();
    let matched = table.resolve("/rewind/abc123/NA/calendar").unwrap();
    assert_eq!(matched.name(), ROUTE_CALENDAR);
    assert_eq!(matched.params().get(PARAM_RIOT_ID), Some("abc123"));
    assert_eq!(matched.params().get(PARAM_REGION), Some("NA"));
}

#[test]
fn route_names_are_unique() {
    let table = app_routes().unwrap();
    let names: Vec<&str> = table.names().collect();
    let distinct: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(names.len(), distinct.len());
    assert_eq!(names.len(), 6);
}

#[test]
fn only_about_is_deferred() {
    let table = app_routes().unwrap();
    let deferred: Vec<&str> = table
        .entries()
        .iter()
        .filter(|e| e.source().is_deferred())
        .map(|e| e.name())
        .collect();
    assert_eq!(deferred, vec![ROUTE_ABOUT]);
}

#[test]
fn undeclared_paths_do_not_match() {
    let table = app_routes().unwrap();
    for path in [
        "/nonexistent",
        "/rewind",
        "/rewind/abc123",
        "/rewind/abc123/NA/unknown",
        "/about/team",
    ] {
        assert!(table.resolve(path).is_none(), "{} should not match", path);
    }
}

#[test]
fn hash_locations_resolve() {
    let table = app_routes().unwrap();
    let path = path_from_hash("#/rewind/Hide%20on%20bush%23KR1/asia/mastery");
    let matched = table.resolve(&path).unwrap();
    assert_eq!(matched.name(), ROUTE_MASTERY);
    assert_eq!(matched.params().get(PARAM_RIOT_ID), Some("Hide on bush#KR1"));
}

#[test]
fn undecodable_riot_id_links_back_to_itself() {
    let table = app_routes().unwrap();
    let matched = table.resolve("/rewind/ab%FFcd/NA").unwrap();
    assert_eq!(matched.params().get(PARAM_RIOT_ID), Some("ab%FFcd"));
    assert_eq!(
        table.href_for(ROUTE_REWIND, matched.params()).unwrap(),
        "/rewind/ab%FFcd/NA"
    );
}

proptest! {
    #[test]
    fn section_links_lead_back_to_the_same_player(
        riot_id in "\\PC{1,24}",
        region in "[a-zA-Z0-9]{1,8}"
    ) {
        let table = app_routes().unwrap();
        let history = HashHistory::new("/");
        let params = Params::new()
            .with(PARAM_RIOT_ID, riot_id.clone())
            .with(PARAM_REGION, region.clone());

        for name in [ROUTE_REWIND, ROUTE_CALENDAR, ROUTE_INFOGRAPHIC, ROUTE_MASTERY] {
            let href = history.href(&table.href_for(name, &params).unwrap());
            let hash = href.strip_prefix(history.base()).unwrap();
            let matched = table.resolve(&path_from_hash(hash)).unwrap();

            prop_assert_eq!(matched.name(), name);
            prop_assert_eq!(matched.params().get(PARAM_RIOT_ID), Some(riot_id.as_str()));
            prop_assert_eq!(matched.params().get(PARAM_REGION), Some(region.as_str()));
        }
    }
}

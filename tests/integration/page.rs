use std::sync::Arc;

use glean::{RenderedResults, SearchPage};

use crate::common::stargate_context;

fn page() -> SearchPage {
    SearchPage::new(Arc::new(stargate_context()))
}

#[test]
fn test_initial_query_from_location() {
    let mut page = page();
    page.initialize("?query=sg-1");
    assert_eq!(page.input_value(), "sg-1");
    let output = page.output().unwrap();
    assert_eq!(output.len(), 1);
    assert_eq!(output.results()[0].url, "a");
}

#[test]
fn test_initial_query_is_url_decoded() {
    let mut page = page();
    page.initialize("?query=stargate+universe");
    assert_eq!(page.input_value(), "stargate universe");
    assert_eq!(page.output().unwrap().results()[0].url, "c");
}

#[test]
fn test_no_query_parameter_shows_nothing() {
    let mut page = page();
    page.initialize("");
    assert_eq!(page.input_value(), "");
    assert!(page.output().is_none());

    page.initialize("?query=");
    assert!(page.output().is_none());
}

#[test]
fn test_updates_replace_output() {
    let mut page = page();
    page.update("stargate");
    assert_eq!(page.output().unwrap().len(), 3);

    page.update("stargate atlantis");
    assert_eq!(page.output().unwrap().len(), 1);
    assert_eq!(page.input_value(), "stargate atlantis");

    page.update("");
    assert_eq!(page.output(), Some(&RenderedResults::NoResults));
}

#[test]
fn test_bad_query_clears_stale_results() {
    let mut page = page();
    page.update("stargate");
    assert_eq!(page.output().unwrap().len(), 3);

    page.update("stargate^");
    assert_eq!(page.output(), Some(&RenderedResults::NoResults));
}

#[test]
fn test_each_keystroke() {
    let mut page = page();
    let counts: Vec<usize> = ["a", "at", "atl", "atla", "atlantis"]
        .iter()
        .map(|typed| {
            page.update(typed);
            page.output().unwrap().len()
        })
        .collect();
    assert_eq!(counts.last(), Some(&1));
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));
}

//! Same store, same query, same answer, however the store was written.

use glean::{DocumentStore, SearchConfig, SearchContext};

use crate::common::{make_doc, stargate_context, STARGATE_STORE};

#[test]
fn test_repeated_queries_agree() {
    let context = stargate_context();
    for query in ["stargate", "team", "ancien*", "-atlantis", "military te"] {
        assert_eq!(
            context.get_results(query).unwrap(),
            context.get_results(query).unwrap(),
            "{:?}",
            query
        );
    }
}

#[test]
fn test_record_order_does_not_matter() {
    let records = vec![
        make_doc("/1/", "Same title", "body"),
        make_doc("/2/", "Same title", "body"),
        make_doc("/3/", "Same title", "body"),
    ];
    let mut reversed = records.clone();
    reversed.reverse();

    let forward = SearchContext::new(DocumentStore::from_records(records), SearchConfig::default());
    let backward =
        SearchContext::new(DocumentStore::from_records(reversed), SearchConfig::default());

    let a = forward.get_results("same").unwrap();
    let b = backward.get_results("same").unwrap();
    assert_eq!(a, b);
    let order: Vec<&str> = a.iter().map(|r| r.reference.as_str()).collect();
    assert_eq!(order, vec!["/1/", "/2/", "/3/"]);
}

#[test]
fn test_store_and_script_forms_agree() {
    let script = format!("window.store = {};", STARGATE_STORE);
    let from_script = SearchContext::from_json(&script, SearchConfig::default()).unwrap();
    let from_json = stargate_context();
    assert_eq!(
        from_script.get_results("stargate").unwrap(),
        from_json.get_results("stargate").unwrap()
    );
}

//! Advanced query syntax, passed straight to the index.

use glean::{Field, SearchError};

use crate::common::{refs, stargate_context};

#[test]
fn test_prohibited_term_excludes() {
    let results = stargate_context().get_results("stargate -atlantis").unwrap();
    let mut found = refs(&results);
    found.sort_unstable();
    assert_eq!(found, vec!["a", "c"]);
}

#[test]
fn test_prohibited_only_returns_the_rest() {
    let results = stargate_context().get_results("-atlantis").unwrap();
    assert_eq!(refs(&results), vec!["a", "c"]);
    assert!(results.iter().all(|r| r.score == 0.0));
}

#[test]
fn test_required_terms() {
    let context = stargate_context();
    let results = context.get_results("+stargate +military").unwrap();
    let mut found = refs(&results);
    found.sort_unstable();
    assert_eq!(found, vec!["a", "b"]);

    assert!(context.get_results("+stargate +mars").unwrap().is_empty());
}

#[test]
fn test_field_scoped_term() {
    let context = stargate_context();

    let results = context.get_results("title:universe").unwrap();
    assert_eq!(refs(&results), vec!["c"]);
    let fields = &results[0].match_data["universe"];
    assert_eq!(fields.keys().copied().collect::<Vec<_>>(), vec![Field::Title]);

    assert_eq!(context.get_results("title:stargate").unwrap().len(), 3);
    assert_eq!(
        refs(&context.get_results("description:stargate").unwrap()),
        vec!["b"]
    );
}

#[test]
fn test_edit_distance() {
    let context = stargate_context();
    assert_eq!(refs(&context.get_results("atlantys~1").unwrap()), vec!["b"]);
    assert!(context.get_results("atlantys").unwrap().is_empty());
}

#[test]
fn test_boost_changes_ranking() {
    let context = stargate_context();
    let plain = context.get_results("universe atlantis").unwrap();
    assert_eq!(plain.len(), 0, "plain words are all required");

    let boosted = context.get_results("universe^10 atlantis").unwrap();
    assert_eq!(refs(&boosted), vec!["c", "b"]);
    let flipped = context.get_results("universe atlantis^10").unwrap();
    assert_eq!(refs(&flipped), vec!["b", "c"]);
}

#[test]
fn test_malformed_query_is_an_error() {
    let context = stargate_context();
    for query in ["stargate^", "atlantis~x", "title:", "+"] {
        let err = context.get_results(query).unwrap_err();
        assert!(err.is_query_error(), "{:?} gave {:?}", query, err);
    }
    assert!(matches!(
        context.get_results("author:me"),
        Err(SearchError::UnknownField(_))
    ));
}

#[test]
fn test_inner_wildcard() {
    let results = stargate_context().get_results("sp*ship").unwrap();
    assert_eq!(refs(&results), vec!["c"]);
}

#[test]
fn test_hyphenated_wildcard_splits_like_plain_word() {
    let context = stargate_context();
    let plain = context.get_results("sg-1").unwrap();
    let wildcard = context.get_results("sg-1*").unwrap();
    assert_eq!(refs(&plain), vec!["a"]);
    assert_eq!(refs(&wildcard), vec!["a"]);
}

//! The search box against the three-show store.

use crate::common::{refs, stargate_context};

#[test]
fn test_basic_query() {
    let results = stargate_context().get_results("atlantis").unwrap();
    assert_eq!(refs(&results), vec!["b"]);
}

#[test]
fn test_uppercase_query() {
    let context = stargate_context();
    let lower = context.get_results("atlantis").unwrap();
    let upper = context.get_results("ATLANTIS").unwrap();
    assert_eq!(refs(&upper), vec!["b"]);
    assert_eq!(lower, upper);
}

#[test]
fn test_wildcard_query() {
    let results = stargate_context().get_results("ancien*").unwrap();
    assert_eq!(refs(&results), vec!["c"]);
}

#[test]
fn test_unrelated_query() {
    assert!(stargate_context().get_results("mars").unwrap().is_empty());
}

#[test]
fn test_empty_query() {
    let context = stargate_context();
    assert!(context.get_results("").unwrap().is_empty());
    assert!(context.get_results(" , ").unwrap().is_empty());
}

#[test]
fn test_every_document_matches_shared_title_word() {
    let results = stargate_context().get_results("stargate").unwrap();
    assert_eq!(results.len(), 3);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // Atlantis also has the exact word in its description.
    assert_eq!(results[0].reference, "b");
}

#[test]
fn test_prefix_of_last_word() {
    let results = stargate_context().get_results("ancien").unwrap();
    assert_eq!(refs(&results), vec!["c"]);
}

#[test]
fn test_all_words_must_match() {
    let context = stargate_context();
    assert_eq!(context.get_results("military team").unwrap().len(), 2);
    assert_eq!(refs(&context.get_results("secret mil").unwrap()), vec!["a"]);
    assert!(context.get_results("secret wraith").unwrap().is_empty());
}

#[test]
fn test_hyphenated_query_is_advanced() {
    let results = stargate_context().get_results("sg-1").unwrap();
    assert_eq!(refs(&results), vec!["a"]);
}

#[test]
fn test_trailing_stop_word_keeps_results() {
    let context = stargate_context();
    assert_eq!(refs(&context.get_results("wraith").unwrap()), vec!["b"]);
    assert_eq!(refs(&context.get_results("wraith of").unwrap()), vec!["b"]);
    assert_eq!(
        refs(&context.get_results("ancient spaceship of").unwrap()),
        vec!["c"]
    );
    // Copied straight from the description.
    assert_eq!(refs(&context.get_results("billions of").unwrap()), vec!["c"]);
    assert_eq!(context.get_results("stargate the").unwrap().len(), 3);
}

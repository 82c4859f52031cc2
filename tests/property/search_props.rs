use glean::{text::normalize, DocumentRecord, DocumentStore, SearchConfig, SearchContext};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,8}").unwrap()
}

fn field_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            word_strategy(),
            prop::sample::select(vec!["Café".to_string(), "NAÏVE".to_string(), "SG-1".to_string()]),
        ],
        0..8,
    )
    .prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<DocumentRecord>> {
    prop::collection::vec((field_strategy(), field_strategy(), field_strategy()), 1..6).prop_map(
        |fields| {
            fields
                .into_iter()
                .enumerate()
                .map(|(i, (title, description, content))| DocumentRecord {
                    url: format!("/post-{}/", i),
                    title,
                    description,
                    content,
                    ..Default::default()
                })
                .collect()
        },
    )
}

fn context(records: Vec<DocumentRecord>) -> SearchContext {
    SearchContext::new(DocumentStore::from_records(records), SearchConfig::default())
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: case never changes the answer.
    #[test]
    fn prop_case_insensitive(corpus in corpus_strategy(), word in word_strategy()) {
        let ctx = context(corpus);
        prop_assert_eq!(
            ctx.get_results(&word).unwrap(),
            ctx.get_results(&word.to_uppercase()).unwrap()
        );
    }

    /// Property: the same records in any order give identical results.
    #[test]
    fn prop_deterministic(corpus in corpus_strategy(), word in word_strategy()) {
        let mut reversed = corpus.clone();
        reversed.reverse();
        let forward = context(corpus);
        let backward = context(reversed);

        for query in [word.clone(), format!("{}*", &word[..2]), format!("-{}", word)] {
            prop_assert_eq!(
                forward.get_results(&query).unwrap(),
                backward.get_results(&query).unwrap()
            );
        }
    }

    /// Property: every span in match data points at the matched term.
    #[test]
    fn prop_spans_point_at_terms(corpus in corpus_strategy(), word in word_strategy()) {
        let ctx = context(corpus);
        let prefix = &word[..1];
        for result in ctx.get_results(prefix).unwrap() {
            let record = ctx.store().get(&result.reference).unwrap();
            for (term, fields) in &result.match_data {
                for (&field, spans) in fields {
                    let text = record.field_text(field);
                    for span in spans {
                        let found: String = text.chars().skip(span.start).take(span.length).collect();
                        prop_assert_eq!(&normalize(&found), term);
                    }
                }
            }
        }
    }

    /// Property: a word taken from a document always finds that document.
    #[test]
    fn prop_indexed_words_are_found(corpus in corpus_strategy(), pick in any::<prop::sample::Index>()) {
        let ctx = context(corpus);
        let vocabulary = ctx.index().vocabulary().to_vec();
        prop_assume!(!vocabulary.is_empty());
        let term = pick.get(&vocabulary);
        prop_assert!(!ctx.get_results(term).unwrap().is_empty());
    }

    /// Property: scores never increase down the result list.
    #[test]
    fn prop_results_sorted_by_score(corpus in corpus_strategy(), word in word_strategy()) {
        let ctx = context(corpus);
        let results = ctx.get_results(&word[..1]).unwrap();
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}

use glean::{render, search_page, RenderedResults, SearchConfig, SegmentKind, TermOptions};

use crate::common::{make_doc, stargate_context};

#[test]
fn test_highlights_the_matched_word() {
    let rendered = search_page("ancient", &stargate_context());
    let result = &rendered.results()[0];
    assert_eq!(result.url, "c");
    assert_eq!(result.date, "2009");

    let highlighted: Vec<_> = result
        .description
        .segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Highlight)
        .collect();
    assert_eq!(highlighted.len(), 1);
    assert_eq!(highlighted[0].text, "Ancient");
    assert_eq!(highlighted[0].start, 14);
    assert_eq!(highlighted[0].end, 21);
}

#[test]
fn test_fields_without_matches_are_plain() {
    let rendered = search_page("ancient", &stargate_context());
    let title = &rendered.results()[0].title;
    assert_eq!(title.segments.len(), 1);
    assert_eq!(title.segments[0].kind, SegmentKind::Plain);
    assert_eq!(title.text(), "Stargate Universe");
}

#[test]
fn test_prefix_match_highlights_whole_word() {
    let rendered = search_page("stargate", &stargate_context());
    let sg1 = rendered.results().iter().find(|r| r.url == "a").unwrap();
    assert!(sg1.description.highlights().any(|h| h == "Stargates"));
    assert_eq!(sg1.title.highlights().collect::<Vec<_>>(), vec!["Stargate"]);
}

#[test]
fn test_segments_reproduce_every_field() {
    let context = stargate_context();
    let rendered = search_page("stargate", &context);
    for result in rendered.results() {
        let record = context.store().get(&result.url).unwrap();
        assert_eq!(result.title.text(), record.title);
        assert_eq!(result.description.text(), record.description);
        assert_eq!(result.content.text(), record.content);
    }
}

#[test]
fn test_long_content_is_truncated() {
    let content = format!("{} needle", "hay ".repeat(100));
    let context = glean::SearchContext::new(
        glean::DocumentStore::from_records(vec![make_doc("/long/", "Long", &content)]),
        SearchConfig::default(),
    );

    let rendered = search_page("hay", &context);
    let snippet = &rendered.results()[0].content;
    assert!(snippet.truncated);
    assert!(snippet.text().ends_with("..."));
    assert_eq!(snippet.text().chars().count(), 343);
    assert!(snippet.highlights().all(|h| h == "hay" || h == "ha" || h == "h"));

    // The needle sits past the cut, so it cannot be highlighted.
    let rendered = search_page("needle", &context);
    assert_eq!(rendered.results()[0].content.highlights().count(), 0);
}

#[test]
fn test_custom_display_lengths() {
    let config = SearchConfig {
        content_length: 10,
        title_length: Some(4),
        ..SearchConfig::default()
    };
    let context = glean::SearchContext::new(
        glean::DocumentStore::from_records(vec![make_doc(
            "/x/",
            "Stargate",
            "Chevron seven locked",
        )]),
        config,
    );
    let rendered = search_page("chevron", &context);
    let result = &rendered.results()[0];
    assert_eq!(result.title.text(), "Star...");
    assert_eq!(result.content.text(), "Chevron se...");
    assert_eq!(result.content.highlights().collect::<Vec<_>>(), vec!["Chevron"]);
}

#[test]
fn test_overlapping_terms_coalesce() {
    let context = glean::SearchContext::new(
        glean::DocumentStore::from_records(vec![make_doc("/x/", "Wormhole", "")]),
        SearchConfig::default(),
    );
    // Both clauses expand to `wormhole`.
    let results = context
        .index()
        .query(|q| {
            q.term("wormhole", TermOptions::default());
            q.term("worm", TermOptions::default().wildcard(glean::Wildcard::Trailing));
        })
        .unwrap();
    let rendered = render(&results, context.store(), context.config()).unwrap();
    assert_eq!(
        rendered.results()[0].title.highlights().collect::<Vec<_>>(),
        vec!["Wormhole"]
    );
}

#[test]
fn test_no_matches_render_placeholder() {
    assert_eq!(search_page("mars", &stargate_context()), RenderedResults::NoResults);
    assert_eq!(search_page("", &stargate_context()), RenderedResults::NoResults);
}

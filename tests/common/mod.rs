//! Shared test fixtures.

#![allow(dead_code)]

use glean::{DocumentRecord, DocumentStore, MatchRecord, SearchConfig, SearchContext};

/// The three-show store used throughout the search tests, as the site build
/// would write it.
pub const STARGATE_STORE: &str = r#"{
  "a": {
    "title": "Stargate SG-1",
    "description": "A secret military team, SG-1, is formed to explore other planets through the recently discovered Stargates.",
    "date": "1997",
    "tags": [],
    "content": "",
    "url": "a"
  },
  "b": {
    "title": "Stargate: Atlantis",
    "description": "An international team of scientists and military personnel discover a Stargate network in the Pegasus Galaxy and come face-to-face with a new, powerful enemy, The Wraith.",
    "date": "2004",
    "tags": [],
    "content": "",
    "url": "b"
  },
  "c": {
    "title": "Stargate Universe",
    "description": "Trapped on an Ancient spaceship billions of light-years from home, a group of soldiers and civilians struggle to survive and find their way back to Earth.",
    "date": "2009",
    "tags": [],
    "content": "",
    "url": "c"
  }
}"#;

pub fn stargate_store() -> DocumentStore {
    DocumentStore::from_json(STARGATE_STORE).expect("fixture store parses")
}

pub fn stargate_context() -> SearchContext {
    SearchContext::new(stargate_store(), SearchConfig::default())
}

/// References of results, in order.
pub fn refs(results: &[MatchRecord]) -> Vec<&str> {
    results.iter().map(|r| r.reference.as_str()).collect()
}

/// A record with just a url, title and content.
pub fn make_doc(url: &str, title: &str, content: &str) -> DocumentRecord {
    DocumentRecord {
        url: url.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        ..Default::default()
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization: what the search box actually asks the index.
//!
//! People type into the box one character at a time, so the last word is
//! usually unfinished. Plain text is rewritten into clauses that reward exact
//! words and still match the half-typed last one:
//!
//! ```text
//! "stargate ancien"
//!   stargate     boost 5  required
//!   ancien       boost 5  optional
//!   ancien*      boost 1  required
//! ```
//!
//! A last word that is a stop word is never indexed, so its prefix clause
//! is optional: "wraith of" still finds the Wraith while the next word is
//! being typed.
//!
//! Anything using the advanced syntax (`* : ^ ~ + -`) is the user asking for
//! precise control, and goes to the index untouched.

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::index::{IndexBuilder, SearchIndex};
use crate::query::parser::uses_syntax;
use crate::query::{Presence, Query, TermOptions, Wildcard};
use crate::store::DocumentStore;
use crate::text::tokenize;
use crate::types::MatchRecord;

/// Store, index and configuration for one site. Built once, then shared.
#[derive(Debug, Clone)]
pub struct SearchContext {
    store: Arc<DocumentStore>,
    index: Arc<SearchIndex>,
    config: SearchConfig,
}

impl SearchContext {
    /// Index a store.
    pub fn new(store: DocumentStore, config: SearchConfig) -> Self {
        let index = IndexBuilder::from_config(&config).build(&store);
        Self {
            store: Arc::new(store),
            index: Arc::new(index),
            config,
        }
    }

    /// Load a store from its JSON (or `window.store = ...` script) form and index it.
    pub fn from_json(store_json: &str, config: SearchConfig) -> Result<Self> {
        Ok(Self::new(DocumentStore::from_script(store_json)?, config))
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run what was typed into the search box.
    ///
    /// Blank input returns nothing without touching the index.
    pub fn get_results(&self, query: &str) -> Result<Vec<MatchRecord>> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        if uses_syntax(query) {
            tracing::debug!(query, "advanced query");
            return self.index.search(query);
        }

        let words = split_words(query);
        let query = plain_query(&words, &self.config);
        self.index.run(&query)
    }
}

/// Words of a plain query: split on whitespace and commas.
pub fn split_words(query: &str) -> Vec<&str> {
    query
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
        .collect()
}

/// Clauses for a plain query.
///
/// Every word must match. Earlier words must match exactly; the last word
/// may match as a prefix, with an exact match only adding score. Stop words
/// are dropped from the exact clauses and only add score as prefixes.
pub fn plain_query(words: &[&str], config: &SearchConfig) -> Query {
    let mut query = Query::new();
    let Some((last, rest)) = words.split_last() else {
        return query;
    };

    let exact = TermOptions::default().boost(config.term_boost);
    for word in rest {
        query.term(word, exact.clone().presence(Presence::Required));
    }

    let prefix_presence = if tokenize(last).is_empty() {
        Presence::Optional
    } else {
        Presence::Required
    };
    query.term(last, exact.presence(Presence::Optional));
    query.term(
        last,
        TermOptions::default()
            .boost(config.prefix_boost)
            .wildcard(Wildcard::Trailing)
            .presence(prefix_presence),
    );
    query
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction.
//!
//! # Invariants
//!
//! 1. **POSTINGS_SORTED**: each term's postings are ordered by (doc, field).
//! 2. **DOC_FREQ_CORRECT**: `doc_freq[f]` counts the postings of field `f`.
//! 3. **NON_EMPTY**: every term in the vocabulary has at least one posting.
//! 4. **SPANS_SORTED**: spans within a posting are ascending and disjoint.

use std::collections::{BTreeMap, HashMap};

use super::{Posting, SearchIndex, TermEntry};
use crate::config::{Bm25Params, FieldBoosts, SearchConfig};
use crate::store::DocumentStore;
use crate::text::tokenize;
use crate::types::{Field, Span};

/// Configures and builds a [`SearchIndex`].
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    boosts: FieldBoosts,
    bm25: Bm25Params,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            boosts: config.boost,
            bm25: config.bm25,
        }
    }

    /// Override one field's boost.
    pub fn boost(mut self, field: Field, boost: f64) -> Self {
        match field {
            Field::Title => self.boosts.title = boost,
            Field::Description => self.boosts.description = boost,
            Field::Tags => self.boosts.tags = boost,
            Field::Content => self.boosts.content = boost,
        }
        self
    }

    pub fn bm25(mut self, params: Bm25Params) -> Self {
        self.bm25 = params;
        self
    }

    /// Tokenize every field of every record and build postings.
    ///
    /// Documents are numbered in store order, so iterating the store once
    /// leaves every posting list sorted without a separate pass.
    pub fn build(&self, store: &DocumentStore) -> SearchIndex {
        let mut terms: HashMap<String, TermEntry> = HashMap::new();
        let mut field_lengths = Vec::with_capacity(store.len());
        let mut total_lengths = [0usize; 4];
        let mut urls = Vec::with_capacity(store.len());

        for (doc, record) in store.iter().enumerate() {
            urls.push(record.url.clone());
            let mut lengths = [0usize; 4];

            for field in Field::ALL {
                let text = record.field_text(field);
                let tokens = tokenize(&text);
                lengths[field.index()] = tokens.len();

                let mut occurrences: BTreeMap<String, Vec<Span>> = BTreeMap::new();
                for token in tokens {
                    occurrences.entry(token.term).or_default().push(token.span);
                }

                for (term, spans) in occurrences {
                    let entry = terms.entry(term).or_default();
                    entry.doc_freq[field.index()] += 1;
                    entry.postings.push(Posting { doc, field, spans });
                }
            }

            for (total, len) in total_lengths.iter_mut().zip(lengths) {
                *total += len;
            }
            field_lengths.push(lengths);
        }

        let doc_count = urls.len().max(1) as f64;
        let average_lengths = total_lengths.map(|total| total as f64 / doc_count);

        let mut vocabulary: Vec<String> = terms.keys().cloned().collect();
        vocabulary.sort_unstable();

        tracing::debug!(
            documents = urls.len(),
            terms = vocabulary.len(),
            "built search index"
        );

        SearchIndex {
            terms,
            vocabulary,
            urls,
            field_lengths,
            average_lengths,
            boosts: self.boosts,
            bm25: self.bm25,
        }
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search index and query execution.
//!
//! An inverted index from normalized term to the (document, field) pairs it
//! occurs in, with the character spans of every occurrence. Spans are what
//! let the renderer highlight matches without re-tokenizing anything.
//!
//! # Query execution
//!
//! 1. Expand each clause to vocabulary terms: the term itself, every term a
//!    wildcard pattern matches, and every term within the clause's edit
//!    distance.
//! 2. Score each posting of each expanded term in the fields the clause
//!    covers, summing per document.
//! 3. Keep documents matched by some positive clause and by every required
//!    clause, and drop documents matched by any prohibited clause.
//! 4. Order by score, breaking ties by store order.

mod builder;
pub mod scoring;

pub use builder::IndexBuilder;

use std::collections::{BTreeSet, HashMap, HashSet};

use regex::Regex;

use crate::config::{Bm25Params, FieldBoosts};
use crate::error::{Result, SearchError};
use crate::fuzzy::within_edit_distance;
use crate::query::{parser, Clause, Presence, Query};
use crate::types::{Field, MatchData, MatchRecord, Span};

/// Occurrences of one term in one field of one document.
#[derive(Debug, Clone)]
pub(crate) struct Posting {
    pub(crate) doc: usize,
    pub(crate) field: Field,
    pub(crate) spans: Vec<Span>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TermEntry {
    pub(crate) postings: Vec<Posting>,
    /// Documents containing the term, per field.
    pub(crate) doc_freq: [usize; 4],
}

/// Summary of one field, for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldStats {
    pub field: Field,
    /// Documents with at least one token in this field.
    pub documents: usize,
    pub average_length: f64,
    /// Distinct terms occurring in this field.
    pub terms: usize,
}

/// Immutable index over a [`crate::DocumentStore`].
#[derive(Debug, Clone)]
pub struct SearchIndex {
    pub(crate) terms: HashMap<String, TermEntry>,
    vocabulary: Vec<String>,
    urls: Vec<String>,
    field_lengths: Vec<[usize; 4]>,
    average_lengths: [f64; 4],
    pub(crate) boosts: FieldBoosts,
    bm25: Bm25Params,
}

/// A document's running total while a query executes.
#[derive(Default)]
struct Candidate {
    score: f64,
    match_data: MatchData,
}

impl SearchIndex {
    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Every indexed term, sorted.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    pub fn field_stats(&self) -> Vec<FieldStats> {
        Field::ALL
            .iter()
            .map(|&field| {
                let f = field.index();
                FieldStats {
                    field,
                    documents: self.field_lengths.iter().filter(|l| l[f] > 0).count(),
                    average_length: self.average_lengths[f],
                    terms: self.terms.values().filter(|e| e.doc_freq[f] > 0).count(),
                }
            })
            .collect()
    }

    /// Parse an advanced query string and run it.
    pub fn search(&self, query: &str) -> Result<Vec<MatchRecord>> {
        let query = parser::parse(query)?;
        self.run(&query)
    }

    /// Build a query programmatically and run it.
    ///
    /// ```
    /// use glean::{DocumentRecord, DocumentStore, IndexBuilder, TermOptions};
    ///
    /// let store = DocumentStore::from_records(vec![DocumentRecord {
    ///     url: "/a/".into(),
    ///     title: "Stargate Atlantis".into(),
    ///     ..Default::default()
    /// }]);
    /// let index = IndexBuilder::new().build(&store);
    /// let results = index
    ///     .query(|q| {
    ///         q.term("atlantis", TermOptions::default().boost(5.0));
    ///     })
    ///     .unwrap();
    /// assert_eq!(results[0].reference, "/a/");
    /// ```
    pub fn query<F>(&self, build: F) -> Result<Vec<MatchRecord>>
    where
        F: FnOnce(&mut Query),
    {
        let mut query = Query::new();
        build(&mut query);
        self.run(&query)
    }

    /// Execute a query.
    pub fn run(&self, query: &Query) -> Result<Vec<MatchRecord>> {
        if query.is_empty() || self.is_empty() {
            return Ok(Vec::new());
        }

        let mut candidates: HashMap<usize, Candidate> = HashMap::new();
        let mut required: Option<HashSet<usize>> = None;
        let mut prohibited: HashSet<usize> = HashSet::new();

        for clause in &query.clauses {
            let mut matched = HashSet::new();

            for term in self.expand(clause)? {
                let Some(entry) = self.terms.get(term) else {
                    continue;
                };

                for posting in entry.postings.iter().filter(|p| clause.covers(p.field)) {
                    matched.insert(posting.doc);
                    if clause.presence == Presence::Prohibited {
                        continue;
                    }

                    let f = posting.field.index();
                    let score = scoring::idf(self.len(), entry.doc_freq[f])
                        * scoring::tf_norm(
                            &self.bm25,
                            posting.spans.len(),
                            self.field_lengths[posting.doc][f],
                            self.average_lengths[f],
                        )
                        * self.boosts.get(posting.field)
                        * clause.boost;

                    let candidate = candidates.entry(posting.doc).or_default();
                    candidate.score += score;
                    // Two clauses can expand to the same term; its spans are
                    // recorded once.
                    candidate
                        .match_data
                        .entry(term.to_string())
                        .or_default()
                        .entry(posting.field)
                        .or_insert_with(|| posting.spans.clone());
                }
            }

            match clause.presence {
                Presence::Required => {
                    required = Some(match required {
                        Some(docs) => docs.intersection(&matched).copied().collect(),
                        None => matched,
                    });
                }
                Presence::Prohibited => prohibited.extend(matched),
                Presence::Optional => {}
            }
        }

        let mut results: Vec<(usize, Candidate)> = if query.has_positive_clause() {
            candidates
                .into_iter()
                .filter(|(doc, _)| required.as_ref().map_or(true, |r| r.contains(doc)))
                .filter(|(doc, _)| !prohibited.contains(doc))
                .collect()
        } else {
            (0..self.len())
                .filter(|doc| !prohibited.contains(doc))
                .map(|doc| (doc, Candidate::default()))
                .collect()
        };

        results.sort_by(|(a_doc, a), (b_doc, b)| {
            b.score.total_cmp(&a.score).then_with(|| a_doc.cmp(b_doc))
        });

        tracing::debug!(
            clauses = query.clauses.len(),
            results = results.len(),
            "executed query"
        );

        Ok(results
            .into_iter()
            .map(|(doc, candidate)| MatchRecord {
                reference: self.urls[doc].clone(),
                score: candidate.score,
                match_data: candidate.match_data,
            })
            .collect())
    }

    /// Vocabulary terms a clause stands for, sorted and deduplicated.
    fn expand<'a>(&'a self, clause: &'a Clause) -> Result<Vec<&'a str>> {
        let mut expanded: BTreeSet<&str> = BTreeSet::new();

        if clause.is_wildcard() {
            expanded.extend(self.wildcard_matches(&clause.term)?);
        } else if let Some((term, _)) = self.terms.get_key_value(clause.term.as_str()) {
            expanded.insert(term.as_str());
        }

        if clause.edit_distance > 0 {
            let literal: String = clause.term.chars().filter(|&c| c != '*').collect();
            if !literal.is_empty() {
                expanded.extend(
                    self.vocabulary
                        .iter()
                        .filter(|t| within_edit_distance(&literal, t, clause.edit_distance))
                        .map(String::as_str),
                );
            }
        }

        Ok(expanded.into_iter().collect())
    }

    /// Terms matching a `*` pattern.
    ///
    /// The literal text before the first `*` narrows the scan to one sorted
    /// range of the vocabulary. A bare `*` scans everything.
    fn wildcard_matches(&self, pattern: &str) -> Result<Vec<&str>> {
        let regex = wildcard_regex(pattern)?;
        let prefix = pattern.split('*').next().unwrap_or("");
        let start = self.vocabulary.partition_point(|t| t.as_str() < prefix);

        Ok(self.vocabulary[start..]
            .iter()
            .take_while(|t| t.starts_with(prefix))
            .filter(|t| regex.is_match(t))
            .map(String::as_str)
            .collect())
    }
}

/// Anchored regex for a wildcard pattern: `*` matches any run of characters,
/// everything else is literal.
fn wildcard_regex(pattern: &str) -> Result<Regex> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("^{}$", body)).map_err(|_| SearchError::InvalidWildcard(pattern.to_string()))
}

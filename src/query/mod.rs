// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Queries as data: a list of term clauses, each with its own fields, boost,
//! wildcard pattern, edit distance and presence.
//!
//! There are two ways to get one. The search box's plain-text path builds a
//! query clause by clause through [`Query::term`]; anything typed with
//! advanced syntax goes through [`parser::parse`]. Both end up as the same
//! `Query`, executed by [`crate::SearchIndex::run`].

pub mod parser;

use crate::text::{is_stop_word, tokenize, words};
use crate::types::Field;

/// How a clause constrains the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Matching adds to the score; not matching is fine.
    #[default]
    Optional,
    /// Documents that do not match are excluded.
    Required,
    /// Documents that match are excluded.
    Prohibited,
}

/// Where to put `*` when a clause is built from a plain word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wildcard {
    #[default]
    None,
    Leading,
    Trailing,
    Both,
}

impl Wildcard {
    fn leading(self) -> bool {
        matches!(self, Wildcard::Leading | Wildcard::Both)
    }

    fn trailing(self) -> bool {
        matches!(self, Wildcard::Trailing | Wildcard::Both)
    }
}

/// Options for [`Query::term`].
#[derive(Debug, Clone, PartialEq)]
pub struct TermOptions {
    /// Restrict to these fields. Empty means every field.
    pub fields: Vec<Field>,
    pub boost: f64,
    pub wildcard: Wildcard,
    pub edit_distance: usize,
    pub presence: Presence,
}

impl Default for TermOptions {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            boost: 1.0,
            wildcard: Wildcard::None,
            edit_distance: 0,
            presence: Presence::Optional,
        }
    }
}

impl TermOptions {
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }

    pub fn wildcard(mut self, wildcard: Wildcard) -> Self {
        self.wildcard = wildcard;
        self
    }

    pub fn presence(mut self, presence: Presence) -> Self {
        self.presence = presence;
        self
    }

    pub fn edit_distance(mut self, edit_distance: usize) -> Self {
        self.edit_distance = edit_distance;
        self
    }

    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }
}

/// One normalized term to look up.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// Normalized term. May contain `*`, which matches any run of characters.
    pub term: String,
    /// Fields to search. Empty means every field.
    pub fields: Vec<Field>,
    pub boost: f64,
    pub edit_distance: usize,
    pub presence: Presence,
}

impl Clause {
    pub fn is_wildcard(&self) -> bool {
        self.term.contains('*')
    }

    /// Does this clause look at `field`?
    pub fn covers(&self, field: Field) -> bool {
        self.fields.is_empty() || self.fields.contains(&field)
    }
}

/// An ordered list of clauses executed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub clauses: Vec<Clause>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add clauses for a user-supplied word.
    ///
    /// The word is normalized the same way field text is. Punctuation splits
    /// it ("sg-1" becomes `sg` and `1`, each with these options). Stop words
    /// produce no exact clause, but still produce a wildcard clause, since
    /// "the" may be the start of "theory".
    pub fn term(&mut self, word: &str, options: TermOptions) -> &mut Self {
        if options.wildcard == Wildcard::None {
            for token in tokenize(word) {
                self.push(token.term, &options);
            }
            return self;
        }

        let parts = words(word);
        let last = parts.len().saturating_sub(1);
        for (i, part) in parts.into_iter().enumerate() {
            let mut term = String::with_capacity(part.len() + 2);
            if i == 0 && options.wildcard.leading() {
                term.push('*');
            }
            term.push_str(&part);
            if i == last && options.wildcard.trailing() {
                term.push('*');
            }
            if term.contains('*') || !is_stop_word(&term) {
                self.push(term, &options);
            }
        }
        self
    }

    /// Add a clause whose term is already normalized.
    pub fn clause(&mut self, clause: Clause) -> &mut Self {
        self.clauses.push(clause);
        self
    }

    fn push(&mut self, term: String, options: &TermOptions) {
        self.clauses.push(Clause {
            term,
            fields: options.fields.clone(),
            boost: options.boost,
            edit_distance: options.edit_distance,
            presence: options.presence,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Does any clause add documents (as opposed to only removing them)?
    pub fn has_positive_clause(&self) -> bool {
        self.clauses
            .iter()
            .any(|c| c.presence != Presence::Prohibited)
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary shared by the index, the query layer and the renderer.
//!
//! # Invariants
//!
//! - **Span**: offsets are in *characters* (Unicode scalar values) of the
//!   original field text, never bytes. `start + length <= field.chars().count()`.
//!
//! - **MatchRecord**: `reference` names a document in the store the index was
//!   built from. Within one (term, field) pair spans are ascending and
//!   non-overlapping; across terms they may overlap.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// A searchable field of a document record.
///
/// The derived `Ord` is declaration order. It only exists so match metadata
/// serializes deterministically; ranking goes through `FieldBoosts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Description,
    Tags,
    Content,
}

impl Field {
    /// Every indexed field, in index order.
    pub const ALL: [Field; 4] = [Field::Title, Field::Description, Field::Tags, Field::Content];

    /// The fields a search result shows with highlighting.
    pub const RENDERED: [Field; 3] = [Field::Title, Field::Description, Field::Content];

    /// Position in [`Field::ALL`], for per-field arrays.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Field::Title => 0,
            Field::Description => 1,
            Field::Tags => 2,
            Field::Content => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Tags => "tags",
            Field::Content => "content",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = SearchError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "title" => Ok(Field::Title),
            "description" => Ok(Field::Description),
            "tags" => Ok(Field::Tags),
            "content" => Ok(Field::Content),
            other => Err(SearchError::UnknownField(other.to_string())),
        }
    }
}

/// One occurrence of a term inside a field: `length` characters from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl Span {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Exclusive end offset.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Where each matched term was found: term → field → spans.
///
/// `BTreeMap` keeps iteration (and therefore serialization and span merging)
/// independent of hash seeds.
pub type MatchData = BTreeMap<String, BTreeMap<Field, Vec<Span>>>;

/// One document matched by a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// The matched document's url.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Relevance, higher is better.
    pub score: f64,
    pub match_data: MatchData,
}

impl MatchRecord {
    /// Terms that produced this match, in sorted order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.match_data.keys().map(String::as_str)
    }
}

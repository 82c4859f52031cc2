// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunable knobs for indexing, query expansion and snippet rendering.
//!
//! None of these numbers come from theory. They were tuned by typing queries
//! into the search box until the ordering felt right, so they live here as
//! configuration rather than as constants scattered through the code.
//!
//! Every field has a default, so a config file only needs the keys it changes:
//!
//! ```json
//! { "boost": { "title": 2.0 }, "contentLength": 200 }
//! ```

use crate::error::Result;
use crate::types::Field;
use serde::{Deserialize, Serialize};

/// Default title boost.
pub const DEFAULT_TITLE_BOOST: f64 = 1.8;
/// Default description boost.
pub const DEFAULT_DESCRIPTION_BOOST: f64 = 1.2;
/// Default tags boost.
pub const DEFAULT_TAGS_BOOST: f64 = 1.0;
/// Default content boost.
pub const DEFAULT_CONTENT_BOOST: f64 = 1.0;

/// Maximum characters of content shown in a result snippet.
pub const DEFAULT_CONTENT_LENGTH: usize = 340;

/// Appended to any field cut at its display limit.
pub const TRUNCATION_MARKER: &str = "...";

/// Per-field relevance multipliers.
///
/// Keep title > description > content ≈ tags. Title matches should beat
/// description-only matches by a comfortable margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldBoosts {
    pub title: f64,
    pub description: f64,
    pub tags: f64,
    pub content: f64,
}

impl Default for FieldBoosts {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_BOOST,
            description: DEFAULT_DESCRIPTION_BOOST,
            tags: DEFAULT_TAGS_BOOST,
            content: DEFAULT_CONTENT_BOOST,
        }
    }
}

impl FieldBoosts {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title,
            Field::Description => self.description,
            Field::Tags => self.tags,
            Field::Content => self.content,
        }
    }
}

/// BM25 parameters used when scoring a term within one field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bm25Params {
    /// Term frequency saturation.
    pub k1: f64,
    /// Field length normalization (0 = none, 1 = full).
    pub b: f64,
}

impl Default for Bm25Params {
    fn default() -> Self {
        Self { k1: 1.2, b: 0.75 }
    }
}

/// Everything the search box can be tuned with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Field boosts applied at scoring time.
    pub boost: FieldBoosts,
    pub bm25: Bm25Params,
    /// Boost for the exact clause issued for every word of a plain query.
    pub term_boost: f64,
    /// Boost for the trailing-wildcard clause issued for the last word.
    pub prefix_boost: f64,
    /// Display limit for the content snippet, in characters.
    pub content_length: usize,
    /// Display limit for titles. `None` shows them in full.
    pub title_length: Option<usize>,
    /// Display limit for descriptions. `None` shows them in full.
    pub description_length: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            boost: FieldBoosts::default(),
            bm25: Bm25Params::default(),
            term_boost: 5.0,
            prefix_boost: 1.0,
            content_length: DEFAULT_CONTENT_LENGTH,
            title_length: None,
            description_length: None,
        }
    }
}

impl SearchConfig {
    /// Parse a config from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Display limit for a rendered field.
    pub fn display_length(&self, field: Field) -> Option<usize> {
        match field {
            Field::Title => self.title_length,
            Field::Description => self.description_length,
            Field::Content => Some(self.content_length),
            Field::Tags => None,
        }
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything that can go wrong between loading the store and rendering results.
//!
//! Empty queries are deliberately absent from this list: they produce zero
//! results, not an error.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The advanced query syntax could not be parsed.
    ///
    /// `position` is the character offset in the query where parsing stopped.
    #[error("query parse error at {position}: {message}")]
    QueryParse { position: usize, message: String },

    /// A `field:term` clause named a field that is not indexed.
    #[error("unknown field '{0}' (expected title, description, tags or content)")]
    UnknownField(String),

    /// A wildcard term could not be compiled into a matcher.
    #[error("invalid wildcard pattern '{0}'")]
    InvalidWildcard(String),

    /// A match referenced a url that is not in the document store.
    ///
    /// The index is only ever built from the store it is searched against,
    /// so this means the two have drifted apart.
    #[error("match references '{0}', which is not in the document store")]
    MissingDocument(String),

    #[error("invalid JSON: {0}")]
    Store(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    pub(crate) fn parse(position: usize, message: impl Into<String>) -> Self {
        SearchError::QueryParse {
            position,
            message: message.into(),
        }
    }

    /// True for errors caused by what the user typed, as opposed to a broken
    /// store or index.
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            SearchError::QueryParse { .. }
                | SearchError::UnknownField(_)
                | SearchError::InvalidWildcard(_)
        )
    }
}

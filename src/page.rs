// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search page: an input box and a results area.
//!
//! [`search_page`] is the whole pipeline as a function of the query.
//! [`SearchPage`] keeps the input value and the output it last produced,
//! replacing the output wholesale on every update.

use std::sync::Arc;

use url::form_urlencoded;

use crate::error::SearchError;
use crate::render::{render, RenderedResults};
use crate::search::SearchContext;

/// Name of the location query parameter holding the initial query.
pub const QUERY_PARAM: &str = "query";

/// Results for `query`. Failures are logged and shown as no results.
pub fn search_page(query: &str, context: &SearchContext) -> RenderedResults {
    let rendered = context
        .get_results(query)
        .and_then(|results| render(&results, context.store(), context.config()));

    match rendered {
        Ok(rendered) => rendered,
        Err(err) => {
            log_failure(query, &err);
            RenderedResults::NoResults
        }
    }
}

fn log_failure(query: &str, err: &SearchError) {
    if err.is_query_error() {
        tracing::warn!(query, error = %err, "query rejected");
    } else {
        tracing::error!(query, error = %err, "search failed");
    }
}

/// The `query` parameter of a location query string such as `?query=sg-1`.
///
/// Percent escapes are decoded and `+` reads as a space. Missing or blank
/// values are `None`.
pub fn query_from_location(location_search: &str) -> Option<String> {
    let search = location_search.strip_prefix('?').unwrap_or(location_search);
    form_urlencoded::parse(search.as_bytes())
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.trim().is_empty())
}

/// Stateful adapter over [`search_page`].
#[derive(Debug, Clone)]
pub struct SearchPage {
    context: Arc<SearchContext>,
    input: String,
    output: Option<RenderedResults>,
}

impl SearchPage {
    pub fn new(context: Arc<SearchContext>) -> Self {
        Self {
            context,
            input: String::new(),
            output: None,
        }
    }

    /// Page load: run the query from the location, if there is one.
    pub fn initialize(&mut self, location_search: &str) {
        match query_from_location(location_search) {
            Some(query) => {
                tracing::debug!(%query, "initial query from location");
                self.input = query.clone();
                self.update(&query);
            }
            None => {
                self.input.clear();
                self.output = None;
            }
        }
    }

    /// The input changed.
    pub fn update(&mut self, query: &str) {
        self.input = query.to_string();
        self.output = Some(search_page(query, &self.context));
    }

    pub fn input_value(&self) -> &str {
        &self.input
    }

    /// What the results area shows. `None` before any query has run.
    pub fn output(&self) -> Option<&RenderedResults> {
        self.output.as_ref()
    }

    pub fn context(&self) -> &SearchContext {
        &self.context
    }
}

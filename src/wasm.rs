// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser bindings.
//!
//! ```js
//! const search = new GleanSearch(JSON.stringify(window.store));
//! search.onResults((html) => { results.innerHTML = html; });
//! input.value = search.initialize(window.location.search) ?? "";
//! input.addEventListener("input", (e) => search.update(e.target.value));
//! ```

use js_sys::Function;
use serde_wasm_bindgen::to_value;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

use crate::config::SearchConfig;
use crate::page::{search_page, SearchPage};
use crate::render::markup::to_html;
use crate::search::SearchContext;

#[wasm_bindgen]
pub struct GleanSearch {
    page: SearchPage,
    listener: Option<Function>,
}

#[wasm_bindgen]
impl GleanSearch {
    /// Index a store given as JSON (or the `window.store = ...` script),
    /// with an optional JSON config.
    #[wasm_bindgen(constructor)]
    pub fn new(store_json: &str, config_json: Option<String>) -> Result<GleanSearch, JsValue> {
        let config = match config_json {
            Some(json) => SearchConfig::from_json(&json).map_err(to_js_error)?,
            None => SearchConfig::default(),
        };
        let context = SearchContext::from_json(store_json, config).map_err(to_js_error)?;
        Ok(GleanSearch {
            page: SearchPage::new(Arc::new(context)),
            listener: None,
        })
    }

    #[wasm_bindgen(js_name = "docCount")]
    pub fn doc_count(&self) -> usize {
        self.page.context().store().len()
    }

    /// Rendered results for a query, as plain objects.
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let rendered = search_page(query, self.page.context());
        to_value(&rendered).map_err(|e| e.to_string().into())
    }

    /// Match records for a query, unrendered.
    #[wasm_bindgen(js_name = "matches")]
    pub fn matches(&self, query: &str) -> Result<JsValue, JsValue> {
        let results = self
            .page
            .context()
            .get_results(query)
            .map_err(to_js_error)?;
        to_value(&results).map_err(|e| e.to_string().into())
    }

    /// Result list markup for a query.
    pub fn html(&self, query: &str) -> String {
        to_html(&search_page(query, self.page.context()))
    }

    /// Call `callback(html)` whenever the displayed results change.
    #[wasm_bindgen(js_name = "onResults")]
    pub fn on_results(&mut self, callback: Function) {
        self.listener = Some(callback);
    }

    /// Run the `query` parameter of `location.search`, if present.
    /// Returns the value the input box should show.
    pub fn initialize(&mut self, location_search: &str) -> Option<String> {
        self.page.initialize(location_search);
        self.notify()?;
        Some(self.page.input_value().to_string())
    }

    /// The input box changed.
    pub fn update(&mut self, query: &str) {
        self.page.update(query);
        self.notify();
    }

    /// Markup currently displayed, if any query has run.
    #[wasm_bindgen(getter)]
    pub fn output(&self) -> Option<String> {
        self.page.output().map(to_html)
    }

    fn notify(&self) -> Option<()> {
        let html = self.page.output().map(to_html)?;
        if let Some(listener) = &self.listener {
            if let Err(err) = listener.call1(&JsValue::NULL, &JsValue::from_str(&html)) {
                tracing::error!(?err, "results listener threw");
            }
        }
        Some(())
    }
}

fn to_js_error(err: crate::SearchError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

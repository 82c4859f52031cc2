// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side search for a static site.
//!
//! The site build writes every page into a document store. This crate indexes
//! that store, turns what is typed into the search box into a query, and
//! renders matches with the matched words highlighted in place.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  store.rs   │───▶│  index/     │───▶│  search.rs  │───▶│  render/    │
//! │ (url → doc) │    │ (postings,  │    │ (normalize  │    │ (highlight, │
//! │             │    │  BM25)      │    │  the query) │    │  markup)    │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//!                           ▲                                     │
//!                    ┌─────────────┐                       ┌─────────────┐
//!                    │  query/     │                       │  page.rs    │
//!                    │ (clauses,   │                       │ (input box, │
//!                    │  parser)    │                       │  results)   │
//!                    └─────────────┘                       └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use glean::{search_page, SearchConfig, SearchContext};
//!
//! let context = SearchContext::from_json(
//!     r#"{"/sg1/": {"title": "Stargate SG-1", "description": "A secret military team"}}"#,
//!     SearchConfig::default(),
//! )
//! .unwrap();
//!
//! let results = context.get_results("stargate").unwrap();
//! assert_eq!(results.len(), 1);
//!
//! let rendered = search_page("milit", &context);
//! let description = &rendered.results()[0].description;
//! assert_eq!(description.highlights().collect::<Vec<_>>(), vec!["military"]);
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod page;
pub mod query;
pub mod render;
pub mod search;
pub mod store;
pub mod text;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{Bm25Params, FieldBoosts, SearchConfig};
pub use error::{Result, SearchError};
pub use index::{FieldStats, IndexBuilder, SearchIndex};
pub use page::{query_from_location, search_page, SearchPage};
pub use query::{Clause, Presence, Query, TermOptions, Wildcard};
pub use render::markup::to_html;
pub use render::{
    highlight, merge_field_metadata, render, Highlighted, RenderedResult, RenderedResults,
    Segment, SegmentKind,
};
pub use search::SearchContext;
pub use store::{DocumentRecord, DocumentStore};
pub use types::{Field, MatchData, MatchRecord, Span};

#[cfg(feature = "wasm")]
pub use wasm::GleanSearch;

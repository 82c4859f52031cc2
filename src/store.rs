// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document store: every searchable page, keyed by its permanent url.
//!
//! The site build emits one JSON object mapping url → record. Hugo leaves
//! missing params as `null` and older builds wrote tags under `category`, so
//! the loose shape is cleaned up here, once, and everything downstream sees
//! plain strings and vectors.
//!
//! Records are kept sorted by url. Relevance ties elsewhere are broken by this
//! order, which makes results independent of how the JSON object was written.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::Read;

use crate::error::Result;
use crate::types::Field;

/// One searchable page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub url: String,
    pub title: String,
    pub description: String,
    /// Display date, formatted at build time ("Jan 2, 2006").
    pub date: String,
    pub tags: Vec<String>,
    /// Plain text with markup stripped.
    pub content: String,
}

impl DocumentRecord {
    /// Text of a field as it is indexed and rendered.
    pub fn field_text(&self, field: Field) -> std::borrow::Cow<'_, str> {
        use std::borrow::Cow;
        match field {
            Field::Title => Cow::Borrowed(&self.title),
            Field::Description => Cow::Borrowed(&self.description),
            Field::Tags => Cow::Owned(self.tags.join(", ")),
            Field::Content => Cow::Borrowed(&self.content),
        }
    }
}

/// Record as written by the site build, before defaults are applied.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<String>,
    /// Older builds wrote tags here.
    #[serde(default, deserialize_with = "null_as_default")]
    category: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    content: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `tags` first, then any `category` entries not already present.
fn merge_tags(mut tags: Vec<String>, category: Vec<String>) -> Vec<String> {
    for tag in category {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Immutable url → record map.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    records: Vec<DocumentRecord>,
    positions: HashMap<String, usize>,
}

impl DocumentStore {
    /// Build a store from records. A repeated url keeps the last record.
    pub fn from_records(records: impl IntoIterator<Item = DocumentRecord>) -> Self {
        let by_url: BTreeMap<String, DocumentRecord> = records
            .into_iter()
            .map(|record| (record.url.clone(), record))
            .collect();
        Self::from_sorted(by_url.into_values().collect())
    }

    fn from_sorted(records: Vec<DocumentRecord>) -> Self {
        let positions = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.url.clone(), i))
            .collect();
        Self { records, positions }
    }

    /// Parse the JSON object produced by the site build.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, RawRecord> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: BTreeMap<String, RawRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    /// Parse the generated `window.store = {...};` script.
    ///
    /// Plain JSON is accepted too, so callers don't need to know which form
    /// the build produced.
    pub fn from_script(script: &str) -> Result<Self> {
        let trimmed = script.trim();
        let json = match trimmed.strip_prefix("window.store") {
            Some(rest) => {
                let rest = rest.trim_start();
                let rest = rest.strip_prefix('=').unwrap_or(rest);
                rest.trim().trim_end_matches(';')
            }
            None => trimmed,
        };
        Self::from_json(json)
    }

    /// Read a store file in either form.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let script = std::fs::read_to_string(path)?;
        Self::from_script(&script)
    }

    fn from_raw(raw: BTreeMap<String, RawRecord>) -> Self {
        let records = raw
            .into_iter()
            .map(|(url, raw)| DocumentRecord {
                url,
                title: raw.title,
                description: raw.description,
                date: raw.date,
                tags: merge_tags(raw.tags, raw.category),
                content: raw.content,
            })
            .collect();
        Self::from_sorted(records)
    }

    pub fn get(&self, url: &str) -> Option<&DocumentRecord> {
        self.positions.get(url).map(|&i| &self.records[i])
    }

    /// Position of a url in store order.
    pub fn position(&self, url: &str) -> Option<usize> {
        self.positions.get(url).copied()
    }

    /// Record at a store position.
    pub fn record(&self, position: usize) -> Option<&DocumentRecord> {
        self.records.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning matches into something to show.
//!
//! The index reports, per matched term, which character ranges of which
//! field matched. Rendering flattens those into one sorted span list per
//! field, truncates long fields, and cuts each field into plain and
//! highlighted segments.
//!
//! # Invariants
//!
//! 1. **ROUND_TRIP**: concatenating a field's segments in order reproduces the
//!    displayed (possibly truncated) text exactly.
//! 2. **TRUNCATION_BOUND**: a truncated field shows at most `max_len`
//!    characters of source text plus [`TRUNCATION_MARKER`].
//! 3. **NO_NESTING**: highlighted segments never overlap. Overlapping spans
//!    are coalesced into their union.

pub mod markup;

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::{SearchConfig, TRUNCATION_MARKER};
use crate::error::{Result, SearchError};
use crate::store::DocumentStore;
use crate::text::char_slice;
use crate::types::{Field, MatchData, MatchRecord, Span};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Plain,
    Highlight,
}

/// A run of displayed text, `start..end` in characters of the displayed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn is_highlight(&self) -> bool {
        self.kind == SegmentKind::Highlight
    }
}

/// A field cut into segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlighted {
    pub segments: Vec<Segment>,
    /// Whether the source text was cut and the marker appended.
    pub truncated: bool,
}

impl Highlighted {
    /// The displayed text, without markup.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn highlights(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(|s| s.is_highlight())
            .map(|s| s.text.as_str())
    }
}

/// One displayable search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedResult {
    pub url: String,
    pub date: String,
    pub title: Highlighted,
    pub description: Highlighted,
    pub content: Highlighted,
}

/// What the results area shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "results", rename_all = "camelCase")]
pub enum RenderedResults {
    /// The "No results found." placeholder.
    NoResults,
    Results(Vec<RenderedResult>),
}

impl RenderedResults {
    pub fn len(&self) -> usize {
        match self {
            RenderedResults::NoResults => 0,
            RenderedResults::Results(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn results(&self) -> &[RenderedResult] {
        match self {
            RenderedResults::NoResults => &[],
            RenderedResults::Results(results) => results,
        }
    }
}

/// Render matches in order. A match whose document is not in the store
/// fails the whole call.
pub fn render(
    results: &[MatchRecord],
    store: &DocumentStore,
    config: &SearchConfig,
) -> Result<RenderedResults> {
    if results.is_empty() {
        return Ok(RenderedResults::NoResults);
    }

    let rendered = results
        .iter()
        .map(|result| {
            let record = store
                .get(&result.reference)
                .ok_or_else(|| SearchError::MissingDocument(result.reference.clone()))?;
            let merged = merge_field_metadata(&result.match_data);
            let show = |field: Field| {
                highlight(
                    &record.field_text(field),
                    merged.get(&field).map(Vec::as_slice),
                    config.display_length(field),
                )
            };

            Ok(RenderedResult {
                url: record.url.clone(),
                date: record.date.clone(),
                title: show(Field::Title),
                description: show(Field::Description),
                content: show(Field::Content),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RenderedResults::Results(rendered))
}

/// Flatten term → field → spans into field → spans, sorted by start.
///
/// Terms are visited in sorted order and the sort is stable, so equal starts
/// keep a deterministic order. Fields no term hit are absent.
pub fn merge_field_metadata(match_data: &MatchData) -> BTreeMap<Field, Vec<Span>> {
    let mut merged: BTreeMap<Field, Vec<Span>> = BTreeMap::new();
    for fields in match_data.values() {
        for (&field, spans) in fields {
            merged.entry(field).or_default().extend_from_slice(spans);
        }
    }
    for spans in merged.values_mut() {
        spans.sort_by_key(|span| span.start);
    }
    merged
}

/// Cut `text` into plain and highlighted segments.
///
/// With `max_len`, text longer than that many characters is cut and
/// [`TRUNCATION_MARKER`] appended. Spans starting at or past the cut are
/// dropped and spans crossing it are clipped.
pub fn highlight(text: &str, spans: Option<&[Span]>, max_len: Option<usize>) -> Highlighted {
    let total = text.chars().count();
    let (shown, cut, truncated) = match max_len {
        Some(max) if total > max => (
            format!("{}{}", char_slice(text, 0, max), TRUNCATION_MARKER),
            max,
            true,
        ),
        _ => (text.to_string(), total, false),
    };
    let shown_len = shown.chars().count();

    let regions = match spans {
        Some(spans) => coalesce(spans, cut),
        None => Vec::new(),
    };

    let mut segments = Vec::with_capacity(regions.len() * 2 + 1);
    let mut position = 0;
    let mut push = |kind, start, end| {
        segments.push(Segment {
            kind,
            text: char_slice(&shown, start, end).to_string(),
            start,
            end,
        });
    };

    for (start, end) in regions {
        if start > position {
            push(SegmentKind::Plain, position, start);
        }
        push(SegmentKind::Highlight, start, end);
        position = end;
    }
    if position < shown_len || position == 0 {
        push(SegmentKind::Plain, position, shown_len);
    }

    Highlighted {
        segments,
        truncated,
    }
}

/// Clip spans to `limit`, drop empty ones, and merge overlaps.
fn coalesce(spans: &[Span], limit: usize) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = spans
        .iter()
        .filter(|span| span.start < limit)
        .map(|span| (span.start, span.end().min(limit)))
        .filter(|(start, end)| end > start)
        .collect();
    ranges.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start < last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

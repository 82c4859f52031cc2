// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML for the results area, matching the site's result list markup.

use std::fmt::Write;

use super::{Highlighted, RenderedResult, RenderedResults, SegmentKind};

pub const NO_RESULTS_HTML: &str = "<p>No results found.</p>";

/// Render results as HTML. Every piece of text is escaped; highlights are
/// wrapped in `<mark>`.
pub fn to_html(results: &RenderedResults) -> String {
    match results {
        RenderedResults::NoResults => NO_RESULTS_HTML.to_string(),
        RenderedResults::Results(results) if results.is_empty() => NO_RESULTS_HTML.to_string(),
        RenderedResults::Results(results) => {
            let mut html = String::from("<ul class=\"list-unstyled\">");
            for result in results {
                write_result(&mut html, result);
            }
            html.push_str("</ul>");
            html
        }
    }
}

fn write_result(html: &mut String, result: &RenderedResult) {
    // Writing to a String cannot fail.
    let _ = write!(
        html,
        "<li><div class=\"summary\"><h4><a href=\"{}\">{}</a><small class=\"pull-right\">{}</small><br/></h4>\
         <h5 class=\"muted\">{}</h5><hr/><div><p>{}</p></div></div></li>",
        escape(&result.url),
        highlighted_html(&result.title),
        escape(&result.date),
        highlighted_html(&result.description),
        highlighted_html(&result.content),
    );
}

/// A highlighted field as HTML.
pub fn highlighted_html(field: &Highlighted) -> String {
    let mut html = String::new();
    for segment in &field.segments {
        match segment.kind {
            SegmentKind::Plain => html.push_str(&escape(&segment.text)),
            SegmentKind::Highlight => {
                html.push_str("<mark>");
                html.push_str(&escape(&segment.text));
                html.push_str("</mark>");
            }
        }
    }
    html
}

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

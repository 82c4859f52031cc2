// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! BM25 per field, scaled by field and clause boosts.
//!
//! Each field is scored as its own little corpus: document frequency and
//! average length are per field, so a word that appears in every title but
//! rarely in content is cheap in titles and valuable in content.
//!
//! ```text
//! idf   = ln(1 + (N - df + 0.5) / (df + 0.5))
//! score = idf · tf·(k1 + 1) / (tf + k1·(1 - b + b·len/avg_len)) · field_boost · clause_boost
//! ```

use crate::config::Bm25Params;

/// Inverse document frequency. Always positive, even for a term in every document.
pub fn idf(total_docs: usize, doc_freq: usize) -> f64 {
    let n = total_docs as f64;
    let df = doc_freq as f64;
    (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
}

/// Saturated, length-normalized term frequency.
pub fn tf_norm(params: &Bm25Params, tf: usize, field_len: usize, avg_field_len: f64) -> f64 {
    let tf = tf as f64;
    let avg = if avg_field_len > 0.0 { avg_field_len } else { 1.0 };
    let norm = 1.0 - params.b + params.b * field_len as f64 / avg;
    tf * (params.k1 + 1.0) / (tf + params.k1 * norm)
}

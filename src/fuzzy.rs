// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded edit distance for `term~N` clauses.
//!
//! The vocabulary of a personal blog is a few thousand words, so a plain DP
//! per candidate is fast enough. Two cheap exits keep it that way: the length
//! difference is a lower bound on the distance, and once every cell in a row
//! exceeds the bound no later row can come back under it.

/// Is `candidate` within `max` single-character edits of `term`?
pub fn within_edit_distance(term: &str, candidate: &str, max: usize) -> bool {
    let a: Vec<char> = term.chars().collect();
    let b: Vec<char> = candidate.chars().collect();

    if a.len().abs_diff(b.len()) > max {
        return false;
    }
    if max == 0 {
        return a == b;
    }

    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut row_min = row[0];

        for (j, &bc) in b.iter().enumerate() {
            let above = row[j + 1];
            let substitution = diagonal + usize::from(ac != bc);
            row[j + 1] = substitution.min(above + 1).min(row[j] + 1);
            diagonal = above;
            row_min = row_min.min(row[j + 1]);
        }

        if row_min > max {
            return false;
        }
    }

    row[b.len()] <= max
}

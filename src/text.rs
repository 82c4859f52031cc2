// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.
//!
//! Both sides of a search go through here: field text when the index is built,
//! and query words when a query runs. If the two ever disagreed, "Café" in a
//! title would stop matching "cafe" in the search box.
//!
//! Tokens remember where they came from as character offsets into the original
//! text, which is what the renderer needs to put highlights back.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::types::Span;

/// Words too common to be worth indexing.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is",
    "it", "its", "of", "on", "or", "so", "such", "than", "that", "the", "their", "then",
    "there", "these", "they", "this", "to", "was", "were", "will", "with",
];

/// Is this (already normalized) word a stop word?
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Normalize a word for matching: strip diacritics, then lowercase.
///
/// - "Café" → "cafe"
/// - "naïve" → "naive"
/// - "ATLANTIS" → "atlantis"
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase only. Used by builds that drop the normalization tables.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Combining marks (category Mn) in the blocks Latin text actually uses.
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |
        '\u{1AB0}'..='\u{1AFF}' |
        '\u{1DC0}'..='\u{1DFF}' |
        '\u{20D0}'..='\u{20FF}' |
        '\u{FE20}'..='\u{FE2F}'
    )
}

/// Characters that continue a word. Combining marks count, so a decomposed
/// "é" does not split its word in two.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c)
}

/// A normalized word and where it sits in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub term: String,
    pub span: Span,
}

/// Split text into normalized words, dropping stop words.
///
/// A word is a maximal run of alphanumeric characters, so "SG-1" yields
/// `sg` and `1`, and "Stargate:" yields `stargate`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut word_start = 0;
    let mut word_len = 0;

    for (i, c) in text.chars().enumerate() {
        if is_word_char(c) {
            if word.is_empty() {
                word_start = i;
            }
            word.push(c);
            word_len += 1;
        } else if !word.is_empty() {
            push_token(&mut tokens, &word, word_start, word_len);
            word.clear();
            word_len = 0;
        }
    }
    if !word.is_empty() {
        push_token(&mut tokens, &word, word_start, word_len);
    }

    tokens
}

fn push_token(tokens: &mut Vec<Token>, word: &str, start: usize, length: usize) {
    let term = normalize(word);
    if !term.is_empty() && !is_stop_word(&term) {
        tokens.push(Token {
            term,
            span: Span::new(start, length),
        });
    }
}

/// Normalized words of `text`, stop words included.
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !is_word_char(c))
        .map(normalize)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Normalized words of a wildcard pattern. `*` stays attached to the word
/// it touches, so "sg-1*" yields `sg` and `1*`. Stop words are dropped
/// unless they carry a `*`.
pub fn pattern_words(text: &str) -> Vec<String> {
    text.split(|c: char| !(is_word_char(c) || c == '*'))
        .map(normalize)
        .filter(|w| w.chars().any(|c| c != '*'))
        .filter(|w| w.contains('*') || !is_stop_word(w))
        .collect()
}

/// Byte offset of the `char_offset`-th character, or `text.len()` past the end.
pub fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Slice by character offsets. Out-of-range offsets are clamped.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    let from = byte_offset(text, start);
    let to = byte_offset(text, end.max(start));
    &text[from..to]
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parser for the advanced query syntax.
//!
//! Clauses are separated by whitespace. Each clause is
//!
//! ```text
//! [+|-] [field:] term [^boost] [~distance]
//! ```
//!
//! - `+term` must match, `-term` must not match.
//! - `title:term` only searches one field.
//! - `*` anywhere in a term matches any run of characters (`anc*nt`).
//! - `term^10` multiplies the clause's score.
//! - `term~1` also matches terms within one edit.
//!
//! Punctuation inside a term splits it into several clauses with the same
//! modifiers, so `sg-1` searches for `sg` and `1`.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{Result, SearchError};
use crate::query::{Clause, Presence, Query, TermOptions};
use crate::text::pattern_words;
use crate::types::Field;

/// Characters with a meaning in the advanced syntax.
pub const SYNTAX_CHARS: [char; 6] = ['*', ':', '^', '~', '+', '-'];

/// Does the text use any advanced syntax?
pub fn uses_syntax(text: &str) -> bool {
    text.contains(SYNTAX_CHARS)
}

/// Parse an advanced query string.
pub fn parse(input: &str) -> Result<Query> {
    QueryStringParser::new(input).parse()
}

struct QueryStringParser<'a> {
    chars: Peekable<Chars<'a>>,
    position: usize,
    query: Query,
}

impl<'a> QueryStringParser<'a> {
    fn new(input: &'a str) -> Self {
        QueryStringParser {
            chars: input.chars().peekable(),
            position: 0,
            query: Query::new(),
        }
    }

    fn parse(mut self) -> Result<Query> {
        loop {
            self.skip_whitespace();
            if self.chars.peek().is_none() {
                break;
            }
            self.parse_clause()?;
        }
        Ok(self.query)
    }

    fn parse_clause(&mut self) -> Result<()> {
        let presence = match self.chars.peek() {
            Some('+') => {
                self.bump();
                Presence::Required
            }
            Some('-') => {
                self.bump();
                Presence::Prohibited
            }
            _ => Presence::Optional,
        };

        let mut word = self.read_word();
        let mut fields = Vec::new();

        if self.chars.peek() == Some(&':') {
            if word.is_empty() {
                return Err(SearchError::parse(self.position, "expected a field name before ':'"));
            }
            fields.push(word.parse::<Field>()?);
            self.bump();
            word = self.read_word();
        }

        if word.is_empty() {
            return Err(SearchError::parse(self.position, "expected a term"));
        }

        let mut options = TermOptions::default().presence(presence).fields(fields);

        loop {
            match self.chars.peek() {
                Some('^') => {
                    self.bump();
                    let at = self.position;
                    let digits = self.read_number();
                    options.boost = digits
                        .parse::<f64>()
                        .map_err(|_| SearchError::parse(at, "expected a number after '^'"))?;
                }
                Some('~') => {
                    self.bump();
                    let at = self.position;
                    let digits = self.read_number();
                    options.edit_distance = digits
                        .parse::<usize>()
                        .map_err(|_| SearchError::parse(at, "expected a whole number after '~'"))?;
                }
                Some(c) if c.is_whitespace() => break,
                None => break,
                Some(&c) => {
                    return Err(SearchError::parse(
                        self.position,
                        format!("unexpected '{}'", c),
                    ));
                }
            }
        }

        self.push(&word, options);
        Ok(())
    }

    fn push(&mut self, word: &str, options: TermOptions) {
        if !word.contains('*') {
            self.query.term(word, options);
            return;
        }

        for term in pattern_words(word) {
            self.query.clause(Clause {
                term,
                fields: options.fields.clone(),
                boost: options.boost,
                edit_distance: options.edit_distance,
                presence: options.presence,
            });
        }
    }

    /// Everything up to whitespace or a modifier.
    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() || matches!(c, ':' | '^' | '~') {
                break;
            }
            word.push(c);
            self.bump();
        }
        word
    }

    fn read_number(&mut self) -> String {
        let mut digits = String::new();
        while let Some(&c) = self.chars.peek() {
            if !(c.is_ascii_digit() || c == '.') {
                break;
            }
            digits.push(c);
            self.bump();
        }
        digits
    }

    fn skip_whitespace(&mut self) {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.bump();
        }
    }

    fn bump(&mut self) {
        if self.chars.next().is_some() {
            self.position += 1;
        }
    }
}

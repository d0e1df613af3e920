//! The shared body-loop skeleton `parse_metar`/`parse_taf` both drive.
//!
//! Every pattern in [`crate::patterns`] is anchored at the start of its
//! input and consumes its own trailing whitespace boundary, so a cursor
//! only needs to track a byte offset into the original string — no
//! separate tokenizer is needed.

use regex::Regex;

use crate::error::{ErrorKind, UnparsedToken};

/// A position within a report's text, advancing left to right as the body
/// loop consumes tokens.
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Starts a cursor over the (already trimmed) remainder of a report,
    /// right after its header has been consumed.
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// The text from the current position to the end of input.
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }

    /// True once there is nothing left to parse.
    pub fn is_empty(&self) -> bool {
        self.remaining().trim().is_empty()
    }

    /// Advances the cursor past a match of length `len` ending at the
    /// current position. Patterns consume their own trailing whitespace, so
    /// no extra skipping is needed here.
    pub fn advance(&mut self, len: usize) {
        self.pos += len;
    }

    /// Tries one pattern against the remaining input. Zero-length matches
    /// (possible only once the cursor is already logically empty) are
    /// treated as a non-match so the loop can never stall.
    pub fn try_match(&self, pattern: &Regex) -> Option<regex::Captures<'a>> {
        let caps = pattern.captures(self.remaining())?;
        if caps.get(0).unwrap().end() == 0 {
            return None;
        }
        Some(caps)
    }

    /// The next whitespace-delimited token, for building an
    /// [`UnparsedToken`] when no active handler matches.
    pub fn next_token(&self) -> &'a str {
        self.remaining()
            .split_whitespace()
            .next()
            .unwrap_or_default()
    }
}

/// Records an unmatched token and advances past it using the catch-all
/// `UNPARSED` pattern, so the loop always makes forward progress.
pub fn skip_unparsed(cursor: &mut Cursor, warnings: &mut Vec<UnparsedToken>) {
    let token = cursor.next_token().to_string();
    let caps = crate::patterns::UNPARSED
        .captures(cursor.remaining())
        .expect("UNPARSED matches any non-whitespace run");
    let len = caps.get(0).unwrap().end();
    cursor.advance(len);
    warnings.push(UnparsedToken {
        token,
        kind: ErrorKind::UnparsedToken,
    });
}

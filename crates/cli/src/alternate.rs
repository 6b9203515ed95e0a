// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alternating case conversion.
//!
//! Positions are counted in `char`s. Even positions are lowercased and odd
//! positions are uppercased. Conversion uses the simple one-to-one Unicode case
//! mapping, so the output always has the same number of characters as the input.
//! Where the full mapping expands (e.g. `ß` uppercases to `SS`), the simple
//! mapping is used instead, and characters without one (like `ß`) are kept.

/// Input used by the `altcase` binary when no argument is given.
pub const DEFAULT_TEXT: &str = "this is some text with alternate case";

/// Convert `s` so even positions are lowercase and odd positions uppercase.
///
/// Characters without a case mapping pass through unchanged.
pub fn alternate_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    out.extend(s.chars().enumerate().map(|(i, c)| alternate_char(i, c)));
    out
}

/// Map a single character at position `index` to its target case.
pub fn alternate_char(index: usize, c: char) -> char {
    if index % 2 == 0 {
        single(c.to_lowercase()).unwrap_or_else(|| simple_lowercase(c))
    } else {
        single(c.to_uppercase()).unwrap_or_else(|| simple_uppercase(c))
    }
}

/// Returns true when every character is already in its position's target case.
pub fn is_alternating(s: &str) -> bool {
    s.chars().enumerate().all(|(i, c)| alternate_char(i, c) == c)
}

/// Yield the only item of a case mapping, or `None` for multi-char mappings.
fn single(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    let first = mapping.next()?;
    match mapping.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Simple lowercase for characters whose full lowercase expands.
fn simple_lowercase(c: char) -> char {
    match c {
        // LATIN CAPITAL LETTER I WITH DOT ABOVE
        '\u{0130}' => 'i',
        _ => c,
    }
}

/// Simple uppercase for characters whose full uppercase expands.
///
/// Only the Greek letters with ypogegrammeni have a one-to-one uppercase:
/// the lowercase forms map to their prosgegrammeni forms. Everything else in
/// the expanding set (`ß`, ligatures, titlecase forms) maps to itself.
fn simple_uppercase(c: char) -> char {
    let shifted = match c {
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(u32::from(c) + 8)
        }
        '\u{1FB3}' => Some('\u{1FBC}'),
        '\u{1FC3}' => Some('\u{1FCC}'),
        '\u{1FF3}' => Some('\u{1FFC}'),
        _ => None,
    };
    shifted.unwrap_or(c)
}

#[cfg(test)]
#[path = "alternate_tests.rs"]
mod tests;

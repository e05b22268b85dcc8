// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Helpful utilities for working with post text.

use htmlentity::entity::{self, ICodedDataTrait};

/// Prepares the raw text of a post for text analysis.
///
/// The search API escapes `&`, `<`, and `>` as HTML entities. Left alone,
/// `&amp;` and friends are just noise to a language detector, so they are
/// converted back into the characters they stand for. Leading and trailing
/// whitespace is trimmed.
///
/// # Examples
///
/// ```
/// use howpositive::text::analyzable_text;
/// let raw = "Pizza &amp; beer tonight &gt; salad";
/// assert_eq!(analyzable_text(raw), "Pizza & beer tonight > salad");
/// ```
///
/// ```
/// use howpositive::text::analyzable_text;
/// let raw = "  just setting up my twttr \n";
/// assert_eq!(analyzable_text(raw), "just setting up my twttr");
/// ```
///
/// ```
/// use howpositive::text::analyzable_text;
/// assert_eq!(analyzable_text(""), "");
/// ```
pub fn analyzable_text(text: &str) -> String {
    let text = text.trim();
    entity::decode(text.as_bytes())
        .to_string()
        .unwrap_or_else(|_| text.to_string())
}

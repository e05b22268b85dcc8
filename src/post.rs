// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! A single post ("tweet") returned by the search API.

use serde::Deserialize;

/// A post, exactly as the search API returned it.
///
/// The only thing ever added to a post after it is fetched is the
/// language detected by the text analytics API.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Post {
    id: String,
    text: String,

    #[serde(default)]
    author_id: Option<String>,

    #[serde(skip)]
    language: Option<String>,
}

impl Post {
    /// Creates a post with the given `id` and `text`.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            author_id: None,
            language: None,
        }
    }

    /// The post's unique ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The raw text of the post.
    ///
    /// HTML entities are left encoded, the way the API sends them.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// ID of the post's author, if the API included it.
    pub fn author_id(&self) -> Option<&str> {
        self.author_id.as_deref()
    }

    /// ISO 639-1 code of the post's language, once it has been detected.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub(crate) fn with_language(self, language: impl Into<String>) -> Self {
        let language = Some(language.into());
        Self { language, ..self }
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Documents submitted to the text analytics API.

use crate::analytics::{Error, Result};
use crate::post::Post;
use crate::text::analyzable_text;
use serde::{Serialize, Serializer};

/// An ordered batch of posts, in the shape the text analytics API expects.
///
/// A batch serializes as
///
/// ```json
/// {"documents": [{"id": "1", "language": "en", "text": "..."}]}
/// ```
///
/// where `language` is only present once it has been detected. The order
/// of the posts never changes, because the API's results are correlated
/// with the documents by position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentBatch {
    posts: Vec<Post>,
}

impl DocumentBatch {
    /// Number of documents in the batch.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// True if there are no documents in the batch.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The batch's posts, in order.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// IDs of the documents, in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.posts.iter().map(|post| post.id())
    }

    /// Consumes the batch, returning its posts in their original order.
    pub fn into_posts(self) -> Vec<Post> {
        self.posts
    }

    /// Attaches a detected language to each post.
    ///
    /// The language at position _i_ of `languages` is attached to the post
    /// at position _i_ of the batch. Returns an error if there is not
    /// exactly one language per post.
    pub fn with_languages(self, languages: Vec<String>) -> Result<Self> {
        if languages.len() != self.posts.len() {
            return Err(Error::LengthMismatch {
                expected: self.posts.len(),
                actual: languages.len(),
            });
        }

        let posts = self
            .posts
            .into_iter()
            .zip(languages)
            .map(|(post, language)| post.with_language(language))
            .collect();
        Ok(Self { posts })
    }
}

impl From<Vec<Post>> for DocumentBatch {
    fn from(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

#[derive(Serialize)]
struct Document<'a> {
    id: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,

    text: String,
}

impl<'a> From<&'a Post> for Document<'a> {
    fn from(post: &'a Post) -> Self {
        Self {
            id: post.id(),
            language: post.language(),
            text: analyzable_text(post.text()),
        }
    }
}

#[derive(Serialize)]
struct Documents<'a> {
    documents: Vec<Document<'a>>,
}

impl Serialize for DocumentBatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let documents = self.posts.iter().map(Document::from).collect();
        Documents { documents }.serialize(serializer)
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Fetches an author's recent posts from the Twitter API.

pub mod service;

pub use service::{SearchQuery, Service, TwitterService};

use crate::http;
use crate::post::Post;
use log::{info, trace};
use serde::Deserialize;
use thiserror::Error;

/// The body of a recent search response.
///
/// When a search matches nothing, the API leaves out `data` altogether,
/// which is read as an empty list of posts. Only the first page of
/// results is ever read.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    data: Vec<Post>,
}

impl SearchResponse {
    /// Parses the raw body of a search response.
    pub fn parse(body: &str) -> Result<Self, Error> {
        trace!("search response: {body}");
        Ok(serde_json::from_str(body)?)
    }

    /// The posts matching the search, most recent first.
    pub fn posts(&self) -> &[Post] {
        &self.data
    }

    /// Consumes the response, returning its posts.
    pub fn into_posts(self) -> Vec<Post> {
        self.data
    }
}

/// Retrieves an author's recent posts through a search [`Service`].
#[derive(Debug)]
pub struct PostFetcher<'a, S: Service> {
    service: &'a S,
}

impl<'a, S: Service> PostFetcher<'a, S> {
    /// Creates a fetcher that searches using `service`.
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Fetches the posts matching `query`.
    ///
    /// Returns an [`enum@Error`] if the search fails or its response cannot
    /// be parsed.
    pub async fn fetch(&self, query: &SearchQuery) -> Result<Vec<Post>, Error> {
        let body = self.service.search_recent(query).await?;
        let posts = SearchResponse::parse(&body)?.into_posts();
        info!("fetched {} posts by {}", posts.len(), query.handle());
        Ok(posts)
    }
}

/// A post retrieval error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] http::HTTPError),

    /// An error parsing the search response.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

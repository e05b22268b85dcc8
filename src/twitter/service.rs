// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! HTTPS connector for the Twitter recent search API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the search API over HTTPS, essentially a specialized HTTPS client
//! that knows how to ask for a single author's recent posts.

use crate::auth::Auth;
use crate::http::{self, HTTPClientFactory, HTTPError, HTTPResult};
use log::debug;
use reqwest::{Client, RequestBuilder};

/// A search for the most recent posts by one author.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchQuery {
    handle: String,
    max_results: u32,
}

impl SearchQuery {
    /// Searches for the last `max_results` posts written by `handle`.
    pub fn new(handle: impl Into<String>, max_results: u32) -> Self {
        let handle = handle.into();
        Self {
            handle,
            max_results,
        }
    }

    /// The author's handle.
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// The maximum number of posts requested.
    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// The search expression sent to the API.
    ///
    /// # Examples
    ///
    /// ```
    /// use howpositive::twitter::SearchQuery;
    /// let query = SearchQuery::new("jessicagarson", 100);
    /// assert_eq!(query.expression(), "from:jessicagarson");
    /// ```
    pub fn expression(&self) -> String {
        format!("from:{}", self.handle.trim_start_matches('@'))
    }

    fn params(&self) -> [(&'static str, String); 2] {
        [
            ("max_results", self.max_results.to_string()),
            ("query", self.expression()),
        ]
    }
}

/// A service for searching recent posts.
///
/// Using this trait, clients can implement different ways of connecting
/// to the search API, such as an actual connector for production code,
/// and a mocked connector for testing purposes.
pub trait Service {
    /// Runs the search described by `query` and returns the raw JSON body
    /// of the response.
    fn search_recent(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the Twitter API directly to search for posts.
#[derive(Debug)]
pub struct TwitterService {
    client: Client,
    base_url: String,
    auth: Auth,
}

impl TwitterService {
    /// Creates a new service talking to the API at `base_url`, authorized
    /// by the bearer token in `auth`.
    pub fn new(
        factory: &HTTPClientFactory,
        base_url: impl Into<String>,
        auth: Auth,
    ) -> HTTPResult<Self> {
        let client = factory.create()?;
        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    fn uri(&self) -> String {
        format!(
            "{}/2/tweets/search/recent",
            self.base_url.trim_end_matches('/')
        )
    }

    fn request(&self, query: &SearchQuery) -> RequestBuilder {
        self.client
            .get(self.uri())
            .bearer_auth(self.auth.api_key())
            .query(&query.params())
    }
}

impl Service for TwitterService {
    async fn search_recent(&self, query: &SearchQuery) -> HTTPResult<String> {
        debug!("GET {} for {}", self.uri(), query.expression());
        let resp = self
            .request(query)
            .send()
            .await
            .map_err(HTTPError::Request)?;
        http::json_body(resp).await
    }
}

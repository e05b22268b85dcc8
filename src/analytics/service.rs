// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Services for communicating with the text analytics API using HTTP.

use crate::auth::Auth;
use crate::http::{self, HTTPClientFactory, HTTPError, HTTPResult};
use log::debug;
use reqwest::{Client, RequestBuilder, header};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Header carrying the Cognitive Services subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Text analytics operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Detects the language of each document.
    Languages,

    /// Scores the sentiment of each document.
    Sentiment,
}

impl Endpoint {
    /// Short name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Languages => "languages",
            Endpoint::Sentiment => "sentiment",
        }
    }

    /// Path of the operation, relative to the resource's endpoint.
    pub fn path(&self) -> String {
        format!("text/analytics/v2.1/{}", self.name())
    }
}

/// A general service for making HTTP calls to the text analytics API.
///
/// While this may appear to be more like a "client", think of it as a
/// proxy for a (possibly remote) API service. Tests swap in a
/// deterministic service that answers from fixtures.
pub trait APIService {
    /// Send `data` as JSON to the given `endpoint`.
    ///
    /// The response is deserialized from a string to the JSON object
    /// specified in the `R` type parameter.
    fn post<D, R>(&self, endpoint: Endpoint, data: &D) -> impl Future<Output = HTTPResult<R>> + Send
    where
        D: Serialize + Sync,
        R: DeserializeOwned + Send;
}

/// A service that talks to an Azure Cognitive Services resource.
#[derive(Debug)]
pub struct AzureService {
    client: Client,
    base_url: String,
    auth: Auth,
}

impl AzureService {
    /// Creates a new service for the resource at `base_url`, authorized by
    /// the subscription key in `auth`.
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

    fn uri(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint.path())
    }

    fn request<D: Serialize>(&self, endpoint: Endpoint, data: &D) -> RequestBuilder {
        self.client
            .post(self.uri(endpoint))
            .header(header::CONTENT_TYPE, "application/json")
            .header(SUBSCRIPTION_KEY_HEADER, self.auth.api_key())
            .json(data)
    }
}

impl APIService for AzureService {
    async fn post<D, R>(&self, endpoint: Endpoint, data: &D) -> HTTPResult<R>
    where
        D: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        debug!("POST {}", self.uri(endpoint));
        let resp = self
            .request(endpoint, data)
            .send()
            .await
            .map_err(HTTPError::Request)?;
        let body = http::json_body(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Echo {
        ok: bool,
    }

    fn service(base_url: &str) -> AzureService {
        AzureService::new(
            &HTTPClientFactory::default(),
            base_url,
            Auth::new("test-subscription-key"),
        )
        .unwrap()
    }

    #[test]
    fn it_returns_paths_for_each_endpoint() {
        assert_eq!(Endpoint::Languages.path(), "text/analytics/v2.1/languages");
        assert_eq!(Endpoint::Sentiment.path(), "text/analytics/v2.1/sentiment");
    }

    #[test]
    fn it_returns_a_uri_for_an_endpoint() {
        let service = service("https://week.cognitiveservices.azure.com/");
        assert_eq!(
            service.uri(Endpoint::Languages),
            "https://week.cognitiveservices.azure.com/text/analytics/v2.1/languages"
        );
    }

    #[test]
    fn it_returns_a_uri_for_an_endpoint_without_a_trailing_slash() {
        let service = service("https://week.cognitiveservices.azure.com");
        assert_eq!(
            service.uri(Endpoint::Sentiment),
            "https://week.cognitiveservices.azure.com/text/analytics/v2.1/sentiment"
        );
    }

    #[test]
    fn it_authorizes_with_a_subscription_key() {
        let service = service("https://week.cognitiveservices.azure.com/");
        let request = service
            .request(Endpoint::Languages, &json!({"documents": []}))
            .build()
            .unwrap();
        let key = request.headers().get(SUBSCRIPTION_KEY_HEADER).unwrap();
        assert_eq!(key, "test-subscription-key");
    }

    #[tokio::test]
    async fn it_posts_json_and_deserializes_the_response() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/text/analytics/v2.1/sentiment")
            .match_header("ocp-apim-subscription-key", "test-subscription-key")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"documents": [{"id": "1"}]})))
            .with_status(200)
            .with_header("content-type", "application/json; charset=utf-8")
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let data = json!({"documents": [{"id": "1"}]});
        let response: Echo = service(&server.url())
            .post(Endpoint::Sentiment, &data)
            .await
            .unwrap();

        assert_eq!(response, Echo { ok: true });
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn it_fails_when_the_subscription_key_is_refused() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/text/analytics/v2.1/languages")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"code": "401"}}"#)
            .create_async()
            .await;

        let result: HTTPResult<Echo> = service(&server.url())
            .post(Endpoint::Languages, &json!({"documents": []}))
            .await;

        assert!(
            matches!(result, Err(HTTPError::Http(status)) if status.as_u16() == 401),
            "{result:?}"
        );
    }

    #[tokio::test]
    async fn it_fails_when_the_response_has_an_unexpected_shape() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/text/analytics/v2.1/languages")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"documents": []}"#)
            .create_async()
            .await;

        let result: HTTPResult<Echo> = service(&server.url())
            .post(Endpoint::Languages, &json!({"documents": []}))
            .await;

        assert!(
            matches!(result, Err(HTTPError::Deserialization(_))),
            "{result:?}"
        );
    }
}

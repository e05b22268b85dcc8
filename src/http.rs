// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Services for communicating with APIs using HTTP.

use log::trace;
use reqwest::{Client, ClientBuilder, Response, header};
use std::{error, fmt};

/// Creates HTTP clients that identify themselves with an appropriate
/// user agent.
///
/// Every service in this crate gets its client from a factory rather than
/// building one itself, so all outgoing requests look the same to the
/// remote end.
#[derive(Clone, Debug)]
pub struct HTTPClientFactory {
    name: String,
    version: String,
}

impl HTTPClientFactory {
    /// Creates a factory for clients belonging to the program `name`
    /// at the given `version`.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        let name = name.into();
        let version = version.into();
        Self { name, version }
    }

    /// An appropriate user agent to use when making HTTP requests.
    pub fn user_agent(&self) -> String {
        format!("{} v{}", self.name, self.version)
    }

    /// Builds a new HTTP client.
    ///
    /// According to the reqwest docs, this only fails if a TLS backend
    /// cannot be initialized, or if DNS resolution cannot be initialized.
    pub fn create(&self) -> HTTPResult<Client> {
        ClientBuilder::new()
            .user_agent(self.user_agent())
            .build()
            .map_err(HTTPError::Client)
    }
}

impl Default for HTTPClientFactory {
    /// A factory for clients identifying as this program.
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}

/// Checks that `resp` was successful and carries JSON, then returns its
/// raw body.
pub async fn json_body(resp: Response) -> HTTPResult<String> {
    let status = resp.status();
    trace!("{} returned HTTP {status}", resp.url());

    if !status.is_success() {
        return Err(HTTPError::Http(status));
    }

    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .ok_or(HTTPError::MissingContentType)?
        .to_str()?;
    if !content_type.starts_with("application/json") {
        return Err(HTTPError::UnexpectedContentType(content_type.to_string()));
    }

    resp.text().await.map_err(HTTPError::Body)
}

/// The result of an HTTP request.
pub type HTTPResult<T> = Result<T, HTTPError>;

/// Indicates an error has occurred when making an HTTP call.
#[derive(Debug)]
pub enum HTTPError {
    /// An error building the HTTP client itself.
    Client(reqwest::Error),

    /// An error retrieving the body of a response.
    Body(reqwest::Error),

    /// An error that occurred while making an HTTP request.
    Request(reqwest::Error),

    /// A response body that could not be deserialized into the expected
    /// structure.
    Deserialization(serde_json::Error),

    /// An unsuccessful HTTP status code in an HTTP response.
    Http(reqwest::StatusCode),

    /// A missing Content-Type header in a response.
    MissingContentType,

    /// An invalid Content-Type header.
    InvalidContentType(header::ToStrError),

    /// A Content-Type that is not understood by the service.
    UnexpectedContentType(String),
}

impl From<serde_json::Error> for HTTPError {
    fn from(error: serde_json::Error) -> Self {
        HTTPError::Deserialization(error)
    }
}

impl From<header::ToStrError> for HTTPError {
    fn from(error: header::ToStrError) -> Self {
        HTTPError::InvalidContentType(error)
    }
}

impl fmt::Display for HTTPError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HTTPError::Client(err) => write!(f, "Error creating HTTP client: {err}"),
            HTTPError::Body(err) => write!(f, "Error retrieving body of HTTP response: {err}"),
            HTTPError::Request(err) => write!(f, "Error while making HTTP request: {err}"),
            HTTPError::Deserialization(err) => write!(f, "Error deserializing response: {err}"),
            HTTPError::Http(status) => write!(f, "Request returned HTTP {status}"),
            HTTPError::MissingContentType => write!(f, "Missing Content-Type header"),
            HTTPError::InvalidContentType(err) => {
                write!(f, "Invalid Content-Type header value: {err}")
            }
            HTTPError::UnexpectedContentType(content_type) => {
                write!(f, "Unexpected content type: {content_type}")
            }
        }
    }
}

impl error::Error for HTTPError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            HTTPError::Client(err) => Some(err),
            HTTPError::Body(err) => Some(err),
            HTTPError::Request(err) => Some(err),
            HTTPError::Deserialization(err) => Some(err),
            HTTPError::Http(_) => None,
            HTTPError::MissingContentType => None,
            HTTPError::InvalidContentType(err) => Some(err),
            HTTPError::UnexpectedContentType(_) => None,
        }
    }
}

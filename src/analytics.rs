// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Language detection and sentiment analysis using Azure Text Analytics.
//!
//! Both endpoints take the same [`DocumentBatch`] and answer with one
//! result per document. Nothing in the API guarantees that results come
//! back in the order the documents were sent, or that every document gets
//! a result, so every response is checked against the batch it answers
//! before it is used. A response that does not line up is rejected with an
//! [`enum@Error`] rather than silently mismatching posts and scores.

pub mod document;
pub mod language;
pub mod sentiment;
pub mod service;

pub use document::DocumentBatch;
pub use language::LanguageDetector;
pub use sentiment::SentimentScorer;
pub use service::{APIService, AzureService, Endpoint};

use crate::http;
use serde::Deserialize;
use thiserror::Error;

/// A document the text analytics API refused to process.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DocumentError {
    id: String,
    message: String,
}

impl DocumentError {
    /// ID of the rejected document.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Why the document was rejected.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result of a text analytics operation.
pub type Result<T> = std::result::Result<T, Error>;

/// A text analytics error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] http::HTTPError),

    /// The API refused to process a document.
    #[error("Document {id} was rejected: {message}")]
    Rejected { id: String, message: String },

    /// The number of results differs from the number of documents.
    #[error("Expected {expected} results but got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A result does not belong to the document at the same position.
    #[error("Result {index} is for document {actual}, expected document {expected}")]
    IdMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    /// The API did not detect any language for a document.
    #[error("No language detected for document {id}")]
    NoDetectedLanguage { id: String },

    /// The API returned a sentiment score outside of [0, 1].
    #[error("Sentiment score {score} for document {id} is out of range")]
    ScoreOutOfRange { id: String, score: f64 },
}

impl Error {
    /// True if this error means the API broke its contract, as opposed to
    /// the API being unreachable.
    ///
    /// A response body that does not have the documented shape counts as
    /// a broken contract.
    pub fn is_contract_violation(&self) -> bool {
        match self {
            Error::Service(http::HTTPError::Deserialization(_)) => true,
            Error::Service(_) => false,
            _ => true,
        }
    }
}

/// Checks that the results identified by `ids` answer `batch` one-to-one
/// and in order.
///
/// `errors` are the documents the API rejected; any rejection fails the
/// check, since a rejected document never gets a result.
pub(crate) fn check_alignment<'a>(
    batch: &DocumentBatch,
    ids: impl ExactSizeIterator<Item = &'a str>,
    errors: &[DocumentError],
) -> Result<()> {
    if let Some(err) = errors.first() {
        return Err(Error::Rejected {
            id: err.id.clone(),
            message: err.message.clone(),
        });
    }

    if ids.len() != batch.len() {
        return Err(Error::LengthMismatch {
            expected: batch.len(),
            actual: ids.len(),
        });
    }

    for (index, (expected, actual)) in batch.ids().zip(ids).enumerate() {
        if expected != actual {
            return Err(Error::IdMismatch {
                index,
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
    }

    Ok(())
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Sentiment analysis.

use crate::analytics::service::{APIService, Endpoint};
use crate::analytics::{DocumentBatch, DocumentError, Error, Result, check_alignment};
use log::debug;
use serde::Deserialize;

/// Response from the sentiment endpoint.
#[derive(Debug, Deserialize)]
pub struct SentimentResponse {
    documents: Vec<SentimentResult>,

    #[serde(default)]
    errors: Vec<DocumentError>,
}

/// The sentiment of a single document.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SentimentResult {
    id: String,
    score: f64,
}

impl SentimentResponse {
    /// Extracts the sentiment of each document in `batch`.
    ///
    /// Returns an error unless the response has exactly one result per
    /// document, in the same order as the batch, and every score is
    /// between 0 and 1.
    pub fn scores_for(self, batch: &DocumentBatch) -> Result<Vec<SentimentResult>> {
        check_alignment(
            batch,
            self.documents.iter().map(|doc| doc.id.as_str()),
            &self.errors,
        )?;

        if let Some(doc) = self
            .documents
            .iter()
            .find(|doc| !(0.0..=1.0).contains(&doc.score))
        {
            return Err(Error::ScoreOutOfRange {
                id: doc.id.clone(),
                score: doc.score,
            });
        }

        Ok(self.documents)
    }
}

impl SentimentResult {
    /// ID of the document.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// How positive the document is, from 0 (negative) to 1 (positive).
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Scores the sentiment of each document in a batch.
#[derive(Debug)]
pub struct SentimentScorer<'a, S: APIService> {
    service: &'a S,
}

impl<'a, S: APIService> SentimentScorer<'a, S> {
    /// Creates a scorer that calls the API through `service`.
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Scores the sentiment of each document in `batch`.
    ///
    /// `batch` should already carry detected languages; the API assumes
    /// English for documents without one. Results are in the same order
    /// as the batch.
    pub async fn score(&self, batch: &DocumentBatch) -> Result<Vec<SentimentResult>> {
        debug!("scoring sentiment of {} documents", batch.len());
        let response: SentimentResponse = self.service.post(Endpoint::Sentiment, batch).await?;
        let results = response.scores_for(batch)?;
        for result in &results {
            debug!("document {} scored {}", result.id(), result.score());
        }
        Ok(results)
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Language detection.

use crate::analytics::service::{APIService, Endpoint};
use crate::analytics::{DocumentBatch, DocumentError, Error, Result, check_alignment};
use log::{debug, info};
use serde::Deserialize;

/// Response from the language detection endpoint.
#[derive(Debug, Deserialize)]
pub struct LanguageResponse {
    documents: Vec<LanguageDocument>,

    #[serde(default)]
    errors: Vec<DocumentError>,
}

/// Languages detected in a single document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDocument {
    id: String,

    // The API sends null instead of an empty list for some documents.
    #[serde(default)]
    detected_languages: Option<Vec<DetectedLanguage>>,
}

/// A language the API believes a document is written in.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DetectedLanguage {
    name: String,

    #[serde(rename = "iso6391Name")]
    iso6391_name: String,

    score: f64,
}

impl LanguageResponse {
    /// Extracts the primary language of each document in `batch`.
    ///
    /// Returns an error unless the response has exactly one result per
    /// document, in the same order as the batch, and each result has at
    /// least one detected language.
    pub fn languages_for(self, batch: &DocumentBatch) -> Result<Vec<String>> {
        check_alignment(
            batch,
            self.documents.iter().map(|doc| doc.id()),
            &self.errors,
        )?;

        self.documents
            .into_iter()
            .map(|doc| {
                doc.primary()
                    .map(|language| language.iso6391_name().to_string())
                    .ok_or_else(|| Error::NoDetectedLanguage {
                        id: doc.id().to_string(),
                    })
            })
            .collect()
    }
}

impl LanguageDocument {
    /// ID of the document.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The most likely language of the document.
    ///
    /// This is the detection with the highest score. When several share
    /// that score, the first one wins.
    pub fn primary(&self) -> Option<&DetectedLanguage> {
        self.detected_languages
            .iter()
            .flatten()
            .reduce(|best, language| if language.score > best.score { language } else { best })
    }
}

impl DetectedLanguage {
    /// English name of the language, such as "English".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO 639-1 code of the language, such as "en".
    pub fn iso6391_name(&self) -> &str {
        &self.iso6391_name
    }

    /// Confidence in the detection, between 0 and 1.
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Detects the language of each document in a batch.
#[derive(Debug)]
pub struct LanguageDetector<'a, S: APIService> {
    service: &'a S,
}

impl<'a, S: APIService> LanguageDetector<'a, S> {
    /// Creates a detector that calls the API through `service`.
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Detects the language of each document in `batch`.
    ///
    /// The returned ISO 639-1 codes are in the same order as the batch.
    pub async fn detect(&self, batch: &DocumentBatch) -> Result<Vec<String>> {
        debug!("detecting languages of {} documents", batch.len());
        let response: LanguageResponse = self.service.post(Endpoint::Languages, batch).await?;
        let languages = response.languages_for(batch)?;
        info!("detected languages: {}", languages.join(", "));
        Ok(languages)
    }
}

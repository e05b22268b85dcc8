// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Environment and configuration utilities.
//!
//! Settings are read from a YAML file, `config.yaml` by default, that looks
//! like this:
//!
//! ```yaml
//! search_tweets_api:
//!   bearer_token: "AAAA..."
//!   handle: jessicagarson
//!   max_results: 100
//! azure:
//!   subscription_key: "0123abcd..."
//!   endpoint: https://week.cognitiveservices.azure.com/
//! ```
//!
//! Only the two credentials are required, and either of them may instead
//! be supplied through the `$TWITTER_BEARER_TOKEN` and
//! `$AZURE_SUBSCRIPTION_KEY` environment variables. When a credential is
//! present in both places, the environment wins.

use crate::auth::{Auth, AuthError};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file read when no other path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Author whose posts are analyzed when no handle is configured.
pub const DEFAULT_HANDLE: &str = "jessicagarson";

/// Number of posts fetched when no count is configured.
pub const DEFAULT_MAX_RESULTS: u32 = 100;

/// Base URL of the Twitter API.
pub const DEFAULT_SEARCH_URL: &str = "https://api.twitter.com";

/// Azure Cognitive Services resource hosting the text analytics API.
pub const DEFAULT_ANALYTICS_ENDPOINT: &str = "https://week.cognitiveservices.azure.com/";

/// Environment variable that overrides `search_tweets_api.bearer_token`.
pub const BEARER_TOKEN_VAR: &str = "TWITTER_BEARER_TOKEN";

/// Environment variable that overrides `azure.subscription_key`.
pub const SUBSCRIPTION_KEY_VAR: &str = "AZURE_SUBSCRIPTION_KEY";

// The recent search endpoint rejects anything outside this range.
const MAX_RESULTS_RANGE: RangeInclusive<u32> = 10..=100;

/// Fully resolved program settings.
#[derive(Debug)]
pub struct Settings {
    search: SearchSettings,
    analytics: AnalyticsSettings,
}

/// Settings for the social-media search API.
#[derive(Debug)]
pub struct SearchSettings {
    bearer_token: Auth,
    handle: String,
    max_results: u32,
    base_url: String,
}

/// Settings for the text analytics API.
#[derive(Debug)]
pub struct AnalyticsSettings {
    subscription_key: Auth,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    search_tweets_api: RawSearchSettings,
    azure: RawAnalyticsSettings,
}

#[derive(Debug, Deserialize)]
struct RawSearchSettings {
    bearer_token: Option<String>,
    handle: Option<String>,
    max_results: Option<u32>,
    base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAnalyticsSettings {
    subscription_key: Option<String>,
    endpoint: Option<String>,
}

impl Settings {
    /// Reads settings from the YAML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading configuration from {}", path.display());
        let yaml = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&yaml)
    }

    /// Parses settings from a YAML document.
    ///
    /// Credentials missing from the document are looked up in the
    /// environment.
    pub fn parse(yaml: &str) -> Result<Self> {
        let raw: RawSettings = serde_yaml::from_str(yaml)?;

        let search = raw.search_tweets_api;
        let bearer_token = credential(
            search.bearer_token,
            BEARER_TOKEN_VAR,
            "search_tweets_api.bearer_token",
        )?;
        let handle = match search.handle {
            Some(handle) => validate_handle(&handle)?,
            None => DEFAULT_HANDLE.to_string(),
        };
        let max_results = validate_max_results(search.max_results.unwrap_or(DEFAULT_MAX_RESULTS))?;
        let search = SearchSettings {
            bearer_token,
            handle,
            max_results,
            base_url: search
                .base_url
                .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
        };

        let azure = raw.azure;
        let subscription_key = credential(
            azure.subscription_key,
            SUBSCRIPTION_KEY_VAR,
            "azure.subscription_key",
        )?;
        let analytics = AnalyticsSettings {
            subscription_key,
            endpoint: azure
                .endpoint
                .unwrap_or_else(|| DEFAULT_ANALYTICS_ENDPOINT.to_string()),
        };

        Ok(Self { search, analytics })
    }

    /// Replaces the configured author handle, if `handle` is given.
    ///
    /// A leading `@` is dropped. Returns an error if nothing is left of
    /// the handle after that.
    pub fn with_handle(mut self, handle: Option<String>) -> Result<Self> {
        if let Some(handle) = handle {
            self.search.handle = validate_handle(&handle)?;
        }
        Ok(self)
    }

    /// Replaces the configured number of posts, if `max_results` is given.
    ///
    /// Returns an error if `max_results` is outside the range accepted by
    /// the search API.
    pub fn with_max_results(mut self, max_results: Option<u32>) -> Result<Self> {
        if let Some(max_results) = max_results {
            self.search.max_results = validate_max_results(max_results)?;
        }
        Ok(self)
    }

    /// Search API settings.
    pub fn search(&self) -> &SearchSettings {
        &self.search
    }

    /// Text analytics API settings.
    pub fn analytics(&self) -> &AnalyticsSettings {
        &self.analytics
    }
}

impl SearchSettings {
    /// Bearer token used to authorize search requests.
    pub fn bearer_token(&self) -> &Auth {
        &self.bearer_token
    }

    /// Handle of the author whose posts are analyzed, without a leading `@`.
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Number of recent posts to fetch.
    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Base URL of the search API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AnalyticsSettings {
    /// Subscription key used to authorize text analytics requests.
    pub fn subscription_key(&self) -> &Auth {
        &self.subscription_key
    }

    /// Base URL of the Cognitive Services resource.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn credential(from_file: Option<String>, envvar: &str, key: &'static str) -> Result<Auth> {
    match Auth::from_env(envvar) {
        Ok(auth) => {
            debug!("using ${envvar} for {key}");
            Ok(auth)
        }
        Err(source) => {
            if let AuthError::Blank(_) = source {
                debug!("ignoring blank ${envvar}");
            }
            Auth::non_blank(from_file).ok_or(Error::MissingCredential { key, source })
        }
    }
}

fn validate_handle(handle: &str) -> Result<String> {
    let handle = handle.trim().trim_start_matches('@');
    if handle.is_empty() || handle.contains(char::is_whitespace) {
        Err(Error::Invalid {
            key: "search_tweets_api.handle",
            reason: String::from("a handle must be a single non-blank word"),
        })
    } else {
        Ok(handle.to_string())
    }
}

fn validate_max_results(max_results: u32) -> Result<u32> {
    if MAX_RESULTS_RANGE.contains(&max_results) {
        Ok(max_results)
    } else {
        Err(Error::Invalid {
            key: "search_tweets_api.max_results",
            reason: format!(
                "{max_results} is not between {} and {}",
                MAX_RESULTS_RANGE.start(),
                MAX_RESULTS_RANGE.end()
            ),
        })
    }
}

/// Result of loading settings.
pub type Result<T> = std::result::Result<T, Error>;

/// A configuration error.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("Could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The configuration file is not valid YAML or is missing a section.
    #[error("Could not parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A credential was found neither in the file nor the environment.
    #[error("Missing credential {key}: {source}")]
    MissingCredential { key: &'static str, source: AuthError },

    /// A setting has an unacceptable value.
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Drives the command-line program.

use crate::analytics::{self, APIService, AzureService, DocumentBatch, LanguageDetector, SentimentScorer};
use crate::conf::{self, DEFAULT_CONFIG_PATH, Settings};
use crate::http::{HTTPClientFactory, HTTPError};
use crate::twitter::{self, PostFetcher, SearchQuery, Service, TwitterService};
use crate::view::{ViewOptions, Viewable};
use crate::week::{self, WeekScore};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::info;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use thiserror::Error;

/// Prints `message` to stderr and exits with `error_code`.
pub fn die(error_code: i32, message: &str) -> ! {
    eprintln!("{}", message);
    process::exit(error_code);
}

/// Program configuration.
#[derive(Debug, Parser)]
#[command(version)]
#[command(about = "Answers the question, \"How positive was your week?\"", long_about = None)]
pub struct Config {
    #[command(flatten)]
    verbosity: Verbosity,

    /// Read settings and credentials from this YAML file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Analyze posts by this handle instead of the configured one
    #[arg(long)]
    handle: Option<String>,

    /// Analyze this many recent posts (10 to 100)
    #[arg(short = 'n', long)]
    max_results: Option<u32>,
}

impl Config {
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Path to the YAML settings file.
    pub fn config_path(&self) -> &PathBuf {
        &self.config
    }

    /// Reads the settings file and applies command-line overrides.
    pub fn settings(&self) -> Result<Settings, Error> {
        let settings = Settings::load(&self.config)?
            .with_handle(self.handle.clone())?
            .with_max_results(self.max_results)?;
        Ok(settings)
    }
}

/// Runs the analysis pipeline: fetch posts, detect their languages, score
/// their sentiment, and average the scores.
#[derive(Debug)]
pub struct Runner<T: Service, A: APIService> {
    query: SearchQuery,
    search: T,
    analytics: A,
}

impl Runner<TwitterService, AzureService> {
    /// Create a new program runner using the given `config`.
    ///
    /// Returns an error if the settings cannot be loaded.
    pub fn new(config: &Config) -> Result<Self, Error> {
        let settings = config.settings()?;
        let factory = HTTPClientFactory::default();

        let search_settings = settings.search();
        let query = SearchQuery::new(search_settings.handle(), search_settings.max_results());
        let search = TwitterService::new(
            &factory,
            search_settings.base_url(),
            search_settings.bearer_token().clone(),
        )?;

        let analytics_settings = settings.analytics();
        let analytics = AzureService::new(
            &factory,
            analytics_settings.endpoint(),
            analytics_settings.subscription_key().clone(),
        )?;

        Ok(Self::with_services(query, search, analytics))
    }
}

impl<T: Service, A: APIService> Runner<T, A> {
    /// Create a program runner that answers `query` using the given
    /// search and text analytics services.
    pub fn with_services(query: SearchQuery, search: T, analytics: A) -> Self {
        Self {
            query,
            search,
            analytics,
        }
    }

    /// The search the runner performs.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Runs the pipeline and returns the week's score.
    ///
    /// Requests are made one at a time, in order. If the search turns up
    /// no posts, the text analytics API is never contacted.
    pub async fn run(&self) -> Result<WeekScore, Error> {
        let posts = PostFetcher::new(&self.search).fetch(&self.query).await?;
        if posts.is_empty() {
            return Err(Error::NoPosts(self.query.handle().to_string()));
        }

        let batch = DocumentBatch::from(posts);
        let languages = LanguageDetector::new(&self.analytics).detect(&batch).await?;
        let batch = batch.with_languages(languages)?;

        let results = SentimentScorer::new(&self.analytics).score(&batch).await?;
        let week = WeekScore::from_scores(results.iter().map(|result| result.score()))?;
        info!("week score for {} is {week}", self.query.handle());
        Ok(week)
    }
}

/// Runs the command-line program, printing the week's score and verdict,
/// or an error message and exiting on failure.
pub async fn run(config: Config) {
    let week = match Runner::new(&config) {
        Ok(runner) => runner.run().await,
        Err(err) => Err(err),
    };

    match week {
        Ok(week) => {
            let opts = ViewOptions::default().color(io::stdout().is_terminal());
            println!("{}", week.view(&opts));
        }
        Err(err) => die(err.exit_code(), &err.to_string()),
    }
}

/// A program error.
#[derive(Debug, Error)]
pub enum Error {
    /// The settings could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] conf::Error),

    /// An HTTP client could not be created.
    #[error("HTTP error: {0}")]
    Http(#[from] HTTPError),

    /// Posts could not be fetched.
    #[error("Could not fetch posts: {0}")]
    Fetch(#[from] twitter::Error),

    /// Posts could not be analyzed.
    #[error("Could not analyze posts: {0}")]
    Analytics(#[from] analytics::Error),

    /// The author has not posted anything recently.
    #[error("{0} has no recent posts.")]
    NoPosts(String),

    /// There was nothing to score.
    #[error("Could not score week: {0}")]
    Week(#[from] week::Error),
}

impl Error {
    /// Exit status for the program when it fails with this error.
    ///
    /// | Status | Meaning                          |
    /// |--------|----------------------------------|
    /// | 2      | Configuration error              |
    /// | 3      | Network or HTTP error            |
    /// | 4      | An API broke its contract        |
    /// | 5      | Nothing to score                 |
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 2,
            Error::Http(_) => 3,
            Error::Fetch(twitter::Error::Service(_)) => 3,
            Error::Fetch(twitter::Error::Parse(_)) => 4,
            Error::Analytics(err) if err.is_contract_violation() => 4,
            Error::Analytics(_) => 3,
            Error::NoPosts(_) => 5,
            Error::Week(_) => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    mod runner {
        use crate::cli::{Error, Runner};
        use crate::test_utils::{TestAPIService, TestService, do_logging};
        use crate::twitter::SearchQuery;
        use crate::week::Verdict;

        fn runner<'a>(
            search: &'a str,
            analytics: &'a str,
        ) -> Runner<TestService<'a>, TestAPIService<'a>> {
            do_logging();
            Runner::with_services(
                SearchQuery::new("jessicagarson", 100),
                TestService::new(search),
                TestAPIService::new(analytics),
            )
        }

        #[tokio::test]
        async fn it_scores_a_week() {
            let week = runner("jessicagarson", "jessicagarson").run().await.unwrap();
            assert_eq!(week.value(), 0.6);
            assert_eq!(week.verdict(), Verdict::Neutral);
        }

        #[tokio::test]
        async fn it_fails_when_there_are_no_posts() {
            let result = runner("empty", "jessicagarson").run().await;
            let err = result.unwrap_err();
            assert!(matches!(err, Error::NoPosts(_)), "{err:?}");
            assert_eq!(err.to_string(), "jessicagarson has no recent posts.");
            assert_eq!(err.exit_code(), 5);
        }

        #[tokio::test]
        async fn it_fails_on_a_contract_violation() {
            let result = runner("jessicagarson", "reordered").run().await;
            let err = result.unwrap_err();
            assert!(matches!(err, Error::Analytics(_)), "{err:?}");
            assert_eq!(err.exit_code(), 4);
        }

        #[tokio::test]
        async fn it_fails_as_a_contract_violation_on_null_detections() {
            let err = runner("jessicagarson", "null").run().await.unwrap_err();
            assert!(matches!(err, Error::Analytics(_)), "{err:?}");
            assert_eq!(err.exit_code(), 4);
        }

        #[tokio::test]
        async fn it_fails_as_a_contract_violation_on_a_malformed_analysis() {
            let err = runner("jessicagarson", "malformed").run().await.unwrap_err();
            assert_eq!(err.exit_code(), 4, "{err:?}");
        }

        #[tokio::test]
        async fn it_fails_on_an_unparseable_search() {
            let result = runner("garbage", "jessicagarson").run().await;
            let err = result.unwrap_err();
            assert!(matches!(err, Error::Fetch(_)), "{err:?}");
            assert_eq!(err.exit_code(), 4);
        }

        #[test]
        fn it_exposes_its_query() {
            let runner = runner("jessicagarson", "jessicagarson");
            assert_eq!(runner.query().handle(), "jessicagarson");
            assert_eq!(runner.query().max_results(), 100);
        }
    }

    mod config {
        use crate::cli::{Config, Error};
        use clap::Parser;

        #[test]
        fn it_reads_config_yaml_by_default() {
            let config = Config::parse_from(["howpositive"]);
            assert_eq!(config.config_path().to_str(), Some("config.yaml"));
        }

        #[test]
        fn it_accepts_a_config_path() {
            let config = Config::parse_from(["howpositive", "-c", "/etc/howpositive.yaml"]);
            assert_eq!(
                config.config_path().to_str(),
                Some("/etc/howpositive.yaml")
            );
        }

        #[test]
        fn it_fails_with_a_configuration_exit_code_without_a_config_file() {
            let config =
                Config::parse_from(["howpositive", "--config", "tests/data/nope.yaml"]);
            let err = config.settings().unwrap_err();
            assert!(matches!(err, Error::Config(_)), "{err:?}");
            assert_eq!(err.exit_code(), 2);
        }

        #[test]
        fn it_rejects_non_numeric_result_counts() {
            let result = Config::try_parse_from(["howpositive", "-n", "lots"]);
            assert!(result.is_err());
        }
    }

    mod error {
        use crate::analytics;
        use crate::cli::Error;
        use crate::http::HTTPError;
        use crate::twitter;
        use crate::week;

        #[test]
        fn it_maps_errors_to_exit_codes() {
            let test_cases = vec![
                (Error::Http(HTTPError::MissingContentType), 3),
                (
                    Error::Fetch(twitter::Error::Service(HTTPError::MissingContentType)),
                    3,
                ),
                (
                    Error::Analytics(analytics::Error::Service(HTTPError::MissingContentType)),
                    3,
                ),
                (
                    Error::Analytics(analytics::Error::NoDetectedLanguage {
                        id: String::from("1"),
                    }),
                    4,
                ),
                (
                    Error::Analytics(analytics::Error::Service(HTTPError::Deserialization(
                        serde_json::from_str::<Vec<String>>("null").unwrap_err(),
                    ))),
                    4,
                ),
                (Error::NoPosts(String::from("mipadi")), 5),
                (Error::Week(week::Error::NoScores), 5),
            ];

            for (err, code) in test_cases {
                assert_eq!(err.exit_code(), code, "{err:?}");
            }
        }
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! howpositive is a command-line tool that answers the question, "How
//! positive was your week?" It finds the last 100 posts an author made on
//! Twitter, asks Azure Text Analytics what language each post is in and
//! how positive it sounds, and averages the results into a verdict.
//!
//! # Examples
//!
//! Score the week of the handle in `config.yaml`:
//!
//! ```bash
//! howpositive
//! ```
//!
//! Which prints the week's score followed by a verdict:
//!
//! ```text
//! 0.6
//! You had a neutral week
//! ```
//!
//! A week scoring 0.75 or better is positive, and one scoring below 0.45
//! is negative. Anything in between is neutral.
//!
//! Score someone else's last 50 posts, using a different settings file:
//!
//! ```bash
//! howpositive --config ~/.howpositive.yaml --handle mipadi -n 50
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! howpositive --help
//! ```
//!
//! # API Setup
//!
//! howpositive needs credentials for two services:
//!
//! 1. A bearer token for the [Twitter API] with access to the v2 recent
//!    search endpoint.
//! 2. A subscription key for an [Azure Text Analytics] resource.
//!
//! Store both in `config.yaml` in the directory you run howpositive from:
//!
//! ```yaml
//! search_tweets_api:
//!   bearer_token: "copied bearer token"
//! azure:
//!   subscription_key: "copied subscription key"
//! ```
//!
//! or in the `$TWITTER_BEARER_TOKEN` and `$AZURE_SUBSCRIPTION_KEY`
//! environment variables. See the [`conf`] module for every available
//! setting.
//!
//! **You are solely responsible for the cost of your use of these APIs!**
//!
//! # Exit Status
//!
//! howpositive exits with 0 on success, 2 for configuration errors, 3 for
//! network errors, 4 if an API returned something that does not line up
//! with what was asked, and 5 if there was nothing to score.
//!
//! # License
//!
//! howpositive is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0
//! [Azure Text Analytics]: https://learn.microsoft.com/en-us/azure/ai-services/language-service/
//! [Twitter API]: https://developer.twitter.com/en/docs/twitter-api

pub mod analytics;
pub mod auth;
pub mod cli;
pub mod conf;
pub mod http;
pub mod post;
pub mod text;
pub mod twitter;
pub mod view;
pub mod week;

#[cfg(test)]
mod test_utils;

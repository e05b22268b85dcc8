// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Authentication for the search and text analytics APIs.

use std::{env, error, fmt};

/// Manages a secret used to authenticate with a remote API.
///
/// For the Twitter API this is a bearer token; for Azure Text Analytics
/// it is a subscription key. The secret is never included in the
/// [`Debug`] representation, so an `Auth` can safely end up in logs.
#[derive(Clone)]
pub struct Auth {
    api_key: String,
}

impl Auth {
    /// Creates a new `Auth` structure using the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self { api_key }
    }

    /// Retrieves an API key from the environment variable `envvar`.
    ///
    /// A variable that is set but blank does not count as a key.
    pub fn from_env(envvar: impl Into<String>) -> AuthResult {
        let envvar = envvar.into();
        match env::var(&envvar) {
            Ok(api_key) if api_key.trim().is_empty() => Err(AuthError::Blank(envvar)),
            Ok(api_key) => Ok(Self { api_key }),
            Err(env::VarError::NotPresent) => Err(AuthError::Missing(envvar)),
            Err(env::VarError::NotUnicode(_)) => Err(AuthError::NotUnicode(envvar)),
        }
    }

    /// Uses `api_key` if it is present and not blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use howpositive::auth::Auth;
    /// assert!(Auth::non_blank(Some("ThisIsMyApiKey")).is_some());
    /// assert!(Auth::non_blank(Some("  ")).is_none());
    /// assert!(Auth::non_blank(None::<String>).is_none());
    /// ```
    pub fn non_blank(api_key: Option<impl Into<String>>) -> Option<Self> {
        api_key
            .map(Into::<String>::into)
            .filter(|api_key| !api_key.trim().is_empty())
            .map(Self::new)
    }

    /// The actual API key.
    ///
    /// # Examples
    ///
    /// ```
    /// use howpositive::auth::Auth;
    /// let auth = Auth::new("ThisIsMyApiKey");
    /// assert_eq!(auth.api_key(), "ThisIsMyApiKey");
    /// ```
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth").field("api_key", &"<redacted>").finish()
    }
}

/// Standard result type for [`Auth`] creation.
pub type AuthResult = Result<Auth, AuthError>;

/// Indicates an error when creating an authentication key.
#[derive(Debug, PartialEq)]
pub enum AuthError {
    /// The environment variable is not set.
    Missing(String),

    /// The environment variable is set, but only to whitespace.
    Blank(String),

    /// The environment variable does not hold valid Unicode.
    NotUnicode(String),
}

impl AuthError {
    /// Name of the environment variable that was consulted.
    pub fn envvar(&self) -> &str {
        match self {
            AuthError::Missing(var) | AuthError::Blank(var) | AuthError::NotUnicode(var) => var,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Missing(var) => write!(f, "${var} is not set"),
            AuthError::Blank(var) => write!(f, "${var} is blank"),
            AuthError::NotUnicode(var) => write!(f, "${var} is not valid Unicode"),
        }
    }
}

impl error::Error for AuthError {}

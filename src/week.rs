// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Turns a week's worth of sentiment scores into a verdict.

use log::debug;
use std::fmt;
use thiserror::Error;

/// The mean sentiment of every post analyzed in a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeekScore(f64);

impl WeekScore {
    /// Averages the sentiment `scores` of a week's posts.
    ///
    /// Returns an error if there is nothing to average.
    ///
    /// # Examples
    ///
    /// ```
    /// use howpositive::week::{Verdict, WeekScore};
    /// let week = WeekScore::from_scores([0.9, 0.6, 0.3]).unwrap();
    /// assert_eq!(week.value(), 0.6);
    /// assert_eq!(week.verdict(), Verdict::Neutral);
    /// ```
    pub fn from_scores(scores: impl IntoIterator<Item = f64>) -> Result<Self, Error> {
        let (count, total) = scores
            .into_iter()
            .fold((0usize, 0.0), |(count, total), score| (count + 1, total + score));
        if count == 0 {
            return Err(Error::NoScores);
        }
        let mean = total / count as f64;
        debug!("mean of {count} scores is {mean}");
        Ok(Self(mean))
    }

    /// The mean score, between 0 (very negative) and 1 (very positive).
    pub fn value(&self) -> f64 {
        self.0
    }

    /// How the week went, based on its score.
    pub fn verdict(&self) -> Verdict {
        Verdict::classify(self.0)
    }
}

impl fmt::Display for WeekScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How positive a week was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// A week scoring at least [`Verdict::POSITIVE`].
    Positive,

    /// A week scoring at least [`Verdict::NEUTRAL`] but below
    /// [`Verdict::POSITIVE`].
    Neutral,

    /// Anything below [`Verdict::NEUTRAL`].
    Negative,
}

impl Verdict {
    /// Lowest score considered a positive week.
    pub const POSITIVE: f64 = 0.75;

    /// Lowest score considered a neutral week.
    pub const NEUTRAL: f64 = 0.45;

    /// Classifies a sentiment `score`.
    ///
    /// Thresholds are inclusive at their lower bound.
    pub fn classify(score: f64) -> Self {
        if score >= Self::POSITIVE {
            Verdict::Positive
        } else if score >= Self::NEUTRAL {
            Verdict::Neutral
        } else {
            Verdict::Negative
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Positive => write!(f, "You had a positive week"),
            Verdict::Neutral => write!(f, "You had a neutral week"),
            Verdict::Negative => write!(f, "You had a negative week, I hope it gets better"),
        }
    }
}

/// An aggregation error.
#[derive(Debug, Error)]
pub enum Error {
    /// There were no sentiment scores to average.
    #[error("No sentiment scores to average")]
    NoScores,
}

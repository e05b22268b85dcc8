// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2025 Michael Dippery <michael@monkey-robot.com>

//! Draws viewable objects into a terminal window.

use crate::week::{Verdict, WeekScore};
use colored::Colorize;
use indoc::formatdoc;

/// View renderer options.
#[derive(Debug, Default)]
pub struct ViewOptions {
    color: bool,
}

impl ViewOptions {
    /// Sets the "color" option to true or false.
    ///
    /// # Examples
    ///
    /// ```
    /// use howpositive::view::ViewOptions;
    /// let opts = ViewOptions::default().color(true);
    /// ```
    pub fn color(self, color: bool) -> Self {
        Self { color }
    }
}

/// Marks an item that can be converted into a string for display on a terminal.
pub trait Viewable {
    /// Converts the item into a string for display on a terminal.
    fn view(&self, opts: &ViewOptions) -> String;
}

impl Viewable for Verdict {
    fn view(&self, opts: &ViewOptions) -> String {
        let text = self.to_string();
        if !opts.color {
            return text;
        }
        match self {
            Verdict::Positive => text.green().to_string(),
            Verdict::Neutral => text.yellow().to_string(),
            Verdict::Negative => text.red().to_string(),
        }
    }
}

impl Viewable for WeekScore {
    fn view(&self, opts: &ViewOptions) -> String {
        formatdoc! {"
            {}
            {}",
            self,
            self.verdict().view(opts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_shows_the_score_and_verdict() {
        let week = WeekScore::from_scores([0.9, 0.6, 0.3]).unwrap();
        assert_eq!(
            week.view(&ViewOptions::default()),
            "0.6\nYou had a neutral week"
        );
    }

    #[test]
    fn it_shows_a_positive_week() {
        let week = WeekScore::from_scores([0.75]).unwrap();
        assert_eq!(
            week.view(&ViewOptions::default()),
            "0.75\nYou had a positive week"
        );
    }

    #[test]
    fn it_shows_a_negative_week() {
        let week = WeekScore::from_scores([0.1, 0.2]).unwrap();
        let view = week.view(&ViewOptions::default());
        assert!(
            view.ends_with("\nYou had a negative week, I hope it gets better"),
            "{view}"
        );
    }

    #[test]
    fn it_colors_verdicts_on_request() {
        colored::control::set_override(true);
        let view = Verdict::Positive.view(&ViewOptions::default().color(true));
        let expected = "You had a positive week".green().to_string();
        colored::control::unset_override();
        assert_eq!(view, expected);
        assert!(view.starts_with("\u{1b}["), "{view:?}");
    }

    #[test]
    fn it_does_not_color_verdicts_by_default() {
        assert_eq!(
            Verdict::Negative.view(&ViewOptions::default()),
            "You had a negative week, I hope it gets better"
        );
    }
}

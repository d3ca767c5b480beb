use std::borrow::Cow;

use crate::{Pattern, ReplaceOptions};

/// Ordered list of pattern and replacement pairs sharing the same options
///
/// Reusable form of [`replace`][crate::replace]: regexes are compiled once on creation. Rules are
/// applied one after another, each to the output of previous one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ruleset {
    pub(crate) rules: Vec<(Pattern, String)>,
    pub(crate) options: ReplaceOptions,
}

impl Ruleset {
    pub fn new(rules: Vec<(Pattern, String)>, options: ReplaceOptions) -> Self {
        Self { rules, options }
    }

    pub fn rules(&self) -> &[(Pattern, String)] {
        &self.rules
    }

    pub fn options(&self) -> ReplaceOptions {
        self.options
    }

    /// Returns copy with given options
    #[must_use]
    pub fn with_options(mut self, options: ReplaceOptions) -> Self {
        self.options = options;
        self
    }

    /// Walks rules from top to bottom and applies them
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        log::trace!("applying {} rules", self.rules.len());

        self.rules
            .iter()
            .fold(Cow::Borrowed(text), |text, (pattern, replacement)| {
                pattern.apply_after(text, &mut replacement.as_str(), self.options)
            })
    }
}

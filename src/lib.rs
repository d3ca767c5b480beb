//! Sequential multi-pattern string replacements.
//!
//! # Table of contents
//! * [Description](#description)
//! * [Patterns](#patterns)
//! * [Placeholders](#placeholders)
//! * [Ruleset](#ruleset)
//! * [CLI tool](#cli-tool)
//! * [Feature flags](#feature-flags)
//!
//! # Description
//!
//! Replaces every occurrence (or only the first N) of one or more search patterns in a string.
//! Patterns are applied one after another: second pattern searches output of the first one and so
//! on. Replacement is either static text, one per pattern, or result of a callback invoked for
//! every match.
//!
//! ```rust
//! use multireplace::{replace, ReplaceOptions};
//!
//! let text = "2222 is four twos";
//!
//! assert_eq!(
//!     replace(["2", "twos"], ["1", "ones"], text, ReplaceOptions::default()),
//!     "1111 is four ones"
//! );
//! assert_eq!(
//!     replace(["2", "twos"], ["1", "ones"], text, ReplaceOptions::new().count(1)),
//!     "1222 is four ones"
//! );
//! ```
//!
//! # Patterns
//!
//! [`Pattern`] is either a literal string or a regex. Literal patterns are searched case
//! insensitively unless `case_sensitive` is set in [`ReplaceOptions`]. Regexes are always
//! multi-line and only ignore case if created with `case_insensitive` flag.
//!
//! When there are fewer replacements than patterns, the last replacement is used for the rest.
//!
//! # Placeholders
//!
//! Replacement text (static or returned from callback) may reference captured groups with
//! `$:N`, `$:0` being the entire match. References to groups that do not exist are left as is:
//!
//! ```rust
//! use multireplace::{replace, Pattern, ReplaceOptions};
//!
//! let amount = Pattern::regex(r"(\d+)\.(\d+)", false).unwrap();
//!
//! assert_eq!(
//!     replace(amount, "$$:2.$:3", "33.22 is the amount", ReplaceOptions::default()),
//!     "$22.$:3 is the amount"
//! );
//! ```
//!
//! # Ruleset
//!
//! [`Ruleset`] is a reusable list of pattern and replacement pairs. With `deserialize` feature it
//! can be loaded from any serde format, see `rulesets` folder for examples.
//!
//! # CLI tool
//!
//! You can run CLI tool by enabling `cli` feature: `cargo run --features=cli -- --help`.
//!
//! `echo 'my name is Harrison' | cargo run --features=cli -- -r rulesets/names.ron`
//!
//! # Feature flags
//!
//! Name | Description | Default?
//! ---|---|---
//! `deserialize` | enables deserialization for [`Ruleset`] | yes
//! `cli` | required to run CLI tool | no

mod count;
mod r#match;
mod normalize;
mod options;
mod pattern;
mod placeholder;
mod replacer;
mod ruleset;
mod scan;

#[cfg(feature = "deserialize")]
mod deserialize;

use std::borrow::Cow;

pub use count::ReplaceCount;
pub use r#match::Match;
pub use normalize::{resolve_replacements, Patterns, Replacements};
pub use options::ReplaceOptions;
pub use pattern::{resolve_regex_pattern, CreationError, Pattern, PatternRegex};
pub use placeholder::resolve_capturing_groups;
pub use replacer::Replacer;
pub use ruleset::Ruleset;

/// Replaces occurrences of each pattern with corresponding replacement
///
/// `patterns` and `replacements` accept either single value or a collection. Missing replacements
/// are filled with the last one. Replacement may contain `$:N` group placeholders.
pub fn replace<'a>(
    patterns: impl Into<Patterns>,
    replacements: impl Into<Replacements>,
    text: &'a str,
    options: ReplaceOptions,
) -> Cow<'a, str> {
    let Patterns(patterns) = patterns.into();
    let Replacements(replacements) = replacements.into();

    let replacements = resolve_replacements(patterns.len(), replacements);

    Ruleset::new(patterns.into_iter().zip(replacements).collect(), options).apply(text)
}

/// Replaces occurrences of each pattern with output of `callback`
///
/// Callback receives captured groups (group 0 is entire match, literal patterns only have group 0)
/// and 1-based index of occurrence for current pattern. Returned text may contain `$:N` group
/// placeholders.
pub fn replace_callback<'a, F, T>(
    patterns: impl Into<Patterns>,
    mut callback: F,
    text: &'a str,
    options: ReplaceOptions,
) -> Cow<'a, str>
where
    F: FnMut(&[&str], usize) -> T,
    T: AsRef<str>,
{
    let Patterns(patterns) = patterns.into();

    patterns.iter().fold(Cow::Borrowed(text), |text, pattern| {
        pattern.apply_after(text, &mut callback, options)
    })
}

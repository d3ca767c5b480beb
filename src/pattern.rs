use std::{borrow::Cow, error::Error, fmt};

use regex_automata::{
    meta::{BuildError, Regex},
    util::syntax,
};

use crate::{count::ReplaceCount, replacer::Replacer, scan, ReplaceOptions};

/// Search criteria: either a literal string or a regex
#[derive(Clone)]
pub enum Pattern {
    Literal(String),
    Regex(PatternRegex),
}

impl Pattern {
    /// Creates literal pattern
    pub fn literal(s: impl Into<String>) -> Self {
        Self::Literal(s.into())
    }

    /// Compiles regex pattern
    ///
    /// Regex is always multi-line. It matches case insensitively only if `case_insensitive` is set,
    /// regardless of case sensitivity requested when replacing.
    #[allow(clippy::result_large_err)]
    pub fn regex(source: &str, case_insensitive: bool) -> Result<Self, CreationError> {
        Ok(Self::Regex(PatternRegex::new(source, case_insensitive)?))
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex(_))
    }

    /// Pattern text: literal string or regex source
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) => s,
            Self::Regex(regex) => &regex.source,
        }
    }

    /// Replaces occurrences of this pattern in `text` with output of `replacer`
    ///
    /// `case_sensitive` only affects literal patterns.
    pub fn apply<'a, R: Replacer + ?Sized>(
        &self,
        text: &'a str,
        replacer: &mut R,
        case_sensitive: bool,
        count: ReplaceCount,
    ) -> Cow<'a, str> {
        log::trace!("applying {self:?} with count {}", count.code());

        match self {
            Self::Regex(regex) => scan::run_regex(&regex.compiled, replacer, text, count),
            Self::Literal(s) => scan::run_literal(s, replacer, text, case_sensitive, count),
        }
    }

    /// Applies pattern to output of previous pattern, keeps it borrowed if nothing was replaced
    pub(crate) fn apply_after<'a, R: Replacer + ?Sized>(
        &self,
        text: Cow<'a, str>,
        replacer: &mut R,
        options: ReplaceOptions,
    ) -> Cow<'a, str> {
        let replaced = match self.apply(&text, replacer, options.case_sensitive, options.count) {
            Cow::Owned(replaced) => Some(replaced),
            Cow::Borrowed(_) => None,
        };

        replaced.map_or(text, Cow::Owned)
    }
}

// skips pages of debug output of compiled regex
impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Regex(regex) => f.debug_tuple("Regex").field(regex).finish(),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(left), Self::Literal(right)) => left == right,
            (Self::Regex(left), Self::Regex(right)) => left == right,
            _ => false,
        }
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self::Literal(s.to_owned())
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Self::Literal(s)
    }
}

impl From<PatternRegex> for Pattern {
    fn from(regex: PatternRegex) -> Self {
        Self::Regex(regex)
    }
}

/// Regex compiled with normalized modifiers
#[derive(Clone)]
pub struct PatternRegex {
    source: String,
    case_insensitive: bool,
    compiled: Regex,
}

impl PatternRegex {
    #[allow(clippy::result_large_err)]
    pub fn new(source: &str, case_insensitive: bool) -> Result<Self, CreationError> {
        let compiled = resolve_regex_pattern(source, case_insensitive)?;

        Ok(Self {
            source: source.to_owned(),
            case_insensitive,
            compiled,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }
}

#[allow(clippy::missing_fields_in_debug)]
impl fmt::Debug for PatternRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRegex")
            .field("source", &self.source)
            .field("case_insensitive", &self.case_insensitive)
            .finish()
    }
}

impl PartialEq for PatternRegex {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.case_insensitive == other.case_insensitive
    }
}

/// Builds regex with multi-line mode forced and case insensitivity preserved
#[allow(clippy::result_large_err)]
pub fn resolve_regex_pattern(source: &str, case_insensitive: bool) -> Result<Regex, CreationError> {
    log::debug!("compiling regex {source:?}, case insensitive: {case_insensitive}");

    Regex::builder()
        .syntax(
            syntax::Config::new()
                .multi_line(true)
                .case_insensitive(case_insensitive),
        )
        .build(source)
        .map_err(CreationError::BadRegex)
}

#[derive(Debug)]
pub enum CreationError {
    BadRegex(BuildError),
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreationError::BadRegex(err) => {
                let mut msg = err.to_string();
                if let Some(syntax_msg) = err.syntax_error() {
                    msg = format!("{syntax_msg}");
                }

                write!(f, "regex compilation failed: {msg}")
            }
        }
    }
}

impl Error for CreationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CreationError::BadRegex(err) => Some(err),
        }
    }
}

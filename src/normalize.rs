use crate::Pattern;

/// Ordered sequence of patterns, built from a single pattern or a collection of them
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Patterns(pub(crate) Vec<Pattern>);

impl Patterns {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.0.iter()
    }
}

impl From<Pattern> for Patterns {
    fn from(pattern: Pattern) -> Self {
        Self(vec![pattern])
    }
}

impl From<&str> for Patterns {
    fn from(s: &str) -> Self {
        Self(vec![s.into()])
    }
}

impl From<String> for Patterns {
    fn from(s: String) -> Self {
        Self(vec![s.into()])
    }
}

impl<P: Into<Pattern>> From<Vec<P>> for Patterns {
    fn from(patterns: Vec<P>) -> Self {
        Self(patterns.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<Pattern>, const N: usize> From<[P; N]> for Patterns {
    fn from(patterns: [P; N]) -> Self {
        Self(patterns.into_iter().map(Into::into).collect())
    }
}

impl<P: Into<Pattern>> FromIterator<P> for Patterns {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Ordered sequence of replacement strings, built from a single string or a collection of them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Replacements(pub(crate) Vec<String>);

impl From<&str> for Replacements {
    fn from(s: &str) -> Self {
        Self(vec![s.to_owned()])
    }
}

impl From<String> for Replacements {
    fn from(s: String) -> Self {
        Self(vec![s])
    }
}

impl<S: Into<String>> From<Vec<S>> for Replacements {
    fn from(replacements: Vec<S>) -> Self {
        Self(replacements.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Replacements {
    fn from(replacements: [S; N]) -> Self {
        Self(replacements.into_iter().map(Into::into).collect())
    }
}

/// Pads `replacements` with copies of the last one until there is one for each pattern
///
/// Longer list is returned unchanged, extra replacements are never used. If there are no
/// replacements at all, patterns are replaced with empty string.
pub fn resolve_replacements(pattern_count: usize, mut replacements: Vec<String>) -> Vec<String> {
    if let Some(missing) = pattern_count.checked_sub(replacements.len()) {
        let fill_with = replacements.last().cloned().unwrap_or_default();

        replacements.extend(std::iter::repeat(fill_with).take(missing));
    }

    replacements
}

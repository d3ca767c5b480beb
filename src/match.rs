use std::ops::Range;

/// Single located occurrence of a pattern
///
/// For regex patterns `groups` are all capturing groups of the regex, group 0 being the entire
/// match. Groups that did not participate in the match are empty strings. For literal patterns
/// there is exactly one group: the search string itself, as it was given (not as it was found in
/// the text when searching case insensitively).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'a> {
    pub(crate) groups: Vec<&'a str>,
    pub(crate) range: Range<usize>,
    pub(crate) occurrence: usize,
}

impl<'a> Match<'a> {
    pub fn new(groups: Vec<&'a str>, range: Range<usize>, occurrence: usize) -> Self {
        Self {
            groups,
            range,
            occurrence,
        }
    }

    /// Returns byte range of occurrence in scanned text
    #[inline]
    pub fn get_range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Returns group 0
    #[inline]
    pub fn get_match(&self) -> &'a str {
        self.groups.first().copied().unwrap_or_default()
    }

    pub fn get_groups(&self) -> &[&'a str] {
        &self.groups
    }

    /// 1-based index of occurrence among replaced occurrences of the same pattern
    pub fn occurrence(&self) -> usize {
        self.occurrence
    }
}

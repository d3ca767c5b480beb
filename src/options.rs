use crate::ReplaceCount;

/// Alters matching of all patterns in one replacement call
///
/// Defaults to case insensitive search with unlimited replacements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOptions {
    /// Only applies to literal patterns. Regex patterns are case insensitive only if they were
    /// created that way
    pub case_sensitive: bool,
    /// Per pattern replacement limit
    pub count: ReplaceCount,
}

impl ReplaceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    #[must_use]
    pub fn count(mut self, count: impl Into<ReplaceCount>) -> Self {
        self.count = count.into();
        self
    }
}

use std::borrow::Cow;

use crate::Match;

/// Receives match and provides replacement
///
/// Output of [`generate`][Self::generate] is resolved for `$:N` placeholders afterwards. Static
/// strings are replacers that ignore match. Callbacks with `(groups, occurrence)` arguments
/// implement this trait too:
///
/// ```rust
/// use multireplace::{replace_callback, ReplaceOptions};
///
/// let replaced = replace_callback(
///     "Obi",
///     |groups: &[&str], occurrence: usize| format!("{}#{occurrence}", groups[0]),
///     "Obi and Obi",
///     ReplaceOptions::default(),
/// );
///
/// assert_eq!(replaced, "Obi#1 and Obi#2");
/// ```
pub trait Replacer {
    fn generate(&mut self, m: &Match<'_>) -> Cow<'_, str>;
}

impl Replacer for &str {
    fn generate(&mut self, _: &Match<'_>) -> Cow<'_, str> {
        Cow::Borrowed(*self)
    }
}

impl Replacer for String {
    fn generate(&mut self, _: &Match<'_>) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<F, T> Replacer for F
where
    F: FnMut(&[&str], usize) -> T,
    T: AsRef<str>,
{
    fn generate(&mut self, m: &Match<'_>) -> Cow<'_, str> {
        Cow::Owned((*self)(m.get_groups(), m.occurrence()).as_ref().to_owned())
    }
}

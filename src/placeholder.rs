use std::{borrow::Cow, sync::OnceLock};

use regex_automata::meta::Regex;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        // ascii digits only, unicode \d would accept digits that do not parse into index
        Regex::new(r"\$:([0-9]+)").expect("placeholder regex is valid")
    })
}

/// Substitutes `$:N` placeholders in `text` with captured groups
///
/// Group 0 is the entire match. Placeholders referencing missing groups are kept as is. At most
/// `groups.len()` placeholders are looked at, everything after that is copied verbatim.
pub fn resolve_capturing_groups<'t>(text: &'t str, groups: &[&str]) -> Cow<'t, str> {
    let regex = placeholder_regex();

    let mut caps_iter = regex.captures_iter(text).take(groups.len()).peekable();

    if caps_iter.peek().is_none() {
        return Cow::Borrowed(text);
    }

    let mut last_replacement = 0;
    let mut output = String::with_capacity(text.len());

    for caps in caps_iter {
        // SAFETY: these captures come from matches. The only way this can fail is if they were
        //         created manually with Captures::empty()
        let token = unsafe { caps.get_match().unwrap_unchecked() }.range();

        let group = caps
            .get_group(1)
            .and_then(|span| text[span.range()].parse::<usize>().ok())
            .and_then(|index| groups.get(index).copied());

        output.push_str(&text[last_replacement..token.start]);
        output.push_str(group.unwrap_or(&text[token.clone()]));

        last_replacement = token.end;
    }

    output.push_str(&text[last_replacement..]);

    Cow::Owned(output)
}

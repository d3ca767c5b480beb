use std::{borrow::Cow, ops::Range};

use regex_automata::{meta::Regex, Input};

use crate::{
    count::ReplaceCount, placeholder::resolve_capturing_groups, replacer::Replacer, Match,
};

/// Replaces occurrences of literal `needle`, searching from left to right
///
/// Empty needle never matches.
pub(crate) fn run_literal<'a, R: Replacer + ?Sized>(
    needle: &str,
    replacer: &mut R,
    text: &'a str,
    case_sensitive: bool,
    count: ReplaceCount,
) -> Cow<'a, str> {
    if needle.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut output = String::new();
    let mut last_replacement = 0;
    let mut occurrence = 0;

    loop {
        occurrence += 1;
        if !count.permits(occurrence) {
            break;
        }

        let found = if case_sensitive {
            find_exact(text, needle, last_replacement)
        } else {
            find_ignore_case(text, needle, last_replacement)
        };
        let Some(range) = found else {
            break;
        };

        let m = Match::new(vec![needle], range.clone(), occurrence);
        let generated = replacer.generate(&m);

        output.push_str(&text[last_replacement..range.start]);
        output.push_str(&resolve_capturing_groups(&generated, m.get_groups()));

        last_replacement = range.end;
    }

    finish(text, output, last_replacement, occurrence - 1)
}

/// Replaces regex matches, searching from explicit cursor that only moves forward
///
/// Regex sees entire text on each search so anchors and word boundaries behave as if text was not
/// split. After an empty match cursor is moved one character forward, that character is kept.
pub(crate) fn run_regex<'a, R: Replacer + ?Sized>(
    regex: &Regex,
    replacer: &mut R,
    text: &'a str,
    count: ReplaceCount,
) -> Cow<'a, str> {
    let mut caps = regex.create_captures();

    let mut output = String::new();
    let mut last_replacement = 0;
    let mut cursor = 0;
    let mut occurrence = 0;

    loop {
        occurrence += 1;
        if !count.permits(occurrence) {
            break;
        }

        regex.search_captures(&Input::new(text).span(cursor..text.len()), &mut caps);

        let Some(range) = caps.get_match().map(|m| m.range()) else {
            break;
        };

        let groups = (0..caps.group_len())
            .map(|i| caps.get_group(i).map_or("", |span| &text[span.range()]))
            .collect();

        let m = Match::new(groups, range.clone(), occurrence);
        let generated = replacer.generate(&m);

        output.push_str(&text[last_replacement..range.start]);
        output.push_str(&resolve_capturing_groups(&generated, m.get_groups()));

        last_replacement = range.end;
        cursor = range.end;

        if range.is_empty() {
            match text[cursor..].chars().next() {
                Some(c) => cursor += c.len_utf8(),
                None => {
                    occurrence += 1;
                    break;
                }
            }
        }
    }

    finish(text, output, last_replacement, occurrence - 1)
}

fn finish(text: &str, mut output: String, last_replacement: usize, replaced: usize) -> Cow<'_, str> {
    log::trace!("replaced {replaced} occurrences");

    if replaced == 0 {
        return Cow::Borrowed(text);
    }

    output.push_str(&text[last_replacement..]);

    Cow::Owned(output)
}

fn find_exact(haystack: &str, needle: &str, from: usize) -> Option<Range<usize>> {
    haystack[from..]
        .find(needle)
        .map(|offset| from + offset..from + offset + needle.len())
}

fn find_ignore_case(haystack: &str, needle: &str, from: usize) -> Option<Range<usize>> {
    haystack[from..].char_indices().find_map(|(offset, _)| {
        let start = from + offset;

        match_len_ignore_case(&haystack[start..], needle).map(|len| start..start + len)
    })
}

// length in bytes of haystack prefix that equals needle ignoring case
fn match_len_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let mut haystack_chars = haystack.char_indices();

    for n in needle.chars() {
        let (_, h) = haystack_chars.next()?;
        if !chars_eq_ignore_case(h, n) {
            return None;
        }
    }

    Some(haystack_chars.next().map_or(haystack.len(), |(i, _)| i))
}

#[inline]
fn chars_eq_ignore_case(left: char, right: char) -> bool {
    left == right || left.to_lowercase().eq(right.to_lowercase())
}

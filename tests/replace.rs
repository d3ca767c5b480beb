use multireplace::{replace, replace_callback, Pattern, Patterns, ReplaceOptions};

fn regex(source: &str) -> Pattern {
    Pattern::regex(source, false).unwrap()
}

fn regex_i(source: &str) -> Pattern {
    Pattern::regex(source, true).unwrap()
}

fn defaults() -> ReplaceOptions {
    ReplaceOptions::default()
}

#[test]
fn literal_ignores_case_by_default() {
    let text = "Obi is a girl";

    assert_eq!(replace("Obi", "Ada", text, defaults()), "Ada is a girl");
    assert_eq!(replace("obi", "Ada", text, defaults()), "Ada is a girl");
}

#[test]
fn regex_replaces_all() {
    assert_eq!(
        replace(regex(r"\d"), "1", "2222 is a number", defaults()),
        "1111 is a number"
    );
}

#[test]
fn placeholders() {
    assert_eq!(replace(regex(r"(\d+)"), "$:1", "2222 x", defaults()), "2222 x");
    assert_eq!(
        replace(regex(r"(\d+)"), "$$:1", "2222 is the amount", defaults()),
        "$2222 is the amount"
    );
    assert_eq!(
        replace(
            regex(r"(\d+)\.(\d+)"),
            "$$:2.$:1",
            "33.22 is the amount",
            defaults()
        ),
        "$22.33 is the amount"
    );
}

#[test]
fn missing_placeholders_left_as_is() {
    assert_eq!(
        replace(regex(r"(\d+)"), "$:2", "2222 is the amount", defaults()),
        "$:2 is the amount"
    );
    assert_eq!(
        replace(regex(r"(\d+)"), "$$:2", "2222 is the amount", defaults()),
        "$$:2 is the amount"
    );
    assert_eq!(
        replace(
            regex(r"(\d+)\.(\d+)"),
            "$$:2.$:3",
            "33.22 is the amount",
            defaults()
        ),
        "$22.$:3 is the amount"
    );
}

#[test]
fn literal_respects_case_when_asked() {
    let text = "Obi is a girl";
    let options = ReplaceOptions::new().case_sensitive(true);

    assert_eq!(replace("Obi", "Ada", text, options), "Ada is a girl");
    assert_eq!(replace("obi", "Ada", text, options), text);
}

#[test]
fn regex_case_comes_from_regex() {
    let text = "my name is Harrison";
    let options = ReplaceOptions::new().case_sensitive(true);

    assert_eq!(replace(regex("harrison"), "Ifeanyichukwu", text, options), text);
    assert_eq!(
        replace(regex_i("harrison"), "Ifeanyichukwu", text, options),
        "my name is Ifeanyichukwu"
    );
    // case insensitive search does not affect regex either
    assert_eq!(replace(regex("harrison"), "Ifeanyichukwu", text, defaults()), text);
}

#[test]
fn unlimited_count() {
    let text = "2222 is four twos";

    assert_eq!(
        replace(["2", "twos"], ["1", "ones"], text, defaults()),
        "1111 is four ones"
    );
    assert_eq!(
        replace(
            [regex(r"\d"), "twos".into()],
            ["1", "ones"],
            text,
            ReplaceOptions::new().count(-1)
        ),
        "1111 is four ones"
    );
}

#[test]
fn first_occurrence_only() {
    let text = "2222 is four twos";

    for count in [ReplaceOptions::new().count(1), ReplaceOptions::new().count(true)] {
        assert_eq!(
            replace(["2", "twos"], ["1", "ones"], text, count),
            "1222 is four ones"
        );
        assert_eq!(
            replace([regex(r"\d"), "twos".into()], ["1", "ones"], text, count),
            "1222 is four ones"
        );
    }
}

#[test]
fn limited_count() {
    let text = "2222 is four twos";

    let options = ReplaceOptions::new().count(2);
    assert_eq!(
        replace(["2", "twos"], ["1", "ones"], text, options),
        "1122 is four ones"
    );
    assert_eq!(
        replace([regex(r"\d"), "twos".into()], ["1", "ones"], text, options),
        "1122 is four ones"
    );

    let options = ReplaceOptions::new().count(0);
    assert_eq!(replace(["2", "twos"], ["1", "ones"], text, options), text);
    assert_eq!(
        replace([regex(r"\d"), "twos".into()], ["1", "ones"], text, options),
        text
    );
}

#[test]
fn last_replacement_reused() {
    let text = "2345 is four twos";

    assert_eq!(
        replace(["2", "3", "4", "5"], "2", text, defaults()),
        "2222 is four twos"
    );
    assert_eq!(
        replace(
            [regex("2"), regex("3"), regex("4"), regex("5")],
            "2",
            text,
            defaults()
        ),
        "2222 is four twos"
    );
}

#[test]
fn extra_replacements_ignored() {
    assert_eq!(
        replace("a", ["b", "c", "d"], "aaa", defaults()),
        "bbb"
    );
}

#[test]
fn no_patterns() {
    let text = "nothing changes";

    assert_eq!(replace(Patterns::default(), "x", text, defaults()), text);
    assert_eq!(
        replace(Vec::<&str>::new(), Vec::<&str>::new(), text, defaults()),
        text
    );
    assert_eq!(
        replace_callback(
            Patterns::default(),
            |_: &[&str], _: usize| "x",
            text,
            defaults()
        ),
        text
    );
}

#[test]
fn empty_text() {
    assert_eq!(replace("a", "b", "", defaults()), "");
    assert_eq!(replace(regex("a"), "b", "", defaults()), "");
}

#[test]
fn no_replacements_removes_matches() {
    assert_eq!(replace(["a"], Vec::<&str>::new(), "bab", defaults()), "bb");
    assert_eq!(
        replace([regex("a"), "b".into()], Vec::<String>::new(), "babc", defaults()),
        "c"
    );
}

#[test]
fn empty_literal_never_matches() {
    assert_eq!(replace("", "x", "abc", defaults()), "abc");
    assert_eq!(replace("", "x", "", defaults()), "");
}

#[test]
fn patterns_applied_in_sequence() {
    // second pattern matches text introduced by the first one
    assert_eq!(
        replace(["cat", "dog"], ["dog", "wolf"], "cat and dog", defaults()),
        "wolf and wolf"
    );
    // same search string twice: second one sees output of the first one
    assert_eq!(
        replace(["a", "a"], ["ab", "c"], "a", defaults()),
        "cb"
    );
    // regex alternation followed by overlapping literal
    assert_eq!(
        replace(
            [regex("cat|dog"), "pet".into()],
            ["pet", "animal"],
            "cat, dog, pet",
            defaults()
        ),
        "animal, animal, animal"
    );
}

#[test]
fn replacement_is_not_rescanned() {
    assert_eq!(replace("a", "aa", "aa", defaults()), "aaaa");
}

#[test]
fn callback_replaces() {
    assert_eq!(
        replace_callback("Obi", |_, _| "Ada", "Obi is a girl", defaults()),
        "Ada is a girl"
    );
}

#[test]
fn callback_arguments() {
    let mut calls = Vec::new();

    let replaced = replace_callback(
        "Obi",
        |groups, occurrence| {
            calls.push((groups.join(","), occurrence));
            "Ada"
        },
        "Obi is a girl",
        defaults(),
    );

    assert_eq!(replaced, "Ada is a girl");
    assert_eq!(calls, vec![("Obi".to_owned(), 1)]);
}

#[test]
fn callback_receives_regex_groups() {
    let mut calls = Vec::new();

    let replaced = replace_callback(
        regex(r"(\d+)\.(\d+)"),
        |groups, occurrence| {
            calls.push((groups.join(","), occurrence));
            format!("#{occurrence}")
        },
        "33.22 and 1.5",
        defaults(),
    );

    assert_eq!(replaced, "#1 and #2");
    assert_eq!(
        calls,
        vec![("33.22,33,22".to_owned(), 1), ("1.5,1,5".to_owned(), 2)]
    );
}

#[test]
fn callback_occurrence_restarts_per_pattern() {
    let mut occurrences = Vec::new();

    replace_callback(
        ["a", "b"],
        |_, occurrence| {
            occurrences.push(occurrence);
            "x"
        },
        "aabb",
        defaults(),
    );

    assert_eq!(occurrences, vec![1, 2, 1, 2]);
}

#[test]
fn callback_output_is_resolved() {
    assert_eq!(
        replace_callback(
            regex(r"(\w+)@(\w+)"),
            |_, _| "$:2 at $:1",
            "user@host",
            defaults()
        ),
        "host at user"
    );
}

#[test]
fn callback_respects_count() {
    let mut calls = 0;

    let replaced = replace_callback(
        "a",
        |_, _| {
            calls += 1;
            "b"
        },
        "aaaa",
        ReplaceOptions::new().count(3),
    );

    assert_eq!(replaced, "bbba");
    assert_eq!(calls, 3);
}

#[test]
fn callback_may_replace_recursively() {
    let replaced = replace_callback(
        regex(r"\[(\w+)\]"),
        |groups, _| replace(["a", "b"], ["1", "2"], groups[1], defaults()).into_owned(),
        "[ab] [ba] c",
        defaults(),
    );

    assert_eq!(replaced, "12 21 c");
}

#[test]
fn multi_line_regex() {
    assert_eq!(
        replace(regex("^(\\w)"), "<$:1>", "one\ntwo\nthree", defaults()),
        "<o>ne\n<t>wo\n<t>hree"
    );
}

#[test]
#[should_panic(expected = "callback failed on literal")]
fn callback_panic_propagates_from_literal() {
    replace_callback(
        "a",
        |_, _| -> String { panic!("callback failed on literal") },
        "a",
        defaults(),
    );
}

#[test]
#[should_panic(expected = "callback failed on regex")]
fn callback_panic_propagates_from_regex() {
    replace_callback(
        regex(r"\d+"),
        |_, _| -> String { panic!("callback failed on regex") },
        "a 12 b",
        defaults(),
    );
}

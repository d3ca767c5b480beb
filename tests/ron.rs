mod utils;

use multireplace::Ruleset;
use std::{fs, path::Path};
use utils::{read_sample_lines, ruleset_paths};

pub fn read_ruleset(filename: &Path) -> Ruleset {
    let content = fs::read_to_string(filename).unwrap();
    ron::from_str::<Ruleset>(&content)
        .unwrap_or_else(|err| panic!("parsing ruleset {}: {err}", filename.display()))
}

#[test]
fn ron_rulesets_work() {
    let lines = read_sample_lines();
    let paths = ruleset_paths("ron");

    assert!(!paths.is_empty());

    for path in paths {
        println!("running {}", path.display());

        let ruleset = read_ruleset(&path);
        for line in &lines {
            ruleset.apply(line);
        }
    }
}

#[test]
fn names() {
    let ruleset = read_ruleset(Path::new("rulesets/names.ron"));

    assert_eq!(ruleset.apply("my name is Harrison"), "my name is Ifeanyichukwu");
    assert_eq!(ruleset.apply("Obi is a girl"), "Ada is a girl");
}

#[test]
fn numbers() {
    let ruleset = read_ruleset(Path::new("rulesets/numbers.ron"));

    assert_eq!(ruleset.apply("2222 is four twos"), "1222 is four ones");
}

#[test]
fn amounts() {
    let ruleset = read_ruleset(Path::new("rulesets/amounts.ron"));

    assert_eq!(
        ruleset.apply("Adam: 33.22 is the amount in USD"),
        "[Adam] $22.33 is the amount in dollars"
    );
    // case sensitive literal
    assert_eq!(ruleset.apply("usd"), "usd");
}

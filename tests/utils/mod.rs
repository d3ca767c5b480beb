use std::{fs, path::PathBuf};

/// Read sample text lines, skipping empty lines and " :" separators
pub fn read_sample_lines() -> Vec<String> {
    fs::read_to_string("tests/sample_text.txt")
        .expect("reading sample text")
        .lines()
        .filter(|&l| !(l.is_empty() || l.eq(" :")))
        .map(|s| s.to_owned())
        .collect()
}

/// All files in rulesets folder with given extension, sorted by name
pub fn ruleset_paths(extension: &str) -> Vec<PathBuf> {
    let mut paths: Vec<_> = fs::read_dir("rulesets")
        .expect("reading rulesets folder")
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == extension))
        .collect();

    paths.sort();
    paths
}

use std::{
    fs::{self, File},
    io::{self, BufRead},
    path::PathBuf,
};

use clap::Parser;

use multireplace::{ReplaceCount, Ruleset};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Ruleset file path (currently only ron supported)
    #[arg(short, long, group = "ruleset_def")]
    ruleset: Option<PathBuf>,

    /// Directly provided ruleset (ron format)
    #[arg(long, group = "ruleset_def")]
    ruleset_string: Option<String>,

    /// Whether literal patterns are searched case sensitively (true or false). Overrides ruleset
    #[arg(short, long, value_name = "BOOL")]
    case_sensitive: Option<bool>,

    /// Replace at most this many occurrences of each pattern, negative is unlimited. Overrides
    /// ruleset
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,

    /// File to apply ruleset to. Reads from stdin if unset
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn apply_ruleset(ruleset: &Ruleset, line: io::Result<String>) -> Result<(), String> {
    println!(
        "{}",
        ruleset.apply(&line.map_err(|err| format!("reading line: {err}"))?)
    );

    Ok(())
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let ruleset_string = if let Some(ruleset) = args.ruleset {
        fs::read_to_string(ruleset).map_err(|err| format!("reading ruleset file: {err}"))?
    } else {
        args.ruleset_string
            .ok_or("expected either --ruleset or --ruleset-string")?
    };

    let mut ruleset = ron::from_str::<Ruleset>(&ruleset_string)
        .map_err(|err| format!("parsing ruleset: {err}"))?;

    let mut options = ruleset.options();
    if let Some(case_sensitive) = args.case_sensitive {
        options.case_sensitive = case_sensitive;
    }
    if let Some(count) = args.count {
        options.count = ReplaceCount::from(count);
    }
    ruleset = ruleset.with_options(options);

    if let Some(filename) = args.file {
        let file = File::open(filename).map_err(|err| format!("reading input file: {err}"))?;
        for line in io::BufReader::new(file).lines() {
            apply_ruleset(&ruleset, line)?;
        }
    } else {
        for line in io::stdin().lines() {
            apply_ruleset(&ruleset, line)?;
        }
    }

    Ok(())
}

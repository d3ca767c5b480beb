use crate::{Pattern, ReplaceCount, ReplaceOptions, Ruleset};

use serde::{de, Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
enum PatternDef {
    Literal(String),
    Regex {
        source: String,
        #[serde(default)]
        case_insensitive: bool,
    },
}

impl TryFrom<PatternDef> for Pattern {
    type Error = String;

    fn try_from(def: PatternDef) -> Result<Self, Self::Error> {
        match def {
            PatternDef::Literal(s) => Ok(Self::Literal(s)),
            PatternDef::Regex {
                source,
                case_insensitive,
            } => Self::regex(&source, case_insensitive).map_err(|err| err.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Pattern, D::Error>
    where
        D: Deserializer<'de>,
    {
        let def: PatternDef = Deserialize::deserialize(deserializer)?;

        Self::try_from(def).map_err(de::Error::custom)
    }
}

// same forms as accepted by From impls
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReplaceCountDef {
    FirstOnly(bool),
    Number(i64),
}

impl<'de> Deserialize<'de> for ReplaceCount {
    fn deserialize<D>(deserializer: D) -> Result<ReplaceCount, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Deserialize::deserialize(deserializer)? {
            ReplaceCountDef::FirstOnly(first_only) => Self::from(first_only),
            ReplaceCountDef::Number(n) => Self::from(n),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OptionsDef {
    #[serde(default)]
    case_sensitive: bool,
    #[serde(default)]
    count: ReplaceCount,
}

impl From<OptionsDef> for ReplaceOptions {
    fn from(def: OptionsDef) -> Self {
        Self {
            case_sensitive: def.case_sensitive,
            count: def.count,
        }
    }
}

impl<'de> Deserialize<'de> for ReplaceOptions {
    fn deserialize<D>(deserializer: D) -> Result<ReplaceOptions, D::Error>
    where
        D: Deserializer<'de>,
    {
        let def: OptionsDef = Deserialize::deserialize(deserializer)?;

        Ok(def.into())
    }
}

// options are repeated instead of flattened because ron does not support serde(flatten)
#[derive(Debug, Deserialize)]
struct RulesetDef {
    #[serde(default)]
    case_sensitive: bool,
    #[serde(default)]
    count: ReplaceCount,
    #[serde(default)]
    rules: Vec<(Pattern, String)>,
}

impl<'de> Deserialize<'de> for Ruleset {
    fn deserialize<D>(deserializer: D) -> Result<Ruleset, D::Error>
    where
        D: Deserializer<'de>,
    {
        let def: RulesetDef = Deserialize::deserialize(deserializer)?;

        log::debug!("loaded ruleset with {} rules", def.rules.len());

        Ok(Self::new(
            def.rules,
            ReplaceOptions {
                case_sensitive: def.case_sensitive,
                count: def.count,
            },
        ))
    }
}

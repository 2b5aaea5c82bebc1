#[cfg(test)]
#[path = "language_test.rs"]
mod tests;

use std::str::FromStr;

use anyhow::anyhow;
use anyhow::Result;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumString;
use strum::EnumVariantNames;

/// The closed set of languages the workbench can translate between. Variant
/// order matches the order languages are presented to the user.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    EnumVariantNames,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    JavaScript,
    Java,
    Cpp,
    C,
    Python,
    CSharp,
    Ruby,
    TypeScript,
    Rust,
    Swift,
}

impl Language {
    pub fn parse(text: &str) -> Result<Language> {
        return Language::from_str(text)
            .map_err(|_| return anyhow!(format!("{text} is not a supported language")));
    }
}

/// The source/target selection for a conversion. Persisted verbatim as the
/// user's language preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl Default for LanguagePair {
    fn default() -> LanguagePair {
        return LanguagePair {
            source: Language::Python,
            target: Language::JavaScript,
        };
    }
}

/// An authoring aid offered to editor widgets as a completion. The body uses
/// `${n:placeholder}` numbered slots.
pub struct SnippetTemplate {
    pub trigger: &'static str,
    pub body: &'static str,
}

/// Registry entry for a single language: the sample shown when the language
/// is picked as a source, and the ordered snippet list for completions.
pub struct LanguageProfile {
    pub language: Language,
    pub sample: &'static str,
    pub snippets: &'static [SnippetTemplate],
}

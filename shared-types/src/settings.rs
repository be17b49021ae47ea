use serde::{Deserialize, Serialize};

use crate::{OccupationLexicon, DEFAULT_OCCUPATIONS};

/// Line prefixes that mark a facsimile number
pub const DEFAULT_FAX_INDICATORS: &[&str] = &["fax", "facsimile", "f"];

/// What the name extractor returns for an accepted line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameSelection {
    /// The whole trimmed line holding the PERSON chunk
    #[default]
    WholeLine,
    /// Only the words of the PERSON chunk
    EntitySpan,
}

/// Parser configuration, usually read from `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    pub occupations: Vec<String>,
    pub fax_indicators: Vec<String>,
    pub min_fallback_digits: usize,
    pub name_selection: NameSelection,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            occupations: DEFAULT_OCCUPATIONS.iter().map(|s| s.to_string()).collect(),
            fax_indicators: DEFAULT_FAX_INDICATORS.iter().map(|s| s.to_string()).collect(),
            min_fallback_digits: 9,
            name_selection: NameSelection::WholeLine,
        }
    }
}

impl ParserSettings {
    pub fn lexicon(&self) -> OccupationLexicon {
        OccupationLexicon::new(&self.occupations)
    }
}

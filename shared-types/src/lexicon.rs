use std::collections::BTreeSet;

/// Job-title keywords that tend to be tagged as PERSON by entity chunkers
pub const DEFAULT_OCCUPATIONS: &[&str] = &[
    "engineer",
    "developer",
    "computer",
    "scientist",
    "technology",
    "analyst",
    "system",
    "manager",
    "mathematician",
    "entrepreneur",
];

/// Set of lowercase occupation keywords. A line "contains an occupation" when
/// any keyword occurs in the lowercased line as a plain substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupationLexicon {
    keywords: BTreeSet<String>,
}

impl OccupationLexicon {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                // An empty keyword is a substring of every line
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            keywords: BTreeSet::new(),
        }
    }

    pub fn matching_keyword(&self, line: &str) -> Option<&str> {
        let line = line.to_lowercase();
        self.keywords
            .iter()
            .find(|keyword| line.contains(keyword.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, line: &str) -> bool {
        self.matching_keyword(line).is_some()
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for OccupationLexicon {
    fn default() -> Self {
        Self::new(DEFAULT_OCCUPATIONS)
    }
}

use shared_types::{EntityChunk, EntityLabel, PosTag, TaggedToken};

use super::gazetteer::{
    self, FACILITY_WORDS, GIVEN_NAMES, HONORIFICS, LOCATION_WORDS, ORGANIZATION_WORDS,
};

/// Groups runs of proper nouns into labelled entity chunks.
///
/// A run may carry a period after an initial or honorific ("Dr. Jane",
/// "John F. Kennedy") as long as another proper noun follows it. Trailing
/// credentials and generational suffixes ("CPA", "III") are split into their
/// own chunk so they do not turn a name into an organization.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityChunker;

impl EntityChunker {
    pub fn new() -> Self {
        Self
    }

    pub fn chunk(&self, tagged: Vec<TaggedToken>) -> Vec<EntityChunk> {
        let mut chunks = Vec::new();
        let mut run: Vec<TaggedToken> = Vec::new();
        let mut tokens = tagged.into_iter().peekable();

        while let Some(token) = tokens.next() {
            if token.tag == PosTag::ProperNoun {
                run.push(token);
                continue;
            }

            let bridges = token.token.text == "."
                && run.last().is_some_and(is_abbreviation)
                && tokens
                    .peek()
                    .is_some_and(|next| next.tag == PosTag::ProperNoun);
            if bridges {
                run.push(token);
                continue;
            }

            chunks.extend(split_suffix(std::mem::take(&mut run)));
        }

        chunks.extend(split_suffix(run));

        chunks
    }
}

fn is_abbreviation(token: &TaggedToken) -> bool {
    let lower = token.token.text.to_lowercase();
    lower.chars().count() == 1 || gazetteer::contains(HONORIFICS, &lower)
}

/// Splits trailing acronyms off a run whose leading words are plain name
/// words. Company suffixes like "LLC" stay attached.
fn split_suffix(mut run: Vec<TaggedToken>) -> Vec<EntityChunk> {
    let suffix_len = run
        .iter()
        .rev()
        .take_while(|t| {
            t.tag == PosTag::ProperNoun
                && is_acronym(&t.token.text)
                && !gazetteer::contains(ORGANIZATION_WORDS, &t.token.text.to_lowercase())
        })
        .count();
    let head_len = run.len() - suffix_len;

    let head_is_name = run[..head_len]
        .iter()
        .filter(|t| t.tag == PosTag::ProperNoun)
        .all(|t| !is_acronym(&t.token.text) && is_name_word(&t.token.text));
    if suffix_len == 0 || head_len == 0 || !head_is_name {
        return label_run(run).into_iter().collect();
    }

    let suffix = run.split_off(head_len);
    label_run(run).into_iter().chain(label_run(suffix)).collect()
}

fn label_run(run: Vec<TaggedToken>) -> Option<EntityChunk> {
    let words: Vec<String> = run
        .iter()
        .filter(|t| t.tag == PosTag::ProperNoun)
        .map(|t| t.token.text.clone())
        .collect();
    if words.is_empty() {
        return None;
    }

    Some(EntityChunk {
        label: classify(&words),
        tokens: run,
    })
}

fn classify(words: &[String]) -> EntityLabel {
    let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let any_in = |list: &[&str]| lower.iter().any(|w| gazetteer::contains(list, w));

    if words.len() > 1 && gazetteer::contains(HONORIFICS, &lower[0]) {
        return EntityLabel::Person;
    }
    if any_in(ORGANIZATION_WORDS) {
        return EntityLabel::Organization;
    }
    if any_in(FACILITY_WORDS) {
        return EntityLabel::Facility;
    }
    if any_in(LOCATION_WORDS) {
        return EntityLabel::Location;
    }

    if words.len() == 1 {
        let word = &words[0];
        if is_acronym(word) {
            return EntityLabel::Organization;
        }
        if gazetteer::contains(GIVEN_NAMES, &lower[0]) {
            return EntityLabel::Person;
        }
        // Lone capitalised words on a card are mostly labels or brand names
        return EntityLabel::Organization;
    }

    let acronyms = words.iter().filter(|w| is_acronym(w)).count();
    if acronyms > 0 && acronyms < words.len() {
        return EntityLabel::Organization;
    }

    if words.iter().all(|w| is_name_word(w)) {
        EntityLabel::Person
    } else {
        EntityLabel::Organization
    }
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() > 1 && word.chars().all(|c| c.is_uppercase())
}

fn is_name_word(word: &str) -> bool {
    word.chars().all(|c| c.is_alphabetic() || c == '-' || c == '\'' || c == '\u{2019}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::{RuleBasedTagger, WordTokenizer};

    fn chunks(line: &str) -> Vec<(EntityLabel, String)> {
        let tokens = WordTokenizer::new().tokenize(line);
        let tagged = RuleBasedTagger::new().tag(tokens);
        EntityChunker::new()
            .chunk(tagged)
            .into_iter()
            .map(|c| (c.label, c.span(line).to_string()))
            .collect()
    }

    #[test]
    fn test_two_capitalised_words_are_a_person() {
        assert_eq!(
            chunks("Arthur Wilson"),
            vec![(EntityLabel::Person, "Arthur Wilson".to_string())]
        );
    }

    #[test]
    fn test_job_titles_look_like_people() {
        // The occupation lexicon exists to veto exactly this
        assert_eq!(
            chunks("Software Engineer"),
            vec![(EntityLabel::Person, "Software Engineer".to_string())]
        );
    }

    #[test]
    fn test_organisation_markers() {
        assert_eq!(
            chunks("ABC Tech"),
            vec![(EntityLabel::Organization, "ABC Tech".to_string())]
        );
        assert_eq!(
            chunks("IBM Research"),
            vec![(EntityLabel::Organization, "IBM Research".to_string())]
        );
    }

    #[test]
    fn test_label_word_is_not_a_person() {
        assert_eq!(
            chunks("Email: awilson@abctech.com"),
            vec![(EntityLabel::Organization, "Email".to_string())]
        );
    }

    #[test]
    fn test_trailing_credential_is_split_from_name() {
        assert_eq!(
            chunks("John Smith CPA"),
            vec![
                (EntityLabel::Person, "John Smith".to_string()),
                (EntityLabel::Organization, "CPA".to_string()),
            ]
        );
        assert_eq!(
            chunks("Arthur Wilson III")[0],
            (EntityLabel::Person, "Arthur Wilson".to_string())
        );
    }

    #[test]
    fn test_company_suffix_stays_attached() {
        assert_eq!(
            chunks("Acme Widgets LLC"),
            vec![(EntityLabel::Organization, "Acme Widgets LLC".to_string())]
        );
    }

    #[test]
    fn test_honorific_and_initial_bridge_periods() {
        assert_eq!(
            chunks("Dr. Jane Doe"),
            vec![(EntityLabel::Person, "Dr. Jane Doe".to_string())]
        );
        assert_eq!(
            chunks("John F. Kennedy"),
            vec![(EntityLabel::Person, "John F. Kennedy".to_string())]
        );
    }

    #[test]
    fn test_facilities_and_locations() {
        assert_eq!(
            chunks("123 Main Street"),
            vec![(EntityLabel::Facility, "Main Street".to_string())]
        );
        assert_eq!(
            chunks("Reston, Virginia"),
            vec![
                (EntityLabel::Location, "Reston".to_string()),
                (EntityLabel::Location, "Virginia".to_string()),
            ]
        );
    }

    #[test]
    fn test_lowercase_text_has_no_entities() {
        assert!(chunks("call me anytime").is_empty());
    }
}

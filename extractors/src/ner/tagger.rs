use shared_types::{PosTag, TaggedToken, Token};

use super::gazetteer::{self, CONJUNCTIONS, DETERMINERS, PREPOSITIONS, PRONOUNS};

const PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\''];

/// Lexicon and shape based part-of-speech tagger
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedTagger;

impl RuleBasedTagger {
    pub fn new() -> Self {
        Self
    }

    pub fn tag(&self, tokens: Vec<Token>) -> Vec<TaggedToken> {
        tokens
            .into_iter()
            .map(|token| TaggedToken {
                tag: self.tag_word(&token.text),
                token,
            })
            .collect()
    }

    pub fn tag_word(&self, word: &str) -> PosTag {
        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return PosTag::Symbol;
        };

        if first.is_ascii_digit() {
            return PosTag::Number;
        }

        if !first.is_alphabetic() {
            if chars.next().is_none() && PUNCTUATION.contains(&first) {
                return PosTag::Punctuation;
            }
            if word == "&" {
                return PosTag::Conjunction;
            }
            return PosTag::Symbol;
        }

        // Acronyms like "US" or "IT" are names, not closed-class words
        let is_acronym = word.chars().count() > 1 && word.chars().all(|c| !c.is_lowercase());
        if !is_acronym {
            let lower = word.to_lowercase();
            if let Some(tag) = closed_class(&lower) {
                return tag;
            }
        }

        if first.is_uppercase() {
            return PosTag::ProperNoun;
        }

        open_class(word)
    }
}

fn closed_class(lower: &str) -> Option<PosTag> {
    if gazetteer::contains(DETERMINERS, lower) {
        Some(PosTag::Determiner)
    } else if gazetteer::contains(PREPOSITIONS, lower) {
        Some(PosTag::Preposition)
    } else if gazetteer::contains(CONJUNCTIONS, lower) {
        Some(PosTag::Conjunction)
    } else if gazetteer::contains(PRONOUNS, lower) {
        Some(PosTag::Pronoun)
    } else {
        None
    }
}

fn open_class(word: &str) -> PosTag {
    if word.ends_with("ly") {
        PosTag::Adverb
    } else if word.ends_with("ing") || word.ends_with("ed") {
        PosTag::Verb
    } else if ["al", "ous", "ive", "ful", "able", "ic"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        PosTag::Adjective
    } else {
        PosTag::Noun
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_word_shapes() {
        let tagger = RuleBasedTagger::new();

        assert_eq!(tagger.tag_word("Arthur"), PosTag::ProperNoun);
        assert_eq!(tagger.tag_word("ABC"), PosTag::ProperNoun);
        assert_eq!(tagger.tag_word("555-1259"), PosTag::Number);
        assert_eq!(tagger.tag_word(":"), PosTag::Punctuation);
        assert_eq!(tagger.tag_word("@"), PosTag::Symbol);
        assert_eq!(tagger.tag_word("&"), PosTag::Conjunction);
    }

    #[test]
    fn test_closed_class_wins_over_capitalisation() {
        let tagger = RuleBasedTagger::new();

        assert_eq!(tagger.tag_word("The"), PosTag::Determiner);
        assert_eq!(tagger.tag_word("of"), PosTag::Preposition);
        assert_eq!(tagger.tag_word("US"), PosTag::ProperNoun);
    }

    #[test]
    fn test_open_class_suffixes() {
        let tagger = RuleBasedTagger::new();

        assert_eq!(tagger.tag_word("quickly"), PosTag::Adverb);
        assert_eq!(tagger.tag_word("consulting"), PosTag::Verb);
        assert_eq!(tagger.tag_word("digital"), PosTag::Adjective);
        assert_eq!(tagger.tag_word("awilson"), PosTag::Noun);
    }
}

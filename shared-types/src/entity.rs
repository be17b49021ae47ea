use serde::{Deserialize, Serialize};

/// A word or punctuation mark with its byte offsets in the source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// Coarse part-of-speech classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PosTag {
    ProperNoun,
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Number,
    Symbol,
    Punctuation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: PosTag,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    Facility,
}

/// Adjacent tokens grouped under one entity label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityChunk {
    pub label: EntityLabel,
    pub tokens: Vec<TaggedToken>,
}

impl EntityChunk {
    pub fn is_person(&self) -> bool {
        self.label == EntityLabel::Person
    }

    pub fn start(&self) -> usize {
        self.tokens.first().map(|t| t.token.start).unwrap_or(0)
    }

    pub fn end(&self) -> usize {
        self.tokens.last().map(|t| t.token.end).unwrap_or(0)
    }

    /// Slice of `text` covered by this chunk. `text` must be the line the
    /// chunk was produced from.
    pub fn span<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start()..self.end()).unwrap_or("")
    }
}

/// Tokenizer, POS tagger and entity chunker behind one seam, so the name
/// extractor works with any backend that can label PERSON spans.
pub trait NerBackend: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;

    fn pos_tag(&self, tokens: Vec<Token>) -> Vec<TaggedToken>;

    fn chunk(&self, tagged: Vec<TaggedToken>) -> Vec<EntityChunk>;

    /// Run the full pipeline over one line of text
    fn entities(&self, text: &str) -> Vec<EntityChunk> {
        self.chunk(self.pos_tag(self.tokenize(text)))
    }
}

mod chunker;
mod gazetteer;
mod tagger;
mod tokenizer;

pub use chunker::EntityChunker;
pub use tagger::RuleBasedTagger;
pub use tokenizer::WordTokenizer;

use shared_types::{EntityChunk, NerBackend, TaggedToken, Token};

/// Default named-entity backend: word tokenizer, shape/lexicon tagger and a
/// gazetteer-driven proper noun chunker. No model files are needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedNer {
    tokenizer: WordTokenizer,
    tagger: RuleBasedTagger,
    chunker: EntityChunker,
}

impl RuleBasedNer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NerBackend for RuleBasedNer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text)
    }

    fn pos_tag(&self, tokens: Vec<Token>) -> Vec<TaggedToken> {
        self.tagger.tag(tokens)
    }

    fn chunk(&self, tagged: Vec<TaggedToken>) -> Vec<EntityChunk> {
        self.chunker.chunk(tagged)
    }
}

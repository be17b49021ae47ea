use shared_types::{
    CardDocument, ContactField, ExtractionMethod, Extractor, NameSelection, NerBackend,
    OccupationLexicon,
};
use std::sync::Arc;
use tracing::debug;

use crate::ner::RuleBasedNer;

/// Finds the first line holding a PERSON entity that is not a job title.
///
/// Entity chunkers label phrases like "Software Engineer" as people, so any
/// line containing an occupation keyword is rejected outright, even when it
/// also holds a real name.
pub struct NameExtractor {
    backend: Arc<dyn NerBackend>,
    lexicon: OccupationLexicon,
    selection: NameSelection,
}

impl NameExtractor {
    pub fn new(lexicon: OccupationLexicon) -> Self {
        Self::with_backend(Arc::new(RuleBasedNer::new()), lexicon)
    }

    pub fn with_backend(backend: Arc<dyn NerBackend>, lexicon: OccupationLexicon) -> Self {
        Self {
            backend,
            lexicon,
            selection: NameSelection::default(),
        }
    }

    pub fn with_selection(mut self, selection: NameSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Lazily yields every acceptable name in document order
    pub fn candidates<'a>(
        &'a self,
        document: &'a CardDocument,
    ) -> impl Iterator<Item = String> + 'a {
        document
            .iter()
            .enumerate()
            .filter_map(move |(index, line)| self.accept(index, line))
    }

    fn accept(&self, index: usize, line: &str) -> Option<String> {
        if line.is_empty() {
            return None;
        }

        let entities = self.backend.entities(line);
        let person = entities.iter().find(|chunk| chunk.is_person())?;

        if let Some(keyword) = self.lexicon.matching_keyword(line) {
            debug!(line = index, keyword, "Person entity rejected by occupation keyword");
            return None;
        }

        let name = match self.selection {
            NameSelection::WholeLine => line,
            NameSelection::EntitySpan => person.span(line),
        };
        if name.is_empty() {
            return None;
        }

        debug!(line = index, "Name found");
        Some(name.to_string())
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new(OccupationLexicon::default())
    }
}

impl Extractor for NameExtractor {
    fn extract(&self, document: &CardDocument) -> Option<String> {
        self.candidates(document).next()
    }

    fn field(&self) -> ContactField {
        ContactField::Name
    }

    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::NamedEntity
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

use shared_types::{
    CardDocument, ContactInfo, ExtractionError, Extractor, NerBackend, ParserSettings,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::contact_fields::{EmailExtractor, NameExtractor, PhoneExtractor};
use crate::ner::RuleBasedNer;

/// Runs the name, phone and email extractors over one card
pub struct BusinessCardParser {
    name: NameExtractor,
    phone: PhoneExtractor,
    email: EmailExtractor,
}

impl BusinessCardParser {
    /// Create a parser from settings using the rule-based NER backend
    pub fn new(settings: &ParserSettings) -> Result<Self, ExtractionError> {
        Self::with_backend(settings, Arc::new(RuleBasedNer::new()))
    }

    /// Create a parser with default settings
    pub fn with_defaults() -> Result<Self, ExtractionError> {
        Self::new(&ParserSettings::default())
    }

    /// Create a parser that detects names with a different NER backend
    pub fn with_backend(
        settings: &ParserSettings,
        backend: Arc<dyn NerBackend>,
    ) -> Result<Self, ExtractionError> {
        Ok(Self {
            name: NameExtractor::with_backend(backend, settings.lexicon())
                .with_selection(settings.name_selection),
            phone: PhoneExtractor::from_settings(settings)?,
            email: EmailExtractor::new()?,
        })
    }

    pub fn extractors(&self) -> [&dyn Extractor; 3] {
        [&self.name, &self.phone, &self.email]
    }

    /// Extract contact details from an already loaded document. Never fails;
    /// fields with no qualifying line are left empty.
    pub fn get_contact_info(&self, document: &CardDocument) -> ContactInfo {
        let [name, phone, email] = self.extractors().map(|extractor| {
            let value = extractor.extract(document);
            debug!(
                field = %extractor.field(),
                method = ?extractor.method(),
                found = value.is_some(),
                "Field extracted"
            );
            value
        });

        ContactInfo::new(name, phone, email)
    }

    /// Load a document from disk and extract its contact details
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ContactInfo, ExtractionError> {
        let document = CardDocument::open(path)?;
        info!(
            source = document.source().unwrap_or_default(),
            lines = document.len(),
            "Loaded card"
        );
        Ok(self.get_contact_info(&document))
    }
}

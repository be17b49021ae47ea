pub mod contact;
pub mod document;
pub mod entity;
pub mod extraction;
pub mod lexicon;
pub mod settings;

pub use contact::{ContactField, ContactInfo};
pub use document::CardDocument;
pub use entity::{EntityChunk, EntityLabel, NerBackend, PosTag, TaggedToken, Token};
pub use lexicon::{OccupationLexicon, DEFAULT_OCCUPATIONS};
pub use settings::{NameSelection, ParserSettings, DEFAULT_FAX_INDICATORS};

// Re-export extraction types
pub use extraction::*;

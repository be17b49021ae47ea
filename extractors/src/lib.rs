//! Extractors Crate
//!
//! This crate reads contact details (name, phone, email) out of the OCR text of
//! a business card.
//!
//! # Architecture
//!
//! - **Types**: The document, contact and NER types and the `Extractor` and
//!   `NerBackend` traits are defined in the `shared-types` crate
//! - **Implementations**: Concrete extractors and the default NER backend are
//!   implemented in this crate
//!
//! # Available Extractors
//!
//! - `NameExtractor`: First PERSON entity line that is not a job title
//! - `PhoneExtractor`: First non-fax phone number, digits only
//! - `EmailExtractor`: First email address, label stripped
//! - `BusinessCardParser`: Runs all three and returns a `ContactInfo`
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::BusinessCardParser;
//!
//! let parser = BusinessCardParser::with_defaults()?;
//! let contact = parser.parse_file("Input.txt")?;
//! println!("{}", contact);
//! ```

pub mod business_card;
pub mod contact_fields;
pub mod ner;

// Re-export commonly used types
pub use business_card::BusinessCardParser;
pub use contact_fields::{EmailExtractor, NameExtractor, PhoneExtractor};
pub use ner::RuleBasedNer;

// Re-export the traits from shared-types for convenience
pub use shared_types::{Extractor, NerBackend};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{CardDocument, ContactField};

/// Core trait that all field extractors must implement
pub trait Extractor: Send + Sync {
    /// Scan the document in line order and return the first qualifying value
    fn extract(&self, document: &CardDocument) -> Option<String>;

    /// Which contact field does this extractor fill?
    fn field(&self) -> ContactField;

    /// What extraction method does this extractor use?
    fn method(&self) -> ExtractionMethod;

    /// Get extractor version for tracking
    fn version(&self) -> String {
        "1.0.0".to_string()
    }
}

/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Can't open {}: {source}", .path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Extraction methods available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMethod {
    NamedEntity,
    PatternBased,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extraction_method_serialization() {
        let method = ExtractionMethod::NamedEntity;
        let json = serde_json::to_string(&method).unwrap();
        assert_eq!(json, "\"named-entity\"");

        let deserialized: ExtractionMethod = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, method);
    }

    #[test]
    fn test_source_not_found_message() {
        let err = ExtractionError::SourceNotFound {
            path: PathBuf::from("Input.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "Can't open Input.txt: missing");
    }
}

use regex::Regex;
use shared_types::{CardDocument, ContactField, ExtractionError, ExtractionMethod, Extractor};
use tracing::debug;

const EMAIL: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

/// Finds the first email address, with or without a label such as "Email:".
///
/// Each line is tried bare first and then with one leading label token, so a
/// label is never part of the returned address.
pub struct EmailExtractor {
    bare: Regex,
    labelled: Regex,
}

impl EmailExtractor {
    pub fn new() -> Result<Self, ExtractionError> {
        let compile = |pattern: String| {
            Regex::new(&pattern)
                .map_err(|e| ExtractionError::ConfigError(format!("Invalid email pattern: {}", e)))
        };

        Ok(Self {
            bare: compile(format!(r"^({})", EMAIL))?,
            labelled: compile(format!(r"^[\w-]+:?\s*({})", EMAIL))?,
        })
    }

    /// Email on a single line, label stripped
    pub fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.bare
            .captures(line)
            .or_else(|| self.labelled.captures(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Extractor for EmailExtractor {
    fn extract(&self, document: &CardDocument) -> Option<String> {
        document.iter().enumerate().find_map(|(index, line)| {
            let email = self.match_line(line)?;
            debug!(line = index, "Email found");
            Some(email.to_string())
        })
    }

    fn field(&self) -> ContactField {
        ContactField::Email
    }

    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::PatternBased
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

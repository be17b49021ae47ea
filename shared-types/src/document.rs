use std::path::Path;

use crate::ExtractionError;

/// OCR text of a single card, one trimmed line per entry in document order.
///
/// Lines are fixed once the document is built; extractors only ever borrow them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDocument {
    source: Option<String>,
    lines: Vec<String>,
}

impl CardDocument {
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            source: None,
            lines: lines
                .into_iter()
                .map(|line| line.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// Read a document from disk. Bytes that are not valid UTF-8 are replaced
    /// rather than rejected, since OCR output is rarely clean.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ExtractionError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ExtractionError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_text(&String::from_utf8_lossy(&bytes))
            .with_source(path.display().to_string()))
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

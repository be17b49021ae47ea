use regex::Regex;
use shared_types::{
    CardDocument, ContactField, ExtractionError, ExtractionMethod, Extractor, ParserSettings,
};
use tracing::debug;

/// Optional label, optional country code, then a 3-3-4 number. Separators are
/// a space, dot or dash; the area code may sit in parentheses. Labels hold no
/// digits so a country code is never swallowed by the label.
const STRUCTURED_PHONE: &str =
    r"^(?:[\p{L}. ]+)?:?\s*\+?(\d+)?[\s.-]?\(?(\d{3})\)?[ .-]?(\d{3})[ .-]?(\d{4})$";

/// Picks the phone number off a card, skipping fax lines.
///
/// Every line is first tried against the structured 3-3-4 pattern. Only when
/// no line matches does the extractor fall back to the first line carrying at
/// least `min_fallback_digits` digits.
pub struct PhoneExtractor {
    fax_pattern: Option<Regex>,
    structured_pattern: Regex,
    min_fallback_digits: usize,
}

impl PhoneExtractor {
    pub fn new<I, S>(fax_indicators: I, min_fallback_digits: usize) -> Result<Self, ExtractionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if min_fallback_digits == 0 {
            return Err(ExtractionError::InvalidInput(
                "min_fallback_digits must be at least 1".to_string(),
            ));
        }

        let structured_pattern = Regex::new(STRUCTURED_PHONE)
            .map_err(|e| ExtractionError::ConfigError(format!("Invalid phone pattern: {}", e)))?;

        Ok(Self {
            fax_pattern: build_fax_pattern(fax_indicators)?,
            structured_pattern,
            min_fallback_digits,
        })
    }

    pub fn from_settings(settings: &ParserSettings) -> Result<Self, ExtractionError> {
        Self::new(&settings.fax_indicators, settings.min_fallback_digits)
    }

    pub fn with_defaults() -> Result<Self, ExtractionError> {
        Self::from_settings(&ParserSettings::default())
    }

    /// A fax line starts with a fax indicator that is not the beginning of a
    /// longer word, so "Fax:", "F 703..." and "Fax703" count but "Frank" does not.
    pub fn is_fax_line(&self, line: &str) -> bool {
        self.fax_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(line))
    }

    /// Structured match on a single line, returned as digits only
    pub fn match_structured(&self, line: &str) -> Option<String> {
        let caps = self.structured_pattern.captures(line)?;

        let country = caps
            .get(1)
            .map(|m| m.as_str())
            .filter(|code| *code != "0")
            .unwrap_or("");

        Some(format!(
            "{}{}{}{}",
            country,
            caps.get(2)?.as_str(),
            caps.get(3)?.as_str(),
            caps.get(4)?.as_str()
        ))
    }

    /// Every digit on the line, in order, if there are enough of them
    pub fn match_digit_count(&self, line: &str) -> Option<String> {
        let digits: String = line.chars().filter(|c| c.is_ascii_digit()).collect();
        (digits.len() >= self.min_fallback_digits).then_some(digits)
    }

    fn phone_lines<'a>(
        &'a self,
        document: &'a CardDocument,
    ) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        document.iter().enumerate().filter(move |(index, line)| {
            let fax = self.is_fax_line(line);
            if fax {
                debug!(line = *index, "Skipping fax line");
            }
            !fax
        })
    }
}

impl Extractor for PhoneExtractor {
    fn extract(&self, document: &CardDocument) -> Option<String> {
        let structured = self.phone_lines(document).find_map(|(index, line)| {
            let phone = self.match_structured(line)?;
            debug!(line = index, "Phone found by structured pattern");
            Some(phone)
        });

        structured.or_else(|| {
            self.phone_lines(document).find_map(|(index, line)| {
                let phone = self.match_digit_count(line)?;
                debug!(line = index, digits = phone.len(), "Phone found by digit count");
                Some(phone)
            })
        })
    }

    fn field(&self) -> ContactField {
        ContactField::Phone
    }

    fn method(&self) -> ExtractionMethod {
        ExtractionMethod::PatternBased
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

fn build_fax_pattern<I, S>(fax_indicators: I) -> Result<Option<Regex>, ExtractionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut indicators: Vec<String> = fax_indicators
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if indicators.is_empty() {
        return Ok(None);
    }
    indicators.sort_by_key(|s| std::cmp::Reverse(s.len()));

    let alternation = indicators
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?i)^(?:{})(?:[^\p{{L}}]|$)", alternation))
        .map(Some)
        .map_err(|e| ExtractionError::ConfigError(format!("Invalid fax indicator: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> PhoneExtractor {
        PhoneExtractor::with_defaults().unwrap()
    }

    #[test]
    fn test_structured_formats() {
        let phone = extractor();

        assert_eq!(
            phone.match_structured("Tel: +1 (703) 555-1259"),
            Some("17035551259".to_string())
        );
        assert_eq!(
            phone.match_structured("703-555-1259"),
            Some("7035551259".to_string())
        );
        assert_eq!(
            phone.match_structured("Phone: 703.555.1259"),
            Some("7035551259".to_string())
        );
        assert_eq!(
            phone.match_structured("Mobile: 1-703-555-1259"),
            Some("17035551259".to_string())
        );
        assert_eq!(phone.match_structured("Suite 400"), None);
    }

    #[test]
    fn test_zero_country_code_is_dropped() {
        assert_eq!(
            extractor().match_structured("+0 (703) 555-1259"),
            Some("7035551259".to_string())
        );
    }

    #[test]
    fn test_fax_detection() {
        let phone = extractor();

        assert!(phone.is_fax_line("Fax: (703) 555-9999"));
        assert!(phone.is_fax_line("FACSIMILE 703 555 9999"));
        assert!(phone.is_fax_line("F: 703-555-9999"));
        assert!(phone.is_fax_line("fax703-555-9999"));
        assert!(!phone.is_fax_line("Frank Miller"));
        assert!(!phone.is_fax_line("Tel: 703-555-1259"));
    }

    #[test]
    fn test_fax_line_is_never_the_phone() {
        let doc = CardDocument::from_lines(["Fax: (703) 555-9999", "Tel: (703) 555-1259"]);
        assert_eq!(extractor().extract(&doc), Some("7035551259".to_string()));

        let fax_only = CardDocument::from_lines(["Arthur Wilson", "Fax: 703-555-0000"]);
        assert_eq!(extractor().extract(&fax_only), None);
    }

    #[test]
    fn test_structured_match_beats_earlier_digit_line() {
        let doc = CardDocument::from_lines([
            "Member ID 12345-67890-123",
            "Tel: 703-555-1259",
        ]);
        assert_eq!(extractor().extract(&doc), Some("7035551259".to_string()));
    }

    #[test]
    fn test_digit_count_fallback() {
        let doc = CardDocument::from_lines([
            "Fax: 703 555 9999 ext 12",
            "Room 12",
            "Call +44 20 7946 0958",
        ]);
        assert_eq!(extractor().extract(&doc), Some("442079460958".to_string()));
    }

    #[test]
    fn test_first_structured_line_wins() {
        let doc = CardDocument::from_lines([
            "Arthur Wilson",
            "Tel: (703) 555-1259",
            "Mobile: 571-555-0000",
        ]);
        assert_eq!(extractor().extract(&doc), Some("7035551259".to_string()));
    }

    #[test]
    fn test_first_fallback_line_wins() {
        let doc = CardDocument::from_lines([
            "Call +44 20 7946 0958",
            "Office 03 9876 5432 1",
        ]);
        assert_eq!(extractor().extract(&doc), Some("442079460958".to_string()));
    }

    #[test]
    fn test_custom_settings() {
        let phone = PhoneExtractor::new(["Telefax"], 12).unwrap();

        assert!(phone.is_fax_line("Telefax: 703 555 9999"));
        assert!(!phone.is_fax_line("Fax: 703 555 9999"));
        assert_eq!(phone.match_digit_count("+44 20 7946 0958"), Some("442079460958".to_string()));
        assert_eq!(phone.match_digit_count("20190-1234"), None);
    }

    #[test]
    fn test_empty_indicators_disable_fax_exclusion() {
        let phone = PhoneExtractor::new(Vec::<String>::new(), 9).unwrap();
        assert!(!phone.is_fax_line("Fax: 703 555 9999"));
    }

    #[test]
    fn test_zero_fallback_digits_rejected() {
        assert!(matches!(
            PhoneExtractor::new(["fax"], 0),
            Err(ExtractionError::InvalidInput(_))
        ));
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three fields read off a business card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactField {
    Name,
    Phone,
    Email,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Phone => "Phone",
            ContactField::Email => "Email",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact details assembled from one card.
///
/// Each field is `None` when no line qualified, which is distinct from a
/// field that was found but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

impl ContactInfo {
    pub fn new(name: Option<String>, phone: Option<String>, email: Option<String>) -> Self {
        Self { name, phone, email }
    }

    /// Returns the contact's name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the contact's phone number, digits only
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns the contact's email address
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name(),
            ContactField::Phone => self.phone(),
            ContactField::Email => self.email(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

impl fmt::Display for ContactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [ContactField::Name, ContactField::Phone, ContactField::Email];
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field, self.get(*field).unwrap_or(""))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prints_absent_fields_empty() {
        let contact = ContactInfo::new(
            Some("Arthur Wilson".to_string()),
            None,
            Some("awilson@abctech.com".to_string()),
        );

        assert_eq!(
            contact.to_string(),
            "Name: Arthur Wilson\nPhone: \nEmail: awilson@abctech.com"
        );
    }

    #[test]
    fn test_absent_is_not_empty_string() {
        let found_empty = ContactInfo::new(Some(String::new()), None, None);
        assert_eq!(found_empty.name(), Some(""));
        assert_eq!(found_empty.phone(), None);
        assert!(!found_empty.is_empty());
        assert!(ContactInfo::default().is_empty());
    }

    #[test]
    fn test_contact_json_uses_null_for_absent() {
        let contact = ContactInfo::new(None, Some("17035551259".to_string()), None);
        let json = serde_json::to_value(&contact).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": null,
                "phone": "17035551259",
                "email": null
            })
        );
    }
}

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)+$")
        .expect("email pattern is valid")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseType {
    Enterprise,
    Professional,
    Standard,
    Educational,
    Other,
}

impl LicenseType {
    pub const ALL: [LicenseType; 5] = [
        LicenseType::Enterprise,
        LicenseType::Professional,
        LicenseType::Standard,
        LicenseType::Educational,
        LicenseType::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            LicenseType::Enterprise => "enterprise",
            LicenseType::Professional => "professional",
            LicenseType::Standard => "standard",
            LicenseType::Educational => "educational",
            LicenseType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LicenseType::Enterprise => "Enterprise",
            LicenseType::Professional => "Professional",
            LicenseType::Standard => "Standard",
            LicenseType::Educational => "Educational",
            LicenseType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    LicenseType,
    Message,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Company name is required")]
    CompanyRequired,
    #[error("Please select a license type")]
    LicenseTypeRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

/// Raw values as typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: Option<LicenseType>,
    pub message: String,
}

/// A form that passed validation.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: LicenseType,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactSubmission, Vec<(Field, FieldError)>> {
        let mut errors = Vec::new();

        if self.name.chars().count() < 2 {
            errors.push((Field::Name, FieldError::NameTooShort));
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.push((Field::Email, FieldError::InvalidEmail));
        }
        if self.company.is_empty() {
            errors.push((Field::Company, FieldError::CompanyRequired));
        }
        if self.license_type.is_none() {
            errors.push((Field::LicenseType, FieldError::LicenseTypeRequired));
        }
        if self.message.chars().count() < 10 {
            errors.push((Field::Message, FieldError::MessageTooShort));
        }

        match self.license_type {
            Some(license_type) if errors.is_empty() => Ok(ContactSubmission {
                name: self.name.clone(),
                email: self.email.clone(),
                company: self.company.clone(),
                license_type,
                message: self.message.clone(),
            }),
            _ => Err(errors),
        }
    }
}

pub fn error_for(errors: &[(Field, FieldError)], field: Field) -> Option<&FieldError> {
    errors
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, error)| error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Sarah Johnson".to_string(),
            email: "sarah@quantum.example".to_string(),
            company: "Quantum Innovations".to_string(),
            license_type: Some(LicenseType::Enterprise),
            message: "We have forty unused seats to sell.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_produces_submission() {
        let submission = valid_form().validate().expect("valid");
        assert_eq!(submission.license_type, LicenseType::Enterprise);
        let json = serde_json::to_string(&submission).unwrap();
        assert!(json.contains("\"licenseType\":\"enterprise\""));
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Email, Field::Company, Field::LicenseType, Field::Message]
        );
    }

    #[test]
    fn test_field_messages() {
        let form = ContactForm {
            name: "A".to_string(),
            message: "too short".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            error_for(&errors, Field::Name).map(|e| e.to_string()),
            Some("Name must be at least 2 characters".to_string())
        );
        assert_eq!(error_for(&errors, Field::Message), Some(&FieldError::MessageTooShort));
        assert_eq!(error_for(&errors, Field::Email), None);
    }

    #[test]
    fn test_email_validation() {
        for good in ["a@b.co", "first.last+tag@mail.example.org"] {
            let form = ContactForm { email: good.to_string(), ..valid_form() };
            assert!(form.validate().is_ok(), "{} should pass", good);
        }
        for bad in ["", "plain", "a@b", "a@@b.com", "a b@c.com", "a@-b.com"] {
            let form = ContactForm { email: bad.to_string(), ..valid_form() };
            assert_eq!(
                form.validate().unwrap_err(),
                vec![(Field::Email, FieldError::InvalidEmail)],
                "{} should fail",
                bad
            );
        }
    }

    #[test]
    fn test_license_type_round_trip_values() {
        for license_type in LicenseType::ALL {
            assert_eq!(LicenseType::from_value(license_type.value()), Some(license_type));
        }
        assert_eq!(LicenseType::from_value(""), None);
    }
}

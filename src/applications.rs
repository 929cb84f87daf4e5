//! Mock job-application submission.
//!
//! Submissions never leave the device, the app only validates the form
//! and records the application locally. Applying to a job id that has
//! dropped out of the current feed is allowed, same as bookmarks.

use std::time::SystemTime;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref CONTACT_RE: Regex = Regex::new(r"^\+?[0-9 ().\-]+$").unwrap();
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{0} must not be empty")]
    MissingField(&'static str),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("invalid contact number")]
    InvalidContactNumber,
}

/// What the application form collects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    /// The "why should we hire you" field.
    pub cover_letter: String,
}

impl ApplicationForm {
    /// Validates the form. All fields are required; email and contact
    /// number must additionally look plausible.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        for (value, field) in [
            (&self.job_id, "job id"),
            (&self.name, "name"),
            (&self.email, "email"),
            (&self.contact_number, "contact number"),
            (&self.cover_letter, "cover letter"),
        ] {
            if value.trim().is_empty() {
                return Err(ApplicationError::MissingField(field));
            }
        }

        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ApplicationError::InvalidEmail);
        }

        let contact = self.contact_number.trim();
        let digits = contact.chars().filter(char::is_ascii_digit).count();
        if !CONTACT_RE.is_match(contact) || !(7..=15).contains(&digits) {
            return Err(ApplicationError::InvalidContactNumber);
        }

        Ok(())
    }
}

/// A recorded submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedApplication {
    pub id: String,
    pub job_id: String,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub cover_letter: String,
    pub submitted_at: SystemTime,
}

impl SubmittedApplication {
    pub(crate) fn from_form(form: ApplicationForm) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            job_id: form.job_id,
            name: form.name,
            email: form.email,
            contact_number: form.contact_number,
            cover_letter: form.cover_letter,
            submitted_at: SystemTime::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ApplicationForm {
        ApplicationForm {
            job_id: "job-1".to_string(),
            name: "Juan dela Cruz".to_string(),
            email: "juan@example.com".to_string(),
            contact_number: "+63 912 345 6789".to_string(),
            cover_letter: "I ship things.".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        assert_eq!(
            form.validate(),
            Err(ApplicationError::MissingField("name"))
        );

        let mut form = valid_form();
        form.cover_letter = String::new();
        assert_eq!(
            form.validate(),
            Err(ApplicationError::MissingField("cover letter"))
        );
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        for email in ["plainaddress", "a@b", "a b@c.com", "@no-user.com"] {
            let mut form = valid_form();
            form.email = email.to_string();
            assert_eq!(form.validate(), Err(ApplicationError::InvalidEmail));
        }
    }

    #[test]
    fn test_malformed_contact_number_is_rejected() {
        for contact in ["12345", "not a number", "1234567890123456", "++123456789"] {
            let mut form = valid_form();
            form.contact_number = contact.to_string();
            assert_eq!(
                form.validate(),
                Err(ApplicationError::InvalidContactNumber)
            );
        }
    }

    #[test]
    fn test_common_contact_formats_are_accepted() {
        for contact in ["09123456789", "+639123456789", "(02) 8123-4567", "912 345 6789"] {
            let mut form = valid_form();
            form.contact_number = contact.to_string();
            assert_eq!(form.validate(), Ok(()), "rejected {}", contact);
        }
    }

    #[test]
    fn test_submission_mints_fresh_ids() {
        let first = SubmittedApplication::from_form(valid_form());
        let second = SubmittedApplication::from_form(valid_form());
        assert_ne!(first.id, second.id);
        assert_eq!(first.job_id, "job-1");
    }
}

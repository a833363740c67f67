//! Record assembly shared by the format readers.

use crate::domain::EmailAddress;
use crate::models::contact::normalize_phone_numbers;
use crate::models::Contact;
use thiserror::Error;

/// Why a single source record produced no contact.
///
/// Readers log these and move on; they never reach the caller.
#[derive(Debug, Error)]
pub(crate) enum RecordError {
    #[error("record has no usable name")]
    MissingName,

    #[error("record has no phone numbers")]
    MissingPhone,

    #[error("malformed CSV row: {0}")]
    Csv(#[from] csv::Error),
}

/// Field values collected from one source record.
#[derive(Debug, Default)]
pub(crate) struct ContactDraft {
    name: Option<String>,
    phones: Vec<String>,
    photo_uri: Option<String>,
    email: Option<EmailAddress>,
}

impl ContactDraft {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        let name = name.trim();
        self.name = (!name.is_empty()).then(|| name.to_string());
    }

    pub(crate) fn has_name(&self) -> bool {
        self.name.is_some()
    }

    pub(crate) fn push_phone(&mut self, phone: &str) {
        self.phones.push(phone.to_string());
    }

    pub(crate) fn set_photo_uri(&mut self, uri: &str) {
        let uri = uri.trim();
        if !uri.is_empty() {
            self.photo_uri = Some(uri.to_string());
        }
    }

    pub(crate) fn set_email(&mut self, email: EmailAddress) {
        self.email = Some(email);
    }

    /// Build the contact, enforcing the name and phone invariant.
    pub(crate) fn finish(self) -> Result<Contact, RecordError> {
        let name = self.name.ok_or(RecordError::MissingName)?;
        let phones = normalize_phone_numbers(self.phones);
        if phones.is_empty() {
            return Err(RecordError::MissingPhone);
        }

        let contact = Contact::new(&name, &phones).map_err(|_| RecordError::MissingName)?;
        Ok(contact.with_photo_uri(self.photo_uri).with_email(self.email))
    }
}

//! Canonical contact record.

use crate::domain::{ContactId, EmailAddress, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A contact produced by the import engine.
///
/// A contact always has a non-blank name and at least one non-blank phone
/// number. Values are immutable: edits go through the `with_*` methods,
/// which return a new record with the same id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", try_from = "StoredContact")]
pub struct Contact {
    id: ContactId,
    name: String,
    phone_numbers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<EmailAddress>,
}

/// Wire shape accepted when reading a contact back from storage.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredContact {
    #[serde(default)]
    id: ContactId,
    name: String,
    #[serde(default)]
    phone_numbers: Vec<String>,
    #[serde(default)]
    photo_uri: Option<String>,
    #[serde(default)]
    email: Option<EmailAddress>,
}

impl TryFrom<StoredContact> for Contact {
    type Error = ValidationError;

    fn try_from(stored: StoredContact) -> Result<Self, Self::Error> {
        Ok(Contact::new(stored.name, stored.phone_numbers)?
            .with_id(stored.id)
            .with_photo_uri(stored.photo_uri)
            .with_email(stored.email))
    }
}

impl Contact {
    /// Create a contact with a fresh id.
    ///
    /// The name is trimmed and the phone list is normalised with
    /// [`normalize_phone_numbers`].
    ///
    /// # Errors
    ///
    /// `EmptyName` if the trimmed name is blank, `NoPhoneNumbers` if no
    /// phone survives normalisation.
    pub fn new<I, S>(name: impl AsRef<str>, phone_numbers: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let phone_numbers = normalize_phone_numbers(phone_numbers);
        if phone_numbers.is_empty() {
            return Err(ValidationError::NoPhoneNumbers);
        }

        Ok(Self {
            id: ContactId::generate(),
            name: name.to_string(),
            phone_numbers,
            photo_uri: None,
            email: None,
        })
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phone numbers in first-seen order, without duplicates.
    pub fn phone_numbers(&self) -> &[String] {
        &self.phone_numbers
    }

    pub fn primary_phone(&self) -> &str {
        // Constructor guarantees at least one entry
        self.phone_numbers.first().map(String::as_str).unwrap_or_default()
    }

    pub fn photo_uri(&self) -> Option<&str> {
        self.photo_uri.as_deref()
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// Same record under a different id.
    pub fn with_id(mut self, id: ContactId) -> Self {
        self.id = id;
        self
    }

    /// Renamed copy.
    ///
    /// # Errors
    ///
    /// `EmptyName` if the new name is blank.
    pub fn with_name(&self, name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            ..self.clone()
        })
    }

    /// Copy with a replaced phone list.
    ///
    /// # Errors
    ///
    /// `NoPhoneNumbers` if nothing is left after normalisation.
    pub fn with_phone_numbers<I, S>(&self, phone_numbers: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phone_numbers = normalize_phone_numbers(phone_numbers);
        if phone_numbers.is_empty() {
            return Err(ValidationError::NoPhoneNumbers);
        }
        Ok(Self {
            phone_numbers,
            ..self.clone()
        })
    }

    pub fn with_photo_uri(mut self, photo_uri: Option<String>) -> Self {
        self.photo_uri = photo_uri
            .map(|uri| uri.trim().to_string())
            .filter(|uri| !uri.is_empty());
        self
    }

    pub fn with_email(mut self, email: Option<EmailAddress>) -> Self {
        self.email = email;
        self
    }
}

/// Trim each value, drop blanks and keep the first occurrence of each number.
pub fn normalize_phone_numbers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|phone| phone.as_ref().trim().to_string())
        .filter(|phone| !phone.is_empty())
        .filter(|phone| seen.insert(phone.clone()))
        .collect()
}

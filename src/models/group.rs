//! Contact group: the named batch produced by one import.

use super::contact::Contact;
use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// A named, ordered list of contacts stored as one unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactGroup {
    /// Unique identifier, also the storage key
    pub id: ContactId,

    /// Display name (defaults to the imported file's stem)
    pub name: String,

    /// Contacts in import order
    #[serde(default)]
    pub contacts: Vec<Contact>,

    /// When the group was imported (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported_at: Option<String>,
}

impl ContactGroup {
    /// Create a new group with a fresh id.
    pub fn new(name: impl Into<String>, contacts: Vec<Contact>) -> Self {
        Self {
            id: ContactId::generate(),
            name: name.into(),
            contacts,
            imported_at: None,
        }
    }

    /// Group an import result under the file's name without its extension.
    pub fn from_import(file_name: &str, contacts: Vec<Contact>) -> Self {
        let mut group = Self::new(group_name_for_file(file_name), contacts);
        group.imported_at = Some(chrono::Utc::now().to_rfc3339());
        group
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Look up a contact by id.
    pub fn contact(&self, contact_id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id().as_str() == contact_id)
    }

    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Copy without the given contact. Unknown ids leave the list unchanged.
    pub fn without_contact(&self, contact_id: &str) -> Self {
        Self {
            contacts: self
                .contacts
                .iter()
                .filter(|c| c.id().as_str() != contact_id)
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Copy with the contact sharing `updated`'s id replaced in place.
    pub fn with_updated_contact(&self, updated: Contact) -> Self {
        Self {
            contacts: self
                .contacts
                .iter()
                .map(|c| {
                    if c.id() == updated.id() {
                        updated.clone()
                    } else {
                        c.clone()
                    }
                })
                .collect(),
            ..self.clone()
        }
    }
}

/// `"family.backup.vcf"` -> `"family.backup"`; names without a usable stem are kept whole.
pub fn group_name_for_file(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.trim().is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

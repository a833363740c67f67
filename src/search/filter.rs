//! Query filtering over contact groups.

use crate::models::{Contact, ContactGroup};

/// A normalised search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Build a query. Whitespace is part of the needle, so `" lee"` only
    /// matches where a word starts with "lee".
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// A blank (empty or all-whitespace) query matches everything.
    pub fn is_blank(&self) -> bool {
        self.needle.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        if self.is_blank() {
            return true;
        }
        contact.name().to_lowercase().contains(&self.needle)
            || contact
                .phone_numbers()
                .iter()
                .any(|phone| phone.to_lowercase().contains(&self.needle))
    }
}

/// Whether `contact`'s name or any phone number contains `query`, ignoring case.
pub fn contact_matches(contact: &Contact, query: &str) -> bool {
    SearchQuery::new(query).matches(contact)
}

/// Filter every group's contacts by `query`.
///
/// Groups are always returned, in input order, even when none of their
/// contacts match. A blank query returns the groups unchanged.
pub fn filter_groups(groups: &[ContactGroup], query: &str) -> Vec<ContactGroup> {
    let query = SearchQuery::new(query);
    if query.is_blank() {
        return groups.to_vec();
    }

    groups
        .iter()
        .map(|group| ContactGroup {
            contacts: group
                .contacts
                .iter()
                .filter(|c| query.matches(c))
                .cloned()
                .collect(),
            ..group.clone()
        })
        .collect()
}

//! Contact book service.
//!
//! Import-and-save, group edits, contact lookup and search.

use crate::domain::ValidationError;
use crate::error::{StorageError, StorageResult};
use crate::import;
use crate::models::{Contact, ContactGroup};
use crate::repositories::GroupRepository;
use crate::search;
use async_trait::async_trait;
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, info};

/// Contact book operations.
#[async_trait]
pub trait ContactBookService: Send + Sync {
    /// Import a file and store its contacts as a new group named after it.
    ///
    /// Returns `Ok(None)` when the file yielded no contacts (unsupported
    /// type or nothing usable); nothing is stored in that case.
    async fn import_file(
        &self,
        file_name: &str,
        reader: Box<dyn Read + Send>,
    ) -> StorageResult<Option<ContactGroup>>;

    /// All stored groups.
    async fn groups(&self) -> StorageResult<Vec<ContactGroup>>;

    /// One group by id; `None` when it does not exist.
    async fn group(&self, group_id: &str) -> StorageResult<Option<ContactGroup>>;

    /// All groups, each filtered to contacts matching `query`.
    async fn search(&self, query: &str) -> StorageResult<Vec<ContactGroup>>;

    /// Rename a group.
    async fn rename_group(&self, group_id: &str, name: &str) -> StorageResult<ContactGroup>;

    /// Delete a group and all its contacts.
    async fn delete_group(&self, group_id: &str) -> StorageResult<()>;

    /// Remove one contact from a group.
    async fn delete_contact(&self, group_id: &str, contact_id: &str)
        -> StorageResult<ContactGroup>;

    /// Replace the contact with the same id inside a group.
    async fn update_contact(&self, group_id: &str, contact: Contact)
        -> StorageResult<ContactGroup>;

    /// Look up a contact; `None` when the group or contact does not exist.
    async fn contact(&self, group_id: &str, contact_id: &str) -> StorageResult<Option<Contact>>;
}

/// Default implementation of ContactBookService.
pub struct ContactBookServiceImpl {
    repository: Arc<dyn GroupRepository>,
}

impl ContactBookServiceImpl {
    /// Create a new contact book service.
    pub fn new(repository: Arc<dyn GroupRepository>) -> Self {
        Self { repository }
    }

    async fn existing_group(&self, group_id: &str) -> StorageResult<ContactGroup> {
        self.repository.get(group_id).await
    }
}

#[async_trait]
impl ContactBookService for ContactBookServiceImpl {
    async fn import_file(
        &self,
        file_name: &str,
        reader: Box<dyn Read + Send>,
    ) -> StorageResult<Option<ContactGroup>> {
        let name = file_name.to_string();
        // Parsing is CPU-bound and the reader may block, keep it off the runtime
        let contacts = tokio::task::spawn_blocking(move || import::import_named(&name, reader))
            .await
            .map_err(|e| StorageError::Task(e.to_string()))??;

        if contacts.is_empty() {
            info!(file_name = %file_name, "No importable contacts found");
            return Ok(None);
        }

        let group = ContactGroup::from_import(file_name, contacts);
        self.repository.save(&group).await?;

        info!(
            group_id = %group.id,
            group_name = %group.name,
            contacts = group.len(),
            "Imported contact group"
        );
        Ok(Some(group))
    }

    async fn groups(&self) -> StorageResult<Vec<ContactGroup>> {
        self.repository.list().await
    }

    async fn group(&self, group_id: &str) -> StorageResult<Option<ContactGroup>> {
        match self.repository.get(group_id).await {
            Ok(group) => Ok(Some(group)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn search(&self, query: &str) -> StorageResult<Vec<ContactGroup>> {
        let groups = self.repository.list().await?;
        let filtered = search::filter_groups(&groups, query);
        debug!(
            query = %query,
            matches = filtered.iter().map(ContactGroup::len).sum::<usize>(),
            "Search completed"
        );
        Ok(filtered)
    }

    async fn rename_group(&self, group_id: &str, name: &str) -> StorageResult<ContactGroup> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        let group = self.existing_group(group_id).await?.renamed(name);
        self.repository.save(&group).await?;
        Ok(group)
    }

    async fn delete_group(&self, group_id: &str) -> StorageResult<()> {
        self.repository.delete(group_id).await
    }

    async fn delete_contact(
        &self,
        group_id: &str,
        contact_id: &str,
    ) -> StorageResult<ContactGroup> {
        let group = self.existing_group(group_id).await?;
        if group.contact(contact_id).is_none() {
            return Err(StorageError::NotFound(format!(
                "Contact {} not found in group {}",
                contact_id, group_id
            )));
        }

        let group = group.without_contact(contact_id);
        self.repository.save(&group).await?;
        Ok(group)
    }

    async fn update_contact(
        &self,
        group_id: &str,
        contact: Contact,
    ) -> StorageResult<ContactGroup> {
        let group = self.existing_group(group_id).await?;
        if group.contact(contact.id().as_str()).is_none() {
            return Err(StorageError::NotFound(format!(
                "Contact {} not found in group {}",
                contact.id(),
                group_id
            )));
        }

        let group = group.with_updated_contact(contact);
        self.repository.save(&group).await?;
        Ok(group)
    }

    async fn contact(&self, group_id: &str, contact_id: &str) -> StorageResult<Option<Contact>> {
        Ok(self
            .group(group_id)
            .await?
            .and_then(|group| group.contact(contact_id).cloned()))
    }
}

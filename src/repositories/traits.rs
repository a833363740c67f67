use crate::error::StorageResult;
use crate::models::ContactGroup;
use async_trait::async_trait;

/// Storage for contact groups.
///
/// Groups are stored and replaced whole; there is no partial update.
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Insert or replace a group under its id.
    async fn save(&self, group: &ContactGroup) -> StorageResult<()>;

    /// All readable groups. Entries that cannot be decoded are skipped.
    async fn list(&self) -> StorageResult<Vec<ContactGroup>>;

    /// Retrieve a single group by ID.
    async fn get(&self, id: &str) -> StorageResult<ContactGroup>;

    /// Delete a group. Deleting an unknown id succeeds.
    async fn delete(&self, id: &str) -> StorageResult<()>;
}

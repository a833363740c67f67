use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use vcf_contacts::error::{StorageError, StorageResult};
use vcf_contacts::models::ContactGroup;
use vcf_contacts::repositories::GroupRepository;

/// Mock group repository for testing.
///
/// Provides an in-memory implementation of GroupRepository that can be
/// seeded with groups and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockGroupRepository {
    groups: Arc<Mutex<HashMap<String, ContactGroup>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockGroupRepository {
    /// Create a new empty MockGroupRepository.
    pub fn new() -> Self {
        Self {
            groups: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a group to the mock repository.
    pub fn add_group(&self, group: ContactGroup) {
        let mut groups = self.groups.lock().unwrap();
        groups.insert(group.id.as_str().to_string(), group);
    }

    /// Snapshot of a stored group.
    pub fn stored(&self, id: &str) -> Option<ContactGroup> {
        self.groups.lock().unwrap().get(id).cloned()
    }

    /// Number of stored groups.
    pub fn len(&self) -> usize {
        self.groups.lock().unwrap().len()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockGroupRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroupRepository for MockGroupRepository {
    async fn save(&self, group: &ContactGroup) -> StorageResult<()> {
        self.track_call("save");
        self.add_group(group.clone());
        Ok(())
    }

    async fn list(&self) -> StorageResult<Vec<ContactGroup>> {
        self.track_call("list");
        let groups = self.groups.lock().unwrap();
        let mut result: Vec<ContactGroup> = groups.values().cloned().collect();
        result.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(result)
    }

    async fn get(&self, id: &str) -> StorageResult<ContactGroup> {
        self.track_call("get");
        let groups = self.groups.lock().unwrap();
        groups
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(format!("Group {} not found", id)))
    }

    async fn delete(&self, id: &str) -> StorageResult<()> {
        self.track_call("delete");
        self.groups.lock().unwrap().remove(id);
        Ok(())
    }
}

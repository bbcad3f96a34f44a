//! In-memory password store

use tracing::debug;
use crate::database::PasswordRecord;
use crate::error::Result;
use super::{Listener, PasswordQuery, PasswordStore, Subscribers, SubscriptionId};

/// Password store kept in process memory
///
/// Ordering and ID semantics match `SqliteStore`.
#[derive(Default)]
pub struct MemoryStore {
    records: Vec<PasswordRecord>,
    last_id: i64,
    subscribers: Subscribers,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn select<P>(&self, predicate: P) -> Vec<PasswordRecord>
    where
        P: Fn(&PasswordRecord) -> bool,
    {
        let mut result: Vec<PasswordRecord> = self.records.iter().filter(|r| predicate(r)).cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        result
    }

    fn publish(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let mut subscribers = std::mem::take(&mut self.subscribers);
        subscribers.notify(|query| self.snapshot(query));
        self.subscribers = subscribers;
    }
}

impl PasswordStore for MemoryStore {
    fn insert(&mut self, record: &PasswordRecord) -> Result<i64> {
        let mut stored = record.clone();
        if stored.is_persisted() {
            self.last_id = self.last_id.max(stored.id);
            match self.records.iter_mut().find(|r| r.id == stored.id) {
                Some(existing) => *existing = stored.clone(),
                None => self.records.push(stored.clone()),
            }
        } else {
            self.last_id += 1;
            stored.id = self.last_id;
            self.records.push(stored.clone());
        }
        debug!(id = stored.id, folder = ?stored.folder_name, "inserted password");
        self.publish();
        Ok(stored.id)
    }

    fn delete(&mut self, record: &PasswordRecord) -> Result<()> {
        self.records.retain(|r| r.id != record.id);
        self.publish();
        Ok(())
    }

    fn delete_by_folder(&mut self, folder_name: &str) -> Result<()> {
        self.records.retain(|r| r.folder_name.as_deref() != Some(folder_name));
        self.publish();
        Ok(())
    }

    fn query_all(&self) -> Result<Vec<PasswordRecord>> {
        Ok(self.select(|_| true))
    }

    fn query_unfoldered(&self) -> Result<Vec<PasswordRecord>> {
        Ok(self.select(|r| r.folder().is_none()))
    }

    fn query_by_folder(&self, folder_name: &str) -> Result<Vec<PasswordRecord>> {
        Ok(self.select(|r| r.folder_name.as_deref() == Some(folder_name)))
    }

    fn query_folder_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.records.iter()
            .filter_map(|r| r.folder().map(str::to_string))
            .collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    fn subscribe(&mut self, query: PasswordQuery, listener: Listener) -> Result<SubscriptionId> {
        let initial = self.snapshot(&query)?;
        Ok(self.subscribers.add(query, listener, initial))
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }
}

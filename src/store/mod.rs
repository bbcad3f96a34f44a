//! Password persistence
//!
//! `PasswordStore` is the seam between the vault logic and storage.
//! Queries are observable: a subscriber receives the current result
//! immediately and again whenever a mutation changes it.

mod observer;
mod sqlite;
mod memory;

pub use observer::{Listener, Subscribers, SubscriptionId};
pub use sqlite::SqliteStore;
pub use memory::MemoryStore;

use crate::database::PasswordRecord;
use crate::error::Result;

/// An observable query over stored passwords
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordQuery {
    /// All passwords, newest first
    All,
    /// Passwords without a folder, newest first
    Unfoldered,
    /// Passwords in one folder, newest first
    ByFolder(String),
    /// Distinct folder names, ascending
    FolderNames,
}

/// Result of running a `PasswordQuery`
#[derive(Debug, Clone, PartialEq)]
pub enum QuerySnapshot {
    /// Password list
    Passwords(Vec<PasswordRecord>),
    /// Folder name list
    Folders(Vec<String>),
}

impl QuerySnapshot {
    /// Passwords in this snapshot (empty for a folder list)
    pub fn passwords(&self) -> &[PasswordRecord] {
        match self {
            QuerySnapshot::Passwords(records) => records,
            QuerySnapshot::Folders(_) => &[],
        }
    }

    /// Folder names in this snapshot (empty for a password list)
    pub fn folders(&self) -> &[String] {
        match self {
            QuerySnapshot::Folders(names) => names,
            QuerySnapshot::Passwords(_) => &[],
        }
    }

    /// Number of entries in the snapshot
    pub fn len(&self) -> usize {
        match self {
            QuerySnapshot::Passwords(records) => records.len(),
            QuerySnapshot::Folders(names) => names.len(),
        }
    }

    /// Check if the snapshot has no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Storage for password records
pub trait PasswordStore {
    /// Insert a record and return its ID.
    ///
    /// A record with `id == 0` gets a new ID; a record with an existing ID
    /// replaces the stored one.
    fn insert(&mut self, record: &PasswordRecord) -> Result<i64>;

    /// Delete a record by its ID
    fn delete(&mut self, record: &PasswordRecord) -> Result<()>;

    /// Delete all records tagged with the folder name
    fn delete_by_folder(&mut self, folder_name: &str) -> Result<()>;

    /// All records, newest first
    fn query_all(&self) -> Result<Vec<PasswordRecord>>;

    /// Records without a folder, newest first
    fn query_unfoldered(&self) -> Result<Vec<PasswordRecord>>;

    /// Records in a folder, newest first
    fn query_by_folder(&self, folder_name: &str) -> Result<Vec<PasswordRecord>>;

    /// Distinct folder names, ascending
    fn query_folder_names(&self) -> Result<Vec<String>>;

    /// Subscribe to a query.
    ///
    /// The listener is called with the current result before this returns,
    /// then again each time a mutation changes the result.
    fn subscribe(&mut self, query: PasswordQuery, listener: Listener) -> Result<SubscriptionId>;

    /// Remove a subscription, returns false if it was not registered
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    /// Run a query once
    fn snapshot(&self, query: &PasswordQuery) -> Result<QuerySnapshot> {
        Ok(match query {
            PasswordQuery::All => QuerySnapshot::Passwords(self.query_all()?),
            PasswordQuery::Unfoldered => QuerySnapshot::Passwords(self.query_unfoldered()?),
            PasswordQuery::ByFolder(name) => QuerySnapshot::Passwords(self.query_by_folder(name)?),
            PasswordQuery::FolderNames => QuerySnapshot::Folders(self.query_folder_names()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_accessors() {
        let record = PasswordRecord::new("a", 0.0, "L", None, 1);
        let passwords = QuerySnapshot::Passwords(vec![record.clone()]);
        assert_eq!(passwords.passwords(), &[record]);
        assert!(passwords.folders().is_empty());
        assert_eq!(passwords.len(), 1);

        let folders = QuerySnapshot::Folders(vec![]);
        assert!(folders.is_empty());
        assert!(folders.passwords().is_empty());
    }
}

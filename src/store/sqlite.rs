//! SQLite-backed password store

use std::path::Path;
use rusqlite::Connection;
use tracing::debug;
use crate::database::{Database, PasswordRecord, queries};
use crate::error::Result;
use super::{Listener, PasswordQuery, PasswordStore, QuerySnapshot, Subscribers, SubscriptionId};

/// Password store persisted in a SQLite database
pub struct SqliteStore {
    db: Database,
    subscribers: Subscribers,
}

impl SqliteStore {
    /// Open (or create) the store at the specified database path
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self::new(Database::open(path)?))
    }

    /// Open a store that lives only in memory
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    /// Wrap an already opened database
    pub fn new(db: Database) -> Self {
        Self {
            db,
            subscribers: Subscribers::default(),
        }
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        self.db.path()
    }

    fn publish(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let conn = self.db.connection();
        self.subscribers.notify(|query| snapshot(conn, query));
    }
}

fn snapshot(conn: &Connection, query: &PasswordQuery) -> Result<QuerySnapshot> {
    Ok(match query {
        PasswordQuery::All => QuerySnapshot::Passwords(queries::get_all_passwords(conn)?),
        PasswordQuery::Unfoldered => QuerySnapshot::Passwords(queries::get_passwords_without_folder(conn)?),
        PasswordQuery::ByFolder(name) => QuerySnapshot::Passwords(queries::get_passwords_by_folder(conn, name)?),
        PasswordQuery::FolderNames => QuerySnapshot::Folders(queries::get_folder_names(conn)?),
    })
}

impl PasswordStore for SqliteStore {
    fn insert(&mut self, record: &PasswordRecord) -> Result<i64> {
        let id = queries::insert_password(self.db.connection(), record)?;
        debug!(id, folder = ?record.folder_name, "inserted password");
        self.publish();
        Ok(id)
    }

    fn delete(&mut self, record: &PasswordRecord) -> Result<()> {
        let count = queries::delete_password(self.db.connection(), record.id)?;
        debug!(id = record.id, count, "deleted password");
        self.publish();
        Ok(())
    }

    fn delete_by_folder(&mut self, folder_name: &str) -> Result<()> {
        let count = queries::delete_passwords_by_folder(self.db.connection(), folder_name)?;
        debug!(folder = folder_name, count, "deleted folder");
        self.publish();
        Ok(())
    }

    fn query_all(&self) -> Result<Vec<PasswordRecord>> {
        queries::get_all_passwords(self.db.connection())
    }

    fn query_unfoldered(&self) -> Result<Vec<PasswordRecord>> {
        queries::get_passwords_without_folder(self.db.connection())
    }

    fn query_by_folder(&self, folder_name: &str) -> Result<Vec<PasswordRecord>> {
        queries::get_passwords_by_folder(self.db.connection(), folder_name)
    }

    fn query_folder_names(&self) -> Result<Vec<String>> {
        queries::get_folder_names(self.db.connection())
    }

    fn subscribe(&mut self, query: PasswordQuery, listener: Listener) -> Result<SubscriptionId> {
        let initial = snapshot(self.db.connection(), &query)?;
        Ok(self.subscribers.add(query, listener, initial))
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }
}

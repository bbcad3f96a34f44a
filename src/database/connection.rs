//! Database connection management

use std::path::{Path, PathBuf};
use rusqlite::Connection;
use tracing::debug;
use crate::error::Result;
use super::schema;

/// Path reported for in-memory databases
const MEMORY_PATH: &str = ":memory:";

/// Database connection wrapper
pub struct Database {
    /// Path to the database file
    path: PathBuf,
    /// SQLite connection
    conn: Connection,
}

impl Database {
    /// Open a database at the specified path, creating the schema if needed
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init(path.to_path_buf(), conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(PathBuf::from(MEMORY_PATH), conn)
    }

    fn init(path: PathBuf, conn: Connection) -> Result<Self> {
        for sql in schema::CREATE_ALL_TABLES {
            conn.execute(sql, [])?;
        }
        debug!(path = %path.display(), "opened password database");

        Ok(Self {
            path,
            conn,
        })
    }

    /// Get a reference to the connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Get the database path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

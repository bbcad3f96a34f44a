//! SQL query operations for database access
//!
//! This module provides low-level query functions for database operations.
//! For business-level operations, use the Vault API.

use rusqlite::{Connection, Row, params};
use crate::error::Result;
use super::models::PasswordRecord;

const SELECT_COLUMNS: &str = "SELECT id, value, entropy, symbols, folder_name, created_at FROM passwords";

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<PasswordRecord> {
    Ok(PasswordRecord {
        id: row.get(0)?,
        value: row.get(1)?,
        entropy: row.get(2)?,
        symbols: row.get(3)?,
        folder_name: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn query_records<P: rusqlite::Params>(conn: &Connection, filter: &str, params: P) -> Result<Vec<PasswordRecord>> {
    let sql = format!("{} {} ORDER BY created_at DESC, id DESC", SELECT_COLUMNS, filter);
    let mut stmt = conn.prepare(&sql)?;
    let records = stmt.query_map(params, record_from_row)?;
    records.collect::<std::result::Result<Vec<_>, _>>().map_err(Into::into)
}

// ============================================================================
// Password mutations
// ============================================================================

/// Insert a password and return its row ID.
///
/// A record with `id == 0` gets a new ID; any other ID replaces the
/// existing row with that ID.
pub fn insert_password(conn: &Connection, record: &PasswordRecord) -> Result<i64> {
    if record.is_persisted() {
        conn.execute(
            "INSERT OR REPLACE INTO passwords (id, value, entropy, symbols, folder_name, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![record.id, record.value, record.entropy, record.symbols, record.folder_name, record.created_at],
        )?;
        Ok(record.id)
    } else {
        conn.execute(
            "INSERT INTO passwords (value, entropy, symbols, folder_name, created_at)
             VALUES (?, ?, ?, ?, ?)",
            params![record.value, record.entropy, record.symbols, record.folder_name, record.created_at],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

/// Delete a password by ID, returns the number of removed rows
pub fn delete_password(conn: &Connection, id: i64) -> Result<usize> {
    let count = conn.execute("DELETE FROM passwords WHERE id = ?", params![id])?;
    Ok(count)
}

/// Delete every password tagged with the folder name
pub fn delete_passwords_by_folder(conn: &Connection, folder_name: &str) -> Result<usize> {
    let count = conn.execute("DELETE FROM passwords WHERE folder_name = ?", params![folder_name])?;
    Ok(count)
}

// ============================================================================
// Password queries
// ============================================================================

/// Get all passwords, newest first
pub fn get_all_passwords(conn: &Connection) -> Result<Vec<PasswordRecord>> {
    query_records(conn, "", [])
}

/// Get passwords without a folder, newest first
pub fn get_passwords_without_folder(conn: &Connection) -> Result<Vec<PasswordRecord>> {
    query_records(conn, "WHERE folder_name IS NULL OR folder_name = ''", [])
}

/// Get passwords in a folder, newest first
pub fn get_passwords_by_folder(conn: &Connection, folder_name: &str) -> Result<Vec<PasswordRecord>> {
    query_records(conn, "WHERE folder_name = ?", params![folder_name])
}

/// Get distinct non-empty folder names in ascending order
pub fn get_folder_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT DISTINCT folder_name FROM passwords
         WHERE folder_name IS NOT NULL AND folder_name != ''
         ORDER BY folder_name ASC"
    )?;
    let names = stmt.query_map([], |row| row.get(0))?;
    names.collect::<std::result::Result<Vec<String>, _>>().map_err(Into::into)
}

//! Database schema definitions

/// SQL to create the passwords table
pub const CREATE_PASSWORDS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS passwords (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    value           TEXT NOT NULL,
    entropy         REAL NOT NULL DEFAULT 0,
    symbols         TEXT NOT NULL DEFAULT '',
    folder_name     TEXT,
    created_at      INTEGER NOT NULL
)
"#;

/// SQL to index passwords by folder
pub const CREATE_FOLDER_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_passwords_folder_name ON passwords (folder_name)
"#;

/// All schema statements in order
pub const CREATE_ALL_TABLES: &[&str] = &[
    CREATE_PASSWORDS_TABLE,
    CREATE_FOLDER_INDEX,
];

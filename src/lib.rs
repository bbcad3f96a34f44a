//! # Telros Core
//!
//! Password generator and local password vault.
//!
//! ## Features
//!
//! - Random passwords from configurable character classes
//! - Entropy estimation (`length * log2(alphabet size)`)
//! - SQLite storage with implicit folders (a folder is a tag on passwords)
//! - Observable queries (subscribers are notified when results change)
//! - CSV import and export
//!
//! ## Example
//!
//! ```no_run
//! use telros::{Vault, GenerationSettings};
//! use std::path::Path;
//!
//! let mut vault = Vault::open(Path::new("/path/to/vault")).unwrap();
//!
//! let settings = GenerationSettings { length: 16, ..Default::default() };
//! let generated = vault.generate(&settings);
//! println!("{} ({:.2} bits)", generated.value, generated.entropy);
//!
//! vault.save_generated(&generated, &settings, Some("Work")).unwrap();
//! for folder in vault.get_folders().unwrap() {
//!     println!("{}", folder);
//! }
//! ```

pub mod generator;
pub mod database;
pub mod store;
pub mod csv;
pub mod business;
pub mod config;
pub mod utils;
pub mod error;

// Re-export main types
pub use error::{VaultError, Result};
pub use database::models::PasswordRecord;
pub use generator::{entropy_bits, generate_password, generate_password_with, GenerationResult, GenerationSettings};
pub use store::{PasswordStore, PasswordQuery, QuerySnapshot, SubscriptionId, SqliteStore, MemoryStore};
pub use csv::{ImportOutcome, ImportStatus, ImportError, ExportOutcome};
pub use business::Vault;
pub use config::VaultConfig;

/// Database filename inside a vault folder
pub const DATABASE_FILENAME: &str = "passwords.db";

/// Default password length
pub const PASSWORD_DEFAULT_LENGTH: usize = 12;

/// Header line written by the CSV exporter
pub const CSV_HEADER: &str = "Value,Entropy,Symbols,FolderName,CreatedAt";

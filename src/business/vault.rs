//! Main Vault API
//!
//! This module provides the primary interface for interacting with
//! a password vault.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use crate::config::VaultConfig;
use crate::error::Result;
use crate::generator::{self, GenerationResult, GenerationSettings};
use crate::store::{MemoryStore, PasswordStore, SqliteStore};

/// Main vault interface
///
/// Owns its store; there is no global database handle.
pub struct Vault<S: PasswordStore = SqliteStore> {
    /// Password storage
    pub(crate) store: S,
    /// Vault settings
    pub(crate) config: VaultConfig,
    /// Vault folder, when backed by files
    pub(crate) folder: Option<PathBuf>,
}

impl Vault<SqliteStore> {
    /// Open the vault in a folder, creating folder and database if needed
    pub fn open(folder: &Path) -> Result<Self> {
        Self::open_with_config(folder, VaultConfig::default())
    }

    /// Open the vault in a folder with explicit settings
    pub fn open_with_config(folder: &Path, config: VaultConfig) -> Result<Self> {
        fs::create_dir_all(folder)?;
        let store = SqliteStore::open(&folder.join(&config.database_filename))?;
        info!(folder = %folder.display(), "opened vault");

        Ok(Self {
            store,
            config,
            folder: Some(folder.to_path_buf()),
        })
    }

    /// Get the database path
    pub fn database_path(&self) -> &Path {
        self.store.path()
    }
}

impl Vault<MemoryStore> {
    /// Create a vault that keeps everything in memory
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl<S: PasswordStore> Vault<S> {
    /// Create a vault over an existing store
    pub fn new(store: S) -> Self {
        Self::with_config(store, VaultConfig::default())
    }

    /// Create a vault over an existing store with explicit settings
    pub fn with_config(store: S, config: VaultConfig) -> Self {
        Self {
            store,
            config,
            folder: None,
        }
    }

    /// Get the vault settings
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Get the vault folder, if the vault lives on disk
    pub fn folder(&self) -> Option<&Path> {
        self.folder.as_deref()
    }

    /// Get the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generate a password. Nothing is stored until it is saved.
    pub fn generate(&self, settings: &GenerationSettings) -> GenerationResult {
        generator::generate_password(settings)
    }

    /// Generate a password with the configured default settings
    pub fn generate_default(&self) -> GenerationResult {
        self.generate(&self.config.generation)
    }
}

//! Business logic layer for Telros
//!
//! This module provides the high-level Vault API for generating,
//! saving, deleting, importing and exporting passwords.

pub mod vault;
pub mod passwords;
pub mod transfer;

pub use vault::Vault;

//! Database layer for Telros
//!
//! Handles SQLite database operations including:
//! - Schema creation
//! - Insert/delete operations for password records
//! - Ordered queries for passwords and derived folder names

pub mod models;
pub mod schema;
pub mod connection;
pub mod queries;

pub use connection::Database;
pub use models::*;

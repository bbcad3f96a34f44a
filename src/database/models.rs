//! Data models for Telros database entities

use serde::{Deserialize, Serialize};

/// A stored password
///
/// Records are never edited after creation. A folder is not an entity of
/// its own: it exists as long as at least one record carries its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordRecord {
    /// Row ID assigned by the store (0 = not yet persisted)
    pub id: i64,
    /// Password text
    pub value: String,
    /// Bits of entropy (0 if unknown)
    pub entropy: f64,
    /// Character class flags, e.g. "ULDS" (informational)
    pub symbols: String,
    /// Folder tag (None = ungrouped)
    pub folder_name: Option<String>,
    /// Creation time in milliseconds since the Unix epoch
    pub created_at: i64,
}

impl PasswordRecord {
    /// Create a record that has not been persisted yet
    pub fn new(value: &str, entropy: f64, symbols: &str, folder_name: Option<&str>, created_at: i64) -> Self {
        Self {
            id: 0,
            value: value.to_string(),
            entropy,
            symbols: symbols.to_string(),
            folder_name: folder_name.map(str::to_string),
            created_at,
        }
    }

    /// Check if the store has assigned an ID
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Folder name, with an empty tag treated as no folder
    pub fn folder(&self) -> Option<&str> {
        self.folder_name.as_deref().filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_not_persisted() {
        let record = PasswordRecord::new("Secret1!", 52.0, "ULDS", Some("Work"), 1_700_000_000_000);
        assert_eq!(record.id, 0);
        assert!(!record.is_persisted());
        assert_eq!(record.folder(), Some("Work"));
    }

    #[test]
    fn test_empty_folder_is_ungrouped() {
        let record = PasswordRecord::new("x", 0.0, "L", Some(""), 0);
        assert_eq!(record.folder(), None);

        let record = PasswordRecord::new("x", 0.0, "L", None, 0);
        assert_eq!(record.folder(), None);
    }

    #[test]
    fn test_record_serialization() {
        let record = PasswordRecord::new("abc", 14.1, "L", None, 5);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"value\":\"abc\""));
        assert!(json.contains("\"folder_name\":null"));

        let back: PasswordRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}

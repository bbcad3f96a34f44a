//! Password operations
//!
//! This module provides save, delete and query operations for the Vault.

use tracing::debug;
use crate::database::PasswordRecord;
use crate::error::{VaultError, Result};
use crate::generator::{GenerationResult, GenerationSettings};
use crate::store::{Listener, PasswordQuery, PasswordStore, SubscriptionId};
use crate::utils::{normalize_folder_name, now_millis};
use super::vault::Vault;

impl<S: PasswordStore> Vault<S> {
    /// Save a password record and return it with its assigned ID.
    ///
    /// Rejects blank values, negative or non-finite entropy, and folder
    /// names that are blank after trimming.
    pub fn save_password(&mut self, record: &PasswordRecord) -> Result<PasswordRecord> {
        if record.value.trim().is_empty() {
            return Err(VaultError::ValidationError("Password value cannot be blank".to_string()));
        }
        if !record.entropy.is_finite() || record.entropy < 0.0 {
            return Err(VaultError::ValidationError(
                "Password entropy must be a non-negative number".to_string(),
            ));
        }
        if let Some(folder) = &record.folder_name {
            validate_folder_name(folder)?;
        }

        let id = self.store.insert(record)?;
        debug!(id, "saved password");
        Ok(PasswordRecord { id, ..record.clone() })
    }

    /// Save a generated password.
    ///
    /// `folder_name` is user input: it is trimmed and a blank name
    /// saves the password without a folder.
    pub fn save_generated(
        &mut self,
        generated: &GenerationResult,
        settings: &GenerationSettings,
        folder_name: Option<&str>,
    ) -> Result<PasswordRecord> {
        if generated.is_empty() {
            return Err(VaultError::ValidationError("No generated password to save".to_string()));
        }

        let folder = normalize_folder_name(folder_name);
        let record = PasswordRecord::new(
            &generated.value,
            generated.entropy,
            &settings.symbols_flags(),
            folder.as_deref(),
            now_millis(),
        );
        self.save_password(&record)
    }

    /// Delete a password
    pub fn delete_password(&mut self, record: &PasswordRecord) -> Result<()> {
        self.store.delete(record)
    }

    /// Delete a folder together with all passwords in it
    pub fn delete_folder(&mut self, folder_name: &str) -> Result<()> {
        validate_folder_name(folder_name)?;
        self.store.delete_by_folder(folder_name)
    }

    /// Get all passwords, newest first
    pub fn get_all_passwords(&self) -> Result<Vec<PasswordRecord>> {
        self.store.query_all()
    }

    /// Get passwords that are not in any folder, newest first
    pub fn get_passwords_without_folder(&self) -> Result<Vec<PasswordRecord>> {
        self.store.query_unfoldered()
    }

    /// Get passwords in a folder, newest first
    pub fn get_passwords_by_folder(&self, folder_name: &str) -> Result<Vec<PasswordRecord>> {
        self.store.query_by_folder(folder_name)
    }

    /// Get folder names in ascending order
    pub fn get_folders(&self) -> Result<Vec<String>> {
        self.store.query_folder_names()
    }

    /// Subscribe to a query; see `PasswordStore::subscribe`
    pub fn subscribe(&mut self, query: PasswordQuery, listener: Listener) -> Result<SubscriptionId> {
        self.store.subscribe(query, listener)
    }

    /// Remove a subscription
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }
}

fn validate_folder_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(VaultError::ValidationError("Folder name cannot be blank".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use crate::business::vault::tests::create_test_vault;
    use crate::store::QuerySnapshot;
    use super::*;

    #[test]
    fn test_save_password_assigns_id() {
        let (mut vault, _temp) = create_test_vault();
        let saved = vault.save_password(&PasswordRecord::new("Secret1!", 52.4, "ULDS", None, 1)).unwrap();
        assert!(saved.is_persisted());
        assert_eq!(saved.value, "Secret1!");
        assert_eq!(vault.get_all_passwords().unwrap(), vec![saved]);
    }

    #[test]
    fn test_save_blank_value_rejected() {
        let (mut vault, _temp) = create_test_vault();
        let result = vault.save_password(&PasswordRecord::new("  ", 0.0, "", None, 1));
        assert!(matches!(result, Err(VaultError::ValidationError(_))));
        assert!(vault.get_all_passwords().unwrap().is_empty());
    }

    #[test]
    fn test_save_invalid_entropy_rejected() {
        let (mut vault, _temp) = create_test_vault();
        for entropy in [-5.0, f64::NAN, f64::INFINITY] {
            let result = vault.save_password(&PasswordRecord::new("abc", entropy, "L", None, 1));
            assert!(matches!(result, Err(VaultError::ValidationError(_))));
        }
        assert!(vault.get_all_passwords().unwrap().is_empty());

        let saved = vault.save_password(&PasswordRecord::new("abc", 0.0, "L", None, 1)).unwrap();
        assert_eq!(saved.entropy, 0.0);
    }

    #[test]
    fn test_save_blank_folder_rejected() {
        let (mut vault, _temp) = create_test_vault();
        let result = vault.save_password(&PasswordRecord::new("abc", 0.0, "L", Some("   "), 1));
        assert!(matches!(result, Err(VaultError::ValidationError(_))));
    }

    #[test]
    fn test_save_generated() {
        let (mut vault, _temp) = create_test_vault();
        let settings = GenerationSettings { include_symbols: false, ..Default::default() };
        let generated = vault.generate(&settings);

        let saved = vault.save_generated(&generated, &settings, Some("  Work  ")).unwrap();
        assert_eq!(saved.value, generated.value);
        assert_eq!(saved.entropy, generated.entropy);
        assert_eq!(saved.symbols, "ULD");
        assert_eq!(saved.folder_name.as_deref(), Some("Work"));
        assert!(saved.created_at > 0);
        assert_eq!(vault.get_folders().unwrap(), vec!["Work"]);
    }

    #[test]
    fn test_save_generated_blank_folder_is_ungrouped() {
        let (mut vault, _temp) = create_test_vault();
        let settings = GenerationSettings::default();
        let generated = vault.generate(&settings);

        let saved = vault.save_generated(&generated, &settings, Some("   ")).unwrap();
        assert_eq!(saved.folder_name, None);
        assert_eq!(vault.get_passwords_without_folder().unwrap().len(), 1);
    }

    #[test]
    fn test_save_empty_generated_rejected() {
        let (mut vault, _temp) = create_test_vault();
        let settings = GenerationSettings { length: 0, ..Default::default() };
        let generated = vault.generate(&settings);
        assert!(matches!(
            vault.save_generated(&generated, &settings, None),
            Err(VaultError::ValidationError(_))
        ));
    }

    #[test]
    fn test_delete_password() {
        let (mut vault, _temp) = create_test_vault();
        let saved = vault.save_password(&PasswordRecord::new("abc", 0.0, "L", Some("Only"), 1)).unwrap();
        vault.delete_password(&saved).unwrap();
        assert!(vault.get_all_passwords().unwrap().is_empty());
        // folder disappears with its last password
        assert!(vault.get_folders().unwrap().is_empty());
    }

    #[test]
    fn test_delete_folder_cascades() {
        let (mut vault, _temp) = create_test_vault();
        vault.save_password(&PasswordRecord::new("a", 0.0, "L", Some("Work"), 1)).unwrap();
        vault.save_password(&PasswordRecord::new("b", 0.0, "L", Some("Work"), 2)).unwrap();
        vault.save_password(&PasswordRecord::new("c", 0.0, "L", None, 3)).unwrap();

        vault.delete_folder("Work").unwrap();
        assert!(vault.get_passwords_by_folder("Work").unwrap().is_empty());
        assert_eq!(vault.get_all_passwords().unwrap().len(), 1);

        assert!(matches!(vault.delete_folder(" "), Err(VaultError::ValidationError(_))));
    }

    #[test]
    fn test_subscribe_folders() {
        let (mut vault, _temp) = create_test_vault();
        let seen: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = vault.subscribe(PasswordQuery::FolderNames, Box::new(move |snapshot: &QuerySnapshot| {
            sink.lock().unwrap().push(snapshot.folders().to_vec());
        })).unwrap();

        vault.save_password(&PasswordRecord::new("a", 0.0, "L", Some("Work"), 1)).unwrap();
        vault.save_password(&PasswordRecord::new("b", 0.0, "L", Some("Bank"), 2)).unwrap();
        assert!(vault.unsubscribe(id));
        vault.delete_folder("Bank").unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2], vec!["Bank".to_string(), "Work".to_string()]);
    }
}

//! Import and export operations for the Vault

use std::io::BufRead;
use std::path::{Path, PathBuf};
use crate::csv::{self, ExportOutcome, ImportOutcome};
use crate::database::PasswordRecord;
use crate::error::Result;
use crate::store::PasswordStore;
use super::vault::Vault;

impl<S: PasswordStore> Vault<S> {
    /// Import passwords from a CSV file into a folder named after the file
    pub fn import_csv_file(&mut self, path: &Path) -> ImportOutcome {
        csv::import_csv_file(path, &mut self.store)
    }

    /// Import passwords from CSV text; `file_name` decides the target folder
    pub fn import_csv<R: BufRead>(&mut self, reader: R, file_name: Option<&str>) -> ImportOutcome {
        csv::import_csv(reader, file_name, &mut self.store)
    }

    /// Export the given passwords to a CSV file
    pub fn export_csv_file(&self, records: &[PasswordRecord], path: &Path) -> Result<ExportOutcome> {
        csv::export_csv_file(records, path)
    }

    /// Export one folder (or the ungrouped passwords when `folder_name` is
    /// `None`) into `dir`, using the default export file name.
    ///
    /// Returns the outcome and the file path. The file is only created when
    /// there is something to export.
    pub fn export_folder(&self, folder_name: Option<&str>, dir: &Path) -> Result<(ExportOutcome, PathBuf)> {
        let records = match folder_name {
            Some(name) => self.get_passwords_by_folder(name)?,
            None => self.get_passwords_without_folder()?,
        };
        let path = dir.join(csv::default_export_file_name(folder_name));
        let outcome = csv::export_csv_file(&records, &path)?;
        Ok((outcome, path))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use crate::business::vault::tests::create_test_vault;
    use crate::csv::ImportStatus;
    use super::*;

    #[test]
    fn test_import_into_file_folder() {
        let (mut vault, _temp) = create_test_vault();
        let outcome = vault.import_csv(Cursor::new("Value,Entropy\nabc,14.1\nxyz,14.1\n"), Some("Travel.csv"));

        assert_eq!(outcome.status(), ImportStatus::Completed);
        assert_eq!(vault.get_folders().unwrap(), vec!["Travel"]);
        assert_eq!(vault.get_passwords_by_folder("Travel").unwrap().len(), 2);
    }

    #[test]
    fn test_export_folder() {
        let (mut vault, temp) = create_test_vault();
        vault.save_password(&PasswordRecord::new("abc", 14.1, "L", Some("Bank Accounts"), 1)).unwrap();

        let (outcome, path) = vault.export_folder(Some("Bank Accounts"), temp.path()).unwrap();
        assert_eq!(outcome, ExportOutcome::Exported { count: 1 });
        assert_eq!(path, temp.path().join("passwords_bank_accounts.csv"));
        assert!(std::fs::read_to_string(&path).unwrap().contains("\"abc\",14.1,\"L\",\"Bank Accounts\",1"));
    }

    #[test]
    fn test_export_empty_unfiled() {
        let (mut vault, temp) = create_test_vault();
        vault.save_password(&PasswordRecord::new("abc", 0.0, "L", Some("Work"), 1)).unwrap();

        let (outcome, path) = vault.export_folder(None, temp.path()).unwrap();
        assert_eq!(outcome, ExportOutcome::NothingToExport);
        assert!(!path.exists());
    }

    #[test]
    fn test_export_then_import_file() {
        let (mut vault, temp) = create_test_vault();
        vault.save_password(&PasswordRecord::new("Secret1!", 52.4, "ULDS", None, 1)).unwrap();
        vault.save_password(&PasswordRecord::new("hunter2", 36.2, "LD", None, 2)).unwrap();

        let (_, path) = vault.export_folder(None, temp.path()).unwrap();
        let outcome = vault.import_csv_file(&path);
        assert_eq!(outcome.success_count, 2);
        assert_eq!(outcome.target_folder_name.as_deref(), Some("passwords_unfiled"));

        let imported = vault.get_passwords_by_folder("passwords_unfiled").unwrap();
        let mut values: Vec<&str> = imported.iter().map(|r| r.value.as_str()).collect();
        values.sort();
        assert_eq!(values, vec!["Secret1!", "hunter2"]);
    }
}

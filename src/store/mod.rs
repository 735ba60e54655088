use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind},
    path::PathBuf,
};

use log::debug;

use crate::{csv, domain::expense::ExpenseRecord, error::Result};

/// Storage file used by the interactive session, relative to the working
/// directory.
pub const LEDGER_FILE: &str = "expenses.csv";

/// CSV file holding the whole ledger.
///
/// The file is rewritten from scratch on every save; there is no temporary
/// file, so an interrupted save can leave it truncated.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(LEDGER_FILE)
    }
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Load every stored record, in file order.
    ///
    /// A missing file is a fresh ledger and yields no records.
    pub fn load(&self) -> Result<Vec<ExpenseRecord>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no ledger at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let records = csv::read(BufReader::new(file))?;
        debug!(
            "loaded {} expenses from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    pub fn save(&self, records: &[ExpenseRecord]) -> Result<()> {
        let file = File::create(&self.path)?;
        csv::write(records, BufWriter::new(file))?;
        debug!("saved {} expenses to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    use super::*;
    use crate::error::Error;

    fn create_test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path().join(LEDGER_FILE));
        (temp_dir, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_temp_dir, store) = create_test_store();

        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_and_reload() {
        let (_temp_dir, store) = create_test_store();
        let records = vec![
            ExpenseRecord::new("2024-01-10", dec!(50), "Food", "lunch"),
            ExpenseRecord::new("2024-01-20", dec!(30.10), "Food", "dinner"),
        ];

        store.save(&records).unwrap();
        let reloaded = Store::new(store.path()).load().unwrap();

        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded, records);
        assert_eq!(reloaded[1].amount, dec!(30.1));
    }

    #[test]
    fn save_rewrites_the_whole_file() {
        let (_temp_dir, store) = create_test_store();

        store
            .save(&[ExpenseRecord::new("2024-01-10", dec!(50), "Food", "lunch")])
            .unwrap();
        store
            .save(&[ExpenseRecord::new("2024-05-01", dec!(9.99), "Books", "novel")])
            .unwrap();

        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "date,amount,category,description\n2024-05-01,9.99,Books,novel\n"
        );
    }

    #[test]
    fn header_only_file_loads_empty() {
        let (_temp_dir, store) = create_test_store();
        store.save(&[]).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let (_temp_dir, store) = create_test_store();
        fs::write(
            store.path(),
            "date,amount,category,description\n2024-01-10,ten,Food,lunch\n",
        )
        .unwrap();

        assert!(matches!(store.load(), Err(Error::CsvError(_))));
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path());

        assert!(store.load().is_err());
    }
}

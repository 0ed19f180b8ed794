//! File-backed expense store.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;

use gastos_core::api::{ExpenseStore, QueryFilter};
use gastos_core::error::{GastosError, Result};
use gastos_core::models::Expense;

/// [`ExpenseStore`] backed by a single JSON file.
///
/// Good enough for a one-user harness: every operation reads and rewrites
/// the whole file under a lock, so concurrent commands in one process stay
/// consistent.
pub struct JsonStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> Result<Vec<Expense>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| GastosError::Store(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| GastosError::Store(e.to_string()))
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| GastosError::Store(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(expenses)
            .map_err(|e| GastosError::Store(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| GastosError::Store(e.to_string()))
    }
}

#[async_trait]
impl ExpenseStore for JsonStore {
    async fn insert(&self, expense: &Expense) -> Result<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| GastosError::Store(e.to_string()))?;
        let mut expenses = self.load()?;
        expenses.push(expense.clone());
        self.save(&expenses)
    }

    async fn query(&self, filter: &QueryFilter) -> Result<Vec<Expense>> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| GastosError::Store(e.to_string()))?;
        let mut matching: Vec<Expense> = self
            .load()?
            .into_iter()
            .filter(|e| filter.matches(e))
            .collect();
        matching.sort_by_key(|e| e.date);
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn expense(amount: &str, description: &str, date: &str) -> Expense {
        Expense::assemble(
            Decimal::from_str(amount).unwrap(),
            description,
            date,
            NaiveDate::from_ymd_opt(2026, 2, 26).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("expenses.json");

        let store = JsonStore::new(path.clone());
        store
            .insert(&expense("45.90", "BURGER HOUSE", "26/02/2026"))
            .await
            .unwrap();

        let reopened = JsonStore::new(path);
        let rows = reopened.query(&QueryFilter::period(2, 2026)).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "BURGER HOUSE");
    }

    #[tokio::test]
    async fn test_query_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("missing.json"));
        let rows = store.query(&QueryFilter::default()).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_query_orders_by_date() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("expenses.json"));

        store
            .insert(&expense("10.00", "mercado", "20/02/2026"))
            .await
            .unwrap();
        store
            .insert(&expense("5.00", "padaria", "03/02/2026"))
            .await
            .unwrap();

        let rows = store.query(&QueryFilter::period(2, 2026)).await.unwrap();
        assert_eq!(rows[0].description, "padaria");
        assert_eq!(rows[1].description, "mercado");
    }
}

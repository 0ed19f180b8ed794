//! Collaborator interfaces: recognition, storage and the spreadsheet mirror.
//!
//! The core never talks to Telegram, a database or Google Sheets directly;
//! it is handed one implementation of each trait at startup. Retry and
//! backoff belong to the implementations, never to the core.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::error::{GastosError, Result};
use crate::models::expense::Expense;

/// Text recognition for receipt photos.
///
/// `Ok(None)` and empty text both mean "nothing extractable"; the caller
/// turns that into a user-facing rejection.
#[async_trait]
pub trait RecognitionService: Send + Sync {
    async fn recognize(&self, image: &[u8]) -> Result<Option<String>>;
}

/// Filter for read-only store queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFilter {
    /// Restrict to this month (1-12).
    pub month: Option<u32>,
    /// Restrict to this year.
    pub year: Option<i32>,
    /// Restrict to records whose category answers to this name,
    /// case-insensitively (label or alias).
    pub category: Option<String>,
}

impl QueryFilter {
    /// Filter for a month/year pair.
    pub fn period(month: u32, year: i32) -> Self {
        Self {
            month: Some(month),
            year: Some(year),
            category: None,
        }
    }

    /// Add a category name restriction.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether an expense satisfies every set restriction.
    ///
    /// Shared by store implementations so they all agree on matching
    /// semantics; the store still owns ordering.
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(month) = self.month {
            if expense.month != month {
                return false;
            }
        }
        if let Some(year) = self.year {
            if expense.year != year {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !expense.category.matches(category) {
                return false;
            }
        }
        true
    }
}

/// Durable expense storage.
#[async_trait]
pub trait ExpenseStore: Send + Sync {
    /// Persist one expense.
    async fn insert(&self, expense: &Expense) -> Result<()>;

    /// Fetch expenses matching the filter, ordered by date ascending.
    async fn query(&self, filter: &QueryFilter) -> Result<Vec<Expense>>;
}

/// Best-effort spreadsheet mirror.
///
/// A failed append is advisory: the store write it follows is never rolled
/// back.
#[async_trait]
pub trait SheetMirror: Send + Sync {
    /// Append one `[date, amount, description, month, year, category]` row.
    async fn append(&self, row: [String; 6]) -> Result<()>;
}

/// In-memory implementation of [`ExpenseStore`].
///
/// Compiled into the production build, not just tests, so the whole bot can
/// run top-to-bottom without an external database.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Expense>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExpenseStore for MemoryStore {
    async fn insert(&self, expense: &Expense) -> Result<()> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|e| GastosError::Store(e.to_string()))?;
        rows.push(expense.clone());
        Ok(())
    }

    async fn query(&self, filter: &QueryFilter) -> Result<Vec<Expense>> {
        let rows = self
            .rows
            .lock()
            .map_err(|e| GastosError::Store(e.to_string()))?;
        let mut matching: Vec<Expense> = rows.iter().filter(|e| filter.matches(e)).cloned().collect();
        matching.sort_by_key(|e| e.date);
        Ok(matching)
    }
}

/// In-memory implementation of [`SheetMirror`] that records appended rows.
#[derive(Default)]
pub struct MemoryMirror {
    rows: Mutex<Vec<[String; 6]>>,
}

impl MemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows appended so far.
    pub fn rows(&self) -> Vec<[String; 6]> {
        self.rows.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SheetMirror for MemoryMirror {
    async fn append(&self, row: [String; 6]) -> Result<()> {
        let mut rows = self
            .rows
            .lock()
            .map_err(|e| GastosError::Mirror(e.to_string()))?;
        rows.push(row);
        Ok(())
    }
}

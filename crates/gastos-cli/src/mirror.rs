//! CSV stand-in for the spreadsheet mirror.

use std::fs;
use std::fs::OpenOptions;
use std::path::PathBuf;

use async_trait::async_trait;

use gastos_core::api::SheetMirror;
use gastos_core::error::{GastosError, Result};

const HEADER: [&str; 6] = ["date", "amount", "description", "month", "year", "category"];

/// [`SheetMirror`] that appends rows to a local CSV file, mirroring the
/// six-column layout the bot keeps in its spreadsheet.
pub struct CsvMirror {
    path: PathBuf,
}

impl CsvMirror {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SheetMirror for CsvMirror {
    async fn append(&self, row: [String; 6]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| GastosError::Mirror(e.to_string()))?;
        }

        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| GastosError::Mirror(e.to_string()))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if is_new {
            writer
                .write_record(HEADER)
                .map_err(|e| GastosError::Mirror(e.to_string()))?;
        }
        writer
            .write_record(&row)
            .map_err(|e| GastosError::Mirror(e.to_string()))?;
        writer
            .flush()
            .map_err(|e| GastosError::Mirror(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mirror.csv");
        let mirror = CsvMirror::new(path.clone());

        let row = |desc: &str| {
            [
                "2026-02-26".to_string(),
                "45.90".to_string(),
                desc.to_string(),
                "2".to_string(),
                "2026".to_string(),
                "Alimentação".to_string(),
            ]
        };

        mirror.append(row("BURGER HOUSE")).await.unwrap();
        mirror.append(row("PIZZARIA")).await.unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "date,amount,description,month,year,category");
        assert!(lines[1].contains("BURGER HOUSE"));
        assert!(lines[2].contains("PIZZARIA"));
    }
}

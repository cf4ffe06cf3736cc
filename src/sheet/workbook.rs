//! CSV-backed workbook: a directory holding one CSV file per named range.
//!
//! The directory name doubles as the workbook title, e.g.
//! `~/.tutorbill/Fall 2025/sessions.csv`. The invoice counter range is a
//! one-cell file.

use crate::errors::{AppError, AppResult};
use crate::sheet::Spreadsheet;
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvWorkbook {
    dir: PathBuf,
    title: String,
}

impl CsvWorkbook {
    pub fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(AppError::Sheet(format!(
                "workbook directory '{}' not found (run `tutorbill init` first?)",
                dir.display()
            )));
        }
        let title = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "workbook".to_string());
        Ok(Self { dir, title })
    }

    /// Create an empty workbook: one file per range, counter seeded at 0001.
    pub fn create_skeleton(dir: &Path, ranges: &[&str], counter: &str) -> AppResult<()> {
        fs::create_dir_all(dir)?;
        for range in ranges {
            let path = dir.join(format!("{range}.csv"));
            if !path.exists() {
                fs::File::create(&path)?;
            }
        }
        let counter_path = dir.join(format!("{counter}.csv"));
        if !counter_path.exists() {
            fs::write(&counter_path, "0001\n")?;
        }
        Ok(())
    }

    fn range_path(&self, range: &str) -> PathBuf {
        self.dir.join(format!("{range}.csv"))
    }

    fn load(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
        let path = self.range_path(range);
        if !path.exists() {
            return Err(AppError::Sheet(format!(
                "range '{range}' not found in workbook '{}'",
                self.title
            )));
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)?;

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let row: Vec<String> = record.iter().map(|c| c.to_string()).collect();
            // Sheet ranges are often padded with blank rows.
            if row.iter().all(|c| c.trim().is_empty()) {
                continue;
            }
            rows.push(row);
        }
        Ok(rows)
    }

    fn store(&self, range: &str, rows: &[Vec<String>]) -> AppResult<()> {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(self.range_path(range))?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl Spreadsheet for CsvWorkbook {
    fn title(&self) -> &str {
        &self.title
    }

    fn read_range(&self, range: &str) -> AppResult<Vec<Vec<String>>> {
        self.load(range)
    }

    fn read_cell(&self, range: &str) -> AppResult<String> {
        let rows = self.load(range)?;
        rows.first()
            .and_then(|r| r.first())
            .cloned()
            .ok_or_else(|| AppError::Sheet(format!("range '{range}' is empty")))
    }

    fn write_cell(&mut self, range: &str, value: &str) -> AppResult<()> {
        self.store(range, &[vec![value.to_string()]])
    }

    fn write_range_cell(
        &mut self,
        range: &str,
        row: usize,
        col: usize,
        value: &str,
    ) -> AppResult<()> {
        let mut rows = self.load(range)?;
        let cell = rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or_else(|| {
                AppError::Sheet(format!(
                    "cell ({row}, {col}) is outside range '{range}'"
                ))
            })?;
        *cell = value.to_string();
        self.store(range, &rows)
    }
}

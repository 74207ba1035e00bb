use color_eyre::eyre::{eyre, Report, Result};
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// Read-only access to the distinct values of a named column.
pub trait DistinctValues {
    fn n_unique(&self, column: &str) -> Result<usize, Report>;
}

#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub path: PathBuf,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Table {
            path: PathBuf::new(),
            headers: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn from_tsv(path: &Path) -> Result<Self, Report> {
        Table::from_delimited(path, b'\t')
    }

    pub fn from_csv(path: &Path) -> Result<Self, Report> {
        Table::from_delimited(path, b',')
    }

    fn from_delimited(path: &Path, delimiter: u8) -> Result<Self, Report> {
        let mut table = Table::new();

        // init reader from file path
        let mut reader = csv::ReaderBuilder::new().delimiter(delimiter).from_path(path)?;

        // read in headers and convert to String
        let headers = reader.headers()?.iter().map(String::from).collect_vec();

        // read in records, then convert to rows of String
        let records: Vec<csv::StringRecord> = reader
            .records()
            .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()?;
        let rows: Vec<Vec<String>> = records
            .iter()
            .map(|row| row.iter().map(String::from).collect_vec())
            .collect_vec();

        table.headers = headers;
        table.rows = rows;
        table.path = path.to_path_buf();

        Ok(table)
    }

    pub fn header_position(&self, header: &str) -> Result<usize, Report> {
        let pos = self
            .headers
            .iter()
            .position(|h| h == header)
            .ok_or_else(|| {
                eyre!("Column '{header}' was not found in table: {:?}.", self.path)
            })?;

        Ok(pos)
    }
}

impl DistinctValues for Table {
    fn n_unique(&self, column: &str) -> Result<usize, Report> {
        let column_i = self.header_position(column)?;
        let n = self
            .rows
            .iter()
            .map(|row| {
                row.get(column_i).ok_or_else(|| {
                    eyre!("Row is missing column '{column}' in table: {:?}.", self.path)
                })
            })
            .collect::<Result<Vec<_>, Report>>()?
            .into_iter()
            .unique()
            .count();
        Ok(n)
    }
}

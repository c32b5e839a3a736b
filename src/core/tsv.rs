//! Tab-separated input parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::{Error, Result};

/// A parsed tsv file: the header line plus every data row.
///
/// The file is read in a single pass and cached, so the preview and the
/// execution phases always operate on the same rows even if the file
/// changes on disk between them.
#[derive(Debug, Clone)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Field names from the first line. Labels only, never injected as data.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows paired with their 1-based ordinal (header excluded).
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (i + 1, row.as_slice()))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Load a tsv file. The path may start with `~`.
///
/// Rows are split on tab characters only; there is no quoting dialect.
/// Field counts are not validated against the header, so a short row
/// simply leaves higher placeholders without a value.
pub fn load(path: &str) -> Result<Table> {
    let expanded = shellexpand::tilde(path).to_string();
    let file = File::open(&expanded).map_err(|e| Error::Read(path.to_string(), e))?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(line) => split_line(&line.map_err(|e| Error::Read(path.to_string(), e))?),
        None => return Err(Error::EmptyInput(path.to_string())),
    };

    let mut rows = Vec::new();
    for line in lines {
        let line = line.map_err(|e| Error::Read(path.to_string(), e))?;
        rows.push(split_line(&line));
    }

    Ok(Table { header, rows })
}

/// Split one line on tabs. A trailing `\r` from CRLF input is stripped;
/// an empty line becomes an empty row.
fn split_line(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }
    line.split('\t').map(|s| s.to_string()).collect()
}

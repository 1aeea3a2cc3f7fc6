use std::path::Path;

use crate::error::{Result, ShockError};

/// A delimited file in memory: one header row plus data rows, all as
/// raw strings. Typed validation happens in the loaders.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

pub fn read_table(path: &Path) -> Result<CsvTable> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShockError::FileNotFound(path.display().to_string())
        } else {
            ShockError::Io(e)
        }
    })?;

    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let headers = match lines.next() {
        Some(line) => split_record(line),
        None => {
            return Err(ShockError::Schema {
                path: path.display().to_string(),
                detail: "file is empty".to_string(),
            })
        }
    };

    let mut rows = Vec::new();
    for (line_no, line) in lines.enumerate() {
        let fields = split_record(line);
        if fields.len() != headers.len() {
            return Err(ShockError::Schema {
                path: path.display().to_string(),
                detail: format!(
                    "row {} has {} fields, expected {}",
                    line_no + 1,
                    fields.len(),
                    headers.len()
                ),
            });
        }
        rows.push(fields);
    }

    Ok(CsvTable { headers, rows })
}

/// Splits one CSV record on commas, honoring double-quoted fields and
/// doubled quotes inside them. Embedded newlines are not supported.
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current = String::new();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Quotes a field for CSV output when it contains a delimiter or quote.
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

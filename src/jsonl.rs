// JSONL seed file loading

use crate::record::Record;
use eyre::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Read all records from a JSONL file, returning the latest version per ID
///
/// Records come back in the order their ID first appeared. When an ID
/// repeats, the later line replaces the earlier one in place. Blank lines are
/// ignored and malformed lines are logged and skipped. A missing file is an
/// empty collection.
pub fn read_jsonl_latest<T: Record>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        // File doesn't exist yet, return empty list
        return Ok(Vec::new());
    }

    let file = File::open(path).with_context(|| format!("Failed to open JSONL file {}", path.display()))?;
    let reader = BufReader::new(file);
    let mut records: Vec<T> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = ?e,
                    "Failed to read line, skipping"
                );
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let record: T = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    file = ?path,
                    line = line_num + 1,
                    error = %e,
                    "Failed to parse JSON, skipping"
                );
                continue;
            }
        };

        let id = record.id().to_string();
        if let Some(&index) = positions.get(&id) {
            records[index] = record;
        } else {
            positions.insert(id, records.len());
            records.push(record);
        }
    }

    info!(
        file = ?path,
        collection = T::collection_name(),
        count = records.len(),
        "Loaded latest records from JSONL"
    );

    Ok(records)
}

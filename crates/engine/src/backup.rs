// crates/engine/src/backup.rs
use crate::error::{EngineError, Result};
use crate::table::FrequencyTable;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write one `"<name> <count>"` line per entry, truncating `path` first.
///
/// # Errors
///
/// `OutputOpen` if the destination cannot be created, `OutputWrite` if a
/// write or the final flush fails.
pub fn save(table: &FrequencyTable, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| EngineError::OutputOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    write_entries(table, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| EngineError::OutputWrite {
            path: path.to_path_buf(),
            source: e,
        })
}

fn write_entries<W: Write>(table: &FrequencyTable, out: &mut W) -> std::io::Result<()> {
    for (name, count) in table.entries() {
        writeln!(out, "{name} {count}")?;
    }
    Ok(())
}

/// Read a file produced by [`save`] back into a table.
///
/// # Errors
///
/// `InputOpen`/`InputRead` on I/O failure, `BackupParse` for a line that is
/// not `"<name> <count>"` with a positive count.
pub fn load_backup(path: &Path) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|e| EngineError::InputOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);
    let mut table = FrequencyTable::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| EngineError::InputRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if line.trim_ascii().is_empty() {
            continue;
        }
        let (name, count) = parse_line(&line).ok_or_else(|| EngineError::BackupParse {
            line: idx + 1,
            content: line.clone(),
        })?;
        table.insert_count(name.to_owned(), count);
    }

    Ok(table)
}

fn parse_line(line: &str) -> Option<(&str, u64)> {
    let (name, count) = line
        .trim_ascii_end()
        .rsplit_once(|c: char| c.is_ascii_whitespace())?;
    let name = name.trim_ascii_end();
    let count: u64 = count.parse().ok()?;
    (!name.is_empty() && count > 0).then_some((name, count))
}

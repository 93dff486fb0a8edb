use crate::error::{EngineError, Result};
use crate::table::FrequencyTable;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Build a frequency table from every whitespace-separated token in `path`.
///
/// # Errors
///
/// `InputOpen` if the file cannot be opened, `InputRead` if reading fails
/// part-way. No partial table is returned in either case.
pub fn load_table(path: &Path) -> Result<FrequencyTable> {
    let file = File::open(path).map_err(|e| EngineError::InputOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    count_tokens(&mut reader).map_err(|e| EngineError::InputRead {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Line-based tokenizer shared by the file loader and tests.
///
/// Tokens are split on ASCII whitespace only. A line that is not valid UTF-8
/// fails with `InvalidData` rather than merging distinct byte strings.
pub fn count_tokens<R: BufRead>(reader: &mut R) -> std::io::Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        if reader.read_until(b'\n', &mut line_buf)? == 0 {
            break;
        }
        let line = std::str::from_utf8(&line_buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        table.extend(line.split_ascii_whitespace());
    }

    Ok(table)
}

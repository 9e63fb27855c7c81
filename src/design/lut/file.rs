use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::core::word::F32Word;
use crate::design::lut::{LutError, LutReport};
use crate::design::table::LutTable;

/// Create (or truncate) `path` and write `table` as hex lines.
///
/// The handle lives inside a `BufWriter` for the whole call, so it is
/// released on every return path. On success the data has been flushed
/// and synced to disk.
pub fn write_lut_file(table: &LutTable, path: &Path) -> Result<LutReport, LutError> {
    let file = File::create(path).map_err(|source| LutError::OutputOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source: io::Error| LutError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(file);
    table.write_hex(&mut writer).map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    let file = writer.into_inner().map_err(|e| write_err(e.into_error()))?;
    file.sync_all().map_err(write_err)?;

    tracing::info!(path = %path.display(), entries = table.len(), "table written");

    Ok(LutReport {
        path: path.to_path_buf(),
        entries: table.len(),
    })
}

/// Parse a table file back into words, one per line.
pub fn read_lut_file(path: &Path) -> Result<Vec<F32Word>, LutError> {
    let read_err = |source: io::Error| LutError::Read {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(read_err)?);
    let mut words = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(read_err)?;
        let word = line.parse::<F32Word>().map_err(|source| LutError::Parse {
            path: path.to_path_buf(),
            line: i + 1,
            source,
        })?;
        words.push(word);
    }

    tracing::debug!(path = %path.display(), entries = words.len(), "table read");
    Ok(words)
}

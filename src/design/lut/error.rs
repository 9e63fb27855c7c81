use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::word::WordParseError;

/// Errors from writing or reading a table file.
#[derive(Debug, Error)]
pub enum LutError {
    #[error("failed to open output file {}: {source}", path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read table file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{line}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: WordParseError,
    },
}

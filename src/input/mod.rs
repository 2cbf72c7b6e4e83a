pub mod results;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("input table is empty, expected a header line")]
    EmptyInput,
    #[error("invalid column name {column:?}; header has: {}", available.join(", "))]
    UnknownColumn {
        column: String,
        available: Vec<String>,
    },
    #[error("invalid UTF-8 at line {line}, byte {offset}")]
    InvalidUtf8 { line: usize, offset: usize },
    #[error("invalid TSV row at line {line}: {reason}")]
    InvalidTsvRow { line: usize, reason: String },
    #[error("non-numeric value {value:?} in column {column:?} at line {line}")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
    },
    #[error("unsupported gzip input without feature enabled: {0}")]
    GzipNotEnabled(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub fn open_reader(path: &Path) -> Result<Box<dyn io::BufRead>, InputError> {
    let file = std::fs::File::open(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        #[cfg(feature = "gz")]
        {
            let decoder = flate2::read::GzDecoder::new(file);
            return Ok(Box::new(io::BufReader::new(decoder)));
        }
        #[cfg(not(feature = "gz"))]
        {
            return Err(InputError::GzipNotEnabled(path.to_path_buf()));
        }
    }
    Ok(Box::new(io::BufReader::new(file)))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/mod.rs"]
mod tests;

use crate::document::SearchRecord;
use crate::error::{IndexError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};
use tracing::info;

/// What a completed write produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub records: usize,
    pub bytes: u64,
}

impl WriteSummary {
    pub fn size_kb(&self) -> f64 {
        self.bytes as f64 / 1024.0
    }
}

/// Serialize records as an indented JSON array.
///
/// Non-ASCII text is written as-is; there is no trailing newline.
pub fn to_json(records: &[SearchRecord], indent: usize) -> Result<Vec<u8>> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    records.serialize(&mut ser)?;
    Ok(buf)
}

/// Write the index to `path`, replacing whatever was there.
///
/// Missing parent directories are created. The write is not atomic.
pub fn write_index(path: &Path, records: &[SearchRecord], indent: usize) -> Result<WriteSummary> {
    let json = to_json(records, indent)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| IndexError::io(parent, e))?;
        }
    }
    std::fs::write(path, &json).map_err(|e| IndexError::io(path, e))?;

    let bytes = std::fs::metadata(path)
        .map_err(|e| IndexError::io(path, e))?
        .len();
    info!("Wrote {} records ({} bytes) to {}", records.len(), bytes, path.display());

    Ok(WriteSummary {
        path: path.to_path_buf(),
        records: records.len(),
        bytes,
    })
}

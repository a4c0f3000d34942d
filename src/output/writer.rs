use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write ranking to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Overwrite `path` with `text` in one create-write-sync pass.
///
/// There is no temp file and no rename: a failure part way through can leave
/// a truncated file behind.
pub fn write_ranking(path: &Path, text: &str) -> Result<(), OutputError> {
    let wrap = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut f = fs::File::create(path).map_err(wrap)?;
    f.write_all(text.as_bytes()).map_err(wrap)?;
    f.sync_all().map_err(wrap)?;

    debug!(path = %path.display(), bytes = text.len(), "wrote ranking");
    Ok(())
}

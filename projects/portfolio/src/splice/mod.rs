pub mod region;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error};

pub use region::{splice_region, MarkerNotFound, SpliceRegion};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentUpdate {
    Rewritten,
    /// The region already held exactly these cards; the file was not touched.
    Unchanged,
}

#[derive(Debug, Error)]
pub enum UpdateDocumentError {
    #[error("ReadDocument {path:?}: {source}")]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    MarkerNotFound {
        #[from]
        source: MarkerNotFound,
    },

    #[error("WriteDocument {path:?}: {source}")]
    WriteDocument {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Splices `fragment` into the document at `path`. The file is only replaced
/// when both markers are present, and only as a whole.
pub async fn update_document(
    path: &Path,
    region: &SpliceRegion,
    fragment: &str,
) -> Result<DocumentUpdate, UpdateDocumentError> {
    let document = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| UpdateDocumentError::ReadDocument {
            path: path.to_path_buf(),
            source,
        })?;

    let spliced = splice_region(&document, region, fragment).inspect_err(|missing| {
        error!("Could not find project section markers");
        error!("Start marker found: {}", missing.start_found);
        error!("End marker found: {}", missing.end_found);
    })?;

    if spliced == document {
        debug!(path = %path.display(), "Region already up to date");
        return Ok(DocumentUpdate::Unchanged);
    }

    replace_document(path, &spliced)
        .await
        .map_err(|source| UpdateDocumentError::WriteDocument {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(DocumentUpdate::Rewritten)
}

/// Sibling file the new contents are staged in before the rename.
pub fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.portfolio-tmp"))
}

// The document is swapped in by rename, so a failed write never leaves it
// truncated.
async fn replace_document(path: &Path, contents: &str) -> std::io::Result<()> {
    let staging = staging_path(path);

    if let Err(err) = tokio::fs::write(&staging, contents).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(err);
    }

    if let Err(err) = tokio::fs::rename(&staging, path).await {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(err);
    }

    Ok(())
}

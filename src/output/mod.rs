//! Persistence of the assembled news document.

use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::core::NwError;
use crate::feed::NewsDocument;

/// Writes the document as pretty-printed JSON at `path`, fully replacing any
/// prior content.
///
/// Parent directories are created as needed. The document is written to a
/// sibling temp file and renamed over the target, so readers never observe a
/// half-written document.
///
/// # Errors
///
/// Returns `NwError` if serialization or any filesystem step fails.
pub async fn write_document(document: &NewsDocument, path: &Path) -> Result<(), NwError> {
    let json = serde_json::to_string_pretty(document)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).await?;
    fs::rename(&tmp, path).await?;

    info!(path = %path.display(), "wrote news document");
    Ok(())
}

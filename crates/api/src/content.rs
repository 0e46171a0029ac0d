//! Page content loaded from disk at startup.

use std::io::ErrorKind;
use std::path::Path;

use invitation_core::error::CoreError;
use invitation_core::media::MediaCatalog;

/// Load the gallery media list from a JSON file.
///
/// A missing file yields an empty gallery so a fresh checkout still boots.
/// A file that exists but does not describe a valid list is an error.
pub async fn load_gallery(path: &Path) -> Result<MediaCatalog, CoreError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "Gallery file not found, serving an empty gallery");
            return Ok(MediaCatalog::empty());
        }
        Err(e) => {
            return Err(CoreError::Internal(format!(
                "Failed to read gallery file {}: {e}",
                path.display()
            )))
        }
    };

    let catalog = MediaCatalog::from_json(&raw)?;
    tracing::info!(
        path = %path.display(),
        items = catalog.len(),
        videos = catalog.videos().count(),
        "Gallery loaded",
    );
    Ok(catalog)
}

//! Archive acquisition and decoding services.

use std::path::{Path, PathBuf};

use crate::error::GuiError;
use ezt_core::{EszipSession, RawArchive, SourceIndex, decode_archive, download_archive};

/// Read a dropped or picked file fully into memory.
pub async fn read_archive(path: PathBuf) -> Result<RawArchive, GuiError> {
    let name = display_name(&path);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|error| GuiError::FileRead {
            name: name.clone(),
            reason: error.to_string(),
        })?;
    Ok(RawArchive::new(name, bytes))
}

/// Download an archive from a URL.
pub async fn download(url: String) -> Result<RawArchive, GuiError> {
    download_archive(&url).await.map_err(GuiError::from)
}

/// Decode an archive into a source index with a fresh parser session.
pub async fn decode(archive: RawArchive) -> Result<SourceIndex, GuiError> {
    let session = EszipSession::create().await?;
    decode_archive(session, archive).await.map_err(GuiError::from)
}

/// File name component of a path, falling back to the whole path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_uses_the_file_name_component() {
        assert_eq!(display_name(Path::new("/tmp/app.eszip")), "app.eszip");
    }

    #[tokio::test]
    async fn reading_a_missing_file_is_a_file_read_error() {
        let result = read_archive(PathBuf::from("/nonexistent/app.eszip")).await;
        assert!(matches!(result, Err(GuiError::FileRead { .. })));
    }
}

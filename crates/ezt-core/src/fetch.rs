//! URL-triggered archive download.

use crate::archive::RawArchive;
use crate::error::FetchError;

/// Placeholder name for archives acquired over the network.
pub const DOWNLOADED_ARCHIVE_NAME: &str = "downloaded_archive.eszip";

/// Download an archive and read the full response body into memory.
///
/// A non-success HTTP status is a [`FetchError::Status`]; the caller decides
/// how to surface it. There is no retry and no timeout beyond what the
/// transport enforces.
pub async fn download_archive(url: &str) -> Result<RawArchive, FetchError> {
    tracing::info!(%url, "downloading archive");

    let response = reqwest::get(url)
        .await
        .map_err(|error| FetchError::Request {
            url: url.to_string(),
            reason: error.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(|error| FetchError::Body {
        url: url.to_string(),
        reason: error.to_string(),
    })?;

    tracing::info!(bytes = body.len(), "archive downloaded");
    Ok(RawArchive::new(DOWNLOADED_ARCHIVE_NAME, body.to_vec()))
}

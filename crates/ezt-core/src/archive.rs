//! Raw archive bytes plus a display name.

/// An acquired archive: immutable byte content and the name shown in the UI.
///
/// One `RawArchive` is created per user action (file drop, file picker
/// selection, or completed download) and moved into the decode pipeline.
/// Selecting a new file simply produces a new `RawArchive`; the old one is
/// dropped along with any in-flight work on it.
#[derive(Clone, PartialEq, Eq)]
pub struct RawArchive {
    /// Display name (the dropped file's name, or a placeholder for downloads).
    pub name: String,
    /// The archive's byte content. Opaque; only the parser interprets it.
    pub bytes: Vec<u8>,
}

impl RawArchive {
    /// Create an archive from a name and its byte content.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Size of the archive in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the archive is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for RawArchive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawArchive")
            .field("name", &self.name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

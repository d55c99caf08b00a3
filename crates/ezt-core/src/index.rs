//! The source index: an ordered mapping from module specifier to source text.

/// Ordered mapping from module specifier to source text.
///
/// Insertion order is display order. The decode pipeline inserts specifiers
/// in lexicographically sorted order, so iteration is sorted and
/// deterministic across runs. The index is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceIndex {
    entries: Vec<(String, String)>,
}

impl SourceIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry.
    ///
    /// Entries are displayed in insertion order; callers are responsible for
    /// inserting in the order they want shown. Specifiers are unique within
    /// an archive, so duplicates are not checked for.
    pub fn push(&mut self, specifier: impl Into<String>, source: impl Into<String>) {
        self.entries.push((specifier.into(), source.into()));
    }

    /// Iterate over specifiers in display order.
    pub fn specifiers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(specifier, _)| specifier.as_str())
    }

    /// Iterate over `(specifier, source)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(specifier, source)| (specifier.as_str(), source.as_str()))
    }

    /// Look up the source text for a specifier.
    pub fn source(&self, specifier: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == specifier)
            .map(|(_, source)| source.as_str())
    }

    /// Whether the index contains a specifier.
    pub fn contains(&self, specifier: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == specifier)
    }

    /// Number of modules in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no modules.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

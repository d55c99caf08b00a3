//! Error types for archive decoding and download.
//!
//! Reasons are carried as strings so errors stay `Clone` and can travel
//! through GUI messages.

use thiserror::Error;

/// Errors that can occur while decoding an archive into a source index.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The archive bytes could not be parsed as an eszip container.
    #[error("malformed archive: {reason}")]
    Malformed {
        /// Description of what went wrong.
        reason: String,
    },

    /// The load phase failed after the structure parsed successfully.
    #[error("failed to load module contents: {reason}")]
    Load {
        /// Description of what went wrong.
        reason: String,
    },

    /// A specifier enumerated by the parser is not retrievable.
    #[error("module not found in archive: {specifier}")]
    UnknownSpecifier {
        /// The specifier that was requested.
        specifier: String,
    },

    /// A module exists but carries no source text.
    #[error("no source available for module: {specifier}")]
    MissingSource {
        /// The specifier whose source is missing.
        specifier: String,
    },

    /// A session operation was invoked out of protocol order.
    ///
    /// The session protocol is strict: parse, then load, then source
    /// retrieval. The pipeline enforces this structurally; this variant is a
    /// defensive backstop.
    #[error("parser session used out of phase: expected {expected}")]
    OutOfPhase {
        /// The operation that would have been valid.
        expected: &'static str,
    },
}

/// Errors that can occur while downloading an archive from a URL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request failed before a response arrived (DNS, TLS, connection).
    #[error("request to {url} failed: {reason}")]
    Request {
        /// The URL that was requested.
        url: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// The server answered with a non-success status.
    #[error("download from {url} failed with HTTP {status}")]
    Status {
        /// The URL that was requested.
        url: String,
        /// HTTP status code of the response.
        status: u16,
    },

    /// Reading the response body failed.
    #[error("failed to read download body from {url}: {reason}")]
    Body {
        /// The URL that was requested.
        url: String,
        /// Description of what went wrong.
        reason: String,
    },
}

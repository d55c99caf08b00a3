//! Core library for Eszip Studio.
//!
//! This crate contains everything the desktop viewer needs that is not
//! presentation: the decode pipeline that turns raw archive bytes into an
//! ordered, searchable index of module sources, the browse model layered on
//! top of that index, and the download path for URL-triggered acquisition.
//!
//! # Overview
//!
//! The central flow is:
//!
//! 1. A [`RawArchive`] is acquired (file drop, file picker, or download).
//! 2. [`decode_archive`] feeds its bytes to a [`ParserSession`] and builds a
//!    [`SourceIndex`]: specifiers sorted lexicographically, sources fetched
//!    strictly in that order.
//! 3. A [`BrowseState`] tracks the search term and selection over the index.
//!
//! Archive-format parsing itself is delegated to the external `eszip` crate,
//! wrapped by [`EszipSession`] behind the narrow [`ParserSession`] trait so
//! the pipeline can be exercised with a scripted fake in tests.

#![warn(missing_docs)]

pub mod archive;
pub mod browse;
pub mod error;
pub mod fetch;
pub mod index;
pub mod pipeline;
pub mod session;

pub use archive::RawArchive;
pub use browse::BrowseState;
pub use error::{DecodeError, FetchError};
pub use fetch::{DOWNLOADED_ARCHIVE_NAME, download_archive};
pub use index::SourceIndex;
pub use pipeline::decode_archive;
pub use session::{EszipSession, ParserSession};

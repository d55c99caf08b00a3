//! Parser session: the capability interface over the external eszip parser.

use std::pin::Pin;

use eszip::EszipV2;
use futures::io::{BufReader, Cursor};

use crate::error::DecodeError;

/// The narrow interface the decode pipeline needs from an archive parser.
///
/// The protocol is two-phase and strict:
///
/// 1. [`parse_bytes`](Self::parse_bytes) consumes the archive bytes and
///    enumerates every module specifier it contains.
/// 2. [`load`](Self::load) resolves all module bodies. It must complete
///    before any source retrieval.
/// 3. [`module_source`](Self::module_source) returns the source text for one
///    specifier. Retrieval may be side-effecting in the underlying parser
///    (lazy materialization), so callers must request sources strictly
///    sequentially, never concurrently.
///
/// A session is scoped to a single archive and never reused.
#[allow(async_fn_in_trait)]
pub trait ParserSession {
    /// Parse the archive structure and return the contained specifiers, in
    /// whatever order the parser enumerates them.
    async fn parse_bytes(&mut self, bytes: Vec<u8>) -> Result<Vec<String>, DecodeError>;

    /// Resolve all module bodies. Valid only after [`parse_bytes`](Self::parse_bytes).
    async fn load(&mut self) -> Result<(), DecodeError>;

    /// Retrieve the source text for one specifier. Valid only after
    /// [`load`](Self::load) has completed.
    async fn module_source(&mut self, specifier: &str) -> Result<String, DecodeError>;
}

/// The loader future returned by `EszipV2::parse`; driving it to completion
/// is the session's load phase.
type LoaderFuture =
    Pin<Box<dyn Future<Output = Result<BufReader<Cursor<Vec<u8>>>, eszip::ParseError>> + Send>>;

enum Phase {
    Created,
    Parsed { eszip: EszipV2, loader: LoaderFuture },
    Loaded { eszip: EszipV2 },
}

/// [`ParserSession`] implementation backed by the external `eszip` crate.
///
/// `EszipV2::parse` reads the archive header and returns the structure
/// together with a loader future that reads the module bodies; awaiting that
/// future is the load phase. After it completes, every `module.source()`
/// call resolves immediately.
pub struct EszipSession {
    phase: Phase,
}

impl EszipSession {
    /// Create a fresh session for a single archive.
    pub async fn create() -> Result<Self, DecodeError> {
        Ok(Self {
            phase: Phase::Created,
        })
    }
}

impl ParserSession for EszipSession {
    async fn parse_bytes(&mut self, bytes: Vec<u8>) -> Result<Vec<String>, DecodeError> {
        if !matches!(self.phase, Phase::Created) {
            return Err(DecodeError::OutOfPhase {
                expected: "parse_bytes on a fresh session",
            });
        }

        let reader = BufReader::new(Cursor::new(bytes));
        let (eszip, loader) =
            EszipV2::parse(reader)
                .await
                .map_err(|error| DecodeError::Malformed {
                    reason: error.to_string(),
                })?;

        let specifiers = eszip.specifiers();
        tracing::debug!(modules = specifiers.len(), "parsed archive structure");

        self.phase = Phase::Parsed {
            eszip,
            loader: Box::pin(loader),
        };
        Ok(specifiers)
    }

    async fn load(&mut self) -> Result<(), DecodeError> {
        match std::mem::replace(&mut self.phase, Phase::Created) {
            Phase::Parsed { eszip, loader } => {
                // The returned reader is the exhausted byte cursor; nothing
                // left to do with it.
                loader.await.map_err(|error| DecodeError::Load {
                    reason: error.to_string(),
                })?;
                self.phase = Phase::Loaded { eszip };
                Ok(())
            }
            other => {
                self.phase = other;
                Err(DecodeError::OutOfPhase {
                    expected: "load after parse_bytes",
                })
            }
        }
    }

    async fn module_source(&mut self, specifier: &str) -> Result<String, DecodeError> {
        let Phase::Loaded { eszip } = &self.phase else {
            return Err(DecodeError::OutOfPhase {
                expected: "module_source after load",
            });
        };

        let module = eszip
            .get_module(specifier)
            .ok_or_else(|| DecodeError::UnknownSpecifier {
                specifier: specifier.to_string(),
            })?;

        let source = module
            .source()
            .await
            .ok_or_else(|| DecodeError::MissingSource {
                specifier: specifier.to_string(),
            })?;

        Ok(String::from_utf8_lossy(&source).into_owned())
    }
}

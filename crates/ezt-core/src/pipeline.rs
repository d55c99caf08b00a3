//! The decode pipeline: raw archive bytes to a fully populated source index.

use crate::archive::RawArchive;
use crate::error::DecodeError;
use crate::index::SourceIndex;
use crate::session::ParserSession;

/// Decode an archive into a [`SourceIndex`].
///
/// Steps, in order, each gated on the previous one:
///
/// 1. Parse the bytes; a malformed archive fails the whole run, no partial
///    index is ever produced.
/// 2. Run the session's load phase.
/// 3. Sort the specifiers ascending (ordinal comparison, locale-independent).
/// 4. Fetch each source in sorted order and insert it into the index.
///
/// Source fetches are strictly sequential: retrieval may be side-effecting
/// in the session, and insertion order defines display order, so the loop
/// awaits one specifier at a time. The session is consumed; it is scoped to
/// this one archive.
pub async fn decode_archive<S: ParserSession>(
    mut session: S,
    archive: RawArchive,
) -> Result<SourceIndex, DecodeError> {
    let name = archive.name;
    tracing::info!(name = %name, bytes = archive.bytes.len(), "decoding archive");

    let mut specifiers = session.parse_bytes(archive.bytes).await?;
    session.load().await?;

    specifiers.sort_unstable();

    let mut index = SourceIndex::with_capacity(specifiers.len());
    for specifier in specifiers {
        let source = session.module_source(&specifier).await?;
        index.push(specifier, source);
    }

    tracing::info!(name = %name, modules = index.len(), "archive decoded");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Scripted session that records every call for order assertions.
    struct FakeSession {
        /// Modules in the order the parser "enumerates" them.
        modules: Vec<(&'static str, &'static str)>,
        calls: Rc<RefCell<Vec<String>>>,
        fail_parse: bool,
        fail_load: bool,
    }

    impl FakeSession {
        fn new(modules: Vec<(&'static str, &'static str)>) -> (Self, Rc<RefCell<Vec<String>>>) {
            let calls = Rc::new(RefCell::new(Vec::new()));
            let session = Self {
                modules,
                calls: Rc::clone(&calls),
                fail_parse: false,
                fail_load: false,
            };
            (session, calls)
        }
    }

    impl ParserSession for FakeSession {
        async fn parse_bytes(&mut self, _bytes: Vec<u8>) -> Result<Vec<String>, DecodeError> {
            self.calls.borrow_mut().push("parse".to_string());
            if self.fail_parse {
                return Err(DecodeError::Malformed {
                    reason: "bad magic".to_string(),
                });
            }
            Ok(self
                .modules
                .iter()
                .map(|(specifier, _)| (*specifier).to_string())
                .collect())
        }

        async fn load(&mut self) -> Result<(), DecodeError> {
            self.calls.borrow_mut().push("load".to_string());
            if self.fail_load {
                return Err(DecodeError::Load {
                    reason: "truncated".to_string(),
                });
            }
            Ok(())
        }

        async fn module_source(&mut self, specifier: &str) -> Result<String, DecodeError> {
            self.calls.borrow_mut().push(format!("source:{specifier}"));
            self.modules
                .iter()
                .find(|(key, _)| *key == specifier)
                .map(|(_, source)| (*source).to_string())
                .ok_or_else(|| DecodeError::UnknownSpecifier {
                    specifier: specifier.to_string(),
                })
        }
    }

    fn archive() -> RawArchive {
        RawArchive::new("test.eszip", vec![0xde, 0xad])
    }

    #[tokio::test]
    async fn index_order_is_sorted_regardless_of_enumeration_order() {
        let (session, _) = FakeSession::new(vec![
            ("b.ts", "console.log(2)"),
            ("a.ts", "console.log(1)"),
        ]);

        let index = decode_archive(session, archive()).await.unwrap();
        let pairs: Vec<_> = index.iter().collect();
        assert_eq!(
            pairs,
            vec![("a.ts", "console.log(1)"), ("b.ts", "console.log(2)")]
        );
    }

    #[tokio::test]
    async fn sources_are_requested_sequentially_in_sorted_order() {
        let (session, calls) = FakeSession::new(vec![
            ("c.ts", "3"),
            ("a.ts", "1"),
            ("b.ts", "2"),
        ]);

        decode_archive(session, archive()).await.unwrap();
        assert_eq!(
            *calls.borrow(),
            ["parse", "load", "source:a.ts", "source:b.ts", "source:c.ts"]
        );
    }

    #[tokio::test]
    async fn parse_failure_produces_no_index() {
        let (mut session, calls) = FakeSession::new(vec![("a.ts", "1")]);
        session.fail_parse = true;

        let result = decode_archive(session, archive()).await;
        assert!(matches!(result, Err(DecodeError::Malformed { .. })));
        // Nothing past the parse step runs.
        assert_eq!(*calls.borrow(), ["parse"]);
    }

    #[tokio::test]
    async fn load_failure_stops_before_any_source_fetch() {
        let (mut session, calls) = FakeSession::new(vec![("a.ts", "1")]);
        session.fail_load = true;

        let result = decode_archive(session, archive()).await;
        assert!(matches!(result, Err(DecodeError::Load { .. })));
        assert_eq!(*calls.borrow(), ["parse", "load"]);
    }

    #[tokio::test]
    async fn empty_archive_yields_empty_index() {
        let (session, calls) = FakeSession::new(vec![]);

        let index = decode_archive(session, archive()).await.unwrap();
        assert!(index.is_empty());
        assert_eq!(*calls.borrow(), ["parse", "load"]);
    }
}

//! Eszip Studio - GUI library.
//!
//! Desktop viewer for eszip module archives. Drop an archive onto the
//! window (or pass `--download-from <URL>`) and browse the contained module
//! sources in a two-pane explorer.
//!
//! Built with Iced 0.14 using the Elm architecture (State, Message, Update,
//! View). Decoding and the browse model live in `ezt-core`; this crate is
//! acquisition and presentation.

pub mod app;
pub mod component;
pub mod error;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

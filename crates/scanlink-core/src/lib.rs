//! # scanlink-core
//!
//! Shared library for ScanLink containing the key geometry domain model,
//! the layout-capture traversal, and the event payload codec.
//!
//! This crate is used by the host-facing bridge (`scanlink-link`) and by
//! scanning consumers that parse the published payloads. It has zero
//! dependencies on UI toolkits, threads, or I/O.
//!
//! # Architecture overview
//!
//! ScanLink connects an on-screen keyboard to a switch-scanning
//! accessibility system. The keyboard host exposes its view hierarchy
//! through the [`ScanNode`] capability trait; [`capture_layout`] walks that
//! tree and produces a [`LayoutSnapshot`] — one rectangle per interactive
//! key, in pre-order. The snapshot (or a bare show/hide lifecycle signal)
//! is then encoded to JSON and emitted under a fixed event identifier for
//! any number of in-process listeners.
//!
//! This crate defines:
//!
//! - **`domain`** — pure logic: [`KeyRect`], [`LayoutSnapshot`], the
//!   [`ScanNode`] tree model, and the capture traversal.
//! - **`protocol`** — what listeners see: event identifiers, the
//!   [`KeyboardEvent`] type, and the JSON payload codec.

pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `scanlink_core::LayoutSnapshot` instead of spelling out the module path.
pub use domain::capture::capture_layout;
pub use domain::geometry::{KeyRect, LayoutSnapshot};
pub use domain::node::{KeyInfo, ScanNode, StaticNode};
pub use protocol::codec::{decode_snapshot, encode_event, encode_snapshot, CodecError};
pub use protocol::events::{
    KeyboardEvent, EVENT_KEYBOARD_HIDE, EVENT_KEYBOARD_LAYOUT, EVENT_KEYBOARD_SHOW,
};

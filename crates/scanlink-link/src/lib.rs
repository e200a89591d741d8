//! scanlink-link library crate.
//!
//! The host-facing half of ScanLink: captures an on-screen keyboard's key
//! layout and publishes it (plus show/hide lifecycle events) to
//! switch-scanning listeners through a caller-supplied event sink.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! keyboard host (view tree + event bus)
//!         ↕
//! [scanlink-link]
//!   ├── domain/           Pure types: LinkConfig
//!   ├── application/      Use-cases: LayoutPublisher, KeyboardScanLink
//!   └── infrastructure/
//!         └── sink/       EventSink abstraction + RecordingSink + FnSink
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no external dependencies (no I/O, no logging).
//! - `application` depends on `domain` and `scanlink-core` only, plus the
//!   sink trait.
//! - `infrastructure` owns the transport boundary; concrete buses live in
//!   the host, behind [`EventSink`].
//!
//! # Typical host integration
//!
//! ```rust
//! use scanlink_core::{KeyInfo, StaticNode};
//! use scanlink_link::{FnSink, KeyboardScanLink};
//!
//! // The host adapts its own event bus as a sink:
//! let sink = FnSink::new(|event_id: &str, payload: Option<&str>| {
//!     // forward to the in-process bus
//!     let _ = (event_id, payload);
//! });
//! let link = KeyboardScanLink::new(sink);
//!
//! // ...and calls the link whenever the keyboard's state changes:
//! let keyboard = StaticNode::container(vec![StaticNode::key(KeyInfo {
//!     x: 0.0,
//!     y: 0.0,
//!     width: 64.0,
//!     height: 48.0,
//!     description: "a".to_string(),
//! })]);
//! link.show_keyboard(&keyboard).expect("finite geometry");
//! link.hide_keyboard();
//! ```
//!
//! Logging goes through `tracing`; installing a subscriber is the host's
//! job, as with any library crate.
//!
//! [`EventSink`]: infrastructure::sink::EventSink

/// Domain layer: pure configuration types.
pub mod domain;

/// Application layer: publication use-cases.
pub mod application;

/// Infrastructure layer: the event sink boundary.
pub mod infrastructure;

// Re-export the host-facing surface at the crate root.
pub use application::link::KeyboardScanLink;
pub use application::publish_layout::{LayoutPublisher, PublishError};
pub use domain::config::LinkConfig;
pub use infrastructure::sink::{EmittedEvent, EventSink, FnSink, RecordingSink};

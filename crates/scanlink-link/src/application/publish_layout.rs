//! LayoutPublisher: turns snapshots and lifecycle signals into emitted
//! events.
//!
//! The publisher is the only place that touches both the payload codec and
//! the event sink, and it enforces the no-partial-emission rule: a snapshot
//! that fails to encode produces an error and *nothing* reaches the sink.
//!
//! # Event flow
//!
//! ```text
//! host keyboard                 scanlink                     listeners
//! ─────────────────────────────────────────────────────────────────────
//! LayoutSnapshot ──> encode (JSON) ──> sink.emit(id, payload) ──> bus
//! ```
//!
//! Emission is synchronous and fire-and-forget; see
//! [`EventSink`](crate::infrastructure::sink::EventSink) for the delivery
//! semantics.

use thiserror::Error;
use tracing::debug;

use scanlink_core::protocol::codec::{encode_snapshot, CodecError};
use scanlink_core::protocol::events::{
    KeyboardEvent, EVENT_KEYBOARD_HIDE, EVENT_KEYBOARD_LAYOUT, EVENT_KEYBOARD_SHOW,
};
use scanlink_core::LayoutSnapshot;

use crate::domain::config::LinkConfig;
use crate::infrastructure::sink::EventSink;

/// Errors that can occur while publishing a keyboard event.
///
/// These are encoding failures surfaced before emission; the sink itself
/// cannot fail.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The snapshot could not be encoded into a wire payload.
    #[error("payload encoding failed: {0}")]
    Encode(#[from] CodecError),
}

/// Serializes captured layouts and emits them on the host's event sink.
///
/// Borrow-only and stateless: construct one on the fly per publication, or
/// hold one for the duration of a batch. Both the sink and the config are
/// owned by the caller (normally [`KeyboardScanLink`]).
///
/// [`KeyboardScanLink`]: crate::application::link::KeyboardScanLink
pub struct LayoutPublisher<'a> {
    sink: &'a dyn EventSink,
    config: &'a LinkConfig,
}

impl<'a> LayoutPublisher<'a> {
    /// Creates a publisher emitting on `sink`, configured by `config`.
    pub fn new(sink: &'a dyn EventSink, config: &'a LinkConfig) -> Self {
        Self { sink, config }
    }

    /// Publishes a layout update under the layout-info identifier.
    ///
    /// An empty snapshot is published as `{"keys":[]}` — listeners learn
    /// the keyboard currently exposes no keys.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Encode`] when the snapshot contains a
    /// non-finite coordinate; no event is emitted in that case.
    pub fn publish_layout(&self, snapshot: &LayoutSnapshot) -> Result<(), PublishError> {
        self.publish_parts(EVENT_KEYBOARD_LAYOUT, Some(snapshot))
    }

    /// Publishes a show event carrying the layout the keyboard appeared with.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Encode`] when the snapshot contains a
    /// non-finite coordinate; no event is emitted in that case.
    pub fn publish_show(&self, snapshot: &LayoutSnapshot) -> Result<(), PublishError> {
        self.publish_parts(EVENT_KEYBOARD_SHOW, Some(snapshot))
    }

    /// Publishes a hide event.
    ///
    /// Carries no payload and therefore cannot fail: exactly one event is
    /// emitted per call, regardless of prior calls.
    pub fn publish_hide(&self) {
        debug!(event_id = EVENT_KEYBOARD_HIDE, "publishing keyboard event");
        self.sink.emit(EVENT_KEYBOARD_HIDE, None);
    }

    /// Publishes any [`KeyboardEvent`]: encode first, emit second.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Encode`] when a payload-carrying event fails
    /// to encode. The sink is not touched on the error path.
    pub fn publish_event(&self, event: &KeyboardEvent) -> Result<(), PublishError> {
        self.publish_parts(event.event_id(), event.snapshot())
    }

    fn publish_parts(
        &self,
        event_id: &'static str,
        snapshot: Option<&LayoutSnapshot>,
    ) -> Result<(), PublishError> {
        let payload = match snapshot {
            Some(snapshot) => Some(encode_snapshot(snapshot)?),
            None => None,
        };

        debug!(
            event_id,
            keys = snapshot.map_or(0, LayoutSnapshot::len),
            "publishing keyboard event"
        );
        if self.config.log_payloads {
            if let Some(payload) = payload.as_deref() {
                debug!(event_id, payload, "event payload");
            }
        }

        self.sink.emit(event_id, payload.as_deref());
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

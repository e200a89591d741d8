//! The event sink abstraction: where published keyboard events go.
//!
//! The bridge never talks to a process-wide broadcast registry. Instead the
//! host passes an [`EventSink`] — its own adapter onto whatever in-process
//! event bus it runs (a channel, a subscriber list, a UI toolkit's message
//! loop). That keeps the bridge free of hidden global state and lets tests
//! substitute a recording sink.
//!
//! # Delivery semantics
//!
//! `emit` is fire-and-forget: no return value, no acknowledgement, no
//! delivery guarantee beyond what the host's bus provides. Emission is
//! synchronous with the caller; listeners run on whatever thread the bus
//! delivers on.
//!
//! # Implementations provided
//!
//! - [`RecordingSink`] — stores every emission; the test double, always
//!   compiled so host test suites can use it too.
//! - [`FnSink`] — wraps a plain closure, for hosts whose "bus" is a
//!   function call.
//! - Any `&S` where `S: EventSink` — so a host can lend a sink it keeps.

use std::sync::Mutex;

/// Process-local event publication primitive.
///
/// `event_id` is one of the fixed identifiers in
/// [`scanlink_core::protocol::events`]; `payload` is the JSON payload for
/// events that carry one.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink {
    /// Delivers one event to all currently-registered listeners.
    ///
    /// Must not fail from the emitter's point of view: a bus with zero
    /// listeners simply drops the event.
    fn emit<'a>(&self, event_id: &str, payload: Option<&'a str>);
}

/// Lets a host lend a sink it keeps ownership of.
impl<S: EventSink + ?Sized> EventSink for &S {
    fn emit(&self, event_id: &str, payload: Option<&str>) {
        (**self).emit(event_id, payload);
    }
}

// ── Closure adapter ───────────────────────────────────────────────────────────

/// Adapts a plain closure into an [`EventSink`].
///
/// # Example
///
/// ```rust
/// use scanlink_link::infrastructure::sink::{EventSink, FnSink};
///
/// let sink = FnSink::new(|event_id: &str, _payload: Option<&str>| {
///     println!("event: {event_id}");
/// });
/// sink.emit("keyboard.hide", None);
/// ```
pub struct FnSink<F: Fn(&str, Option<&str>)> {
    deliver: F,
}

impl<F: Fn(&str, Option<&str>)> FnSink<F> {
    /// Wraps `deliver` as a sink.
    pub fn new(deliver: F) -> Self {
        Self { deliver }
    }
}

impl<F: Fn(&str, Option<&str>)> EventSink for FnSink<F> {
    fn emit(&self, event_id: &str, payload: Option<&str>) {
        (self.deliver)(event_id, payload);
    }
}

// ── Recording implementation (always compiled for tests) ──────────────────────

/// One event as a sink received it.
#[derive(Debug, Clone, PartialEq)]
pub struct EmittedEvent {
    /// The identifier the event was emitted under.
    pub event_id: String,
    /// The JSON payload, when the event carried one.
    pub payload: Option<String>,
}

/// An [`EventSink`] that records every emission in order.
///
/// Always compiled (not test-gated) so host applications can assert on
/// published events in their own test suites without a real bus.
///
/// Interior mutability keeps `emit(&self)` signature-compatible with real
/// bus adapters; the mutex makes the sink shareable across threads in
/// multi-threaded host tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<EmittedEvent>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything emitted so far, in emission order.
    pub fn events(&self) -> Vec<EmittedEvent> {
        self.events.lock().expect("recording sink lock poisoned").clone()
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.events.lock().expect("recording sink lock poisoned").len()
    }

    /// Returns `true` if nothing has been emitted yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event_id: &str, payload: Option<&str>) {
        self.events
            .lock()
            .expect("recording sink lock poisoned")
            .push(EmittedEvent {
                event_id: event_id.to_string(),
                payload: payload.map(str::to_string),
            });
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

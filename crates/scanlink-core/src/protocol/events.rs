//! Keyboard event kinds and their process-local identifiers.
//!
//! Listeners subscribe by identifier string; the identifiers are therefore
//! part of the public contract and must never change between releases.
//! All three are exposed even though a given host may only ever emit a
//! subset — downstream scanning consumers may depend on any of them.

use crate::domain::geometry::LayoutSnapshot;

// ── Event identifiers ─────────────────────────────────────────────────────────

/// Identifier for a layout update: the keyboard's key geometry changed.
pub const EVENT_KEYBOARD_LAYOUT: &str = "keyboard.layout_info";

/// Identifier for a show event: the keyboard became visible. Carries the
/// layout captured at show time so listeners need not wait for a separate
/// layout event.
pub const EVENT_KEYBOARD_SHOW: &str = "keyboard.show";

/// Identifier for a hide event: the keyboard left the screen. No payload.
pub const EVENT_KEYBOARD_HIDE: &str = "keyboard.hide";

// ── Event type ────────────────────────────────────────────────────────────────

/// One keyboard event, ready for publication.
///
/// `LayoutChanged` and `Shown` carry the snapshot that becomes the JSON
/// payload; `Hidden` is a bare lifecycle signal.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyboardEvent {
    /// The key layout changed while the keyboard stayed visible.
    LayoutChanged(LayoutSnapshot),
    /// The keyboard appeared, with the layout it appeared with.
    Shown(LayoutSnapshot),
    /// The keyboard disappeared.
    Hidden,
}

impl KeyboardEvent {
    /// The identifier this event is emitted under.
    pub fn event_id(&self) -> &'static str {
        match self {
            KeyboardEvent::LayoutChanged(_) => EVENT_KEYBOARD_LAYOUT,
            KeyboardEvent::Shown(_) => EVENT_KEYBOARD_SHOW,
            KeyboardEvent::Hidden => EVENT_KEYBOARD_HIDE,
        }
    }

    /// The snapshot carried by this event, if it has a payload.
    pub fn snapshot(&self) -> Option<&LayoutSnapshot> {
        match self {
            KeyboardEvent::LayoutChanged(snapshot) | KeyboardEvent::Shown(snapshot) => {
                Some(snapshot)
            }
            KeyboardEvent::Hidden => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

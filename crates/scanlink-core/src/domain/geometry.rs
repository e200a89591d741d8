//! Key geometry domain entities.
//!
//! The capture traversal produces one [`KeyRect`] per interactive key and
//! collects them into a [`LayoutSnapshot`]. Both are short-lived values:
//! created fresh per capture, never mutated, discarded once the consuming
//! event has been emitted.
//!
//! Coordinates are pixels with a top-left origin. Whether they are absolute
//! screen coordinates or relative to the keyboard container depends entirely
//! on what the host's geometry query reports (see [`KeyInfo`]); the capture
//! pipeline preserves that convention unchanged.
//!
//! [`KeyInfo`]: crate::domain::node::KeyInfo

use serde::{Deserialize, Serialize};

/// Position and size of a single interactive key, in pixels.
///
/// Field names are part of the wire format consumed by scanning listeners
/// and must stay exactly `x`, `y`, `width`, `height`.
///
/// Coordinates are floating point: host keyboards report fractional pixel
/// positions on scaled displays, and integer-reporting hosts lose nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyRect {
    /// X coordinate of the key's top-left corner.
    pub x: f64,
    /// Y coordinate of the key's top-left corner.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl KeyRect {
    /// Creates a new `KeyRect`.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the rightmost X coordinate (exclusive).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Returns the bottommost Y coordinate (exclusive).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Returns `true` if all four fields are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.non_finite_field().is_none()
    }

    /// Returns the name of the first non-finite field, if any.
    ///
    /// Used by the payload codec to report which field made a snapshot
    /// unserializable.
    pub fn non_finite_field(&self) -> Option<&'static str> {
        if !self.x.is_finite() {
            Some("x")
        } else if !self.y.is_finite() {
            Some("y")
        } else if !self.width.is_finite() {
            Some("width")
        } else if !self.height.is_finite() {
            Some("height")
        } else {
            None
        }
    }
}

/// An ordered sequence of key rectangles captured at one point in time.
///
/// Order is depth-first pre-order encounter order within the keyboard tree.
/// No stronger ordering invariant is imposed, but the order is stable for a
/// given tree shape, and downstream scanning consumers rely on that.
///
/// Serializes directly to the wire format:
/// `{"keys":[{"x":..,"y":..,"width":..,"height":..},..]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// The captured key rectangles, in traversal order.
    pub keys: Vec<KeyRect>,
}

impl LayoutSnapshot {
    /// Creates a snapshot from an already-ordered list of rectangles.
    pub fn new(keys: Vec<KeyRect>) -> Self {
        Self { keys }
    }

    /// Returns the number of captured keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no key was captured.
    ///
    /// An empty snapshot is a valid capture result (a keyboard container
    /// with no key-capable descendants), not an error.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates over the captured rectangles in traversal order.
    pub fn iter(&self) -> std::slice::Iter<'_, KeyRect> {
        self.keys.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

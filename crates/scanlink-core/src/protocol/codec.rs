//! JSON codec for keyboard event payloads.
//!
//! Wire format:
//! ```text
//! {"keys":[{"x":<number>,"y":<number>,"width":<number>,"height":<number>},...]}
//! ```
//!
//! Encoding validates that every rectangle field is a finite number before
//! handing the snapshot to `serde_json`. Without that check a NaN or
//! infinite coordinate would be written as JSON `null` — a payload that
//! parses on the consumer side but no longer round-trips. The contract is
//! that serialization failures surface as an error to the publisher and
//! nothing is emitted.

use thiserror::Error;

use crate::domain::geometry::LayoutSnapshot;
use crate::protocol::events::KeyboardEvent;

/// Errors that can occur while encoding or decoding an event payload.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A rectangle field is NaN or infinite and cannot be represented as a
    /// JSON number.
    #[error("key {index}: {field} is not a finite number")]
    NonFinite { index: usize, field: &'static str },

    /// `serde_json` failed to serialize the snapshot.
    #[error("payload serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The payload text is not valid JSON for the wire format.
    #[error("payload parsing failed: {0}")]
    Parse(#[source] serde_json::Error),
}

// ── Encoding ──────────────────────────────────────────────────────────────────

/// Encodes a snapshot into its JSON payload.
///
/// An empty snapshot encodes to `{"keys":[]}` — the event is still emitted,
/// listeners learn the keyboard currently exposes no keys.
///
/// # Errors
///
/// Returns [`CodecError::NonFinite`] naming the first offending key and
/// field when a coordinate is NaN or infinite.
pub fn encode_snapshot(snapshot: &LayoutSnapshot) -> Result<String, CodecError> {
    for (index, rect) in snapshot.iter().enumerate() {
        if let Some(field) = rect.non_finite_field() {
            return Err(CodecError::NonFinite { index, field });
        }
    }
    serde_json::to_string(snapshot).map_err(CodecError::Serialize)
}

/// Encodes the payload for `event`: `Some(json)` for layout and show
/// events, `None` for hide.
///
/// # Errors
///
/// Propagates [`encode_snapshot`] failures for payload-carrying events.
pub fn encode_event(event: &KeyboardEvent) -> Result<Option<String>, CodecError> {
    match event.snapshot() {
        Some(snapshot) => encode_snapshot(snapshot).map(Some),
        None => Ok(None),
    }
}

// ── Decoding ──────────────────────────────────────────────────────────────────

/// Parses a payload back into the snapshot it was encoded from.
///
/// This is the consumer-side half of the contract: a snapshot must survive
/// `encode_snapshot` → `decode_snapshot` field-for-field.
///
/// # Errors
///
/// Returns [`CodecError::Parse`] when the text is not valid wire-format JSON.
pub fn decode_snapshot(payload: &str) -> Result<LayoutSnapshot, CodecError> {
    serde_json::from_str(payload).map_err(CodecError::Parse)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geometry::KeyRect;

    fn make_snapshot() -> LayoutSnapshot {
        LayoutSnapshot::new(vec![
            KeyRect::new(0.0, 0.0, 64.0, 48.0),
            KeyRect::new(64.5, 0.0, 64.0, 48.0),
        ])
    }

    #[test]
    fn test_encode_empty_snapshot_produces_empty_keys_list() {
        let payload = encode_snapshot(&LayoutSnapshot::default()).unwrap();
        assert_eq!(payload, r#"{"keys":[]}"#);
    }

    #[test]
    fn test_encode_then_decode_round_trips_field_for_field() {
        let original = make_snapshot();

        let payload = encode_snapshot(&original).unwrap();
        let decoded = decode_snapshot(&payload).unwrap();

        assert_eq!(original, decoded);
    }

    #[test]
    fn test_encode_rejects_nan_coordinate_with_index_and_field() {
        let snapshot = LayoutSnapshot::new(vec![
            KeyRect::new(0.0, 0.0, 64.0, 48.0),
            KeyRect::new(f64::NAN, 0.0, 64.0, 48.0),
        ]);

        let err = encode_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, CodecError::NonFinite { index: 1, field: "x" }));
    }

    #[test]
    fn test_encode_rejects_infinite_height() {
        let snapshot = LayoutSnapshot::new(vec![KeyRect::new(0.0, 0.0, 64.0, f64::INFINITY)]);

        let err = encode_snapshot(&snapshot).unwrap_err();
        assert!(matches!(err, CodecError::NonFinite { index: 0, field: "height" }));
    }

    #[test]
    fn test_encode_event_layout_carries_payload() {
        let event = KeyboardEvent::LayoutChanged(make_snapshot());

        let payload = encode_event(&event).unwrap();
        assert!(payload.is_some());
        assert!(payload.unwrap().contains(r#""keys""#));
    }

    #[test]
    fn test_encode_event_hidden_has_no_payload() {
        assert_eq!(encode_event(&KeyboardEvent::Hidden).unwrap(), None);
    }

    #[test]
    fn test_encode_event_show_and_layout_payloads_match_for_same_snapshot() {
        let snapshot = make_snapshot();
        let layout = encode_event(&KeyboardEvent::LayoutChanged(snapshot.clone())).unwrap();
        let shown = encode_event(&KeyboardEvent::Shown(snapshot)).unwrap();

        // Same snapshot, same payload text; only the event identifier differs.
        assert_eq!(layout, shown);
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = decode_snapshot("{not json").unwrap_err();
        assert!(matches!(err, CodecError::Parse(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        // Valid JSON, wrong wire shape (keys must be a list of rectangles).
        let err = decode_snapshot(r#"{"keys":42}"#).unwrap_err();
        assert!(matches!(err, CodecError::Parse(_)));
    }

    #[test]
    fn test_decode_accepts_integer_coordinates_from_older_emitters() {
        // Earlier emitters sent integer pixel values; serde parses them into
        // the floating-point fields without loss.
        let decoded = decode_snapshot(r#"{"keys":[{"x":10,"y":20,"width":64,"height":48}]}"#)
            .unwrap();

        assert_eq!(decoded.keys[0], KeyRect::new(10.0, 20.0, 64.0, 48.0));
    }
}

//! Integration tests for the full capture → publish → consume flow.
//!
//! These tests play both sides of the bridge: the keyboard host (building a
//! tree and driving [`KeyboardScanLink`]) and a scanning listener (reading
//! the recorded emissions and decoding payloads with the core codec).

use scanlink_core::{
    decode_snapshot, KeyInfo, KeyRect, StaticNode, EVENT_KEYBOARD_HIDE, EVENT_KEYBOARD_LAYOUT,
    EVENT_KEYBOARD_SHOW,
};
use scanlink_link::{KeyboardScanLink, LinkConfig, RecordingSink};

fn make_key(x: f64, y: f64, description: &str) -> StaticNode {
    StaticNode::key(KeyInfo {
        x,
        y,
        width: 64.0,
        height: 48.0,
        description: description.to_string(),
    })
}

fn make_keyboard() -> StaticNode {
    StaticNode::container(vec![
        StaticNode::container(vec![
            make_key(0.0, 0.0, "q"),
            make_key(64.0, 0.0, "w"),
        ]),
        StaticNode::container(vec![StaticNode::Inert, make_key(32.0, 48.0, "space")]),
    ])
}

#[test]
fn test_show_update_hide_lifecycle_emits_three_events_in_order() {
    // Arrange
    let link = KeyboardScanLink::new(RecordingSink::new());
    let keyboard = make_keyboard();

    // Act: the sequence a host runs across one keyboard session
    link.show_keyboard(&keyboard).expect("show");
    link.capture_and_publish(&keyboard).expect("layout");
    link.hide_keyboard();

    // Assert
    let ids: Vec<String> = link
        .sink()
        .events()
        .into_iter()
        .map(|e| e.event_id)
        .collect();
    assert_eq!(
        ids,
        vec![
            EVENT_KEYBOARD_SHOW.to_string(),
            EVENT_KEYBOARD_LAYOUT.to_string(),
            EVENT_KEYBOARD_HIDE.to_string(),
        ]
    );
}

#[test]
fn test_listener_sees_the_geometry_the_host_reported() {
    // Arrange
    let link = KeyboardScanLink::new(RecordingSink::new());

    // Act
    link.capture_and_publish(&make_keyboard()).expect("layout");

    // Assert: decode as a listener and compare against the known tree
    let events = link.sink().events();
    let decoded = decode_snapshot(events[0].payload.as_deref().unwrap()).expect("decode");
    assert_eq!(
        decoded.keys,
        vec![
            KeyRect::new(0.0, 0.0, 64.0, 48.0),
            KeyRect::new(64.0, 0.0, 64.0, 48.0),
            KeyRect::new(32.0, 48.0, 64.0, 48.0),
        ]
    );
}

#[test]
fn test_show_and_layout_events_carry_the_same_payload_for_the_same_tree() {
    let link = KeyboardScanLink::new(RecordingSink::new());
    let keyboard = make_keyboard();

    link.show_keyboard(&keyboard).expect("show");
    link.capture_and_publish(&keyboard).expect("layout");

    let events = link.sink().events();
    assert_eq!(events[0].payload, events[1].payload);
}

#[test]
fn test_repeated_captures_of_an_unchanged_tree_are_idempotent() {
    let link = KeyboardScanLink::new(RecordingSink::new());
    let keyboard = make_keyboard();

    for _ in 0..3 {
        link.capture_and_publish(&keyboard).expect("layout");
    }

    let events = link.sink().events();
    assert_eq!(events.len(), 3);
    assert!(events.windows(2).all(|pair| pair[0].payload == pair[1].payload));
}

#[test]
fn test_hide_after_failed_publish_still_emits() {
    // A capture that fails to encode must not wedge the lifecycle events.
    let link = KeyboardScanLink::new(RecordingSink::new());
    let broken = StaticNode::container(vec![StaticNode::key(KeyInfo {
        x: f64::INFINITY,
        y: 0.0,
        width: 64.0,
        height: 48.0,
        description: String::new(),
    })]);

    assert!(link.capture_and_publish(&broken).is_err());
    link.hide_keyboard();

    let events = link.sink().events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_id, EVENT_KEYBOARD_HIDE);
}

#[test]
fn test_payload_logging_config_preserves_wire_behaviour() {
    let link = KeyboardScanLink::with_config(
        RecordingSink::new(),
        LinkConfig { log_payloads: true },
    );

    link.capture_and_publish(&make_keyboard()).expect("layout");

    let events = link.sink().events();
    let decoded = decode_snapshot(events[0].payload.as_deref().unwrap()).expect("decode");
    assert_eq!(decoded.len(), 3);
}

//! The event protocol shared between the publishing side and scanning
//! listeners: event identifiers, the [`KeyboardEvent`] type, and the JSON
//! payload codec.
//!
//! [`KeyboardEvent`]: events::KeyboardEvent

pub mod codec;
pub mod events;

//! Application layer: the publication use-cases.
//!
//! Depends on `domain` and `scanlink-core` only; everything that touches a
//! concrete transport lives behind the sink abstraction in
//! `infrastructure`.

pub mod link;
pub mod publish_layout;

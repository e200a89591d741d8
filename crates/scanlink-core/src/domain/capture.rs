//! Layout capture: the depth-first, capability-gated tree walk.
//!
//! Given the root of a keyboard container tree, [`capture_layout`] collects
//! one [`KeyRect`] per key-capable descendant, in pre-order encounter order,
//! and returns them as a [`LayoutSnapshot`].
//!
//! The root itself never contributes a rectangle: capture starts at its
//! children, matching the convention that the caller hands over the keyboard
//! *container*, not a key.
//!
//! # Preconditions
//!
//! - The tree is acyclic. Containment cycles are a host invariant; the walk
//!   performs no cycle detection and would recurse without bound if the
//!   invariant were violated.
//! - The tree is read on the thread that owns it and is not structurally
//!   mutated during the call.
//!
//! The walk is a pure function of the tree's state at call time: no locks,
//! no side effects, no allocation beyond the result vector.

use crate::domain::geometry::{KeyRect, LayoutSnapshot};
use crate::domain::node::ScanNode;

/// Captures the keyboard layout under `root`.
///
/// For each child of the current container, in child order:
///
/// - key-capable child: contributes exactly one rectangle. Its children,
///   if any, are **not** visited — the key capability wins over the
///   container capability, so compound-key widgets report one bounding
///   rectangle instead of being decomposed.
/// - any other child: recurses, appending the full sub-sequence in order.
///
/// A container with no key-capable descendants yields an empty snapshot;
/// that is a valid result, not an error.
pub fn capture_layout(root: &dyn ScanNode) -> LayoutSnapshot {
    let mut keys = Vec::new();
    collect_keys(root, &mut keys);
    LayoutSnapshot::new(keys)
}

/// Appends the rectangles under `node` to `out`, depth-first.
fn collect_keys(node: &dyn ScanNode, out: &mut Vec<KeyRect>) {
    for index in 0..node.child_count() {
        let Some(child) = node.child_at(index) else {
            // A tree that shrinks mid-walk violates the mutation
            // precondition; skipping the hole is the least bad option.
            continue;
        };

        if let Some(info) = child.key_info() {
            // Key wins over container: one rectangle, no descent.
            out.push(info.rect());
        } else {
            collect_keys(child, out);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

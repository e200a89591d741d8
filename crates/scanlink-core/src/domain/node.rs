//! The keyboard tree capability model.
//!
//! The capture traversal never sees the host's concrete view types. It sees
//! the tree through [`ScanNode`]: ordered child enumeration plus a single
//! capability query, `key_info`, which returns `Some` when the node reports
//! exactly one interactive key.
//!
//! A node may satisfy both capabilities at once — a compound-key widget can
//! have children *and* report one bounding rectangle. The capture algorithm
//! resolves that conflict in favour of the key capability: the node
//! contributes its own rectangle and its children are not descended into.
//! That precedence lives in [`capture_layout`], not here; this module only
//! exposes the queries.
//!
//! [`StaticNode`] is an always-compiled tagged-union implementation used by
//! the unit tests and by hosts that assemble a key tree directly instead of
//! adapting a retained view hierarchy.
//!
//! [`capture_layout`]: crate::domain::capture::capture_layout

use crate::domain::geometry::KeyRect;

/// Geometry and accessibility metadata reported by a key-capable node.
///
/// `description` is the spoken/displayed label of the key ("a", "backspace",
/// "switch to symbols"). The capture traversal uses only the geometry; the
/// description exists for hosts that surface key metadata to other
/// accessibility services.
///
/// Coordinates carry whatever convention the host's geometry query uses
/// (absolute screen space or container-relative); the library does not
/// convert between the two.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyInfo {
    /// X coordinate of the key's top-left corner, in pixels.
    pub x: f64,
    /// Y coordinate of the key's top-left corner, in pixels.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
    /// Accessibility label for the key.
    pub description: String,
}

impl KeyInfo {
    /// Returns the key's rectangle, dropping the accessibility metadata.
    pub fn rect(&self) -> KeyRect {
        KeyRect::new(self.x, self.y, self.width, self.height)
    }
}

/// A node in the keyboard view tree, as seen by the capture traversal.
///
/// Implement this on the host's view/widget types. The two queries mirror
/// how a retained-mode UI toolkit exposes its hierarchy: an indexed child
/// list, and a per-node capability test.
///
/// # Thread ownership
///
/// A `ScanNode` tree must only be read on the thread that owns the
/// underlying views. The capture traversal takes no locks and assumes the
/// tree is not structurally mutated while it runs.
pub trait ScanNode {
    /// The key capability query.
    ///
    /// Returns `Some` when this node reports exactly one interactive key.
    /// A node for which this returns `Some` is never descended into, even
    /// if it also has children.
    fn key_info(&self) -> Option<KeyInfo>;

    /// Number of direct children, in layout order.
    ///
    /// Non-container leaves return 0.
    fn child_count(&self) -> usize;

    /// The child at `index`, or `None` when `index >= child_count()`.
    fn child_at(&self, index: usize) -> Option<&dyn ScanNode>;
}

// ── Static tree implementation ────────────────────────────────────────────────

/// A self-contained keyboard tree node.
///
/// Always compiled (not test-gated) so hosts that build their key layout
/// from data — rather than adapting a retained view hierarchy — can feed it
/// straight into [`capture_layout`]. The unit tests use it for the same
/// reason: no windowing system required.
///
/// [`capture_layout`]: crate::domain::capture::capture_layout
#[derive(Debug, Clone, PartialEq)]
pub enum StaticNode {
    /// A node reporting one interactive key.
    ///
    /// `children` models a compound-key widget that is simultaneously a
    /// container; the capture traversal must ignore them.
    Key {
        info: KeyInfo,
        children: Vec<StaticNode>,
    },
    /// A generic container contributing only through its descendants.
    Container { children: Vec<StaticNode> },
    /// A leaf with neither capability (a divider, a label, ...).
    Inert,
}

impl StaticNode {
    /// A key node with no children.
    pub fn key(info: KeyInfo) -> Self {
        StaticNode::Key { info, children: Vec::new() }
    }

    /// A container node with the given children.
    pub fn container(children: Vec<StaticNode>) -> Self {
        StaticNode::Container { children }
    }

    fn children(&self) -> &[StaticNode] {
        match self {
            StaticNode::Key { children, .. } | StaticNode::Container { children } => children,
            StaticNode::Inert => &[],
        }
    }
}

impl ScanNode for StaticNode {
    fn key_info(&self) -> Option<KeyInfo> {
        match self {
            StaticNode::Key { info, .. } => Some(info.clone()),
            _ => None,
        }
    }

    fn child_count(&self) -> usize {
        self.children().len()
    }

    fn child_at(&self, index: usize) -> Option<&dyn ScanNode> {
        self.children().get(index).map(|child| child as &dyn ScanNode)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

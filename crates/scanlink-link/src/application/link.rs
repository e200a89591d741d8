//! KeyboardScanLink: the facade the keyboard host calls.
//!
//! Wraps capture and publication into the three calls a host actually
//! makes: layout changed, keyboard shown, keyboard hidden. The host hands
//! over its event sink and configuration once, then calls into the link
//! from its UI thread whenever the keyboard's state changes.
//!
//! ```text
//! host keyboard view tree          KeyboardScanLink            listeners
//! ───────────────────────────────────────────────────────────────────────
//! layout pass done ──> capture_and_publish(root) ──> keyboard.layout_info
//! became visible   ──> show_keyboard(root)       ──> keyboard.show
//! left the screen  ──> hide_keyboard()           ──> keyboard.hide
//! ```

use scanlink_core::domain::capture::capture_layout;
use scanlink_core::ScanNode;

use crate::application::publish_layout::{LayoutPublisher, PublishError};
use crate::domain::config::LinkConfig;
use crate::infrastructure::sink::EventSink;

/// Bridge between a keyboard's view hierarchy and scanning listeners.
///
/// Owns the caller-supplied sink and configuration; all methods are `&self`
/// and synchronous. The link itself keeps no state between calls — every
/// capture is a fresh read of the tree.
///
/// # Threading
///
/// Capture reads the host's view tree, so the capturing methods must be
/// called on the thread that owns the tree. Emission happens on the same
/// thread before the call returns.
///
/// # Example
///
/// ```rust
/// use scanlink_core::{KeyInfo, StaticNode};
/// use scanlink_link::application::link::KeyboardScanLink;
/// use scanlink_link::infrastructure::sink::RecordingSink;
///
/// let keyboard = StaticNode::container(vec![StaticNode::key(KeyInfo {
///     x: 0.0,
///     y: 0.0,
///     width: 64.0,
///     height: 48.0,
///     description: "a".to_string(),
/// })]);
///
/// let link = KeyboardScanLink::new(RecordingSink::new());
/// link.show_keyboard(&keyboard).expect("finite geometry");
/// link.hide_keyboard();
/// assert_eq!(link.sink().len(), 2);
/// ```
pub struct KeyboardScanLink<S: EventSink> {
    sink: S,
    config: LinkConfig,
}

impl<S: EventSink> KeyboardScanLink<S> {
    /// Creates a link with default configuration.
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, LinkConfig::default())
    }

    /// Creates a link with an explicit configuration.
    pub fn with_config(sink: S, config: LinkConfig) -> Self {
        Self { sink, config }
    }

    /// Captures the layout under `root` and publishes it as a layout
    /// update.
    ///
    /// Calling this twice on an unchanged tree publishes two events with
    /// identical payloads.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Encode`] when the host reported a
    /// non-finite coordinate; nothing is emitted in that case.
    pub fn capture_and_publish(&self, root: &dyn ScanNode) -> Result<(), PublishError> {
        let snapshot = capture_layout(root);
        self.publisher().publish_layout(&snapshot)
    }

    /// Captures the layout under `root` and publishes a show event with it.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Encode`] when the host reported a
    /// non-finite coordinate; nothing is emitted in that case.
    pub fn show_keyboard(&self, root: &dyn ScanNode) -> Result<(), PublishError> {
        let snapshot = capture_layout(root);
        self.publisher().publish_show(&snapshot)
    }

    /// Publishes a hide event. Infallible; no capture involved.
    pub fn hide_keyboard(&self) {
        self.publisher().publish_hide();
    }

    /// The sink this link emits on.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The configuration this link runs with.
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    fn publisher(&self) -> LayoutPublisher<'_> {
        LayoutPublisher::new(&self.sink, &self.config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

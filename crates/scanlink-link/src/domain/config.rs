//! Link configuration types.
//!
//! [`LinkConfig`] holds the runtime settings of the bridge. It is a plain
//! struct with no global state and no environment reads: the host builds it
//! once (from its own settings screen, CLI, or defaults) and hands it to
//! [`KeyboardScanLink`]. That keeps the bridge easy to embed in tests.
//!
//! [`KeyboardScanLink`]: crate::application::link::KeyboardScanLink

/// Runtime configuration for the keyboard scan link.
///
/// # Example
///
/// ```rust
/// use scanlink_link::domain::config::LinkConfig;
///
/// // Defaults are suitable for production hosts:
/// let cfg = LinkConfig::default();
/// assert!(!cfg.log_payloads);
/// ```
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// When `true`, every emitted payload is logged in full at DEBUG level.
    ///
    /// Payloads grow with key count (a full desktop keyboard is ~100
    /// rectangles), so this stays off unless a layout mismatch is being
    /// diagnosed. Key counts and event identifiers are logged regardless.
    pub log_payloads: bool,
}

impl Default for LinkConfig {
    /// Returns a `LinkConfig` with payload logging disabled.
    fn default() -> Self {
        Self { log_payloads: false }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

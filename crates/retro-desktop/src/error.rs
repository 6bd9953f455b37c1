//! Error types for the desktop shell
//!
//! Window-manager operations never fail: unknown ids and stray clicks are
//! no-ops. Errors only exist at the boundaries where untyped input (strings
//! from JavaScript, JSON configuration) is turned into typed values.

/// Errors raised while decoding shell input or configuration.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    /// A resize handle carried a designation other than n/s/e/w or a diagonal.
    #[error("unknown resize direction: {0:?}")]
    UnknownResizeDirection(String),

    /// A pointer target kind that the shell does not classify.
    #[error("unknown target kind: {0:?}")]
    UnknownTargetKind(String),

    /// A window-bound target kind was reported without a window id.
    #[error("target kind {0:?} requires a window id")]
    MissingWindowId(&'static str),

    /// An icon target was reported without an icon id.
    #[error("icon target requires an icon id")]
    MissingIconId,

    /// A taskbar context menu entry the shell does not know.
    #[error("unknown taskbar action: {0:?}")]
    UnknownTaskbarAction(String),

    /// A desktop context menu entry the shell does not know.
    #[error("unknown desktop menu action: {0:?}")]
    UnknownDesktopMenuAction(String),

    /// Two windows in the configuration share an id.
    #[error("duplicate window id: {0}")]
    DuplicateWindow(String),

    /// Two icons in the configuration share an id.
    #[error("duplicate icon id: {0}")]
    DuplicateIcon(String),

    /// An icon opens a window that is not part of the configuration.
    #[error("icon {icon} opens unknown window {window}")]
    UnknownIconWindow { icon: String, window: String },

    /// The configured viewport has no area.
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },

    /// The base z-index leaves no room for the counter to grow.
    #[error("base z-index {base} exceeds the maximum of {max}")]
    BaseZIndexTooLarge { base: u32, max: u32 },

    /// Configuration JSON could not be decoded.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

//! Error taxonomy for theme persistence and DOM synchronization.

use thiserror::Error;

/// Failures surfaced by theme capabilities and the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// A stored or applied value is neither `light` nor `dark`.
    #[error("invalid theme value: {0:?}")]
    InvalidTheme(String),

    /// The preference store is unavailable or a read/write failed.
    #[error("preference storage failed: {0}")]
    Storage(String),

    /// The document, root element, or an event registration failed.
    #[error("document access failed: {0}")]
    Dom(String),

    /// A configuration value is empty or could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}

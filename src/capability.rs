//! Capability seams between the controller and its environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches `localStorage`, the document, or
//! `matchMedia` directly. Browser builds bind these traits in
//! [`crate::browser`]; tests and headless hosts use [`crate::memory`].
//!
//! All methods take `&self`: implementations are handles onto
//! single-threaded browser state, or use interior mutability.

use crate::error::ThemeError;

/// Callback invoked on a click of the toggle control.
pub type ClickHandler = Box<dyn FnMut()>;

/// Callback invoked with the new "prefers dark" value on each OS change.
pub type SchemeHandler = Box<dyn FnMut(bool)>;

/// Origin-scoped persistent key-value storage.
pub trait PreferenceStore {
    /// Raw value stored under `key`, or `None` when absent.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The document surfaces the theme is reflected on.
pub trait ThemeTarget {
    /// Current value of the root `attribute`, if set.
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Replace the toggle control's text. Returns `false` if the control is absent.
    fn set_label(&self, text: &str) -> Result<bool, ThemeError>;

    /// Attach a click handler to the toggle control.
    ///
    /// Returns `false` without registering anything if the control is absent.
    fn on_click(&self, handler: ClickHandler) -> Result<bool, ThemeError>;
}

/// The platform's dark color-scheme hint.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;

    /// Register `handler` for every subsequent change. Never unregistered.
    fn subscribe(&self, handler: SchemeHandler) -> Result<(), ThemeError>;
}

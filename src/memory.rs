//! In-memory capability implementations for tests and headless hosts.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::capability::{ClickHandler, ColorSchemeSignal, PreferenceStore, SchemeHandler, ThemeTarget};
use crate::error::ThemeError;

/// Key-value store backed by a `HashMap`. Can be switched offline to
/// simulate storage that throws (private browsing, quota).
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    offline: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Clear a key, as a user wiping site data would.
    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    fn check_online(&self) -> Result<(), ThemeError> {
        if self.offline.get() {
            return Err(ThemeError::Storage("store offline".into()));
        }
        Ok(())
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.check_online()?;
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.check_online()?;
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Fake document: root attributes plus an optional toggle control.
pub struct MemoryTarget {
    attributes: RefCell<HashMap<String, String>>,
    control: bool,
    label: RefCell<Option<String>>,
    click_handlers: RefCell<Vec<ClickHandler>>,
    click_binding_broken: Cell<bool>,
}

impl MemoryTarget {
    /// Document containing a toggle control.
    pub fn with_control() -> Self {
        Self::build(true)
    }

    /// Document without any toggle control.
    pub fn without_control() -> Self {
        Self::build(false)
    }

    fn build(control: bool) -> Self {
        Self {
            attributes: RefCell::new(HashMap::new()),
            control,
            label: RefCell::new(None),
            click_handlers: RefCell::new(Vec::new()),
            click_binding_broken: Cell::new(false),
        }
    }

    pub fn label(&self) -> Option<String> {
        self.label.borrow().clone()
    }

    /// Make `on_click` fail, as `addEventListener` throwing would.
    pub fn break_click_binding(&self) {
        self.click_binding_broken.set(true);
    }

    pub fn click_handler_count(&self) -> usize {
        self.click_handlers.borrow().len()
    }

    /// Dispatch a click to every registered handler.
    pub fn click(&self) {
        for handler in self.click_handlers.borrow_mut().iter_mut() {
            handler();
        }
    }
}

impl ThemeTarget for MemoryTarget {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.attributes.borrow_mut().insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_label(&self, text: &str) -> Result<bool, ThemeError> {
        if !self.control {
            return Ok(false);
        }
        *self.label.borrow_mut() = Some(text.to_owned());
        Ok(true)
    }

    fn on_click(&self, handler: ClickHandler) -> Result<bool, ThemeError> {
        if !self.control {
            return Ok(false);
        }
        if self.click_binding_broken.get() {
            return Err(ThemeError::Dom("click listener rejected".into()));
        }
        self.click_handlers.borrow_mut().push(handler);
        Ok(true)
    }
}

/// OS color-scheme hint driven by hand.
pub struct ManualSignal {
    prefers_dark: Cell<bool>,
    handlers: RefCell<Vec<SchemeHandler>>,
}

impl ManualSignal {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark: Cell::new(prefers_dark), handlers: RefCell::new(Vec::new()) }
    }

    /// Flip the OS preference and notify subscribers.
    pub fn change(&self, prefers_dark: bool) {
        self.prefers_dark.set(prefers_dark);
        for handler in self.handlers.borrow_mut().iter_mut() {
            handler(prefers_dark);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl ColorSchemeSignal for ManualSignal {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn subscribe(&self, handler: SchemeHandler) -> Result<(), ThemeError> {
        self.handlers.borrow_mut().push(handler);
        Ok(())
    }
}

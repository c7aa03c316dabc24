//! web-sys bindings of the theme capabilities and the WASM entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only compiled with the `hydrate` feature. Each capability wraps a live
//! browser handle: `localStorage`, the `Document`, and the dark-scheme
//! `MediaQueryList`. Event closures are leaked with `Closure::forget`; they
//! live as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::capability::{ClickHandler, ColorSchemeSignal, PreferenceStore, SchemeHandler, ThemeTarget};
use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::theme::Theme;

pub type BrowserController = ThemeController<LocalStore, DocumentTarget, MediaQuerySignal>;

thread_local! {
    static MOUNTED: RefCell<Option<Rc<BrowserController>>> = const { RefCell::new(None) };
}

fn js_err(e: &JsValue) -> String {
    format!("{e:?}")
}

/// `window.localStorage`.
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn from_window(window: &web_sys::Window) -> Result<Self, ThemeError> {
        let storage = window
            .local_storage()
            .map_err(|e| ThemeError::Storage(js_err(&e)))?
            .ok_or_else(|| ThemeError::Storage("localStorage unavailable".into()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage.get_item(key).map_err(|e| ThemeError::Storage(js_err(&e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage.set_item(key, value).map_err(|e| ThemeError::Storage(js_err(&e)))
    }
}

/// The `<html>` element plus the toggle control found by selector.
pub struct DocumentTarget {
    document: web_sys::Document,
    selector: String,
}

impl DocumentTarget {
    pub fn new(document: web_sys::Document, selector: &str) -> Self {
        Self { document, selector: selector.to_owned() }
    }

    fn root(&self) -> Result<web_sys::Element, ThemeError> {
        self.document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".into()))
    }

    fn control(&self) -> Result<Option<web_sys::Element>, ThemeError> {
        self.document
            .query_selector(&self.selector)
            .map_err(|e| ThemeError::Dom(js_err(&e)))
    }
}

impl ThemeTarget for DocumentTarget {
    fn attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.root()?
            .set_attribute(name, value)
            .map_err(|e| ThemeError::Dom(js_err(&e)))
    }

    fn set_label(&self, text: &str) -> Result<bool, ThemeError> {
        let Some(control) = self.control()? else {
            return Ok(false);
        };
        control.set_text_content(Some(text));
        Ok(true)
    }

    fn on_click(&self, mut handler: ClickHandler) -> Result<bool, ThemeError> {
        let Some(control) = self.control()? else {
            return Ok(false);
        };
        let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| handler()) as Box<dyn FnMut(_)>);
        control
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Dom(js_err(&e)))?;
        cb.forget();
        Ok(true)
    }
}

/// `window.matchMedia(query)`.
pub struct MediaQuerySignal {
    list: Option<web_sys::MediaQueryList>,
}

impl MediaQuerySignal {
    /// A query the browser cannot evaluate reads as "prefers light" and never fires.
    pub fn from_window(window: &web_sys::Window, query: &str) -> Self {
        let list = window.match_media(query).ok().flatten();
        if list.is_none() {
            log::debug!("matchMedia({query}) unavailable; assuming light");
        }
        Self { list }
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> bool {
        self.list.as_ref().map_or(false, web_sys::MediaQueryList::matches)
    }

    fn subscribe(&self, mut handler: SchemeHandler) -> Result<(), ThemeError> {
        let Some(list) = &self.list else {
            return Ok(());
        };
        let cb = Closure::wrap(
            Box::new(move |ev: web_sys::MediaQueryListEvent| handler(ev.matches())) as Box<dyn FnMut(_)>
        );
        list.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Dom(js_err(&e)))?;
        cb.forget();
        Ok(())
    }
}

/// Bind browser capabilities for `config` and mount the controller.
///
/// The controller is retained for the page lifetime; mounting twice keeps
/// the first controller and returns its applied theme.
pub fn mount(config: ThemeConfig) -> Result<Theme, ThemeError> {
    if let Some(existing) = MOUNTED.with(|m| m.borrow().clone()) {
        return Ok(existing.applied().unwrap_or_default());
    }

    config.validate()?;
    let window = web_sys::window().ok_or_else(|| ThemeError::Dom("no window".into()))?;
    let document = window.document().ok_or_else(|| ThemeError::Dom("no document".into()))?;

    let store = LocalStore::from_window(&window)?;
    let target = DocumentTarget::new(document, &config.toggle_selector);
    let signal = MediaQuerySignal::from_window(&window, &config.media_query);

    let controller = Rc::new(ThemeController::new(config, store, target, signal));
    let theme = controller.mount()?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(controller));
    Ok(theme)
}

/// WASM entry point: install console logging and mount with the default config.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    match mount(ThemeConfig::default()) {
        Ok(theme) => log::info!("theme mounted: {theme}"),
        Err(e) => log::warn!("theme mount failed: {e}"),
    }
}

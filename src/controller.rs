//! Theme controller: initial resolution, user toggles, and OS scheme changes.
//!
//! DESIGN
//! ======
//! Three surfaces carry the theme: the persisted preference, the root
//! attribute, and the toggle label. Every attribute write goes through
//! [`ThemeController::show`], which refreshes the label in the same call, so
//! the label can never lag the attribute.
//!
//! Resolution order at startup is stored preference, then OS hint. The
//! resolved value is persisted immediately, which makes an OS-derived choice
//! sticky. The OS listener only applies changes while storage is empty at the
//! time of the event, and never writes storage itself.
//!
//! A missing toggle control is a no-op on every label path.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::Rc;

use crate::capability::{ColorSchemeSignal, PreferenceStore, ThemeTarget};
use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::theme::Theme;

pub struct ThemeController<S, T, C> {
    config: ThemeConfig,
    store: S,
    target: T,
    signal: C,
}

impl<S, T, C> ThemeController<S, T, C>
where
    S: PreferenceStore + 'static,
    T: ThemeTarget + 'static,
    C: ColorSchemeSignal + 'static,
{
    pub fn new(config: ThemeConfig, store: S, target: T, signal: C) -> Self {
        Self { config, store, target, signal }
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn signal(&self) -> &C {
        &self.signal
    }

    /// Page bootstrap: bind the control's click to [`Self::toggle`] if the
    /// control exists, then [`Self::initialize`].
    pub fn mount(self: &Rc<Self>) -> Result<Theme, ThemeError> {
        let weak = Rc::downgrade(self);
        let bound = self.target.on_click(Box::new(move || {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            if let Err(e) = controller.toggle() {
                log::warn!("theme toggle failed: {e}");
            }
        }));
        match bound {
            Ok(true) => {}
            Ok(false) => {
                log::debug!("no toggle control matches {}; click binding skipped", self.config.toggle_selector);
            }
            Err(e) => log::warn!("theme click binding failed: {e}"),
        }
        self.initialize()
    }

    /// Resolve, apply, and persist the initial theme, then subscribe to OS
    /// color-scheme changes for the rest of the page lifetime.
    pub fn initialize(self: &Rc<Self>) -> Result<Theme, ThemeError> {
        let initial = match self.stored_theme()? {
            Some(theme) => theme,
            None => Theme::from_prefers_dark(self.signal.prefers_dark()),
        };

        self.show(initial)?;
        self.persist(initial)?;

        let weak = Rc::downgrade(self);
        self.signal.subscribe(Box::new(move |prefers_dark| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            if let Err(e) = controller.on_scheme_change(prefers_dark) {
                log::warn!("theme scheme change failed: {e}");
            }
        }))?;

        log::debug!("theme initialized to {initial}");
        Ok(initial)
    }

    /// Flip the persisted preference, apply and persist it.
    ///
    /// Absent reads as `light`; any stored string other than `light` reads
    /// as `dark`, so it flips to `light`.
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        let current = match self.stored_raw()?.as_deref() {
            None | Some("light") => Theme::Light,
            Some(_) => Theme::Dark,
        };
        let next = current.flipped();
        self.show(next)?;
        self.persist(next)?;
        log::debug!("theme toggled {current} -> {next}");
        Ok(next)
    }

    /// React to an OS color-scheme change.
    ///
    /// Applies the OS-derived theme only while nothing is persisted, and
    /// never persists it. Returns the applied theme, or `None` when a stored
    /// preference suppressed the change.
    pub fn on_scheme_change(&self, prefers_dark: bool) -> Result<Option<Theme>, ThemeError> {
        if self.stored_raw()?.is_some() {
            return Ok(None);
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.show(theme)?;
        log::debug!("theme follows OS scheme: {theme}");
        Ok(Some(theme))
    }

    /// Sync the control's label with the root attribute.
    ///
    /// Returns `false` when the control is absent.
    pub fn set_label(&self) -> Result<bool, ThemeError> {
        let applied = self.target.attribute(&self.config.attribute);
        let label = self.config.label_for(applied.as_deref());
        let present = self.target.set_label(label)?;
        if !present {
            log::debug!("no toggle control matches {}; label skipped", self.config.toggle_selector);
        }
        Ok(present)
    }

    /// Theme currently reflected on the root attribute, if it parses.
    pub fn applied(&self) -> Option<Theme> {
        self.target.attribute(&self.config.attribute)?.parse().ok()
    }

    /// Stored preference. Unparseable values read as absent.
    pub fn stored_theme(&self) -> Result<Option<Theme>, ThemeError> {
        let Some(raw) = self.stored_raw()? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(theme) => Ok(Some(theme)),
            Err(e) => {
                log::warn!("ignoring stored theme: {e}");
                Ok(None)
            }
        }
    }

    /// Raw stored value; an empty string counts as no preference.
    fn stored_raw(&self) -> Result<Option<String>, ThemeError> {
        Ok(self.store.load(&self.config.storage_key)?.filter(|raw| !raw.is_empty()))
    }

    fn show(&self, theme: Theme) -> Result<(), ThemeError> {
        self.target.set_attribute(&self.config.attribute, theme.as_str())?;
        self.set_label()?;
        Ok(())
    }

    fn persist(&self, theme: Theme) -> Result<(), ThemeError> {
        self.store.save(&self.config.storage_key, theme.as_str())
    }
}

//! # theme-toggle
//!
//! Light/dark theme controller for server-rendered pages, compiled to WASM.
//!
//! On load the controller resolves the theme from `localStorage`, falling
//! back to `prefers-color-scheme`, writes it to `<html data-theme>`, and keeps
//! the `[data-toggle]` control's label naming the next action. Clicks flip and
//! persist the preference; OS scheme changes apply only while nothing is
//! stored.
//!
//! Environment access sits behind the [`capability`] traits. The `hydrate`
//! feature provides the web-sys bindings in [`browser`]; [`memory`] provides
//! in-process fakes.

pub mod capability;
pub mod component;
pub mod config;
pub mod controller;
pub mod error;
pub mod memory;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::Theme;

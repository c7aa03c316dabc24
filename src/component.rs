//! Leptos markup for the toggle control.
//!
//! SYSTEM CONTEXT
//! ==============
//! The control is plain markup marked with `data-toggle`; the controller
//! finds it by selector, binds its click, and owns its label. The server
//! renders the light-theme label, and the controller corrects it on mount.
//! Hosts with a custom `darken_label` pass it as `label` so the server text
//! matches.

#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;

use leptos::prelude::*;

use crate::config::DEFAULT_DARKEN_LABEL;

const BASE_CLASS: &str = "btn theme-toggle";

fn toggle_class(extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{BASE_CLASS} {extra}"),
        _ => BASE_CLASS.to_owned(),
    }
}

/// Button carrying the `data-toggle` marker the controller binds to.
#[component]
pub fn ThemeToggle(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    let class = toggle_class(class.as_deref());
    let label = label.unwrap_or_else(|| DEFAULT_DARKEN_LABEL.to_owned());

    view! {
        <button type="button" class=class data-toggle="" title="Toggle theme">
            {label}
        </button>
    }
}

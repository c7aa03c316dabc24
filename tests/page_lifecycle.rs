//! Page lifecycle through the public API: first visit, reload, and a user
//! clearing site data between OS scheme changes.

use std::rc::Rc;

use theme_toggle::memory::{ManualSignal, MemoryStore, MemoryTarget};
use theme_toggle::{Theme, ThemeConfig, ThemeController};

type Page = Rc<ThemeController<MemoryStore, MemoryTarget, ManualSignal>>;

fn load_page(store: MemoryStore, prefers_dark: bool) -> Page {
    let page = Rc::new(ThemeController::new(
        ThemeConfig::default(),
        store,
        MemoryTarget::with_control(),
        ManualSignal::new(prefers_dark),
    ));
    page.mount().unwrap();
    page
}

/// Carry the persisted preference over to a fresh page load.
fn reload(page: &Page, prefers_dark: bool) -> Page {
    let store = match page.store().get("theme") {
        Some(value) => MemoryStore::new().with("theme", &value),
        None => MemoryStore::new(),
    };
    load_page(store, prefers_dark)
}

#[test]
fn first_visit_makes_os_choice_sticky_across_reloads() {
    let page = load_page(MemoryStore::new(), true);
    assert_eq!(page.applied(), Some(Theme::Dark));

    // OS switched to light before the next visit; the stored value wins.
    let page = reload(&page, false);
    assert_eq!(page.applied(), Some(Theme::Dark));
    assert_eq!(page.target().label().as_deref(), Some("Lighten"));
}

#[test]
fn clicked_choice_survives_reload_and_os_changes() {
    let page = load_page(MemoryStore::new(), false);
    page.target().click();
    assert_eq!(page.applied(), Some(Theme::Dark));

    page.signal().change(false);
    assert_eq!(page.applied(), Some(Theme::Dark));

    let page = reload(&page, false);
    assert_eq!(page.applied(), Some(Theme::Dark));
    page.target().click();
    assert_eq!(page.applied(), Some(Theme::Light));
    assert_eq!(page.target().label().as_deref(), Some("Darken"));
}

#[test]
fn cleared_site_data_lets_os_signal_drive_until_next_click() {
    let page = load_page(MemoryStore::new(), false);
    page.store().remove("theme");

    page.signal().change(true);
    assert_eq!(page.applied(), Some(Theme::Dark));
    assert_eq!(page.store().get("theme"), None);

    // Nothing stored reads as light, so the click persists dark.
    page.target().click();
    assert_eq!(page.store().get("theme").as_deref(), Some("dark"));

    page.signal().change(false);
    assert_eq!(page.applied(), Some(Theme::Dark));
}

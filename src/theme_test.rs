use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_wire_values() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
}

#[test]
fn rejects_unknown_and_miscased_values() {
    assert_eq!("Dark".parse::<Theme>(), Err(ThemeError::InvalidTheme("Dark".into())));
    assert_eq!("".parse::<Theme>(), Err(ThemeError::InvalidTheme(String::new())));
    assert!("sepia".parse::<Theme>().is_err());
}

#[test]
fn display_matches_wire_value() {
    assert_eq!(Theme::Light.to_string(), "light");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn flipped_alternates_between_variants() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
}

#[test]
fn prefers_dark_maps_to_theme() {
    assert_eq!(Theme::from_prefers_dark(true), Theme::Dark);
    assert_eq!(Theme::from_prefers_dark(false), Theme::Light);
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn serde_uses_lowercase_strings() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, Theme::Light);
}

#![cfg(test)]
//! The desktop shell inlines the shared theme (`ui/assets/theme/main.css`)
//! with `include_str!`. A truncated or relocated file would only show up as
//! unstyled windows at runtime, so check it here.
//!
//! If the theme moves, update both this test and `MAIN_CSS_INLINE` in
//! `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded theme is empty; the desktop window would render unstyled."
    );
}

#[test]
fn embedded_css_follows_navbar_theme_attribute() {
    for token in ["--color-bg", "body {", ".navbar[data-theme=\"dark\"]"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

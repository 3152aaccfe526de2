#![cfg(test)]
/*!
Selector lint for the navbar stylesheet.

The navigation bar component (`ui/src/components/navigation_bar.rs`) emits
fixed class names and reads the palette through `--nav-*` custom properties.
Release desktop builds inline `ui/assets/styling/navbar.css`, so a renamed or
dropped selector would silently break the layout. If you rename a class:
    1. Update the component markup.
    2. Adjust REQUIRED_SELECTORS below.
*/

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const COMPONENT_SOURCES: &[&str] = &[
    include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../ui/src/components/navigation_bar.rs"
    )),
    include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../ui/src/components/user_menu.rs"
    )),
];

const ICONS_SOURCE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/src/components/icons.rs"
));

/// Class selectors the component markup depends on.
const REQUIRED_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__start",
    ".navbar__brand",
    ".navbar__brand:hover",
    ".navbar__search {",
    ".navbar__search-input",
    ".icon-button {",
    ".navbar__cluster {",
    ".navbar__cluster--overlay",
    ".navbar__indicator",
    ".navbar__overlay {",
    ".navbar__overlay-header",
    ".user-menu__select",
];

/// Palette tokens set inline from `Palette::css_variables`.
const PALETTE_TOKENS: &[&str] = &[
    "--nav-primary)",
    "--nav-primary-light",
    "--nav-neutral-light",
    "--nav-neutral-dark",
    "--nav-background)",
    "--nav-background-alt",
];

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !NAVBAR_CSS.contains(**sel))
        .copied()
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required navbar selectors:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_stylesheet_reads_every_palette_token() {
    for token in PALETTE_TOKENS {
        assert!(
            NAVBAR_CSS.contains(token),
            "navbar.css never reads palette token `{token}`"
        );
    }
}

#[test]
fn required_selectors_are_emitted_by_the_component() {
    for sel in REQUIRED_SELECTORS {
        let class = sel
            .trim_start_matches('.')
            .split([' ', ':', '{'])
            .next()
            .unwrap_or_default();
        assert!(
            COMPONENT_SOURCES.iter().any(|src| src.contains(class)),
            "Stylesheet targets `{class}` but the navbar never renders it"
        );
    }
}

#[test]
fn light_mode_glyph_is_tinted() {
    // Glyph classes are built as `icon--{name}` in icons.rs.
    assert!(NAVBAR_CSS.contains(".icon--light-mode"));
    assert!(ICONS_SOURCE.contains("icon--{name}"));
    assert!(ICONS_SOURCE.contains("\"light-mode\""));
}

#[test]
fn overlay_panel_keeps_its_geometry() {
    let start = NAVBAR_CSS
        .find(".navbar__overlay {")
        .expect("overlay block present");
    let block = &NAVBAR_CSS[start..];
    let block = &block[..block.find('}').unwrap_or(block.len())];
    for decl in [
        "position: fixed",
        "right: 0",
        "height: 100%",
        "z-index: 10",
        "min-width: 300px",
        "max-width: 500px",
    ] {
        assert!(block.contains(decl), "overlay block lost `{decl}`");
    }
}

use std::collections::BTreeSet;

/// Every shipped locale must define exactly the fallback's message IDs, each once.
///
/// Adding a locale:
/// 1. Create `ui/i18n/<locale>/tmedian_ui.ftl`
/// 2. Copy all keys from `en-US/tmedian_ui.ftl`
/// 3. Register it in `LOCALES` below
const EN_US: &str = include_str!("../i18n/en-US/tmedian_ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/tmedian_ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/tmedian_ui.ftl")),
];

fn message_ids(src: &str) -> Vec<String> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim().to_string())
        .filter(|id| !id.is_empty() && !id.contains(' '))
        .collect()
}

fn assert_unique(src: &str, locale: &str) -> BTreeSet<String> {
    let ids = message_ids(src);
    let unique: BTreeSet<String> = ids.iter().cloned().collect();
    assert_eq!(
        ids.len(),
        unique.len(),
        "{locale} defines some message IDs more than once"
    );
    unique
}

#[test]
fn all_locales_match_fallback_keys() {
    let fallback = assert_unique(EN_US, "en-US");
    assert!(!fallback.is_empty(), "fallback (en-US) contains no keys");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let keys = assert_unique(src, locale);
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        let extra: Vec<_> = keys.difference(&fallback).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} missing: {}", missing.join(", ")));
        }
        if !extra.is_empty() {
            failures.push(format!("{locale} has unknown: {}", extra.join(", ")));
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn placeables_are_preserved_across_locales() {
    let line_with = |src: &str, id: &str| {
        src.lines()
            .find(|line| line.trim_start().starts_with(id))
            .unwrap_or_default()
            .to_string()
    };
    for (locale, src) in LOCALES {
        let greeting = line_with(src, "home-signed-in");
        assert!(
            greeting.contains("{ $name }"),
            "{locale}: home-signed-in lost its $name placeable"
        );
    }
    assert!(line_with(EN_US, "home-signed-in").contains("{ $name }"));
}

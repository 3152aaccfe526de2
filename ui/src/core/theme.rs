//! Theme mode and the palette tokens the navbar reads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Glyph shown on the toggle button. Reflects the *current* mode.
    pub fn glyph(self) -> ThemeGlyph {
        if self.is_dark() {
            ThemeGlyph::Moon
        } else {
            ThemeGlyph::Sun
        }
    }

    /// Value of the `data-theme` attribute on the navbar root.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &LIGHT_PALETTE,
            ThemeMode::Dark => &DARK_PALETTE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeGlyph {
    Sun,
    Moon,
}

/// Named colors, treated by the components as an opaque lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub primary_light: &'static str,
    pub neutral_light: &'static str,
    pub neutral_dark: &'static str,
    pub background_default: &'static str,
    pub background_alt: &'static str,
}

impl Palette {
    /// Inline `style` value exposing the tokens as CSS custom properties.
    pub fn css_variables(&self) -> String {
        format!(
            "--nav-primary:{};--nav-primary-light:{};--nav-neutral-light:{};\
             --nav-neutral-dark:{};--nav-background:{};--nav-background-alt:{};",
            self.primary,
            self.primary_light,
            self.neutral_light,
            self.neutral_dark,
            self.background_default,
            self.background_alt,
        )
    }
}

pub static LIGHT_PALETTE: Palette = Palette {
    primary: "#00D5FA",
    primary_light: "#E6FBFF",
    neutral_light: "#F0F0F0",
    neutral_dark: "#333333",
    background_default: "#F6F6F6",
    background_alt: "#FFFFFF",
};

pub static DARK_PALETTE: Palette = Palette {
    primary: "#00D5FA",
    primary_light: "#001519",
    neutral_light: "#333333",
    neutral_dark: "#E0E0E0",
    background_default: "#0A0A0A",
    background_alt: "#1A1A1A",
};

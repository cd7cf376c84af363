//! Light/dark theme toggle persisted through a `PreferenceStore`.
//!
//! The `<html>` theme attribute is the single source of truth: light means the
//! attribute is absent, dark means it reads `"dark"`. The toggle control's
//! glyph is always recomputed from that attribute, never tracked separately.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best effort. A failed write is logged and the visible theme
//! still changes, so the page never gets stuck in a state the user did not pick.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::PageConfig;
use crate::error::PageError;
use crate::host::Host;
use crate::prefs::PreferenceStore;

pub const MOON_GLYPH: &str = "🌙";
pub const SUN_GLYPH: &str = "☀️";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Theme selected by the root attribute value; anything but `"dark"` is light.
    pub fn from_attribute(value: Option<&str>) -> Self {
        if value == Some("dark") { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Glyph for the toggle control: it advertises the theme a click switches to.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Light => MOON_GLYPH,
            Self::Dark => SUN_GLYPH,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PageError::Theme(other.to_owned())),
        }
    }
}

/// Theme currently shown on the page.
pub fn current<H: Host>(host: &H, config: &PageConfig) -> Theme {
    match host.root() {
        Ok(root) => Theme::from_attribute(host.attribute(&root, &config.theme_attribute).as_deref()),
        Err(err) => {
            log::warn!("theme: reading root failed: {err}");
            Theme::Light
        }
    }
}

/// Write `theme` onto the root attribute without persisting it.
pub fn apply<H: Host>(host: &H, theme: Theme, config: &PageConfig) -> Result<(), PageError> {
    let root = host.root()?;
    match theme {
        Theme::Dark => host.set_attribute(&root, &config.theme_attribute, Theme::Dark.as_str()),
        Theme::Light => host.remove_attribute(&root, &config.theme_attribute),
    }
}

/// Refresh the toggle control's glyph from the root attribute.
pub fn sync_icon<H: Host>(host: &H, control: &H::Node, config: &PageConfig) -> Theme {
    let theme = current(host, config);
    host.set_text(control, theme.glyph());
    theme
}

/// Flip the theme, persist the new value and refresh the glyph.
pub fn toggle<H: Host, S: PreferenceStore>(host: &H, store: &S, control: &H::Node, config: &PageConfig) -> Theme {
    let next = current(host, config).toggled();
    if let Err(err) = apply(host, next, config) {
        log::warn!("theme: applying {next} failed: {err}");
    }
    if let Err(err) = store.set(&config.storage_key, next.as_str()) {
        log::warn!("theme: persisting {next} failed: {err}");
    }
    sync_icon(host, control, config)
}

/// Theme to show at load: the stored preference, else the system preference.
///
/// Unrecognized stored values are ignored as if nothing were stored.
pub fn preferred<S: PreferenceStore>(store: &S, system_prefers_dark: bool, config: &PageConfig) -> Theme {
    if let Some(raw) = store.get(&config.storage_key) {
        match raw.parse::<Theme>() {
            Ok(theme) => return theme,
            Err(err) => log::debug!("theme: ignoring stored value: {err}"),
        }
    }
    if system_prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Apply the preferred theme to the root attribute. Nothing is written to the store.
pub fn restore<H: Host, S: PreferenceStore>(host: &H, store: &S, config: &PageConfig) -> Theme {
    let theme = preferred(store, host.prefers_dark(), config);
    if let Err(err) = apply(host, theme, config) {
        log::warn!("theme: restoring {theme} failed: {err}");
    }
    theme
}

//! Theme preference: read, apply, toggle.
//!
//! Reads the stored preference from `localStorage` and reflects it as a
//! `data-theme` attribute on the `<html>` element. Toggle writes back to
//! storage and re-applies. Requires a browser environment; native builds
//! no-op.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a missing or blocked `localStorage` silently
//! falls back to the system color-scheme hint.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::THEME_STORAGE_KEY;

/// Light/dark preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Any stored value other than `"dark"` means light.
    pub fn from_stored(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle-button label: names the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark",
            Self::Dark => "Light",
        }
    }

    /// Font Awesome icon class shown on toggle controls.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }
}

/// Durable key/value storage for preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}

/// Resolve the preference from `store`, falling back to the system hint.
pub fn preference_from(store: &impl PreferenceStore, system_prefers_dark: bool) -> Theme {
    match store.load(THEME_STORAGE_KEY) {
        Some(raw) => Theme::from_stored(&raw),
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Flip `current`, persist it to `store`, and apply it to the document.
pub fn toggle_in(store: &impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.save(THEME_STORAGE_KEY, next.as_str());
    apply(next);
    next
}

/// Whether the browser reports `prefers-color-scheme: dark`.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Read the preference from `localStorage`, or the system hint when unset.
pub fn read_preference() -> Theme {
    preference_from(&BrowserStore, system_prefers_dark())
}

/// Set `data-theme="dark"` on `<html>`, or remove it for light.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = match theme {
                Theme::Dark => el.set_attribute("data-theme", "dark"),
                Theme::Light => el.remove_attribute("data-theme"),
            };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme and persist the new preference to `localStorage`.
pub fn toggle(current: Theme) -> Theme {
    toggle_in(&BrowserStore, current)
}

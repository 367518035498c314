//! Light/dark theme selection and its persisted preference.

pub const THEME_ATTRIBUTE: &str = "data-theme";

const LIGHT_ACCENT: &str = "#3498db";
const DARK_ACCENT: &str = "#ffffff";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Particle and link color drawn over this theme's background.
    pub fn accent_color(self) -> &'static str {
        match self {
            Self::Light => LIGHT_ACCENT,
            Self::Dark => DARK_ACCENT,
        }
    }

    /// Font Awesome glyph shown on the toggle while this theme is active.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }
}

/// Key/value storage for user preferences.
///
/// Read failures are reported as `None`, so an unavailable store looks the
/// same as an empty one.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) {
        (**self).write(key, value);
    }
}

pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn load(&self) -> Theme {
        self.store
            .read(&self.key)
            .and_then(|value| Theme::parse(value.trim()))
            .unwrap_or_default()
    }

    /// Flips `current`, persists the result and returns it.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.store.write(&self.key, next.as_str());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::HashMap};

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.write(key, value);
            store
        }
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn write(&self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn stored_dark_preference_is_loaded() {
        let store = MemoryStore::with("theme", "dark");
        let preference = ThemePreference::new(&store, "theme");

        assert_eq!(preference.load(), Theme::Dark);
    }

    #[test]
    fn stored_light_preference_is_loaded() {
        let store = MemoryStore::with("theme", "light");
        let preference = ThemePreference::new(&store, "theme");

        assert_eq!(preference.load(), Theme::Light);
    }

    #[test]
    fn missing_or_empty_preference_defaults_to_light() {
        let empty = MemoryStore::default();
        assert_eq!(ThemePreference::new(&empty, "theme").load(), Theme::Light);

        let blank = MemoryStore::with("theme", "");
        assert_eq!(ThemePreference::new(&blank, "theme").load(), Theme::Light);
    }

    #[test]
    fn unrecognized_preference_defaults_to_light() {
        let store = MemoryStore::with("theme", "solarized");
        let preference = ThemePreference::new(&store, "theme");

        assert_eq!(preference.load(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let store = MemoryStore::with("theme", "dark");
        let preference = ThemePreference::new(&store, "theme");

        let next = preference.toggle(preference.load());
        assert_eq!(next, Theme::Light);
        assert_eq!(store.read("theme").as_deref(), Some("light"));

        let next = preference.toggle(next);
        assert_eq!(next, Theme::Dark);
        assert_eq!(store.read("theme").as_deref(), Some("dark"));
        assert_eq!(preference.load(), Theme::Dark);
    }

    #[test]
    fn preference_uses_its_own_key() {
        let store = MemoryStore::with("theme", "dark");
        let preference = ThemePreference::new(&store, "portfolio-theme");

        assert_eq!(preference.load(), Theme::Light);
        preference.toggle(Theme::Light);
        assert_eq!(store.read("portfolio-theme").as_deref(), Some("dark"));
        assert_eq!(store.read("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn accent_and_icon_follow_theme() {
        assert_eq!(Theme::Light.accent_color(), "#3498db");
        assert_eq!(Theme::Dark.accent_color(), "#ffffff");
        assert_eq!(Theme::Light.icon_class(), "fa-moon");
        assert_eq!(Theme::Dark.icon_class(), "fa-sun");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }
}

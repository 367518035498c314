use web_sys::Storage;

use crate::theme::PreferenceStore;

/// `window.localStorage`, or an always-empty store when it is unavailable.
#[derive(Clone, Default)]
pub struct BrowserStorage {
    storage: Option<Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::debug!("localStorage unavailable; preferences will not persist");
        }

        Self { storage }
    }
}

impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage.as_ref() {
            if storage.set_item(key, value).is_err() {
                log::debug!("could not persist `{key}`");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Theme, ThemePreference};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn preference_round_trips_through_local_storage() {
        let preference = ThemePreference::new(BrowserStorage::open(), "theme-test");

        let next = preference.toggle(Theme::Light);
        assert_eq!(next, Theme::Dark);
        assert_eq!(preference.load(), Theme::Dark);

        preference.toggle(next);
        assert_eq!(preference.load(), Theme::Light);
    }

    #[wasm_bindgen_test]
    fn missing_storage_reads_as_empty() {
        let store = BrowserStorage::default();

        store.write("theme", "dark");
        assert_eq!(store.read("theme"), None);
        assert_eq!(ThemePreference::new(store, "theme").load(), Theme::Light);
    }
}

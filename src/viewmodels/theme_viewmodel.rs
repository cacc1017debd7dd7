// ============================================================================
// THEME VIEWMODEL - Estado del tema + persistencia
// ============================================================================

use std::cell::Cell;
use crate::models::Theme;
use crate::services::key_value_store::{set_or_warn, KeyValueStore};
use crate::utils::THEME_KEY;

pub struct ThemeViewModel<S: KeyValueStore> {
    store: S,
    theme: Cell<Theme>,
}

impl<S: KeyValueStore> ThemeViewModel<S> {
    /// Carga la preferencia guardada (claro si falta o es inválida)
    pub fn load(store: S) -> Self {
        let theme = Theme::from_stored(store.get(THEME_KEY).as_deref());
        Self {
            store,
            theme: Cell::new(theme),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Cambia de tema y persiste el nuevo valor
    pub fn toggle(&self) -> Theme {
        let next = self.theme.get().toggled();
        self.theme.set(next);
        set_or_warn(&self.store, THEME_KEY, next.as_str());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::key_value_store::MemoryStore;

    #[test]
    fn defaults_to_light_without_preference() {
        let vm = ThemeViewModel::load(MemoryStore::new());
        assert_eq!(vm.theme(), Theme::Light);
    }

    #[test]
    fn loads_saved_dark_theme() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(ThemeViewModel::load(store).theme(), Theme::Dark);
    }

    #[test]
    fn garbage_preference_is_light() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "purple").unwrap();
        assert_eq!(ThemeViewModel::load(store).theme(), Theme::Light);
    }

    #[test]
    fn toggle_persists_new_theme() {
        let store = MemoryStore::new();
        let vm = ThemeViewModel::load(store.clone());

        assert_eq!(vm.toggle(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn double_toggle_restores_original_state() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        let vm = ThemeViewModel::load(store.clone());

        vm.toggle();
        vm.toggle();

        assert_eq!(vm.theme(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_normalizes_invalid_stored_value() {
        let store = MemoryStore::new();
        store.set(THEME_KEY, "purple").unwrap();
        let vm = ThemeViewModel::load(store.clone());

        vm.toggle();
        vm.toggle();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }
}

// ============================================================================
// KEY-VALUE STORE - Abstracción sobre localStorage
// ============================================================================
// Los managers dependen de este trait y no de `window.localStorage`, así los
// tests usan MemoryStore. No hay transacciones: cada operación es
// independiente, igual que en el navegador.
// ============================================================================

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::rc::Rc;
use crate::utils::get_local_storage;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// Store respaldado por `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage
            .set_item(key, value)
            .map_err(|_| format!("Error guardando '{}' en localStorage", key))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
        storage
            .remove_item(key)
            .map_err(|_| format!("Error eliminando '{}' de localStorage", key))
    }
}

/// Store en memoria para los tests
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Guardar y registrar el fallo sin propagarlo (storage lleno/deshabilitado)
pub fn set_or_warn(store: &impl KeyValueStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("⚠️ [STORE] {}", e);
    }
}

/// Eliminar y registrar el fallo sin propagarlo
pub fn remove_or_warn(store: &impl KeyValueStore, key: &str) {
    if let Err(e) = store.remove(key) {
        log::warn!("⚠️ [STORE] {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme"), None);

        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(store.len(), 1);

        store.remove("theme").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn removing_missing_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.remove("nope").is_ok());
    }

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        other.set("userName", "Ana").unwrap();
        assert_eq!(store.get("userName").as_deref(), Some("Ana"));
    }
}

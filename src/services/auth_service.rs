// ============================================================================
// AUTH SERVICE - Autenticación simulada sobre localStorage
// ============================================================================
// No hay backend: "loguearse" es escribir flags en storage y redirigir.
// El rol se deduce del email por subcadena; es una simulación, no una
// clasificación real, y se mantiene tal cual.
// ============================================================================

use crate::config::CONFIG;
use crate::models::{Page, UserRole, UserSession};
use crate::services::key_value_store::{remove_or_warn, set_or_warn, KeyValueStore, LocalStorageStore};
use crate::services::navigator::{Navigator, WindowNavigator};
use crate::utils::{
    IS_LOGGED_IN_KEY, LOGGED_IN_VALUE, USER_EMAIL_KEY, USER_KEYS, USER_NAME_KEY, USER_TYPE_KEY,
};

pub struct AuthManager<S: KeyValueStore, N: Navigator> {
    store: S,
    navigator: N,
}

impl AuthManager<LocalStorageStore, WindowNavigator> {
    /// Manager conectado a localStorage y a `window.location`
    pub fn browser() -> Self {
        Self::new(LocalStorageStore::new(), WindowNavigator::new(CONFIG.pages.clone()))
    }
}

impl<S: KeyValueStore, N: Navigator> AuthManager<S, N> {
    pub fn new(store: S, navigator: N) -> Self {
        Self { store, navigator }
    }

    /// Un flag vacío cuenta como ausente
    pub fn is_logged_in(&self) -> bool {
        self.store
            .get(IS_LOGGED_IN_KEY)
            .filter(|value| !value.is_empty())
            .is_some()
    }

    /// Páginas protegidas: sin flag de sesión se vuelve a la entrada.
    /// Devuelve si la sesión existía.
    pub fn check_login(&self) -> bool {
        if self.is_logged_in() {
            return true;
        }
        log::info!("🔒 [AUTH] Sin sesión, redirigiendo a la entrada");
        self.navigator.navigate(Page::Entry);
        false
    }

    /// Login simulado: guarda el email, marca la sesión y deduce el rol
    pub fn handle_login(&self, email: &str) -> UserRole {
        let role = UserRole::from_email(email);

        set_or_warn(&self.store, USER_EMAIL_KEY, email);
        set_or_warn(&self.store, IS_LOGGED_IN_KEY, LOGGED_IN_VALUE);
        set_or_warn(&self.store, USER_TYPE_KEY, role.as_str());

        log::info!("✅ [AUTH] Login simulado como {}", role.as_str());
        self.navigator.navigate(Page::Dashboard);
        role
    }

    /// Registro simulado: los valores se guardan tal cual, sin validar
    pub fn handle_register(&self, user_type: &str, name: &str, email: &str) {
        set_or_warn(&self.store, USER_TYPE_KEY, user_type);
        set_or_warn(&self.store, USER_NAME_KEY, name);
        set_or_warn(&self.store, USER_EMAIL_KEY, email);
        set_or_warn(&self.store, IS_LOGGED_IN_KEY, LOGGED_IN_VALUE);

        log::info!("✅ [AUTH] Registro simulado ({})", user_type);
        self.navigator.navigate(Page::Dashboard);
    }

    /// Borra todas las claves de usuario; el tema se conserva
    pub fn logout(&self) {
        for key in USER_KEYS {
            remove_or_warn(&self.store, key);
        }
        log::info!("👋 [AUTH] Logout");
        self.navigator.navigate(Page::Entry);
    }

    /// Lectura de la sesión actual, `None` si no hay flag
    pub fn current_user(&self) -> Option<UserSession> {
        if !self.is_logged_in() {
            return None;
        }
        Some(UserSession {
            email: self.store.get(USER_EMAIL_KEY),
            name: self.store.get(USER_NAME_KEY),
            user_type: self.store.get(USER_TYPE_KEY),
        })
    }
}

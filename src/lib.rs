// ============================================================================
// SITIO DE DONACIONES - INTERACTIVIDAD DEL FRONTEND (RUST + WASM)
// ============================================================================
// - Views: enlazan el DOM (tema, modales, animaciones, formularios)
// - ViewModels: estado + lógica sin DOM (tema, contadores)
// - Services: storage, navegación, timers, auth simulada, reparto de pagos
// - Models: tipos compartidos
// Las funciones exportadas mantienen los nombres que usan las páginas HTML.
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;
use std::rc::Rc;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement};
use crate::app::App;
use crate::config::CONFIG;
use crate::services::{calculate_split, AuthManager, BrowserScheduler};
use crate::views::{AnimationManager, FormUtils, ModalManager};

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Sitio de doações - Rust + WASM");

    app::boot(|app| {
        APP.with(|app_cell| {
            *app_cell.borrow_mut() = Some(app);
        });
    })
}

/// Objeto JS plano a partir de un valor serializable.
/// Los f64 pasan como números JS, NaN e Infinity incluidos.
fn to_js_object<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

// ----------------------------------------------------------------------------
// Modales
// ----------------------------------------------------------------------------

#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(modal_id: &str) -> Result<(), JsValue> {
    ModalManager::open_modal(modal_id)
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(modal_id: &str) -> Result<(), JsValue> {
    ModalManager::close_modal(modal_id)
}

// ----------------------------------------------------------------------------
// Tema
// ----------------------------------------------------------------------------

/// Devuelve el tema resultante, o `undefined` si la app no arrancó
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> Result<Option<String>, JsValue> {
    let theme = APP.with(|app_cell| {
        app_cell
            .borrow()
            .as_ref()
            .and_then(|app| app.theme().cloned())
    });
    match theme {
        Some(manager) => Ok(Some(manager.toggle_theme()?.as_str().to_string())),
        None => {
            log::warn!("⚠️ [THEME] App no está inicializada");
            Ok(None)
        }
    }
}

// ----------------------------------------------------------------------------
// Autenticación simulada
// ----------------------------------------------------------------------------

#[wasm_bindgen(js_name = checkLogin)]
pub fn check_login() -> bool {
    AuthManager::browser().check_login()
}

/// Devuelve el rol asignado ("osc" | "empresa")
#[wasm_bindgen(js_name = handleLogin)]
pub fn handle_login(email: &str) -> String {
    AuthManager::browser().handle_login(email).as_str().to_string()
}

#[wasm_bindgen(js_name = handleRegister)]
pub fn handle_register(user_type: &str, name: &str, email: &str) {
    AuthManager::browser().handle_register(user_type, name, email)
}

#[wasm_bindgen]
pub fn logout() {
    AuthManager::browser().logout()
}

/// `{ email, name, userType }` (campos ausentes como `undefined`) o `null` sin sesión
#[wasm_bindgen(js_name = currentUser)]
pub fn current_user() -> Result<JsValue, JsValue> {
    match AuthManager::browser().current_user() {
        Some(user) => to_js_object(&user),
        None => Ok(JsValue::NULL),
    }
}

// ----------------------------------------------------------------------------
// Animaciones
// ----------------------------------------------------------------------------

#[wasm_bindgen(js_name = setupScrollAnimations)]
pub fn setup_scroll_animations() -> Result<usize, JsValue> {
    AnimationManager::setup_scroll_animations()
}

/// Ya se ejecuta tras el `load`; llamarla otra vez duplica los timers
#[wasm_bindgen(js_name = animateNumbers)]
pub fn animate_numbers() -> Result<usize, JsValue> {
    AnimationManager::animate_numbers(Rc::new(BrowserScheduler))
}

// ----------------------------------------------------------------------------
// Formularios y pagos
// ----------------------------------------------------------------------------

#[wasm_bindgen(js_name = formatPhone)]
pub fn format_phone(input: HtmlInputElement) -> Result<(), JsValue> {
    FormUtils::format_phone(&input)
}

#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(form: Element) -> Result<bool, JsValue> {
    FormUtils::validate_form(&form)
}

/// `{ companyPays, oscReceives }`
#[wasm_bindgen(js_name = calculateSplit)]
pub fn calculate_split_js(donation_amount: f64) -> Result<JsValue, JsValue> {
    to_js_object(&calculate_split(donation_amount))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn field(object: &JsValue, name: &str) -> f64 {
        js_sys::Reflect::get(object, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_f64())
            .expect("campo numérico")
    }

    #[wasm_bindgen_test]
    fn calculate_split_returns_plain_object() {
        let split = calculate_split_js(100.0).unwrap();
        assert_eq!(field(&split, "companyPays"), 105.0);
        assert_eq!(field(&split, "oscReceives"), 100.0);
    }

    #[wasm_bindgen_test]
    fn calculate_split_keeps_nan() {
        let split = calculate_split_js(f64::NAN).unwrap();
        assert!(field(&split, "companyPays").is_nan());
        assert!(field(&split, "oscReceives").is_nan());
    }

    #[wasm_bindgen_test]
    fn calculate_split_overflows_to_infinity() {
        let split = calculate_split_js(f64::MAX).unwrap();
        assert_eq!(field(&split, "companyPays"), f64::INFINITY);
        assert_eq!(field(&split, "oscReceives"), f64::MAX);
    }
}

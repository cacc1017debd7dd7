// ============================================================================
// THEME MANAGER - Botón de tema + clase en <body>
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};
use crate::dom::{add_class, body, get_element_by_id, on_click, remove_class, set_text_content};
use crate::models::Theme;
use crate::services::key_value_store::LocalStorageStore;
use crate::utils::{DARK_THEME_CLASS, THEME_TOGGLE_ID};
use crate::viewmodels::ThemeViewModel;

pub struct ThemeManager {
    view_model: ThemeViewModel<LocalStorageStore>,
    toggle_button: Option<Element>,
    body: HtmlElement,
}

impl ThemeManager {
    /// Enlaza `#toggleTheme` y `<body>`, aplica el tema guardado y registra
    /// el click. Sin botón no hay toggle; sin body es un error.
    pub fn init() -> Result<Rc<Self>, JsValue> {
        let manager = Rc::new(Self {
            view_model: ThemeViewModel::load(LocalStorageStore::new()),
            toggle_button: get_element_by_id(THEME_TOGGLE_ID),
            body: body()?,
        });

        manager.apply(manager.view_model.theme())?;

        match manager.toggle_button.as_ref() {
            Some(button) => {
                let manager_clone = manager.clone();
                on_click(button, move |_e| {
                    if let Err(e) = manager_clone.toggle_theme() {
                        log::error!("❌ [THEME] Error cambiando tema: {:?}", e);
                    }
                })?;
            }
            None => log::debug!("🎨 [THEME] Sin #{} en esta página", THEME_TOGGLE_ID),
        }

        log::info!("🎨 [THEME] Tema inicial: {}", manager.view_model.theme().as_str());
        Ok(manager)
    }

    pub fn toggle_theme(&self) -> Result<Theme, JsValue> {
        let theme = self.view_model.toggle();
        self.apply(theme)?;
        Ok(theme)
    }

    fn apply(&self, theme: Theme) -> Result<(), JsValue> {
        if theme.is_dark() {
            add_class(&self.body, DARK_THEME_CLASS)?;
        } else {
            remove_class(&self.body, DARK_THEME_CLASS)?;
        }
        if let Some(button) = &self.toggle_button {
            set_text_content(button, theme.toggle_icon());
        }
        Ok(())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use crate::dom::{document, has_class};
    use crate::services::key_value_store::KeyValueStore;
    use crate::utils::THEME_KEY;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn toggle_updates_body_class_icon_and_storage() {
        let store = LocalStorageStore::new();
        store.remove(THEME_KEY).unwrap();

        let button = document().unwrap().create_element("button").unwrap();
        button.set_id(THEME_TOGGLE_ID);
        body().unwrap().append_child(&button).unwrap();

        let manager = ThemeManager::init().unwrap();
        let page_body = body().unwrap();
        assert!(!has_class(&page_body, DARK_THEME_CLASS));
        assert_eq!(button.text_content().as_deref(), Some("🌙"));

        assert_eq!(manager.toggle_theme().unwrap(), Theme::Dark);
        assert!(has_class(&page_body, DARK_THEME_CLASS));
        assert_eq!(button.text_content().as_deref(), Some("☀️"));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        // El click del botón vuelve al tema claro
        button.dyn_ref::<HtmlElement>().unwrap().click();
        assert!(!has_class(&page_body, DARK_THEME_CLASS));
        assert_eq!(button.text_content().as_deref(), Some("🌙"));
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));

        button.remove();
    }
}

// ============================================================================
// MODAL MANAGER - Mostrar/ocultar overlays por id
// ============================================================================

use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use crate::dom::{get_element_by_id, has_class, on_window_click, set_style};
use crate::utils::MODAL_CLASS;

thread_local! {
    // El listener global solo se instala una vez por página
    static BACKDROP_LISTENER_INSTALLED: Cell<bool> = Cell::new(false);
}

pub struct ModalManager;

impl ModalManager {
    pub fn open_modal(modal_id: &str) -> Result<(), JsValue> {
        Self::set_display(modal_id, "block")
    }

    pub fn close_modal(modal_id: &str) -> Result<(), JsValue> {
        Self::set_display(modal_id, "none")
    }

    /// Cerrar el modal al hacer click en el fondo (el propio `.modal`,
    /// no un hijo suyo)
    pub fn init() -> Result<(), JsValue> {
        if BACKDROP_LISTENER_INSTALLED.with(|flag| flag.replace(true)) {
            log::warn!("⚠️ [MODAL] init ya fue llamado, ignorando llamada duplicada");
            return Ok(());
        }

        on_window_click(|event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if has_class(&target, MODAL_CLASS) {
                if let Err(e) = set_style(&target, "display", "none") {
                    log::warn!("⚠️ [MODAL] No se pudo cerrar el modal: {:?}", e);
                }
            }
        })
    }

    fn set_display(modal_id: &str, display: &str) -> Result<(), JsValue> {
        match get_element_by_id(modal_id) {
            Some(modal) => set_style(&modal, "display", display),
            None => {
                log::debug!("🪟 [MODAL] #{} no existe, nada que hacer", modal_id);
                Ok(())
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use web_sys::HtmlElement;
    use wasm_bindgen_test::*;
    use crate::dom::{body, document};

    wasm_bindgen_test_configure!(run_in_browser);

    fn modal_with_child(id: &str) -> (Element, Element) {
        let doc = document().unwrap();
        let modal = doc.create_element("div").unwrap();
        modal.set_id(id);
        modal.set_class_name(MODAL_CLASS);
        let child = doc.create_element("div").unwrap();
        child.set_class_name("modal-content");
        modal.append_child(&child).unwrap();
        body().unwrap().append_child(&modal).unwrap();
        (modal, child)
    }

    fn display(element: &Element) -> String {
        element
            .dyn_ref::<HtmlElement>()
            .unwrap()
            .style()
            .get_property_value("display")
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn open_and_close_by_id() {
        let (modal, _) = modal_with_child("modal-open-close");

        ModalManager::open_modal("modal-open-close").unwrap();
        assert_eq!(display(&modal), "block");

        ModalManager::close_modal("modal-open-close").unwrap();
        assert_eq!(display(&modal), "none");

        modal.remove();
    }

    #[wasm_bindgen_test]
    fn unknown_id_is_ignored() {
        assert!(ModalManager::open_modal("no-existe").is_ok());
        assert!(ModalManager::close_modal("no-existe").is_ok());
    }

    #[wasm_bindgen_test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let (modal, child) = modal_with_child("modal-backdrop");
        ModalManager::init().unwrap();
        ModalManager::open_modal("modal-backdrop").unwrap();

        child.dyn_ref::<HtmlElement>().unwrap().click();
        assert_eq!(display(&modal), "block");

        modal.dyn_ref::<HtmlElement>().unwrap().click();
        assert_eq!(display(&modal), "none");

        modal.remove();
    }
}

// ============================================================================
// FORM UTILS - Teléfono + campos obligatorios
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};
use crate::dom::{clear_style, on_input, query_selector_all_in, set_style};
use crate::utils::{format_phone, validate_required, RequiredField, ERROR_BORDER_COLOR, REQUIRED_FIELDS_SELECTOR};

/// Campo obligatorio real del formulario
enum FormField {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
}

impl FormField {
    fn from_element(element: Element) -> Option<Self> {
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(FormField::Input(input)),
            Err(element) => element.dyn_into::<HtmlSelectElement>().ok().map(FormField::Select),
        }
    }

    fn element(&self) -> &Element {
        match self {
            FormField::Input(input) => input,
            FormField::Select(select) => select,
        }
    }
}

impl RequiredField for FormField {
    fn value(&self) -> String {
        match self {
            FormField::Input(input) => input.value(),
            FormField::Select(select) => select.value(),
        }
    }

    fn mark_invalid(&self) {
        if let Err(e) = set_style(self.element(), "border-color", ERROR_BORDER_COLOR) {
            log::warn!("⚠️ [FORM] No se pudo marcar el campo: {:?}", e);
        }
    }

    fn clear_mark(&self) {
        if let Err(e) = clear_style(self.element(), "border-color") {
            log::warn!("⚠️ [FORM] No se pudo limpiar el campo: {:?}", e);
        }
    }
}

pub struct FormUtils;

impl FormUtils {
    /// Formatea el teléfono mientras se escribe
    pub fn format_phone(input: &HtmlInputElement) -> Result<(), JsValue> {
        on_input(input, |event| {
            let Some(target) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            target.set_value(&format_phone(&target.value()));
        })
    }

    /// Marca los campos obligatorios vacíos. No bloquea el submit: quien
    /// llama decide según el resultado.
    pub fn validate_form(form: &Element) -> Result<bool, JsValue> {
        let fields: Vec<FormField> = query_selector_all_in(form, REQUIRED_FIELDS_SELECTOR)?
            .into_iter()
            .filter_map(FormField::from_element)
            .collect();

        let is_valid = validate_required(&fields);
        if !is_valid {
            log::debug!("📝 [FORM] Formulario con campos obligatorios vacíos");
        }
        Ok(is_valid)
    }
}

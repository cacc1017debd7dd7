// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener `<body>`
pub fn body() -> Result<HtmlElement, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .body()
        .ok_or_else(|| JsValue::from_str("No body element found"))
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Establecer una propiedad CSS inline (`element.style.<name> = value`)
pub fn set_style(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .set_property(name, value)
}

/// Quitar una propiedad CSS inline (equivale a asignar "")
pub fn clear_style(element: &Element, name: &str) -> Result<(), JsValue> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?
        .style()
        .remove_property(name)
        .map(|_| ())
}

/// Query selector all sobre el documento
pub fn query_selector_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector_all(selector)?;
    Ok(collect_elements(&list))
}

/// Query selector all dentro de un elemento
pub fn query_selector_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok(collect_elements(&list))
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos: closure.forget() es seguro, el navegador los
//   limpia cuando el elemento se destruye.
// - Listeners globales (window/document): viven lo mismo que la página y
//   solo deben registrarse UNA VEZ. Quien los instala lleva su propio flag.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, MouseEvent};
use crate::dom::{document, window};

/// Registrar un listener permanente en cualquier EventTarget
pub fn listen<E, F>(target: &EventTarget, event_type: &str, mut handler: F) -> Result<(), JsValue>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        handler(event.unchecked_into::<E>());
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(target, "click", handler)
}

/// Helper para crear input handler simple
pub fn on_input<F>(target: &EventTarget, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(target, "input", handler)
}

/// Click en cualquier parte de la ventana
pub fn on_window_click<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    on_click(&win, handler)
}

// `document.readyState`: "loading" -> "interactive" -> "complete"

/// `DOMContentLoaded` ya se disparó
pub fn dom_is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// El evento `load` de la ventana ya se disparó
pub fn page_is_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Ejecuta `handler` cuando el DOM esté listo (o ya, si ya lo está)
pub fn on_dom_ready<F>(handler: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    if dom_is_parsed(&doc.ready_state()) {
        handler();
        return Ok(());
    }
    let mut handler = Some(handler);
    listen(&doc, "DOMContentLoaded", move |_e: Event| {
        if let Some(handler) = handler.take() {
            handler();
        }
    })
}

/// Ejecuta `handler` tras el evento `load` (o ya, si la página terminó de cargar)
pub fn on_window_load<F>(handler: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
    if page_is_loaded(&doc.ready_state()) {
        handler();
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("No window"))?;
    let mut handler = Some(handler);
    listen(&win, "load", move |_e: Event| {
        if let Some(handler) = handler.take() {
            handler();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_document_waits_for_dom_content_loaded() {
        assert!(!dom_is_parsed("loading"));
        assert!(dom_is_parsed("interactive"));
        assert!(dom_is_parsed("complete"));
    }

    #[test]
    fn only_complete_document_skips_load_event() {
        assert!(!page_is_loaded("loading"));
        assert!(!page_is_loaded("interactive"));
        assert!(page_is_loaded("complete"));
    }
}

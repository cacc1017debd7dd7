// ============================================================================
// ANIMATION MANAGER - Reveal por scroll + contadores numéricos
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use crate::config::CONFIG;
use crate::dom::{get_attribute, query_selector_all, set_style, set_text_content};
use crate::services::scheduler::Scheduler;
use crate::utils::*;
use crate::viewmodels::counter_viewmodel::{parse_target, run_counter, CounterAnimation, CounterFormat};

pub struct AnimationManager;

impl AnimationManager {
    /// Oculta las tarjetas de contenido y las revela una sola vez al entrar
    /// en el viewport. El observer vive lo mismo que la página.
    /// Devuelve cuántos elementos quedaron observados.
    pub fn setup_scroll_animations() -> Result<usize, JsValue> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if entry.is_intersecting() {
                        if let Err(e) = reveal(&entry.target()) {
                            log::warn!("⚠️ [ANIM] Error revelando elemento: {:?}", e);
                        }
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        callback.forget();

        let elements = query_selector_all(REVEAL_SELECTOR)?;
        for element in &elements {
            hide(element)?;
            observer.observe(element);
        }

        log::info!("✨ [ANIM] {} elementos con reveal", elements.len());
        Ok(elements.len())
    }

    /// Anima cada `.stat-number[data-target]` de 0 al objetivo.
    /// Llamar una sola vez por página: cada llamada crea timers nuevos.
    pub fn animate_numbers(scheduler: Rc<dyn Scheduler>) -> Result<usize, JsValue> {
        let counter_config = &CONFIG.counter;
        let mut started = 0;

        for stat in query_selector_all(COUNTER_SELECTOR)? {
            let raw_target = get_attribute(&stat, COUNTER_TARGET_ATTR).unwrap_or_default();
            let Some(target) = parse_target(&raw_target) else {
                log::warn!("⚠️ [ANIM] {}=\"{}\" no es numérico, se omite", COUNTER_TARGET_ATTR, raw_target);
                continue;
            };

            let format = CounterFormat::detect(&stat.text_content().unwrap_or_default());
            let animation = CounterAnimation::new(target, format, counter_config.steps);
            run_counter(
                scheduler.clone(),
                counter_config.tick_ms,
                animation,
                move |text| set_text_content(&stat, text),
            );
            started += 1;
        }

        log::info!("🔢 [ANIM] {} contadores en marcha", started);
        Ok(started)
    }
}

fn hide(element: &Element) -> Result<(), JsValue> {
    set_style(element, "opacity", HIDDEN_OPACITY)?;
    set_style(element, "transform", HIDDEN_TRANSFORM)?;
    set_style(element, "transition", REVEAL_TRANSITION)
}

fn reveal(element: &Element) -> Result<(), JsValue> {
    set_style(element, "opacity", RESTING_OPACITY)?;
    set_style(element, "transform", RESTING_TRANSFORM)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use web_sys::HtmlElement;
    use wasm_bindgen_test::*;
    use crate::dom::{body, document};

    wasm_bindgen_test_configure!(run_in_browser);

    fn style(element: &Element, name: &str) -> String {
        element
            .dyn_ref::<HtmlElement>()
            .unwrap()
            .style()
            .get_property_value(name)
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn content_cards_start_hidden_and_offset() {
        let card = document().unwrap().create_element("div").unwrap();
        card.set_class_name("news-card");
        body().unwrap().append_child(&card).unwrap();

        let observed = AnimationManager::setup_scroll_animations().unwrap();
        assert!(observed >= 1);
        // El observer revela de forma asíncrona, después de esta comprobación
        assert_eq!(style(&card, "opacity"), HIDDEN_OPACITY);
        assert_eq!(style(&card, "transform"), HIDDEN_TRANSFORM);

        reveal(&card).unwrap();
        assert_eq!(style(&card, "opacity"), RESTING_OPACITY);
        assert_ne!(style(&card, "transform"), HIDDEN_TRANSFORM);

        card.remove();
    }
}

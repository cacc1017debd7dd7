// ============================================================================
// APP - Arranque de la página
// ============================================================================
// Cada manager es independiente: un fallo en uno se registra y no impide
// que los demás se inicialicen.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use crate::config::CONFIG;
use crate::dom::{on_dom_ready, on_window_load};
use crate::services::scheduler::{BrowserScheduler, Scheduler};
use crate::views::{AnimationManager, ModalManager, ThemeManager};

pub struct App {
    theme: Option<Rc<ThemeManager>>,
}

impl App {
    /// Inicialización al tener el DOM listo
    pub fn init() -> Self {
        let theme = match ThemeManager::init() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::error!("❌ [APP] ThemeManager no disponible: {:?}", e);
                None
            }
        };

        if let Err(e) = ModalManager::init() {
            log::error!("❌ [APP] Error instalando listener de modales: {:?}", e);
        }

        if let Err(e) = AnimationManager::setup_scroll_animations() {
            log::error!("❌ [APP] Error preparando animaciones de scroll: {:?}", e);
        }

        Self { theme }
    }

    pub fn theme(&self) -> Option<&Rc<ThemeManager>> {
        self.theme.as_ref()
    }
}

/// Programa los contadores `start_delay_ms` después del evento `load`
pub fn schedule_counters() -> Result<(), JsValue> {
    on_window_load(|| {
        let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler);
        let task_scheduler = scheduler.clone();
        scheduler.schedule(
            CONFIG.counter.start_delay_ms,
            Box::new(move || {
                if let Err(e) = AnimationManager::animate_numbers(task_scheduler) {
                    log::error!("❌ [APP] Error animando contadores: {:?}", e);
                }
            }),
        );
    })
}

/// Arranca la app cuando el DOM esté listo; `on_ready` recibe la instancia
pub fn boot<F>(on_ready: F) -> Result<(), JsValue>
where
    F: FnOnce(App) + 'static,
{
    on_dom_ready(move || {
        log::info!("🚀 [APP] DOM listo, inicializando managers");
        let app = App::init();
        on_ready(app);
        if let Err(e) = schedule_counters() {
            log::error!("❌ [APP] Error programando contadores: {:?}", e);
        }
    })
}

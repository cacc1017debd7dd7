// ============================================================================
// NAVIGATOR - Redirecciones entre páginas
// ============================================================================

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
use crate::config::PagesConfig;
use crate::models::Page;

pub trait Navigator {
    fn navigate(&self, page: Page);
}

/// Navegación real: asigna `window.location.href`
#[derive(Clone, Debug)]
pub struct WindowNavigator {
    pages: PagesConfig,
}

impl WindowNavigator {
    pub fn new(pages: PagesConfig) -> Self {
        Self { pages }
    }
}

impl Navigator for WindowNavigator {
    fn navigate(&self, page: Page) {
        let href = page.path(&self.pages);
        let Some(window) = web_sys::window() else {
            log::error!("❌ [NAV] Sin window, no se puede navegar a {}", href);
            return;
        };
        log::info!("➡️ [NAV] {}", href);
        if let Err(e) = window.location().set_href(href) {
            log::error!("❌ [NAV] Error navegando a {}: {:?}", href, e);
        }
    }
}

/// Registra los destinos en vez de navegar (tests)
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<Page>>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Page> {
        self.visited.borrow().clone()
    }

    pub fn last(&self) -> Option<Page> {
        self.visited.borrow().last().copied()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn navigate(&self, page: Page) {
        self.visited.borrow_mut().push(page);
    }
}

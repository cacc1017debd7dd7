use crate::config::PagesConfig;

/// Páginas a las que redirige el flujo de autenticación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Entry,
    Dashboard,
}

impl Page {
    pub fn path<'a>(&self, pages: &'a PagesConfig) -> &'a str {
        match self {
            Page::Entry => &pages.entry,
            Page::Dashboard => &pages.dashboard,
        }
    }
}

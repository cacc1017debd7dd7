// ============================================================================
// CONSTANTES - Contrato con el HTML y con localStorage
// ============================================================================
// Las claves de storage deben mantenerse estables entre versiones para que
// una sesión "logueada" sobreviva a un reload.

/// Claves en localStorage
pub const THEME_KEY: &str = "theme";
pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";
pub const USER_TYPE_KEY: &str = "userType";
pub const USER_NAME_KEY: &str = "userName";
pub const USER_EMAIL_KEY: &str = "userEmail";

/// Todas las claves de usuario (lo que borra el logout)
pub const USER_KEYS: [&str; 4] = [
    IS_LOGGED_IN_KEY,
    USER_TYPE_KEY,
    USER_NAME_KEY,
    USER_EMAIL_KEY,
];

pub const LOGGED_IN_VALUE: &str = "true";

// Tema
pub const THEME_TOGGLE_ID: &str = "toggleTheme";
pub const DARK_THEME_CLASS: &str = "dark-theme";

// Modales
pub const MODAL_CLASS: &str = "modal";

// Animaciones
pub const REVEAL_SELECTOR: &str =
    ".news-card, .solution-card, .about-section, .stat-card, .content-card";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_TRANSITION: &str = "all 0.6s ease-out";
pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const RESTING_OPACITY: &str = "1";
pub const RESTING_TRANSFORM: &str = "translateY(0)";

pub const COUNTER_SELECTOR: &str = ".stat-number";
pub const COUNTER_TARGET_ATTR: &str = "data-target";
pub const CURRENCY_MARKER: &str = "R$";

// Formularios
pub const REQUIRED_FIELDS_SELECTOR: &str = "input[required], select[required]";
pub const ERROR_BORDER_COLOR: &str = "#ef4444";

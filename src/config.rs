// Configuración del sitio
// Configurada en tiempo de compilación (ver build.rs y `.env`):
// - Páginas de destino de la navegación simulada
// - Tiempos de la animación de contadores
// - Nivel de logging
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub pages: PagesConfig,
    pub counter: CounterConfig,
    pub enable_logging: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pages: PagesConfig::default(),
            counter: CounterConfig::default(),
            enable_logging: true,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagesConfig {
    pub entry: String,
    pub dashboard: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            entry: "index.html".to_string(),
            dashboard: "dashboard.html".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterConfig {
    /// Espera tras el evento `load` antes de arrancar los contadores
    pub start_delay_ms: u32,
    pub tick_ms: u32,
    pub steps: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 800,
            tick_ms: 30,
            steps: 50,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            pages: PagesConfig {
                entry: option_env!("ENTRY_PAGE")
                    .map(str::to_string)
                    .unwrap_or(defaults.pages.entry),
                dashboard: option_env!("DASHBOARD_PAGE")
                    .map(str::to_string)
                    .unwrap_or(defaults.pages.dashboard),
            },
            counter: CounterConfig {
                start_delay_ms: option_env!("COUNTER_START_DELAY_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.counter.start_delay_ms),
                tick_ms: option_env!("COUNTER_TICK_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.counter.tick_ms),
                // Cero pasos daría un incremento infinito
                steps: option_env!("COUNTER_STEPS")
                    .and_then(|v| v.parse().ok())
                    .filter(|steps: &u32| *steps > 0)
                    .unwrap_or(defaults.counter.steps),
            },
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Nivel de log efectivo para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        match self.log_level.to_lowercase().as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

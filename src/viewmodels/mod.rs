pub mod theme_viewmodel;
pub mod counter_viewmodel;

pub use theme_viewmodel::ThemeViewModel;
pub use counter_viewmodel::{CounterAnimation, CounterFormat};

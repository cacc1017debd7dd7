// Views: enlazan el DOM con los viewmodels/servicios

pub mod theme_toggle;
pub mod modal;
pub mod animations;
pub mod forms;

pub use theme_toggle::ThemeManager;
pub use modal::ModalManager;
pub use animations::AnimationManager;
pub use forms::FormUtils;

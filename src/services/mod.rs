pub mod key_value_store;
pub mod navigator;
pub mod scheduler;
pub mod auth_service;
pub mod payment_service;

pub use key_value_store::*;
pub use navigator::*;
pub use scheduler::*;
pub use auth_service::*;
pub use payment_service::*;

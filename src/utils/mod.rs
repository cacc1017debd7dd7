// Utils compartidos

pub mod constants;
pub mod storage;
pub mod phone;
pub mod validation;

pub use constants::*;
pub use storage::*;
pub use phone::*;
pub use validation::*;

pub mod theme;
pub mod user;
pub mod payment;
pub mod page;

pub use theme::*;
pub use user::*;
pub use payment::*;
pub use page::*;

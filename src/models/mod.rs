pub mod family;
pub mod item;
pub mod user;

pub use family::*;
pub use item::*;
pub use user::*;

pub mod core;
pub use self::core::*;

pub mod design;
pub use design::*;

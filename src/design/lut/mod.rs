pub mod error;
pub use error::*;
pub mod file;
pub use file::*;
pub mod create;
pub use create::*;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;

pub mod exp2i;
pub mod word;
pub use word::*;
pub mod grid;
pub use grid::*;

pub mod table;
pub use table::*;
pub mod lut;
pub use lut::*;
pub mod functions;
pub use functions::*;

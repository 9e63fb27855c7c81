pub mod exp_f;
pub use exp_f::*;

pub mod exp_generate;
pub use exp_generate::*;

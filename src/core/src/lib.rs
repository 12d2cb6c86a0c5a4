pub mod club;
pub mod roster;
pub mod utils;

pub use club::*;
pub use roster::*;

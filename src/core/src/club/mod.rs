pub mod club;
pub mod player;
pub mod relations;
pub mod staff;

pub use club::*;
pub use player::*;
pub use relations::*;
pub use staff::*;

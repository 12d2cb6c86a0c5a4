mod error;
mod http;
mod roster;
mod source;

pub use error::*;
pub use roster::*;
pub use source::*;

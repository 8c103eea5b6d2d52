pub mod leagues;
pub mod roster;

pub use leagues::*;
pub use roster::*;

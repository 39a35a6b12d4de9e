mod priority;
mod root;

pub use priority::*;
pub use root::*;

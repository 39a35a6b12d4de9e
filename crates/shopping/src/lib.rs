mod aggregation;
mod command;
mod list;
mod quantity;

pub use aggregation::*;
pub use command::*;
pub use list::*;
pub use quantity::*;

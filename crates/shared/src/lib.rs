mod catalogue;
mod command;
mod day;
pub mod mealplan;

pub use catalogue::*;
pub use command::*;
pub use day::*;

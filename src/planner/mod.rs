pub mod allocate;
pub mod constants;
pub mod shopping;

pub use allocate::{generate_day_plan, item_macros, total_macros};
pub use constants::*;
pub use shopping::build_shopping_list;

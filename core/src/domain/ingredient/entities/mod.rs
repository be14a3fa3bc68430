pub mod analysis_result;
pub mod ingredient_item;

pub use analysis_result::*;
pub use ingredient_item::*;

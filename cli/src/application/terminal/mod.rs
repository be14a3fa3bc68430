pub mod surface;
pub mod table;

pub use surface::*;

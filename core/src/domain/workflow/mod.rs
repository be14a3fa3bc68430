pub mod messages;
pub mod ports;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_support;

pub use ports::*;
pub use services::*;
pub use state::*;

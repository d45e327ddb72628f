//! Application layer - orchestrates the generation run and coordinates the ports

pub mod dto;
pub mod errors;
pub mod generate_families;
pub mod traits;

pub use dto::*;
pub use errors::*;
pub use generate_families::*;
pub use traits::*;

pub mod types;
pub mod deck;

pub use types::*;
pub use deck::*;

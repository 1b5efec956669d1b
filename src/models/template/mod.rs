pub mod types;
pub mod catalog;
pub mod filter;
pub mod preview;

pub use types::*;
pub use catalog::*;
pub use filter::*;
pub use preview::*;

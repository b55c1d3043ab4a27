pub mod amount;
pub mod board;
pub mod token;

pub use board::*;
pub use token::*;

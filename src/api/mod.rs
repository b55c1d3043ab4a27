pub mod page;
pub mod stream;
pub mod supplies;

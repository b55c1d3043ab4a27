pub mod errors;
pub mod loader;
pub mod supply_fetcher;
pub mod supply_store;

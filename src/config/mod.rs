pub mod constants;
pub mod environment;
pub mod errors;
pub mod token_config;

use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read token list file {0}: {1}")]
    UnreadableTokenList(String, std::io::Error),

    #[error("Unable to parse token list file {0}: {1}")]
    InvalidTokenList(String, serde_json::Error),

    #[error("Token list is empty")]
    EmptyTokenList,

    #[error("Token name should not be empty (contract {0})")]
    EmptyTokenName(Address),

    #[error("Invalid read function name for {0}: {1}")]
    InvalidReadFunction(String, String),

    #[error("Contract {0} is listed more than once")]
    DuplicateToken(Address),
}

use alloy::primitives::Address;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Unable to connect to rpc: {0}")]
    Connection(String),

    #[error("Rpc request to {0} failed: {1}")]
    Network(Address, String),

    #[error("Contract {0} rejected {1}(): {2}")]
    Contract(Address, String, String),

    #[error("Contract {0} returned malformed data for {1}()")]
    InvalidResponse(Address, String),

    #[error("Read from {0} timed out after {1}s")]
    Timeout(Address, u64),
}

impl FetchError {
    /// Short reason safe to show to clients. The full error may carry the RPC url.
    pub fn public_reason(&self) -> &'static str {
        match self {
            FetchError::Connection(_) => "rpc unreachable",
            FetchError::Network(..) => "network error",
            FetchError::Contract(..) => "contract reverted",
            FetchError::InvalidResponse(..) => "invalid response",
            FetchError::Timeout(..) => "timed out",
        }
    }
}

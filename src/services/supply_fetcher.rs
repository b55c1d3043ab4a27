use std::future::Future;

use alloy::{
    primitives::U256,
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
};
use futures::future::join_all;

use crate::{
    domain::TokenDescriptor,
    evm::{erc20::ERC20, read_call},
    services::errors::FetchError,
};

/// Source of raw on-chain total supplies.
pub trait SupplyFetcher: Send + Sync {
    fn total_supply(
        &self,
        token: &TokenDescriptor,
    ) -> impl Future<Output = Result<U256, FetchError>> + Send;
}

/// Reads supplies with `eth_call` through a read-only rpc node.
pub struct RpcSupplyFetcher {
    provider: DynProvider,
}

impl RpcSupplyFetcher {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }

    pub async fn connect(rpc_url: &str) -> Result<Self, FetchError> {
        let provider = ProviderBuilder::new()
            .connect(rpc_url)
            .await
            .map_err(|err| FetchError::Connection(err.to_string()))?;

        Ok(Self::new(provider.erased()))
    }

    /// Compares configured decimals with the contracts' own `decimals()`.
    ///
    /// Mismatches are only logged, the configured value stays authoritative.
    pub async fn verify_decimals(&self, tokens: &[TokenDescriptor]) {
        let checks = tokens.iter().map(|token| async move {
            let erc20 = ERC20::new(token.contract_address, &self.provider);
            (token, erc20.decimals().call().await)
        });

        for (token, result) in join_all(checks).await {
            match result {
                Ok(decimals) if decimals == token.decimals => {}
                Ok(decimals) => {
                    tracing::warn!(
                        token = %token.name,
                        configured = token.decimals,
                        on_chain = decimals,
                        "configured decimals differ from contract"
                    );
                }
                Err(err) => {
                    tracing::debug!(
                        error = %err,
                        token = %token.name,
                        "unable to read decimals()"
                    );
                }
            }
        }
    }
}

impl SupplyFetcher for RpcSupplyFetcher {
    async fn total_supply(&self, token: &TokenDescriptor) -> Result<U256, FetchError> {
        let request = TransactionRequest::default()
            .to(token.contract_address)
            .input(read_call::encode_call(&token.read_function).into());

        let output = self.provider.call(request).await.map_err(|err| {
            if err.as_error_resp().is_some() {
                FetchError::Contract(
                    token.contract_address,
                    token.read_function.clone(),
                    err.to_string(),
                )
            } else {
                FetchError::Network(token.contract_address, err.to_string())
            }
        })?;

        read_call::decode_uint(&output).ok_or_else(|| {
            FetchError::InvalidResponse(token.contract_address, token.read_function.clone())
        })
    }
}

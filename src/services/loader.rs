use std::{sync::Arc, time::Duration, time::Instant};

use futures::future::join_all;

use crate::{
    domain::{amount, sort_by_supply, Supply, SupplyBoard, SupplyTotal, TokenDescriptor},
    services::{errors::FetchError, supply_fetcher::SupplyFetcher, supply_store::SupplyStore},
};

/// Reads every token's supply at once, then publishes the sorted board in a single replace.
///
/// Each read is bounded by `call_timeout`; failures settle the token as `Errored`
/// so the batch always completes.
pub async fn load_supplies<F: SupplyFetcher>(
    fetcher: &F,
    store: &SupplyStore,
    call_timeout: Duration,
) -> Arc<SupplyBoard> {
    let snapshot = store.snapshot();
    let t0 = Instant::now();

    let reads = snapshot
        .tokens()
        .iter()
        .map(|token| read_supply(fetcher, token, call_timeout));
    let settled: Vec<TokenDescriptor> = join_all(reads).await;

    let board = store.replace(SupplyBoard::new(sort_by_supply(&settled)));

    match board.total() {
        SupplyTotal::Settled { total, unavailable } => {
            tracing::info!(
                time = t0.elapsed().as_millis(),
                total = %amount::format_usd(&total),
                unavailable,
                "supplies loaded"
            );
        }
        SupplyTotal::Pending => {
            debug_assert!(!board.is_settled());
            tracing::warn!("supplies loaded but some tokens are still pending");
        }
    }

    board
}

async fn read_supply<F: SupplyFetcher>(
    fetcher: &F,
    token: &TokenDescriptor,
    call_timeout: Duration,
) -> TokenDescriptor {
    let result = match tokio::time::timeout(call_timeout, fetcher.total_supply(token)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout(
            token.contract_address,
            call_timeout.as_secs(),
        )),
    };

    let supply = match result {
        Ok(raw) => {
            let normalized = amount::normalize(raw, token.decimals);
            tracing::debug!(token = %token.name, %raw, supply = %normalized, "supply read");
            Supply::Loaded(normalized)
        }
        Err(err) => {
            tracing::warn!(error = %err, token = %token.name, "unable to read supply");
            Supply::Errored(err.public_reason().to_string())
        }
    };

    token.settle(supply)
}

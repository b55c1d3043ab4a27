mod api;
mod app_error;
mod app_state;
mod args;
mod config;
mod domain;
mod evm;
mod logging;
mod routes;
mod services;
mod view;

use std::sync::Arc;

use color_eyre::eyre::Result;

use crate::app_state::AppState;
use crate::args::Args;
use crate::config::token_config;
use crate::domain::SupplyBoard;
use crate::routes::create_router::create_router;
use crate::services::{loader, supply_fetcher::RpcSupplyFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::from_env();
    let environment = args.environment();
    logging::init(environment)?;

    let tokens = token_config::load_tokens(&args.token_list_path)?;
    let app_state = AppState::build(SupplyBoard::new(tokens), environment);

    let fetcher = RpcSupplyFetcher::connect(&args.eth_rpc).await?;
    let store = Arc::clone(&app_state.store);
    let call_timeout = args.call_timeout();

    tokio::spawn(async move {
        let board = loader::load_supplies(&fetcher, &store, call_timeout).await;
        fetcher.verify_decimals(board.tokens()).await;
    });

    let router = create_router(Arc::clone(&app_state), args.allowed_origins());
    let listener = tokio::net::TcpListener::bind(&args.bind).await?;

    tracing::info!(bind = %args.bind, %environment, "server started");

    axum::serve(listener, router).await?;

    Ok(())
}

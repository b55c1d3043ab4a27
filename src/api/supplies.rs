use std::sync::Arc;

use alloy::primitives::Address;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    app_error::AppError,
    app_state::AppState,
    view::board_view::{BoardView, TokenView},
};

pub async fn get_supplies(State(state): State<Arc<AppState>>) -> Json<BoardView> {
    let board = state.store.snapshot();
    Json(BoardView::from(board.as_ref()))
}

pub async fn get_token_supply(
    Path(address): Path<Address>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<TokenView>, AppError> {
    let board = state.store.snapshot();

    board
        .tokens()
        .iter()
        .find(|token| token.contract_address == address)
        .map(|token| Json(TokenView::from(token)))
        .ok_or(AppError::TokenNotFound(address))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::Environment;
    use crate::domain::{Supply, SupplyBoard, TokenDescriptor};
    use crate::view::board_view::SupplyStatus;
    use axum::{http::StatusCode, response::IntoResponse};
    use bigdecimal::BigDecimal;

    fn state() -> Arc<AppState> {
        let tokens = vec![
            TokenDescriptor::new("A", 0, Address::with_last_byte(1), "totalSupply", "")
                .settle(Supply::Loaded(BigDecimal::from(10i64))),
            TokenDescriptor::new("B", 0, Address::with_last_byte(2), "totalSupply", ""),
        ];
        AppState::build(SupplyBoard::new(tokens), Environment::Development)
    }

    #[tokio::test]
    async fn test_get_supplies() {
        let Json(view) = get_supplies(State(state())).await;

        assert_eq!(view.tokens.len(), 2);
        assert_eq!(view.tokens[0].display, "$10.00");
        assert_eq!(view.total.status, SupplyStatus::Loading);
    }

    #[tokio::test]
    async fn test_get_token_supply() {
        let Json(token) = get_token_supply(Path(Address::with_last_byte(2)), State(state()))
            .await
            .unwrap();

        assert_eq!(token.name, "B");
        assert_eq!(token.status, SupplyStatus::Loading);
    }

    #[tokio::test]
    async fn test_get_unknown_token() {
        let result = get_token_supply(Path(Address::with_last_byte(9)), State(state())).await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::TokenNotFound(_)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}

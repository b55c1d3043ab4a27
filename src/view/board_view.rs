use alloy::primitives::Address;
use serde::Serialize;

use crate::domain::{
    amount::{format_usd, to_plain_string},
    Supply, SupplyBoard, SupplyTotal, TokenDescriptor,
};

pub const LOADING_TEXT: &str = "Loading...";
pub const UNAVAILABLE_TEXT: &str = "Unavailable";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SupplyStatus {
    Loading,
    Loaded,
    Errored,
}

/// Serializable projection of one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenView {
    pub name: String,
    pub contract_address: Address,
    pub decimals: u8,
    pub link: String,
    pub status: SupplyStatus,
    /// Exact normalized supply, absent until loaded.
    pub supply: Option<String>,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalView {
    pub status: SupplyStatus,
    pub supply: Option<String>,
    pub display: String,
    pub unavailable: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub tokens: Vec<TokenView>,
    pub total: TotalView,
}

impl From<&TokenDescriptor> for TokenView {
    fn from(token: &TokenDescriptor) -> Self {
        let (status, supply, display, error) = match &token.supply {
            Supply::Unloaded => (SupplyStatus::Loading, None, LOADING_TEXT.to_string(), None),
            Supply::Loaded(value) => (
                SupplyStatus::Loaded,
                Some(to_plain_string(value)),
                format_usd(value),
                None,
            ),
            Supply::Errored(reason) => (
                SupplyStatus::Errored,
                None,
                UNAVAILABLE_TEXT.to_string(),
                Some(reason.clone()),
            ),
        };

        Self {
            name: token.name.clone(),
            contract_address: token.contract_address,
            decimals: token.decimals,
            link: token.link.clone(),
            status,
            supply,
            display,
            error,
        }
    }
}

impl From<&SupplyTotal> for TotalView {
    fn from(total: &SupplyTotal) -> Self {
        match total {
            SupplyTotal::Pending => Self {
                status: SupplyStatus::Loading,
                supply: None,
                display: LOADING_TEXT.to_string(),
                unavailable: 0,
            },
            SupplyTotal::Settled { total, unavailable } => Self {
                status: SupplyStatus::Loaded,
                supply: Some(to_plain_string(total)),
                display: format_usd(total),
                unavailable: *unavailable,
            },
        }
    }
}

impl TotalView {
    fn unavailable(unavailable: usize) -> Self {
        Self {
            status: SupplyStatus::Errored,
            supply: None,
            display: UNAVAILABLE_TEXT.to_string(),
            unavailable,
        }
    }
}

impl From<&SupplyBoard> for BoardView {
    fn from(board: &SupplyBoard) -> Self {
        let tokens: Vec<TokenView> = board.tokens().iter().map(TokenView::from).collect();
        let total = match board.total() {
            // every read failed, there is no figure to show
            SupplyTotal::Settled { unavailable, .. }
                if unavailable > 0 && unavailable == tokens.len() =>
            {
                TotalView::unavailable(unavailable)
            }
            total => TotalView::from(&total),
        };

        Self { tokens, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn token(supply: Supply) -> TokenDescriptor {
        TokenDescriptor::new("Dai", 18, Address::ZERO, "totalSupply", "https://etherscan.io")
            .settle(supply)
    }

    #[test]
    fn test_token_view_states() {
        let loading = TokenView::from(&token(Supply::Unloaded));
        assert_eq!(loading.status, SupplyStatus::Loading);
        assert_eq!(loading.display, "Loading...");
        assert_eq!(loading.supply, None);

        let loaded = TokenView::from(&token(Supply::Loaded(
            BigDecimal::from_str("1234567.891").unwrap(),
        )));
        assert_eq!(loaded.status, SupplyStatus::Loaded);
        assert_eq!(loaded.display, "$1,234,567.89");
        assert_eq!(loaded.supply.as_deref(), Some("1234567.891"));

        let errored = TokenView::from(&token(Supply::Errored("reverted".into())));
        assert_eq!(errored.status, SupplyStatus::Errored);
        assert_eq!(errored.display, "Unavailable");
        assert_eq!(errored.error.as_deref(), Some("reverted"));
    }

    #[test]
    fn test_board_view_total_pending() {
        let board = SupplyBoard::new(vec![
            token(Supply::Loaded(BigDecimal::from(1i64))),
            token(Supply::Unloaded),
        ]);

        let view = BoardView::from(&board);
        assert_eq!(view.total.status, SupplyStatus::Loading);
        assert_eq!(view.total.display, "Loading...");
    }

    #[test]
    fn test_board_view_total_when_every_read_failed() {
        let board = SupplyBoard::new(vec![
            token(Supply::Errored("network error".into())),
            token(Supply::Errored("timed out".into())),
        ]);

        let view = BoardView::from(&board);
        assert_eq!(view.total.status, SupplyStatus::Errored);
        assert_eq!(view.total.display, "Unavailable");
        assert_eq!(view.total.supply, None);
        assert_eq!(view.total.unavailable, 2);
    }

    #[test]
    fn test_board_view_total_with_some_failures() {
        let board = SupplyBoard::new(vec![
            token(Supply::Loaded(BigDecimal::from(3i64))),
            token(Supply::Errored("network error".into())),
        ]);

        let view = BoardView::from(&board);
        assert_eq!(view.total.status, SupplyStatus::Loaded);
        assert_eq!(view.total.display, "$3.00");
        assert_eq!(view.total.unavailable, 1);
    }

    #[test]
    fn test_board_view_serializes_camel_case() {
        let board = SupplyBoard::new(vec![token(Supply::Loaded(
            BigDecimal::from_str("0.50").unwrap(),
        ))]);

        let json = serde_json::to_value(BoardView::from(&board)).unwrap();

        assert_eq!(json["tokens"][0]["status"], "loaded");
        assert_eq!(json["tokens"][0]["supply"], "0.50");
        assert_eq!(json["tokens"][0]["display"], "$0.50");
        assert!(json["tokens"][0].get("contractAddress").is_some());
        assert!(json["tokens"][0].get("error").is_none());
        assert_eq!(json["total"]["display"], "$0.50");
        assert_eq!(json["total"]["unavailable"], 0);
    }
}

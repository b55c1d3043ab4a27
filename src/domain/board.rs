use std::cmp::Ordering;

use bigdecimal::BigDecimal;

use crate::domain::{Supply, TokenDescriptor};

/// Grand total over the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SupplyTotal {
    /// At least one token has not been read yet.
    Pending,
    /// Sum of all loaded supplies; `unavailable` tokens failed and are not counted.
    Settled { total: BigDecimal, unavailable: usize },
}

/// Ordered list of tracked tokens, the whole state behind the display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplyBoard {
    tokens: Vec<TokenDescriptor>,
}

impl SupplyBoard {
    pub fn new(tokens: Vec<TokenDescriptor>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[TokenDescriptor] {
        &self.tokens
    }

    pub fn total(&self) -> SupplyTotal {
        aggregate_total(&self.tokens)
    }

    pub fn is_settled(&self) -> bool {
        self.tokens.iter().all(|token| !token.supply.is_unloaded())
    }
}

/// Descending order for two loaded supplies, `Equal` whenever either side has no value.
pub fn compare_supply(a: &Supply, b: &Supply) -> Ordering {
    match (a, b) {
        (Supply::Loaded(a), Supply::Loaded(b)) => b.cmp(a),
        _ => Ordering::Equal,
    }
}

/// Sorts tokens by supply, largest first.
///
/// Loaded tokens are reordered among the positions they already hold; tokens
/// without a value stay in their original slot.
pub fn sort_by_supply(tokens: &[TokenDescriptor]) -> Vec<TokenDescriptor> {
    let mut loaded: Vec<&TokenDescriptor> = tokens
        .iter()
        .filter(|token| token.supply.loaded().is_some())
        .collect();
    loaded.sort_by(|a, b| compare_supply(&a.supply, &b.supply));

    let mut loaded = loaded.into_iter();

    tokens
        .iter()
        .map(|token| match token.supply {
            Supply::Loaded(_) => loaded.next().unwrap_or(token).clone(),
            _ => token.clone(),
        })
        .collect()
}

pub fn aggregate_total(tokens: &[TokenDescriptor]) -> SupplyTotal {
    let mut total = BigDecimal::from(0i64);
    let mut unavailable = 0;

    for token in tokens {
        match &token.supply {
            Supply::Unloaded => return SupplyTotal::Pending,
            Supply::Loaded(value) => total += value,
            Supply::Errored(_) => unavailable += 1,
        }
    }

    SupplyTotal::Settled { total, unavailable }
}

use alloy::primitives::Address;
use bigdecimal::BigDecimal;

/// On-chain supply of a token as known to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Supply {
    /// Read has not completed yet.
    Unloaded,
    /// Normalized supply in whole token units.
    Loaded(BigDecimal),
    /// Read failed, the reason is kept for display and logs.
    Errored(String),
}

impl Supply {
    pub fn is_unloaded(&self) -> bool {
        matches!(self, Supply::Unloaded)
    }

    pub fn loaded(&self) -> Option<&BigDecimal> {
        match self {
            Supply::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDescriptor {
    pub name: String,
    pub decimals: u8,
    pub contract_address: Address,
    pub read_function: String,
    pub link: String,
    pub supply: Supply,
}

impl TokenDescriptor {
    pub fn new(
        name: impl Into<String>,
        decimals: u8,
        contract_address: Address,
        read_function: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            decimals,
            contract_address,
            read_function: read_function.into(),
            link: link.into(),
            supply: Supply::Unloaded,
        }
    }

    /// Returns a copy carrying `supply`.
    ///
    /// Only an unloaded descriptor can settle; a settled one is returned as is,
    /// so a supply never goes back to `Unloaded` or flips between outcomes.
    pub fn settle(&self, supply: Supply) -> Self {
        if !self.supply.is_unloaded() {
            return self.clone();
        }

        Self {
            supply,
            ..self.clone()
        }
    }
}

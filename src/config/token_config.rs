use std::collections::HashSet;
use std::fs;
use std::path::Path;

use alloy::primitives::Address;
use serde::Deserialize;

use crate::config::constants::{DEFAULT_EXPLORER_TOKEN_URL, DEFAULT_READ_FUNCTION};
use crate::config::errors::ConfigError;
use crate::domain::TokenDescriptor;

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TokenEntry {
    pub name: String,
    pub decimals: u8,
    pub contract_address: Address,
    #[serde(default)]
    pub read_function: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenListConfig {
    pub tokens: Vec<TokenEntry>,
}

impl TokenListConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = fs::read_to_string(path)
            .map_err(|err| ConfigError::UnreadableTokenList(display.clone(), err))?;

        serde_json::from_str(&content).map_err(|err| ConfigError::InvalidTokenList(display, err))
    }

    /// Validates the entries and turns them into unloaded descriptors, keeping file order.
    pub fn into_descriptors(self) -> Result<Vec<TokenDescriptor>, ConfigError> {
        if self.tokens.is_empty() {
            return Err(ConfigError::EmptyTokenList);
        }

        let mut seen: HashSet<Address> = HashSet::new();
        let mut descriptors = Vec::with_capacity(self.tokens.len());

        for entry in self.tokens {
            let name = entry.name.trim().to_string();
            if name.is_empty() {
                return Err(ConfigError::EmptyTokenName(entry.contract_address));
            }

            if !seen.insert(entry.contract_address) {
                return Err(ConfigError::DuplicateToken(entry.contract_address));
            }

            let read_function = entry
                .read_function
                .unwrap_or_else(|| DEFAULT_READ_FUNCTION.to_string());
            if !is_identifier(&read_function) {
                return Err(ConfigError::InvalidReadFunction(name, read_function));
            }

            let link = entry
                .link
                .unwrap_or_else(|| format!("{}{}", DEFAULT_EXPLORER_TOKEN_URL, entry.contract_address));

            descriptors.push(TokenDescriptor::new(
                name,
                entry.decimals,
                entry.contract_address,
                read_function,
                link,
            ));
        }

        Ok(descriptors)
    }
}

pub fn load_tokens(path: impl AsRef<Path>) -> Result<Vec<TokenDescriptor>, ConfigError> {
    let descriptors = TokenListConfig::load(path)?.into_descriptors()?;
    tracing::info!(count = descriptors.len(), "token list loaded");

    Ok(descriptors)
}

// solidity identifier: [A-Za-z_$][A-Za-z0-9_$]*
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

use std::time::Duration;

use clap::Parser;

use crate::config::constants::DEFAULT_CALL_TIMEOUT_SECS;
use crate::config::environment::Environment;

const DEFAULT_TOKEN_LIST_PATH: &str = "configs/tokens.json";
const DEFAULT_ETH_RPC: &str = "https://ethereum-rpc.publicnode.com";

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Total supply of USD stablecoins on Ethereum")]
pub struct Args {
    #[arg(long, env = "HTTP_BIND", default_value = "0.0.0.0:8080")]
    pub bind: String,

    #[arg(long, env = "ETH_RPC", default_value = DEFAULT_ETH_RPC)]
    pub eth_rpc: String,

    #[arg(long, env = "TOKEN_LIST_PATH", default_value = DEFAULT_TOKEN_LIST_PATH)]
    pub token_list_path: String,

    #[arg(long, env = "CALL_TIMEOUT_SECS", default_value_t = DEFAULT_CALL_TIMEOUT_SECS)]
    pub call_timeout_secs: u64,

    #[arg(long, env = "ALLOWED_ORIGINS", default_value = "")]
    allowed_origins_from_env: String,

    /// Explicit deployment mode, wins over the one derived from --public-host
    #[arg(long, env = "APP_ENV", value_enum)]
    pub environment: Option<Environment>,

    /// Host name the board is served under
    #[arg(long, env = "PUBLIC_HOST")]
    pub public_host: Option<String>,
}

impl Args {
    pub fn from_env() -> Self {
        Self::parse()
    }

    pub fn allowed_origins(&self) -> Vec<String> {
        self.allowed_origins_from_env
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn environment(&self) -> Environment {
        match (self.environment, &self.public_host) {
            (Some(environment), _) => environment,
            (None, Some(host)) => Environment::from_hostname(host),
            (None, None) => Environment::default(),
        }
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs.max(1))
    }
}

use std::fmt::{Display, Formatter};

use clap::ValueEnum;

const PRODUCTION_HOST: &str = "usdonethereum.com";
const STAGING_HOST_SUFFIX: &str = ".netlify.app";

/// Deployment mode, only affects log verbosity and a badge on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Maps the public host name the board is served under to a mode.
    pub fn from_hostname(host: &str) -> Self {
        let host = host.trim().to_ascii_lowercase();

        if host == PRODUCTION_HOST {
            Environment::Production
        } else if host.contains(STAGING_HOST_SUFFIX) {
            Environment::Staging
        } else {
            Environment::Development
        }
    }

    pub fn log_directive(self) -> &'static str {
        match self {
            Environment::Development => "stablecoin_supply_board=debug,info",
            Environment::Staging => "stablecoin_supply_board=info,warn",
            Environment::Production => "stablecoin_supply_board=warn,error",
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        };
        write!(f, "{}", name)
    }
}

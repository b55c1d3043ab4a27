use color_eyre::eyre::Result;
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::environment::Environment;

/// Logs to stdout; `RUST_LOG` overrides the environment's default verbosity.
pub fn init(environment: Environment) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(environment.log_directive())?,
    };

    let stdout_subscriber = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!environment.is_production())
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(stdout_subscriber)
        .try_init()?;

    Ok(())
}

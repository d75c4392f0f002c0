use crate::config::toml_config::{LogFormat, LoggingConfig};
use crate::utils::error::{Result, ServiceError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "news_guard=info";

fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(format!("news_guard={}", level.trim().to_ascii_lowercase())),
        None => EnvFilter::new(DEFAULT_DIRECTIVE),
    })
}

pub fn init_logger(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config.level.as_deref());
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    let initialised = match config.format() {
        LogFormat::Compact => registry.with(layer.compact()).try_init(),
        LogFormat::Json => registry.with(layer.json()).try_init(),
    };

    initialised.map_err(|e| ServiceError::ConfigError {
        message: format!("Failed to install tracing subscriber: {}", e),
    })
}

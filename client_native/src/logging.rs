//! Logger setup on top of the `log` facade

use std::sync::Once;

/// Where the filter comes from, highest priority first: the config, then
/// `RUST_LOG`, then plain `info`.
///
/// Filters use `env_logger` syntax, e.g. `"game_core=trace"` to see every
/// paddle hit or `"client_native=debug,game_core=info"` for thread lifecycle.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    fn resolve_filter(&self, from_env: Option<String>) -> Option<String> {
        self.env_filter.clone().or(from_env)
    }
}

static INIT: Once = Once::new();

/// Install the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolve_filter(std::env::var("RUST_LOG").ok()) {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(log::LevelFilter::Info),
        };

        builder.write_style(config.write_style).init();

        log::debug!("logging initialized");
    });
}

//! Demo configuration (env-driven, overridable from the command line).

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    pub log_level: String,

    /// Emit logs as JSON lines.
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let log_level = std::env::var("UID11_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let log_json = std::env::var("UID11_LOG_JSON")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self {
            log_level,
            log_json,
        }
    }

    /// Apply command line overrides.
    pub fn with_overrides(mut self, log_level: Option<String>, log_json: bool) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self.log_json |= log_json;
        self
    }
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

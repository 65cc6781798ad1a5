use std::env::var;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_LEVEL_ENV: &str = "SEMVER_LOG_LEVEL";
const DEFAULT_LOG_SPEC: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// An `EnvFilter` directive string, e.g. `info` or `semver_core=trace`.
    pub log_spec: String,
    pub with_ansi: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_spec: DEFAULT_LOG_SPEC.to_string(),
            with_ansi: true,
        }
    }
}

impl LoggerConfig {
    pub fn from_env() -> Self {
        let log_spec = var(LOG_LEVEL_ENV)
            .ok()
            .filter(|spec| !spec.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_SPEC.to_string());
        Self {
            log_spec,
            ..Self::default()
        }
    }

    pub fn env_filter(&self) -> EnvFilter {
        // Fall back rather than fail on a bad directive
        EnvFilter::try_new(&self.log_spec).unwrap_or_else(|e| {
            eprintln!("Invalid log spec {:?}: {}, using {}", self.log_spec, e, DEFAULT_LOG_SPEC);
            EnvFilter::new(DEFAULT_LOG_SPEC)
        })
    }
}

/// Installs the global subscriber configured from `SEMVER_LOG_LEVEL`.
///
/// Returns `false` if a subscriber was already installed, in which case the
/// existing one is kept.
pub fn init_logger() -> bool {
    init_logger_with(&LoggerConfig::from_env())
}

pub fn init_logger_with(config: &LoggerConfig) -> bool {
    let installed = tracing_subscriber::registry()
        .with(config.env_filter())
        .with(fmt::layer().with_ansi(config.with_ansi).with_target(true))
        .try_init()
        .is_ok();
    if installed {
        info!("Logger initialized with spec {:?}", config.log_spec);
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env::{remove_var, set_var};

    #[test]
    #[serial]
    fn test_config_from_env() {
        remove_var(LOG_LEVEL_ENV);
        assert_eq!(LoggerConfig::from_env(), LoggerConfig::default());

        set_var(LOG_LEVEL_ENV, "semver_core=trace");
        assert_eq!(LoggerConfig::from_env().log_spec, "semver_core=trace");

        set_var(LOG_LEVEL_ENV, "  ");
        assert_eq!(LoggerConfig::from_env().log_spec, DEFAULT_LOG_SPEC);
        remove_var(LOG_LEVEL_ENV);
    }

    #[test]
    fn test_invalid_spec_falls_back() {
        let config = LoggerConfig {
            log_spec: "semver_core=notalevel".to_string(),
            with_ansi: false,
        };
        assert_eq!(config.env_filter().to_string(), DEFAULT_LOG_SPEC);
    }

    #[test]
    #[serial]
    fn test_init_logger_is_idempotent() {
        set_var(LOG_LEVEL_ENV, "trace");
        // Another test binary may have installed one already, only the second call is certain
        init_logger();
        assert!(!init_logger());
        remove_var(LOG_LEVEL_ENV);

        // Parse still behaves with tracing enabled
        assert!(crate::Version::parse("v1.2").is_err());
    }
}

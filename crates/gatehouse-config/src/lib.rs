//! # Gatehouse Config
//!
//! Configuration loaded from environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `LOG_LEVEL` | `info` | Level for gatehouse crates when `RUST_LOG` is unset |
//! | `LOG_FORMAT` | `compact` | `compact` or `json` |
//! | `AUDIT_DECISIONS` | `true` | Log access denials at `info` instead of `debug` |
//!
//! The grant table is not configurable here; it ships with `gatehouse-rbac`.
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_config::GatehouseConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = GatehouseConfig::from_env();
//! ```

use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatehouseConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    pub audit_decisions: bool,
}

impl Default for GatehouseConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
            audit_decisions: true,
        }
    }
}

impl GatehouseConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. `from_env` passes the process
    /// environment; tests pass a map.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = lookup("LOG_LEVEL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_level);

        let log_format = lookup("LOG_FORMAT")
            .map(|s| LogFormat::parse(&s))
            .unwrap_or(defaults.log_format);

        let audit_decisions = lookup("AUDIT_DECISIONS")
            .map(|s| s.trim().to_ascii_lowercase())
            .map(|s| !matches!(s.as_str(), "false" | "0" | "no" | "off"))
            .unwrap_or(defaults.audit_decisions);

        Self {
            log_level,
            log_format,
            audit_decisions,
        }
    }
}

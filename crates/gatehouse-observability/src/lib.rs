//! Gatehouse logging setup.
//!
//! Binaries call [`init_logging`] once at startup. Access decisions are
//! emitted on the `gatehouse::decision` target, so they can be filtered
//! independently, e.g. `RUST_LOG=gatehouse::decision=debug`.

use gatehouse_config::{GatehouseConfig, LogFormat};
use tracing::debug;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Target used for every access decision event.
pub const DECISION_TARGET: &str = "gatehouse::decision";

/// Workspace crates whose events follow `LOG_LEVEL`.
const GATEHOUSE_CRATES: [&str; 7] = [
    "gatehouse",
    "gatehouse_cli",
    "gatehouse_config",
    "gatehouse_core",
    "gatehouse_models",
    "gatehouse_observability",
    "gatehouse_rbac",
];

/// Default filter when `RUST_LOG` is unset: gatehouse crates at `level`,
/// everything else at `warn`.
pub fn default_filter(level: &str) -> String {
    let mut filter = String::from("warn");
    for krate in GATEHOUSE_CRATES.into_iter().chain([DECISION_TARGET]) {
        filter.push_str(&format!(",{krate}={level}"));
    }
    filter
}

/// Initialize console logging to stderr.
///
/// - **Log Level**: `RUST_LOG` if set, otherwise [`default_filter`] with
///   `config.log_level`
/// - **Format**: compact with file/line, or JSON when `LOG_FORMAT=json`
///
/// Calling this twice is harmless; the second call leaves the existing
/// subscriber in place.
pub fn init_logging(config: &GatehouseConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.log_level)));

    let layer = match config.log_format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_filter(env_filter)
            .boxed(),
    };

    if tracing_subscriber::registry().with(layer).try_init().is_ok() {
        debug!(
            level = %config.log_level,
            format = ?config.log_format,
            audit_decisions = config.audit_decisions,
            "Logging initialized"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_decisions() {
        let filter = default_filter("debug");
        assert!(filter.starts_with("warn,"));
        assert!(filter.contains("gatehouse_rbac=debug"));
        assert!(filter.contains("gatehouse::decision=debug"));
    }

    #[test]
    fn test_default_filter_covers_every_workspace_crate() {
        let filter = default_filter("trace");
        for krate in GATEHOUSE_CRATES {
            assert!(filter.contains(&format!(",{krate}=trace")), "{krate}");
        }
        assert!(filter.contains("gatehouse_models=trace"));
        assert!(filter.contains("gatehouse_core=trace"));
        assert!(filter.contains("gatehouse_observability=trace"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(default_filter("info")).is_ok());
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        let config = GatehouseConfig::default();
        init_logging(&config);
        init_logging(&config);
    }
}

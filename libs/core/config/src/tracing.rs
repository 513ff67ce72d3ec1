use crate::Environment;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info, Level};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Environment variable holding the default log verbosity
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in the main() before any fallible operations to ensure
/// colored error output. Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Parse a verbosity name into a tracing level.
///
/// Accepts the tracing names (`trace` .. `error`, any case) plus the
/// `warning`, `fatal` and `panic` spellings older deployments still set.
pub fn parse_log_level(raw: &str) -> Option<Level> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("warning") {
        return Some(Level::WARN);
    }
    if raw.eq_ignore_ascii_case("fatal") || raw.eq_ignore_ascii_case("panic") {
        return Some(Level::ERROR);
    }
    Level::from_str(raw).ok()
}

/// Read `LOG_LEVEL`, defaulting to `info` when unset or unrecognised.
pub fn log_level_from_env() -> Level {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|raw| parse_log_level(&raw))
        .unwrap_or(Level::INFO)
}

/// Initialize tracing with environment-aware formatting and error span capture.
///
/// - **Production** (`APP_ENV=production`): flattened JSON events, no targets.
/// - **Development** (default): pretty-printed, human-readable output.
///
/// `RUST_LOG` takes precedence when set; otherwise every target logs at `level`.
///
/// Safe to call more than once: a second initialization is skipped.
pub fn init_tracing(environment: &Environment, level: Level) {
    let is_production = environment.is_production();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from_level(level).into()));

    let result = if is_production {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!(
                "Tracing initialized at level {}. Environment: {:?}",
                level, environment
            );
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level_accepts_tracing_names() {
        assert_eq!(parse_log_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_log_level("INFO"), Some(Level::INFO));
        assert_eq!(parse_log_level(" trace "), Some(Level::TRACE));
    }

    #[test]
    fn test_parse_log_level_accepts_legacy_names() {
        assert_eq!(parse_log_level("warning"), Some(Level::WARN));
        assert_eq!(parse_log_level("fatal"), Some(Level::ERROR));
        assert_eq!(parse_log_level("panic"), Some(Level::ERROR));
    }

    #[test]
    fn test_parse_log_level_rejects_unknown() {
        assert_eq!(parse_log_level("chatty"), None);
        assert_eq!(parse_log_level(""), None);
    }

    #[test]
    fn test_log_level_from_env_defaults_to_info() {
        temp_env::with_var_unset(LOG_LEVEL_VAR, || {
            assert_eq!(log_level_from_env(), Level::INFO);
        });
        temp_env::with_var(LOG_LEVEL_VAR, Some("nonsense"), || {
            assert_eq!(log_level_from_env(), Level::INFO);
        });
    }

    #[test]
    fn test_log_level_from_env_reads_value() {
        temp_env::with_var(LOG_LEVEL_VAR, Some("debug"), || {
            assert_eq!(log_level_from_env(), Level::DEBUG);
        });
    }

    #[test]
    fn test_init_tracing_multiple_calls() {
        let env = Environment::Development;
        init_tracing(&env, Level::INFO);
        init_tracing(&env, Level::DEBUG);
    }

    #[test]
    fn test_init_tracing_production() {
        init_tracing(&Environment::Production, Level::WARN);
    }
}

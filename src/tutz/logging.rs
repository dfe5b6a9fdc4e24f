//! Logging setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the process. Logs go to stderr so they never mix with command output.

use crate::error::{Result, TutzError};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TUTZ_LOG";

/// Picks the filter directive: `TUTZ_LOG` wins, then `--verbose`, then the
/// configured level.
pub fn filter_directive(env_value: Option<&str>, verbose: bool, configured: &str) -> String {
    match env_value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ if verbose => "debug".to_string(),
        _ => configured.to_string(),
    }
}

pub fn init(verbose: bool, configured: &str) -> Result<()> {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(env_value.as_deref(), verbose, configured);
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| TutzError::Config(format!("invalid log filter '{}': {}", directive, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| TutzError::Config(format!("failed to initialize logging: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_everything() {
        assert_eq!(filter_directive(Some("tutz=trace"), true, "warn"), "tutz=trace");
    }

    #[test]
    fn verbose_beats_config() {
        assert_eq!(filter_directive(None, true, "warn"), "debug");
        assert_eq!(filter_directive(Some("  "), true, "warn"), "debug");
    }

    #[test]
    fn falls_back_to_config() {
        assert_eq!(filter_directive(None, false, "info"), "info");
    }
}

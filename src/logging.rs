//! Logger setup for the `blocks` binary.

use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `level` overrides everything when set. Otherwise `RUST_LOG` is honoured
/// (env_logger filter syntax, e.g. "blocks=debug"), falling back to `warn`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: Option<LevelFilter>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Pick a level from the `--verbose` / `--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        let level = if verbose {
            Some(LevelFilter::Debug)
        } else if quiet {
            Some(LevelFilter::Error)
        } else {
            None
        };
        Self {
            level,
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(level) = config.level {
            builder.filter_level(level);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(LevelFilter::Warn);
        }

        builder.write_style(config.write_style).format_timestamp(None);

        // Another logger may already be installed (e.g. by a test harness).
        let _ = builder.try_init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(LoggingConfig::from_flags(true, false).level, Some(LevelFilter::Debug));
        assert_eq!(LoggingConfig::from_flags(false, true).level, Some(LevelFilter::Error));
        assert_eq!(LoggingConfig::from_flags(false, false).level, None);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::from_flags(true, false));
    }
}

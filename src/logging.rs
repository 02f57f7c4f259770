//! Log setup shared by the binaries.
use tracing_subscriber::{fmt, EnvFilter};

/// Maps a `-v` count to a filter: `RUST_LOG` (falling back to `warn`) when
/// zero, then `info`, `debug` and `trace`.
pub fn filter_for_verbosity(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

/// Installs a stderr subscriber so that stdout only carries program output.
///
/// Calling it a second time in the same process is a no-op.
pub fn init(verbose: u8) {
    let _ = fmt()
        .with_env_filter(filter_for_verbosity(verbose))
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for_verbosity(1).to_string(), "info");
        assert_eq!(filter_for_verbosity(2).to_string(), "debug");
        assert_eq!(filter_for_verbosity(3).to_string(), "trace");
        assert_eq!(filter_for_verbosity(9).to_string(), "trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(0);
        init(2);
    }
}

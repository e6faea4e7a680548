//! Log output for the surf binary.
//!
//! Everything goes to stderr so stdout stays clean for list/JSON output.

use tracing_subscriber::{prelude::*, EnvFilter};

/// Default filter for a given `-v` count.
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "surf_core=debug,surf=debug,warn",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the verbosity flag when it is set.
pub fn init_tracing(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose > 0)
        .with_thread_names(verbose > 1);

    // A second init (tests, embedding) is harmless.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_by_default() {
        assert_eq!(default_filter(0), "warn");
    }

    #[test]
    fn test_verbosity_raises_level() {
        assert!(default_filter(1).contains("surf_core=debug"));
        assert_eq!(default_filter(2), "trace");
        assert_eq!(default_filter(9), "trace");
    }

    #[test]
    fn test_filters_parse() {
        for verbose in 0..3 {
            assert!(EnvFilter::try_new(default_filter(verbose)).is_ok());
        }
    }
}

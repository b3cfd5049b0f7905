//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the process-wide subscriber.
///
/// Output goes to stderr so it never interleaves with the menu on stdout.
/// `RUST_LOG` takes precedence over `verbose`. Calling this twice is a no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    drop(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "warn");
        assert_eq!(default_directive(true), "debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
    }
}

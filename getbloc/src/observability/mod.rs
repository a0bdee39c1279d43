//! Observability (logging)
//!
//! Structured logging goes to stderr so that the wrap commands can print
//! replacement text on stdout without interleaving.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging stack
///
/// `RUST_LOG` wins when set. Otherwise the level follows `verbosity`:
/// `0` is `warn`, `1` is `info`, anything higher is `debug`.
///
/// # Example
///
/// ```rust,no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// getbloc::observability::init(1)?;
/// tracing::info!("Scaffolding started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8) -> Result<(), tracing_subscriber::util::TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
}

const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info,getbloc=info",
        _ => "debug,getbloc=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert!(default_directive(1).starts_with("info"));
        assert!(default_directive(5).starts_with("debug"));
    }
}

// Logging module - Logging infrastructure
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence; otherwise the configured default level is
/// applied to this crate. Output goes to stderr so it never competes with
/// stdout formatting. The TUI path skips this entirely since it owns the
/// terminal.
pub fn init_logging(default_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("serterm={},warn,error", default_level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .init();

    tracing::debug!("Logging initialized at level {}", default_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_init() {
        // Only this test installs a subscriber, so a single init must succeed
        assert!(init_logging("info").is_ok());
    }
}

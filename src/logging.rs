use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Logs go to stderr so they never mix with
/// menu output; `RUST_LOG` overrides the default `wallet=warn`.
pub(crate) fn init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("wallet=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }
}

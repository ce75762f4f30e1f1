use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_TARGETS: &[&str] = &[
    "daily_math",
    "daily_math_core",
    "daily_math_client",
    "daily_math_generator",
];

/// Default filter for our own crates at `level`
pub fn default_filter(level: &str) -> String {
    DEFAULT_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Sets the logging (tracing) level using RUST_LOG, falling back to the supplied default log settings.
pub fn setup_logging(default_log_settings: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_settings.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = default_filter("debug");
        assert!(filter.starts_with("daily_math=debug,"));
        assert!(filter.contains("daily_math_generator=debug"));
        assert_eq!(filter.matches(',').count(), DEFAULT_TARGETS.len() - 1);
    }
}

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset; stdout carries the report
const DEFAULT_FILTER: &str = "envkit=warn";

/// Initialize logging based on environment variables
///
/// Log lines go to stderr so they never interleave with the printed report.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

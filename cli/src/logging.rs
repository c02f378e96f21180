use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Events go to stderr; stdout carries the
/// summary line and JSON only.
pub fn init(filter: &str) {
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(filter))
        .init();
}

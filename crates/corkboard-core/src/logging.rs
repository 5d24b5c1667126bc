use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Called once by the embedding UI
/// before the controller is constructed.
///
/// Honors `CORKBOARD_LOG` for filter directives; defaults to `warn` so an
/// interactive session stays quiet unless asked otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("CORKBOARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

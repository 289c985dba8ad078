use tracing_subscriber::EnvFilter;

fn env_filter(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Compact console logging for binaries embedding the crate. Safe to call
/// more than once; later calls are no-ops.
pub fn init_logger(verbose: bool) {
    let default_directives = if verbose {
        "simple_model=trace,info"
    } else {
        "simple_model=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directives))
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}

/// JSON logging for structured-log environments.
pub fn init_json_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("simple_model=info"))
        .with_target(false)
        .json()
        .try_init()
        .ok();
}

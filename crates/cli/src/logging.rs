use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise quadsolve crates log at `info`, or
/// `debug` with `verbose`, and everything else at `warn`. Logs go to stderr so
/// stdout carries only results.
pub fn init(verbose: bool) {
    let default = if verbose {
        "quadsolve=debug,quadsolve_solvers=debug,quadsolve_harness=debug,warn"
    } else {
        "quadsolve=info,quadsolve_harness=info,warn"
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .with(env_filter)
        .init();
}

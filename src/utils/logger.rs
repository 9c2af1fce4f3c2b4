use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    install(default_directive(verbose).to_string());
}

/// Same as [`init_cli_logger`] but with an explicit level from the config file.
pub fn init_cli_logger_with_level(level: &str) {
    install(level_directive(level));
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "local_guide=debug,info"
    } else {
        "local_guide=info"
    }
}

fn level_directive(level: &str) -> String {
    format!("local_guide={level}")
}

/// `RUST_LOG` takes precedence over `fallback`.
fn install(fallback: String) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

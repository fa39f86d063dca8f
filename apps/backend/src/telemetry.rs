use tracing::Subscriber;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

/// JSON subscriber filtered by `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn json_subscriber() -> impl Subscriber + Send + Sync + 'static {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry().with(env_filter).with(fmt_layer)
}

/// Install the JSON subscriber globally. Call once from a host binary.
pub fn init_tracing() {
    json_subscriber().init();
}

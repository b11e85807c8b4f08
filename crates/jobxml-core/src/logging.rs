use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

pub const DEFAULT_LOG_FILTER: &str = "jobxml=info,jobxml_core=info";

pub const VERBOSE_LOG_FILTER: &str =
    "jobxml=debug,jobxml_core=debug,jobxml_plugin_github=debug,jobxml_plugin_multibranch=debug";

pub fn init() {
    init_with_default(DEFAULT_LOG_FILTER);
}

/// Installs the global subscriber; `RUST_LOG` wins over `default_filter`
///
/// Logs go to stderr so rendered XML on stdout stays clean.
pub fn init_with_default(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

pub fn init_verbose() {
    init_with_default(VERBOSE_LOG_FILTER);
}

// Path: crates/telemetry/src/init.rs
use pickle_types::config::LogFormat;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Failures while installing the global subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The `log` to `tracing` bridge was already installed.
    #[error("failed to set `log` to `tracing` bridge: {0}")]
    LogBridge(String),
    /// A global subscriber was already installed.
    #[error("failed to set global subscriber: {0}")]
    Subscriber(String),
}

/// Builds the filter from `RUST_LOG`, falling back to `default_filter`.
fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Initializes the global `tracing` subscriber and bridges `log` records
/// into it. Library crates log through `log`; this is the only place a
/// subscriber is chosen.
pub fn init_tracing(format: LogFormat, default_filter: &str) -> Result<(), TelemetryError> {
    let filter = env_filter(default_filter);
    tracing_log::LogTracer::init().map_err(|e| TelemetryError::LogBridge(e.to_string()))?;

    let installed = match format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_writer(std::io::stderr);
            let subscriber = Registry::default().with(filter).with(fmt_layer);
            tracing::subscriber::set_global_default(subscriber)
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .pretty()
                .with_target(true)
                .with_writer(std::io::stderr);
            let subscriber = Registry::default().with(filter).with(fmt_layer);
            tracing::subscriber::set_global_default(subscriber)
        }
    };
    installed.map_err(|e| TelemetryError::Subscriber(e.to_string()))
}


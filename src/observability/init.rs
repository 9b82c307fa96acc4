//! Subscriber setup.

use std::path::Path;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::exporter::{create_tracer_provider, SCOPE_NAME};
use crate::domain::Result;
use crate::Config;

/// Name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "dropdown-otlp.json";

/// Filter used when none is configured or the configured one is invalid.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber, writing to the plugin data directory.
///
/// Observability is optional: if the directory cannot be created the plugin
/// runs without tracing. Only the first successful call installs anything.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    if let Err(e) = init_tracing_in(&data_dir, level) {
        eprintln!("dropdown: tracing disabled: {e}");
    }
}

/// Installs the global subscriber, writing [`TRACE_FILE_NAME`] under `dir`.
///
/// # Errors
///
/// Returns [`DropdownError::Io`](crate::DropdownError::Io) if `dir` cannot
/// be created. A subscriber that is already installed is not an error.
pub fn init_tracing_in(dir: &Path, level: &str) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = create_tracer_provider(dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .is_ok();

    tracing::debug!(installed, level, "tracing initialised");
    Ok(())
}

//! Tracing pipeline writing OTLP JSON spans to a local file.
//!
//! ```text
//! tracing macros → EnvFilter → tracing-opentelemetry → SDK provider
//!                                                    → FileSpanExporter → dropdown-otlp.json
//! ```
//!
//! The trace file lives in the plugin data directory
//! (`~/.local/share/zellij/dropdown/dropdown-otlp.json` on the host), rotates
//! at 10 MB and keeps three timestamped backups.
//!
//! The filter comes from the `trace_level` configuration key and defaults to
//! `info`. Any `EnvFilter` directive works, e.g. `dropdown::widget=trace`.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`exporter`]: span exporter and OTLP encoding
//! - [`rotation`]: size-rotated line writer

mod exporter;
mod init;
mod rotation;

pub use init::{init_tracing, init_tracing_in, TRACE_FILE_NAME};

//! Tracing pipeline that exports OpenTelemetry spans to a local file.
//!
//! The plugin runs inside Zellij's WASM sandbox with no collector to talk to,
//! so spans are serialized as OTLP JSON, one batch per line:
//!
//! ```text
//! tracing macros → tracing-opentelemetry → FileSpanExporter → catalog-otlp.json
//! ```
//!
//! The file lives in [`crate::infrastructure::get_data_dir`] and rotates once
//! it grows past 10 MB, keeping the three newest backups.
//!
//! The filter comes from the `trace_level` plugin option and defaults to
//! `"info"`. Any `EnvFilter` directive works, for example
//! `"character_catalog::api=debug,info"`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

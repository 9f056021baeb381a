//! Tracing configuration for inspecting a scope walk.
//!
//! Supports three output formats controlled by `JSZ_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`, one level per
//!   `analyze` span
//! - `json`: one JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Every scope push/pop
//! JSZ_LOG=debug JSZ_LOG_FORMAT=tree cargo test -p jsz
//!
//! # Every identifier resolution as JSON
//! JSZ_LOG="jsz_scope=trace" JSZ_LOG_FORMAT=json cargo test -p jsz
//! ```
//!
//! The subscriber is only initialised when `JSZ_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::layer::{Layer, Layered};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `JSZ_LOG_FORMAT` value; anything unrecognised is `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("JSZ_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `JSZ_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("JSZ_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

type Filtered = Layered<EnvFilter, Registry>;

/// The output layer for `format`. Every format writes to stderr.
fn output_layer(format: LogFormat) -> Box<dyn Layer<Filtered> + Send + Sync> {
    match format {
        LogFormat::Tree => Box::new(
            tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true),
        ),
        LogFormat::Json => Box::new(fmt::layer().json().with_writer(std::io::stderr)),
        LogFormat::Text => Box::new(fmt::layer().with_writer(std::io::stderr)),
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `JSZ_LOG` nor `RUST_LOG` is set. Returns whether
/// this call installed the subscriber; a second call finds one already set.
pub fn init_tracing() -> bool {
    let has_jsz_log = std::env::var("JSZ_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_jsz_log && !has_rust_log {
        return false;
    }

    Registry::default()
        .with(build_filter())
        .with(output_layer(LogFormat::from_env()))
        .try_init()
        .is_ok()
}

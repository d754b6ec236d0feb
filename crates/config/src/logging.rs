//! Logging configuration for the hooklint CLI
//!
//! Terminal output and optional file logging using tracing.

use crate::Result;
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable debug level logging
/// * `log_file` - Optional path to write logs to a file
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    // Allows overriding with RUST_LOG env var
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new(format!(
                "hooklint={level},hooklint_config={level},hooklint_core={level}"
            ))
        })
        .expect("failed to create default env filter");

    // The file layer always logs at debug, with full call-site context
    let file_layer = match log_file {
        Some(log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)?;

            Some(
                fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::try_new("debug").expect("'debug' is a valid filter")),
            )
        }
        None => None,
    };

    // The file layer goes on first so both stdout variants stack on the
    // same subscriber type
    let registry = tracing_subscriber::registry().with(file_layer);

    if verbose {
        let stdout_layer = fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .with_ansi(true)
            .with_filter(env_filter);

        registry.with(stdout_layer).init();
    } else {
        // No timestamps in normal mode
        let stdout_layer = fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .without_time()
            .compact()
            .with_ansi(true)
            .with_filter(env_filter);

        registry.with(stdout_layer).init();
    }

    Ok(())
}

//! Logging utilities
//!
//! Subscriber setup driven by [`LoggingConfig`] plus structured helpers for
//! record operations.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{RegistryError, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Installing twice is
/// not an error; the first subscriber stays in place.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| RegistryError::Config(format!("Invalid log filter: {}", e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_current_span(false))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_thread_ids(false))
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Global tracing subscriber already initialized");
    }

    Ok(())
}

/// Log one record operation on a profile
pub fn log_record_operation(
    operation: &str,
    orcid: &str,
    record: &str,
    put_code: Option<i64>,
    source: &str,
    status: &str,
) {
    tracing::info!(
        operation = %operation,
        orcid = %orcid,
        record = %record,
        put_code = put_code,
        source = %source,
        status = %status,
        "record operation"
    );
}

/// Log the outcome of one bulk request
pub fn log_bulk_summary(orcid: &str, source: &str, received: usize, created: usize, failed: usize) {
    tracing::info!(
        orcid = %orcid,
        source = %source,
        received = received,
        created = created,
        failed = failed,
        "bulk request processed"
    );
}

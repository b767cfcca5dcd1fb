use thiserror::Error;
use tracing::info;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise the crate logs at the configured
/// level. Output always goes to stderr so stdout stays free for results.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback_filter(config));

    if config.enable_json_logging {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .with_target(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| ObservabilityError::TracingInit(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| ObservabilityError::TracingInit(e.to_string()))?;
    }

    info!(
        "Logging initialized for service: {} v{}",
        config.service_name, config.service_version
    );
    Ok(())
}

/// Filter directive used when `RUST_LOG` is not set
///
/// Events are filtered by module target, so the directive names this crate
/// rather than the configurable service name.
pub fn default_filter_directive(log_level: &str) -> String {
    format!("{}={}", env!("CARGO_CRATE_NAME"), log_level.to_lowercase())
}

fn fallback_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::new(default_filter_directive(&config.log_level))
}

//! Logging setup.

use larek_commerce::{ShopBus, ShopEvent};
use larek_core::{LogConfig, LogFormat};
use larek_events::{BusEvent, SubscriptionId};
use tracing::trace;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::AppError;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(config: &LogConfig) -> Result<(), AppError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.level)?,
    };

    let json_layer = (config.format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (config.format == LogFormat::Human).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| AppError::LoggingInit(e.to_string()))
}

fn build_filter(directive: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(directive).map_err(|e| AppError::LogFilter {
        directive: directive.to_string(),
        message: e.to_string(),
    })
}

/// Trace every event dispatched on `bus`.
pub fn trace_events(bus: &ShopBus) -> SubscriptionId {
    bus.subscribe_all(|event: &ShopEvent| {
        trace!(event = event.kind().as_str(), "dispatch");
        Ok(())
    })
}

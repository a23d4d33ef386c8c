//! Logging and tracing setup for magicsniff.
//!
//! The library only emits `tracing` events. Embedding programs that have no
//! subscriber of their own can call [`init_tracing`] once at startup.

use std::sync::Once;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the filter directives, e.g. `magicsniff=trace`.
pub const LOG_ENV: &str = "MAGICSNIFF_LOG";

const DEFAULT_DIRECTIVES: &str = "magicsniff=info";

static INIT: Once = Once::new();

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Install a global subscriber filtered by [`LOG_ENV`].
///
/// Only the first call has any effect, and nothing is installed if the host
/// already set a global subscriber.
pub fn init_tracing(format: LogFormat) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
        let registry = tracing_subscriber::registry().with(filter);

        let installed = match format {
            LogFormat::Text => registry.with(fmt::layer().with_target(true)).try_init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_current_span(false))
                .try_init(),
        };

        if installed.is_ok() {
            debug!(?format, "tracing initialized");
        }
    });
}

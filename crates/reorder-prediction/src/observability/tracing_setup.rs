use std::sync::Once;

use reorder_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber.
///
/// `REORDER_LOG` (same syntax as `RUST_LOG`, e.g.
/// `reorder_prediction=debug,reorder_forecast=info`) wins over
/// `config.log_level`. Idempotent; a subscriber installed by someone else
/// is left in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("REORDER_LOG")
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true);

        let installed = if config.json_logs {
            builder
                .json()
                .with_file(true)
                .with_line_number(true)
                .try_init()
        } else {
            builder.try_init()
        };
        if installed.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    });
}

use log::{debug, error, info};
use std::sync::Once;
use std::time::{Duration, Instant};

static INIT: Once = Once::new();

/// Environment variable holding `env_logger` filter directives
pub const LOG_FILTER_VAR: &str = "STOREFRONT_LOG";

/// Install `env_logger` once; later calls are no-ops.
///
/// Our own crate logs at debug, HTTP and runtime internals at warn.
/// `STOREFRONT_LOG` directives are applied last and win.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("storefront_lib", log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Warn)
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_env(LOG_FILTER_VAR)
            .format_timestamp_secs()
            .format_module_path(false)
            .init();

        debug!("Logger ready");
    });
}

/// Log lines for the storefront's recurring events
pub struct LogContext;

impl LogContext {
    /// An outgoing feed request
    pub fn feed_request(provider: &str, url: &str) {
        debug!("Feed: GET {} from {}", url, provider);
    }

    /// A feed response body fully received
    pub fn feed_response(provider: &str, url: &str, bytes: usize, elapsed: Duration) {
        info!(
            "Feed: {} answered {} with {} bytes in {}ms",
            provider,
            url,
            bytes,
            elapsed.as_millis()
        );
    }

    /// One search pass over the catalog
    pub fn catalog_search(term: &str, total: usize, visible: usize) {
        debug!("Search: '{}' kept {} of {} items", term, visible, total);
    }

    /// A refresh that did not produce a snapshot
    pub fn refresh_failed(source: &str, error: &dyn std::error::Error) {
        error!("Refresh from '{}' failed: {}", source, error);
    }
}

/// Wall-clock timer for one named operation
pub struct TimedOperation {
    start: Instant,
    operation: &'static str,
}

impl TimedOperation {
    pub fn new(operation: &'static str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: Instant::now(),
            operation,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Log completion with a short outcome summary and return the duration
    pub fn finish(self, outcome: &str) -> Duration {
        let elapsed = self.elapsed();
        info!("{} done in {}ms: {}", self.operation, elapsed.as_millis(), outcome);
        elapsed
    }
}

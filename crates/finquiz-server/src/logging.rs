//! Tracing setup that starts before config is read.
//!
//! The subscriber is installed with a provisional filter so config-loading
//! messages are not lost, then switched to `logging.level` once config is
//! known. `RUST_LOG` and `--log-level` pin the filter and are never replaced.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

pub const PROVISIONAL_DIRECTIVE: &str = "finquiz=info";

pub struct Logging {
    handle: reload::Handle<EnvFilter, Registry>,
    pinned: bool,
}

impl Logging {
    pub fn init(cli_level: Option<&str>) -> Self {
        let rust_log = std::env::var("RUST_LOG").ok();
        let (directive, pinned) = initial_directive(rust_log.as_deref(), cli_level);
        let (filter, handle) = reload::Layer::new(EnvFilter::new(directive));
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
        Self { handle, pinned }
    }

    /// Switch to the configured level unless the filter was pinned at startup.
    pub fn apply_config_level(&self, level: &str) {
        if self.pinned {
            return;
        }
        if let Err(e) = self.handle.reload(EnvFilter::new(level)) {
            tracing::warn!("failed to apply logging.level {level:?}: {e}");
        }
    }
}

/// Pick the startup filter. `RUST_LOG` wins over the CLI flag; the returned
/// flag says whether either was given.
pub fn initial_directive<'a>(
    rust_log: Option<&'a str>,
    cli_level: Option<&'a str>,
) -> (&'a str, bool) {
    match rust_log.filter(|v| !v.trim().is_empty()).or(cli_level) {
        Some(directive) => (directive, true),
        None => (PROVISIONAL_DIRECTIVE, false),
    }
}

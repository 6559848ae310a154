//! Tracing setup for hosts that do not bring their own subscriber.

use std::fs::OpenOptions;
use tracing_subscriber::EnvFilter;

/// Initializes file-based logging under the user's home directory, falling
/// back to stderr when no home directory resolves. Safe to call once per
/// process; hosts with their own subscriber should skip this.
pub fn init() {
    let log_file = dirs::home_dir()
        .map(|h| h.join(".buildtool-notify.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .ok()
        });

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(file) = log_file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

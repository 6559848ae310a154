//! Host IDE integration surface for buildtool-notify.
//!
//! The host environment drives this crate with a single entry point per
//! project-open event and dispatches hyperlink activations back against the
//! payload it was handed. Rendering and editor-opening stay on the host side
//! behind the [`ProjectHost`] trait.

pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod notifier;

// Re-export from buildtool-core
pub use buildtool_core::{
    BuildTool, IconId, NotificationLink, NotificationPayload, NotifyError, build_notification,
    detect,
};

pub use config::NotifierConfig;
pub use error::{HostError, Result};
pub use host::ProjectHost;
pub use notifier::ProjectNotifier;

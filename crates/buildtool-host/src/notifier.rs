//! Project-open handling and link-activation dispatch.

use std::path::Path;

use buildtool_core::{BuildTool, NotificationPayload, build_notification, detect};

use crate::config::NotifierConfig;
use crate::error::{HostError, Result};
use crate::host::ProjectHost;

/// Wires build-tool detection to the host's notification surface.
///
/// Stateless across events: every project-open is an independent
/// `detect → build_notification → show_notification` sequence, and link
/// activations operate only on the payload captured at build time.
pub struct ProjectNotifier<H> {
    host: H,
    config: NotifierConfig,
}

impl<H: ProjectHost> ProjectNotifier<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, NotifierConfig::default())
    }

    pub fn with_config(host: H, config: NotifierConfig) -> Self {
        Self { host, config }
    }

    /// Entry point for the host's project-open event.
    ///
    /// Returns the payload that was displayed, or `None` when configuration
    /// suppressed the notification.
    ///
    /// # Errors
    ///
    /// Fails fast when the project has no resolvable root path.
    pub fn project_opened(&self, root: &Path) -> Result<Option<NotificationPayload>> {
        let tool = detect(root)?;

        if tool == BuildTool::Unknown && self.config.suppress_unknown {
            tracing::debug!("suppressing unknown-project notification for {:?}", root);
            return Ok(None);
        }

        let payload = build_notification(root, tool);
        tracing::info!(
            "notifying {:?} for {:?} with {} link(s)",
            tool,
            root,
            payload.links.len()
        );
        self.host.show_notification(&payload);
        Ok(Some(payload))
    }

    /// Dispatches one hyperlink-activation event against a displayed payload.
    ///
    /// # Errors
    ///
    /// Returns an error for identifiers the payload never advertised, and
    /// when the host fails to open the resolved file.
    pub fn link_activated(&self, payload: &NotificationPayload, id: &str) -> Result<()> {
        let path = payload.resolve_link(id).inspect_err(|_| {
            tracing::warn!("activation for unknown link identifier '{}'", id);
        })?;

        self.host
            .open_file(path)
            .map_err(|source| HostError::OpenFailed {
                path: path.to_path_buf(),
                source,
            })
    }
}

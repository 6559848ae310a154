//! Notification payload construction and link resolution.
//!
//! A payload is built once per project-open event, handed to the host for
//! rendering, and never mutated afterwards. Link activation is a pure lookup
//! against the mapping captured at construction time, so the click handler
//! needs no UI state.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{NotifyError, Result};
use crate::types::{BuildTool, IconId, NOTIFICATION_TITLE};

/// One clickable anchor in the notification body.
///
/// The identifier doubles as the anchor's visible text and href, and is
/// always the marker filename itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationLink {
    pub id: String,
    pub target: PathBuf,
}

/// Everything the host needs to render one project-open notification and
/// dispatch its hyperlink activations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationPayload {
    pub title: String,
    pub icon: IconId,
    /// Label text followed by zero, one, or two anchor fragments.
    pub body: String,
    /// Ordered identifier-to-path mapping; ids are marker filenames.
    pub links: Vec<NotificationLink>,
}

impl NotificationPayload {
    /// Resolves an activated hyperlink back to the file it should open.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError::UnknownLinkIdentifier`] when the identifier
    /// was never part of this payload.
    pub fn resolve_link(&self, id: &str) -> Result<&Path> {
        self.links
            .iter()
            .find(|link| link.id == id)
            .map(|link| link.target.as_path())
            .ok_or_else(|| NotifyError::UnknownLinkIdentifier {
                identifier: id.to_string(),
            })
    }
}

/// Builds the notification payload for a detected build tool.
///
/// Deterministic given identical inputs; link targets resolve under `root`
/// in the variant's marker order (Gradle before Maven for the ambiguous
/// case). The two-anchor body keeps the original fragment layout: `<br>`
/// before the first anchor, a tab before the second.
pub fn build_notification(root: &Path, tool: BuildTool) -> NotificationPayload {
    let mut body = String::from(tool.label());
    let mut links = Vec::with_capacity(tool.marker_files().len());

    for (i, marker) in tool.marker_files().iter().enumerate() {
        let separator = if i == 0 { "<br>" } else { "\t" };
        body.push_str(&format!("{separator}<a href=\"{marker}\">{marker}</a>"));
        links.push(NotificationLink {
            id: (*marker).to_string(),
            target: root.join(marker),
        });
    }

    NotificationPayload {
        title: NOTIFICATION_TITLE.to_string(),
        icon: tool.icon(),
        body,
        links,
    }
}

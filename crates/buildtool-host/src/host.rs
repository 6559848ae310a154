//! External collaborator contract with the host IDE.

use std::path::Path;

use buildtool_core::NotificationPayload;

/// Capabilities the host environment provides to the notifier.
///
/// The host owns notification rendering and the editor; this crate only
/// tells it what to show and which file to open. `open_file` is expected to
/// open the document scrolled to the top.
pub trait ProjectHost {
    /// Renders the notification balloon for the current project.
    fn show_notification(&self, payload: &NotificationPayload);

    /// Opens the file at `path` in the host's editor.
    fn open_file(&self, path: &Path) -> std::io::Result<()>;
}

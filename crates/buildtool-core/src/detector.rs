//! Marker-file detection at the project root.
//!
//! Detection is a metadata-only check: the marker files are never opened or
//! parsed, and only the top level of the root directory is inspected.

use std::path::Path;

use crate::error::{NotifyError, Result};
use crate::types::{BuildTool, GRADLE_BUILD_FILE, MAVEN_BUILD_FILE};

/// Classifies a project root by the marker files present in it.
///
/// The two existence checks are independent; an unreadable or missing root
/// simply evaluates both to `false` and yields [`BuildTool::Unknown`]. An
/// empty root path is a precondition violation and fails instead of
/// defaulting.
///
/// # Errors
///
/// Returns [`NotifyError::MissingProjectRoot`] when `root` is empty.
pub fn detect(root: &Path) -> Result<BuildTool> {
    if root.as_os_str().is_empty() {
        return Err(NotifyError::MissingProjectRoot);
    }

    let gradle_exists = is_regular_file(&root.join(GRADLE_BUILD_FILE));
    let maven_exists = is_regular_file(&root.join(MAVEN_BUILD_FILE));

    let tool = match (gradle_exists, maven_exists) {
        (true, true) => BuildTool::MavenOrGradle,
        (true, false) => BuildTool::Gradle,
        (false, true) => BuildTool::Maven,
        (false, false) => BuildTool::Unknown,
    };

    tracing::debug!(
        "detected {:?} at {:?} (gradle={}, maven={})",
        tool,
        root,
        gradle_exists,
        maven_exists
    );

    Ok(tool)
}

/// Regular-file check that treats any metadata failure (missing file,
/// permission denied) as absence.
fn is_regular_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_file())
}

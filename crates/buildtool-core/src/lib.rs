//! Build-tool detection and notification payload construction.
//!
//! This crate classifies a project root by the marker files present at its
//! top level (`build.gradle` for Gradle, `pom.xml` for Maven) and builds the
//! notification payload the host IDE renders on project open, including the
//! clickable links that open the detected build file in the editor.

pub mod detector;
pub mod error;
pub mod notification;
pub mod types;

pub use detector::detect;
pub use error::{NotifyError, Result};
pub use notification::{NotificationLink, NotificationPayload, build_notification};
pub use types::{BuildTool, GRADLE_BUILD_FILE, IconId, MAVEN_BUILD_FILE, NOTIFICATION_TITLE};
